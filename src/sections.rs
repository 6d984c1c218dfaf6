//! Per-section extraction routines.
//!
//! One independent routine per sub-structure of the record. Each locates
//! its governing `itemprop` marker in "many" mode, then runs a fixed set of
//! sub-queries per matched element. List routines always return a vec,
//! empty when the section is absent. The one fatal condition here is a
//! claim element without a parseable ordinal.

use std::collections::HashSet;

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use crate::error::{Result, ScraperError};
use crate::query::{attr_one, select_many, select_one, text_one};
use crate::types::{
    Citation, CitationDirection, Claim, Cpc, DateEntry, Event, LegalEvent, LegalEventNote,
    PriorityApplication, PriorityClaim, SimilarDocument,
};

/// Trim an optional text value, mapping absent to `None`.
fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string())
}

/// Extract CPC classification codes.
///
/// Duplicate (code, first_code) pairs collapse to a single entry; the
/// resulting order is unspecified.
pub fn extract_cpcs(root: ElementRef<'_>) -> Vec<Cpc> {
    let mut seen: HashSet<Cpc> = HashSet::new();
    for element in select_many(root, "li[itemprop='cpcs']") {
        seen.insert(Cpc {
            first_code: attr_one(element, "meta[itemprop='FirstCode']", "content").as_deref()
                == Some("true"),
            code: text_one(element, "span[itemprop='Code']"),
        });
    }
    seen.into_iter().collect()
}

/// Reconstruct the long description from the description content block.
///
/// Walks every node of the block in document order, concatenating text
/// content. A blank line follows each heading, a single newline each list
/// item. The final string is trimmed; an absent block yields `""`.
pub fn extract_description(root: ElementRef<'_>) -> String {
    let Some(content) = select_one(
        root,
        "section[itemprop='description'] > div[itemprop='content']",
    ) else {
        return String::new();
    };

    let mut description = String::new();
    append_description_text(*content, &mut description);
    description.trim().to_string()
}

/// Depth-first walk appending text and per-tag separators.
fn append_description_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&text.text);
        }
        append_description_text(child, out);
        if let Some(element) = child.value().as_element() {
            match element.name() {
                "heading" => out.push_str("\n\n"),
                "li" => out.push('\n'),
                _ => {}
            }
        }
    }
}

/// Extract lifecycle dates from the page metadata.
pub fn extract_dates(root: ElementRef<'_>) -> Vec<DateEntry> {
    select_many(root, "meta[name='DC.date']")
        .into_iter()
        .map(|element| DateEntry {
            date: element.value().attr("content").map(str::to_string),
            kind: element.value().attr("scheme").unwrap_or_default().to_string(),
        })
        .collect()
}

/// Extract claims.
///
/// A document without a claims section yields an empty vec. A claim
/// element that is present but lacks a parseable `num` attribute fails the
/// whole extraction: a record with silently renumbered claims would be
/// worse than no record.
pub fn extract_claims(root: ElementRef<'_>) -> Result<Vec<Claim>> {
    let Some(section) = select_one(root, "section[itemprop='claims']") else {
        return Ok(Vec::new());
    };

    let mut claims = Vec::new();
    for claim in select_many(
        section,
        "div[itemprop='content'] > [class*='claims'] > [class*='claim']",
    ) {
        let dependent = claim.value().attr("class") == Some("claim-dependent");

        let raw_number = attr_one(claim, "div[class*='claim']", "num");
        let number = raw_number
            .as_deref()
            .and_then(|n| n.trim().parse::<i64>().ok())
            .ok_or_else(|| ScraperError::ClaimNumber {
                detail: format!(
                    "claim {} has num attribute {:?}",
                    claims.len() + 1,
                    raw_number
                ),
            })?;

        let text: String = claim.text().collect();
        let text = text.trim();
        let text = (!text.is_empty()).then(|| text.to_string());

        claims.push(Claim {
            number,
            text,
            dependent,
        });
    }
    Ok(claims)
}

/// Extract applications claiming priority from this patent.
pub fn extract_priority_claims(root: ElementRef<'_>) -> Vec<PriorityClaim> {
    select_many(root, "tr[itemprop='appsClaimingPriority']")
        .into_iter()
        .map(|row| PriorityClaim {
            filing_date: text_one(row, "td[itemprop='filingDate']"),
            priority_date: text_one(row, "td[itemprop='priorityDate']"),
            title: text_one(row, "td[itemprop='title']"),
        })
        .collect()
}

/// Extract priority applications of this patent.
pub fn extract_priority_applications(root: ElementRef<'_>) -> Vec<PriorityApplication> {
    let mut applications = Vec::new();
    for row in select_many(root, "tr[itemprop='priorityApps']") {
        let cell = select_one(row, "td:first-of-type");
        applications.push(PriorityApplication {
            filing_date: text_one(row, "td[itemprop='filingDate']"),
            priority_date: text_one(row, "td[itemprop='priorityDate']"),
            title: text_one(row, "td[itemprop='title']"),
            application_number: cell
                .and_then(|c| text_one(c, "span[itemprop='applicationNumber']")),
            is_us_provisional: cell.and_then(|c| text_one(c, "span[itemprop='isUsProvisional']")),
        });
    }
    applications
}

/// Extract lifecycle events.
pub fn extract_events(root: ElementRef<'_>) -> Vec<Event> {
    select_many(root, "dd[itemprop='events']")
        .into_iter()
        .map(|row| Event {
            time: text_one(row, "time[itemprop='date']"),
            title: text_one(row, "span[itemprop='title']"),
            kind: text_one(row, "span[itemprop='type']"),
            // Exact-literal contract; "critical" or anything else is false.
            critical: text_one(row, "span[itemprop='critical']").as_deref() == Some("Critical"),
        })
        .collect()
}

/// Extract legal status events, including detail paragraphs from the
/// fourth table cell of each row.
pub fn extract_legal_events(root: ElementRef<'_>) -> Vec<LegalEvent> {
    let mut events = Vec::new();
    for row in select_many(root, "tr[itemprop='legalEvents']") {
        let content = match select_one(row, "td:nth-of-type(4)") {
            Some(cell) => select_many(cell, "p")
                .into_iter()
                .map(|p| LegalEventNote {
                    title: text_one(p, "strong"),
                    text: text_one(p, "span"),
                })
                .collect(),
            None => Vec::new(),
        };

        events.push(LegalEvent {
            date: text_one(row, "td time[itemprop='date']"),
            code: text_one(row, "td[itemprop='code']"),
            title: text_one(row, "td[itemprop='title']"),
            content,
        });
    }
    events
}

/// Extract similar documents.
pub fn extract_similar_documents(root: ElementRef<'_>) -> Vec<SimilarDocument> {
    let mut documents = Vec::new();
    for row in select_many(root, "tr[itemprop='similarDocuments']") {
        let cell = select_one(row, "td:first-of-type");
        documents.push(SimilarDocument {
            date: text_one(row, "time[itemprop='publicationDate']"),
            title: trimmed(text_one(row, "td[itemprop='title']")),
            is_patent: cell
                .and_then(|c| attr_one(c, "meta[itemprop='isPatent']", "content"))
                .as_deref()
                == Some("true"),
            publication_number: cell.and_then(|c| text_one(c, "span[itemprop='publicationNumber']")),
            primary_language: cell.and_then(|c| text_one(c, "span[itemprop='primaryLanguage']")),
        });
    }
    documents
}

/// Extract citations in the given direction.
///
/// Forward and backward citation tables are structurally identical; only
/// the governing marker differs.
pub fn extract_citations(root: ElementRef<'_>, direction: CitationDirection) -> Vec<Citation> {
    let row_query = format!("tr[itemprop='{}']", direction.governing_marker());

    let mut citations = Vec::new();
    for row in select_many(root, &row_query) {
        let cell = select_one(row, "td:first-of-type");
        citations.push(Citation {
            priority_date: text_one(row, "td[itemprop='priorityDate']"),
            publication_date: text_one(row, "td[itemprop='publicationDate']"),
            assignee_original: trimmed(text_one(row, "td span[itemprop='assigneeOriginal']")),
            title: trimmed(text_one(row, "td[itemprop='title']")),
            examiner_cited: cell
                .and_then(|c| text_one(c, "span[itemprop='examinerCited']"))
                .as_deref()
                == Some("*"),
            publication_number: cell.and_then(|c| text_one(c, "span[itemprop='publicationNumber']")),
            primary_language: cell.and_then(|c| text_one(c, "span[itemprop='primaryLanguage']")),
        });
    }
    citations
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_extract_cpcs_deduplicates() {
        let html = parse(
            "<ul>\
             <li itemprop='cpcs'><meta itemprop='FirstCode' content='true'>\
               <span itemprop='Code'>A61K9/0014</span></li>\
             <li itemprop='cpcs'><meta itemprop='FirstCode' content='true'>\
               <span itemprop='Code'>A61K9/0014</span></li>\
             <li itemprop='cpcs'><span itemprop='Code'>A61K9/0014</span></li>\
             </ul>",
        );
        let cpcs = extract_cpcs(html.root_element());

        // Two identical (code, first_code) pairs collapse to one; the third
        // row differs in first_code and stays.
        assert_eq!(cpcs.len(), 2);
        assert!(cpcs.iter().any(|c| c.first_code));
        assert!(cpcs.iter().any(|c| !c.first_code));
        assert!(cpcs
            .iter()
            .all(|c| c.code.as_deref() == Some("A61K9/0014")));
    }

    #[test]
    fn test_extract_cpcs_missing_code() {
        let html = parse("<ul><li itemprop='cpcs'></li></ul>");
        let cpcs = extract_cpcs(html.root_element());
        assert_eq!(cpcs.len(), 1);
        assert_eq!(cpcs[0].code, None);
        assert!(!cpcs[0].first_code);
    }

    #[test]
    fn test_extract_description_separators() {
        let html = parse(
            "<section itemprop='description'><div itemprop='content'>\
             A<heading></heading>B<li></li>C\
             </div></section>",
        );
        let description = extract_description(html.root_element());
        assert_eq!(description, "A\n\nB\nC");
    }

    #[test]
    fn test_extract_description_nested_text() {
        let html = parse(
            "<section itemprop='description'><div itemprop='content'>\
             <heading>Background</heading><p>The invention relates to widgets.</p>\
             </div></section>",
        );
        let description = extract_description(html.root_element());
        assert_eq!(description, "Background\n\nThe invention relates to widgets.");
    }

    #[test]
    fn test_extract_description_absent() {
        let html = parse("<div>no description section</div>");
        assert_eq!(extract_description(html.root_element()), "");
    }

    #[test]
    fn test_extract_dates_scheme_default() {
        let html = parse(
            "<head>\
             <meta name='DC.date' content='2019-01-30' scheme='issue'>\
             <meta name='DC.date' content='2017-06-01'>\
             </head>",
        );
        let dates = extract_dates(html.root_element());

        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].date.as_deref(), Some("2019-01-30"));
        assert_eq!(dates[0].kind, "issue");
        assert_eq!(dates[1].date.as_deref(), Some("2017-06-01"));
        // Absent scheme defaults to empty string, not null.
        assert_eq!(dates[1].kind, "");
    }

    #[test]
    fn test_extract_claims_no_section_is_empty() {
        let html = parse("<div>no claims here</div>");
        let claims = extract_claims(html.root_element()).unwrap();
        assert!(claims.is_empty());
    }

    #[test]
    fn test_extract_claims() {
        let html = parse(
            "<section itemprop='claims'><div itemprop='content'><div class='claims'>\
             <div class='claim'><div class='claim' num='1'>A widget.</div></div>\
             <div class='claim-dependent'><div class='claim' num='2'>The widget of claim 1.</div></div>\
             </div></div></section>",
        );
        let claims = extract_claims(html.root_element()).unwrap();

        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].number, 1);
        assert_eq!(claims[0].text.as_deref(), Some("A widget."));
        assert!(!claims[0].dependent);
        assert_eq!(claims[1].number, 2);
        assert!(claims[1].dependent);
    }

    #[test]
    fn test_extract_claims_missing_number_is_fatal() {
        let html = parse(
            "<section itemprop='claims'><div itemprop='content'><div class='claims'>\
             <div class='claim'><div class='claim'>No number here.</div></div>\
             </div></div></section>",
        );
        let err = extract_claims(html.root_element()).unwrap_err();
        assert!(matches!(err, ScraperError::ClaimNumber { .. }));
    }

    #[test]
    fn test_extract_claims_unparseable_number_is_fatal() {
        let html = parse(
            "<section itemprop='claims'><div itemprop='content'><div class='claims'>\
             <div class='claim'><div class='claim' num='one'>Text.</div></div>\
             </div></div></section>",
        );
        assert!(extract_claims(html.root_element()).is_err());
    }

    #[test]
    fn test_extract_claims_empty_text_is_none() {
        let html = parse(
            "<section itemprop='claims'><div itemprop='content'><div class='claims'>\
             <div class='claim'><div class='claim' num='3'></div></div>\
             </div></div></section>",
        );
        let claims = extract_claims(html.root_element()).unwrap();
        assert_eq!(claims[0].number, 3);
        assert_eq!(claims[0].text, None);
    }

    #[test]
    fn test_extract_priority_claims() {
        let html = parse(
            "<table><tr itemprop='appsClaimingPriority'>\
             <td itemprop='filingDate'>2017-06-01</td>\
             <td itemprop='priorityDate'>2016-06-01</td>\
             <td itemprop='title'>Widget assembly</td>\
             </tr></table>",
        );
        let claims = extract_priority_claims(html.root_element());

        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].filing_date.as_deref(), Some("2017-06-01"));
        assert_eq!(claims[0].priority_date.as_deref(), Some("2016-06-01"));
        assert_eq!(claims[0].title.as_deref(), Some("Widget assembly"));
    }

    #[test]
    fn test_extract_priority_applications() {
        let html = parse(
            "<table><tr itemprop='priorityApps'>\
             <td><span itemprop='applicationNumber'>US201715613109A</span>\
                 <span itemprop='isUsProvisional'>Yes</span></td>\
             <td itemprop='filingDate'>2017-06-01</td>\
             <td itemprop='priorityDate'>2016-06-01</td>\
             <td itemprop='title'>Widget assembly</td>\
             </tr></table>",
        );
        let apps = extract_priority_applications(html.root_element());

        assert_eq!(apps.len(), 1);
        assert_eq!(
            apps[0].application_number.as_deref(),
            Some("US201715613109A")
        );
        assert_eq!(apps[0].is_us_provisional.as_deref(), Some("Yes"));
        assert_eq!(apps[0].filing_date.as_deref(), Some("2017-06-01"));
    }

    #[test]
    fn test_extract_events_critical_is_exact_literal() {
        let html = parse(
            "<dl>\
             <dd itemprop='events'>\
               <time itemprop='date'>2019-01-30</time>\
               <span itemprop='title'>Application granted</span>\
               <span itemprop='type'>granted</span>\
               <span itemprop='critical'>Critical</span></dd>\
             <dd itemprop='events'>\
               <time itemprop='date'>2037-06-01</time>\
               <span itemprop='critical'>critical</span></dd>\
             <dd itemprop='events'>\
               <time itemprop='date'>2017-06-01</time></dd>\
             </dl>",
        );
        let events = extract_events(html.root_element());

        assert_eq!(events.len(), 3);
        assert!(events[0].critical);
        assert_eq!(events[0].kind.as_deref(), Some("granted"));
        // Lowercase "critical" does not count.
        assert!(!events[1].critical);
        // Absent marker does not count.
        assert!(!events[2].critical);
        assert_eq!(events[2].title, None);
    }

    #[test]
    fn test_extract_legal_events() {
        let html = parse(
            "<table><tr itemprop='legalEvents'>\
             <td><time itemprop='date'>2019-02-19</time></td>\
             <td itemprop='code'>AS</td>\
             <td itemprop='title'>Assignment</td>\
             <td>\
               <p><strong>Owner name</strong><span>ACME CORP</span></p>\
               <p><strong>Effective date</strong><span>20190215</span></p>\
             </td>\
             </tr></table>",
        );
        let events = extract_legal_events(html.root_element());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date.as_deref(), Some("2019-02-19"));
        assert_eq!(events[0].code.as_deref(), Some("AS"));
        assert_eq!(events[0].title.as_deref(), Some("Assignment"));
        assert_eq!(events[0].content.len(), 2);
        assert_eq!(events[0].content[0].title.as_deref(), Some("Owner name"));
        assert_eq!(events[0].content[0].text.as_deref(), Some("ACME CORP"));
        assert_eq!(events[0].content[1].text.as_deref(), Some("20190215"));
    }

    #[test]
    fn test_extract_legal_events_without_detail_cell() {
        let html = parse(
            "<table><tr itemprop='legalEvents'>\
             <td><time itemprop='date'>2019-02-19</time></td>\
             <td itemprop='code'>AS</td>\
             </tr></table>",
        );
        let events = extract_legal_events(html.root_element());

        assert_eq!(events.len(), 1);
        assert!(events[0].content.is_empty());
        assert_eq!(events[0].title, None);
    }

    #[test]
    fn test_extract_similar_documents() {
        let html = parse(
            "<table><tr itemprop='similarDocuments'>\
             <td><meta itemprop='isPatent' content='true'>\
                 <span itemprop='publicationNumber'>US10123456B2</span>\
                 <span itemprop='primaryLanguage'>en</span></td>\
             <td itemprop='title'> Another widget </td>\
             <td><time itemprop='publicationDate'>2018-11-06</time></td>\
             </tr></table>",
        );
        let docs = extract_similar_documents(html.root_element());

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].date.as_deref(), Some("2018-11-06"));
        assert_eq!(docs[0].title.as_deref(), Some("Another widget"));
        assert!(docs[0].is_patent);
        assert_eq!(docs[0].publication_number.as_deref(), Some("US10123456B2"));
        assert_eq!(docs[0].primary_language.as_deref(), Some("en"));
    }

    #[test]
    fn test_extract_similar_documents_is_patent_literal() {
        let html = parse(
            "<table><tr itemprop='similarDocuments'>\
             <td><meta itemprop='isPatent' content='True'></td>\
             </tr></table>",
        );
        let docs = extract_similar_documents(html.root_element());
        // "True" is not the literal "true".
        assert!(!docs[0].is_patent);
    }

    #[test]
    fn test_extract_citations_directions_are_independent() {
        let html = parse(
            "<table>\
             <tr itemprop='backwardReferencesOrig'>\
               <td><span itemprop='publicationNumber'>US5000000A</span>\
                   <span itemprop='examinerCited'>*</span></td>\
               <td itemprop='priorityDate'>1990-01-01</td>\
               <td itemprop='publicationDate'>1991-01-01</td>\
               <td itemprop='title'> Old widget </td>\
               <td><span itemprop='assigneeOriginal'> Acme </span></td>\
             </tr>\
             <tr itemprop='forwardReferencesOrig'>\
               <td><span itemprop='publicationNumber'>US11000000B2</span></td>\
               <td itemprop='publicationDate'>2021-05-04</td>\
             </tr>\
             </table>",
        );
        let root = html.root_element();

        let backward = extract_citations(root, CitationDirection::Backward);
        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].publication_number.as_deref(), Some("US5000000A"));
        assert!(backward[0].examiner_cited);
        assert_eq!(backward[0].title.as_deref(), Some("Old widget"));
        assert_eq!(backward[0].assignee_original.as_deref(), Some("Acme"));
        assert_eq!(backward[0].priority_date.as_deref(), Some("1990-01-01"));

        let forward = extract_citations(root, CitationDirection::Forward);
        assert_eq!(forward.len(), 1);
        assert_eq!(
            forward[0].publication_number.as_deref(),
            Some("US11000000B2")
        );
        assert!(!forward[0].examiner_cited);
        assert_eq!(forward[0].priority_date, None);
    }

    #[test]
    fn test_list_routines_empty_on_absent_sections() {
        let html = parse("<html><body><p>nothing relevant</p></body></html>");
        let root = html.root_element();

        assert!(extract_cpcs(root).is_empty());
        assert!(extract_dates(root).is_empty());
        assert!(extract_priority_claims(root).is_empty());
        assert!(extract_priority_applications(root).is_empty());
        assert!(extract_events(root).is_empty());
        assert!(extract_legal_events(root).is_empty());
        assert!(extract_similar_documents(root).is_empty());
        assert!(extract_citations(root, CitationDirection::Forward).is_empty());
        assert!(extract_citations(root, CitationDirection::Backward).is_empty());
    }
}
