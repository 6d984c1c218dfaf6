//! Top-level document assembly.
//!
//! Parses the fetched page once and runs every scalar query and section
//! routine exactly once, in a fixed order, assembling the single output
//! record. Field-level misses degrade to defaults; only an unparseable
//! claim ordinal aborts the extraction.

use scraper::Html;

use crate::config::validate_publication_number;
use crate::error::Result;
use crate::fetch::download_document_html;
use crate::http::create_client;
use crate::query::{attr_many, attr_one, select_one, text_one};
use crate::sections::{
    extract_citations, extract_claims, extract_cpcs, extract_dates, extract_description,
    extract_events, extract_legal_events, extract_priority_applications, extract_priority_claims,
    extract_similar_documents,
};
use crate::types::{CitationDirection, PatentDocument};

/// Download and extract a patent record.
///
/// # Arguments
/// * `number` - The publication number (e.g., "US9145048B2")
///
/// # Returns
/// A `PatentDocument` with every field populated or at its default
pub fn download_document(number: &str) -> Result<PatentDocument> {
    validate_publication_number(number)?;

    let client = create_client()?;
    let html = download_document_html(&client, number)?;

    tracing::debug!(number, bytes = html.len(), "Extracting document");
    extract_document(&html)
}

/// Extract a patent record from raw page markup.
///
/// # Arguments
/// * `html` - The document page HTML
///
/// # Returns
/// A `PatentDocument`; the only extraction-level failure is a claim
/// element without a parseable number
pub fn extract_document(html: &str) -> Result<PatentDocument> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    Ok(PatentDocument {
        inventors: attr_many(
            root,
            "meta[name='DC.contributor'][scheme='inventor']",
            "content",
        ),
        assignee: attr_many(
            root,
            "meta[name='DC.contributor'][scheme='assignee']",
            "content",
        ),
        patent_type: attr_one(root, "meta[name='DC.type']", "content"),
        title: attr_one(root, "meta[name='DC.title']", "content").map(|s| s.trim().to_string()),
        description: attr_one(root, "meta[name='DC.description']", "content")
            .map(|s| s.trim().to_string()),
        abstract_text: extract_abstract(root),
        country_code: text_one(root, "dd[itemprop='countryCode']").map(|s| s.trim().to_string()),
        country_name: text_one(root, "dd[itemprop='countryName']").map(|s| s.trim().to_string()),
        citation_patent_application_number: attr_one(
            root,
            "meta[name='citation_patent_application_number']",
            "content",
        ),
        citation_pdf_url: attr_one(root, "meta[name='citation_pdf_url']", "content"),
        citation_patent_publication_number: attr_one(
            root,
            "meta[name='citation_patent_publication_number']",
            "content",
        ),
        relations: attr_many(root, "meta[name='DC.relation']", "content"),
        cpcs: extract_cpcs(root),
        description_alt: extract_description(root),
        dates: extract_dates(root),
        claims: extract_claims(root)?,
        priority_claims: extract_priority_claims(root),
        priority_applications: extract_priority_applications(root),
        events: extract_events(root),
        legal_events: extract_legal_events(root),
        similar_documents: extract_similar_documents(root),
        forward_citations: extract_citations(root, CitationDirection::Forward),
        backward_citations: extract_citations(root, CitationDirection::Backward),
    })
}

/// Reconstruct the abstract by concatenating every text fragment of the
/// abstract content block, each individually trimmed, with no separator.
/// Absent block yields `""`.
fn extract_abstract(root: scraper::ElementRef<'_>) -> String {
    select_one(root, "section[itemprop='abstract'] > div[itemprop='content']")
        .map(|content| content.text().map(str::trim).collect())
        .unwrap_or_default()
}
