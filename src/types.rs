//! Core data types for the scraper.
//!
//! These types represent one extracted patent record and its sub-records.
//! Serde renames pin the serialized keys to the upstream JSON mapping,
//! including the historically misspelled `publiationNumber` key, which
//! downstream consumers may depend on.

use serde::{Deserialize, Serialize};

/// Direction of a citation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationDirection {
    /// Documents citing this patent.
    Forward,

    /// Documents cited by this patent.
    Backward,
}

impl CitationDirection {
    /// The `itemprop` marker identifying citation rows for this direction.
    #[must_use]
    pub fn governing_marker(&self) -> &'static str {
        match self {
            Self::Forward => "forwardReferencesOrig",
            Self::Backward => "backwardReferencesOrig",
        }
    }
}

/// A CPC classification entry.
///
/// Entries are deduplicated on the full (code, first_code) pair; the
/// post-deduplication order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpc {
    /// Classification code (e.g., "A61K9/0014").
    #[serde(rename = "cpc")]
    pub code: Option<String>,

    /// Whether this is the first (primary) classification.
    pub first_code: bool,
}

/// A dated lifecycle entry from the page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    /// Date value (e.g., "2019-01-30").
    pub date: Option<String>,

    /// Date scheme (e.g., "issue"); empty string when unmarked.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim ordinal. Required: a claim without one fails the extraction.
    pub number: i64,

    /// Claim text, `None` when the claim body is empty.
    pub text: Option<String>,

    /// Whether the claim depends on another claim.
    pub dependent: bool,
}

/// An application claiming priority from this patent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityClaim {
    pub title: Option<String>,

    #[serde(rename = "filingDate")]
    pub filing_date: Option<String>,

    #[serde(rename = "priorityDate")]
    pub priority_date: Option<String>,
}

/// A priority application of this patent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityApplication {
    pub title: Option<String>,

    #[serde(rename = "filingDate")]
    pub filing_date: Option<String>,

    #[serde(rename = "priorityDate")]
    pub priority_date: Option<String>,

    #[serde(rename = "applicationNumber")]
    pub application_number: Option<String>,

    /// Raw marker text; the source publishes this as a string, not a flag.
    #[serde(rename = "isUsProvisional")]
    pub is_us_provisional: Option<String>,
}

/// A lifecycle event (filing, grant, anticipated expiration, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub time: Option<String>,

    pub title: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// True iff the raw marker text equals exactly "Critical".
    pub critical: bool,
}

/// A titled paragraph inside a legal event's detail cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalEventNote {
    pub title: Option<String>,

    pub text: Option<String>,
}

/// A legal status event (lapse, assignment, fee payment, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalEvent {
    pub date: Option<String>,

    pub code: Option<String>,

    pub title: Option<String>,

    /// Sub-paragraphs of the event's detail cell, in document order.
    pub content: Vec<LegalEventNote>,
}

/// A document listed as similar to this patent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarDocument {
    /// Publication date.
    pub date: Option<String>,

    /// Document title, whitespace-trimmed.
    pub title: Option<String>,

    /// True iff the marker attribute is the literal "true".
    #[serde(rename = "isPatent")]
    pub is_patent: bool,

    // Key misspelled upstream; preserved for downstream consumers.
    #[serde(rename = "publiationNumber")]
    pub publication_number: Option<String>,

    #[serde(rename = "primaryLanguage")]
    pub primary_language: Option<String>,
}

/// A citation row, forward or backward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(rename = "priorityDate")]
    pub priority_date: Option<String>,

    #[serde(rename = "publicationDate")]
    pub publication_date: Option<String>,

    /// Original assignee, whitespace-trimmed.
    #[serde(rename = "assigneeOriginal")]
    pub assignee_original: Option<String>,

    /// Cited document title, whitespace-trimmed.
    pub title: Option<String>,

    /// True iff the raw marker text is exactly "*".
    #[serde(rename = "examinerCited")]
    pub examiner_cited: bool,

    // Key misspelled upstream; preserved for downstream consumers.
    #[serde(rename = "publiationNumber")]
    pub publication_number: Option<String>,

    #[serde(rename = "primaryLanguage")]
    pub primary_language: Option<String>,
}

/// Complete extracted patent record.
///
/// Scalar fields default to `None` when their backing node is missing or a
/// query fails; list fields default to empty vecs, never null. `abstract`
/// and `description_alt` are reconstructed strings and default to `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatentDocument {
    pub inventors: Vec<String>,

    pub assignee: Vec<String>,

    #[serde(rename = "type")]
    pub patent_type: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "abstract")]
    pub abstract_text: String,

    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,

    #[serde(rename = "countryName")]
    pub country_name: Option<String>,

    pub citation_patent_application_number: Option<String>,

    pub citation_pdf_url: Option<String>,

    pub citation_patent_publication_number: Option<String>,

    pub relations: Vec<String>,

    pub cpcs: Vec<Cpc>,

    pub description_alt: String,

    pub dates: Vec<DateEntry>,

    pub claims: Vec<Claim>,

    pub priority_claims: Vec<PriorityClaim>,

    pub priority_applications: Vec<PriorityApplication>,

    pub events: Vec<Event>,

    pub legal_events: Vec<LegalEvent>,

    pub similar_documents: Vec<SimilarDocument>,

    pub forward_citations: Vec<Citation>,

    pub backward_citations: Vec<Citation>,
}
