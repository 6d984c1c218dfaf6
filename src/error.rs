//! Error types for the scraper.
//!
//! Only genuinely unrecoverable conditions surface here: a rejected
//! publication number, a failed fetch, an unparseable claim ordinal. Field
//! level query misses degrade to defaults inside the extractor and are
//! reported through `tracing` instead.

use thiserror::Error;

/// Main error type for the scraper library.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Invalid publication number format.
    #[error("Invalid publication number: '{0}'. Expected a country code followed by the document number (e.g., US9145048B2)")]
    InvalidPublicationNumber(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download the patent document page.
    #[error("Failed to download document {number}: {source}")]
    DocumentDownload {
        number: String,
        #[source]
        source: reqwest::Error,
    },

    /// A claim element is missing its required ordinal number.
    #[error("Claim is missing a parseable number: {detail}")]
    ClaimNumber { detail: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, ScraperError>;
