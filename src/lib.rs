//! Patent Scraper - Fetch and extract structured patent records from
//! Google Patents document pages.
//!
//! One invocation performs one blocking fetch and one extraction: the page
//! markup is parsed into a tree and a fixed battery of structural queries
//! assembles a [`PatentDocument`] record. Individual query misses degrade
//! to null/empty defaults; only a failed fetch or an unparseable claim
//! ordinal abort the call.
//!
//! # Example
//!
//! ```
//! use patent_scraper::{config, extract_document};
//!
//! // Validate a publication number
//! assert!(config::validate_publication_number("US9145048B2").is_ok());
//!
//! // Extract a record from already-fetched markup
//! let html = r#"<meta name="DC.title" content="Example Patent">"#;
//! let doc = extract_document(html).unwrap();
//! assert_eq!(doc.title.as_deref(), Some("Example Patent"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Record types ([`PatentDocument`] and sub-records)
//! - [`error`]: Error types and Result alias
//! - [`http`]: Blocking HTTP client
//! - [`fetch`]: Document page downloading
//! - [`query`]: Structural query evaluation with degrade-on-failure
//! - [`sections`]: Per-section extraction routines
//! - [`document`]: Top-level assembly
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod http;
pub mod query;
pub mod sections;
pub mod types;

// Re-export main functions
pub use document::{download_document, extract_document};

// Re-export commonly used items
pub use config::validate_publication_number;
pub use error::{Result, ScraperError};
pub use types::{Citation, CitationDirection, Claim, PatentDocument};
