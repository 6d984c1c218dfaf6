//! Configuration constants and validation functions for the scraper.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, ScraperError};

/// Base URL for the Google Patents website.
pub const PATENTS_BASE_URL: &str = "https://patents.google.com";

/// HTTP timeout in seconds.
///
/// Patent pages can be several megabytes of markup; 30 seconds accommodates
/// slow connections.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Publication number pattern: two-letter country code followed by the
/// document number and optional kind code (e.g., US9145048B2, EP1234567A1,
/// WO2019145048A1). Kept permissive on purpose; office formats vary.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PUBLICATION_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[A-Za-z0-9]{3,}$").expect("valid regex"));

/// Validate publication number format.
///
/// # Arguments
/// * `number` - The publication number to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ScraperError::InvalidPublicationNumber)` if invalid
///
/// # Examples
/// ```
/// use patent_scraper::config::validate_publication_number;
///
/// assert!(validate_publication_number("US9145048B2").is_ok());
/// assert!(validate_publication_number("not a number").is_err());
/// ```
pub fn validate_publication_number(number: &str) -> Result<()> {
    if PUBLICATION_NUMBER_PATTERN.is_match(number) {
        Ok(())
    } else {
        Err(ScraperError::InvalidPublicationNumber(number.to_string()))
    }
}

/// Build the document page URL for a publication number.
///
/// # Arguments
/// * `number` - The publication number (should be validated with
///   `validate_publication_number` first)
///
/// # Returns
/// URL to the English-language document page
///
/// # Panics
/// Debug builds panic if the number doesn't match the expected format.
pub fn patent_url(number: &str) -> String {
    debug_assert!(
        PUBLICATION_NUMBER_PATTERN.is_match(number),
        "number should be validated before calling patent_url"
    );
    format!("{PATENTS_BASE_URL}/patent/{number}/en")
}
