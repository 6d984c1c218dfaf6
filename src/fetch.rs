//! Document page downloading.
//!
//! Thin wrapper around the HTTP client: builds the canonical document URL
//! for a publication number and returns the raw page markup.

use reqwest::blocking::Client;

use crate::config::patent_url;
use crate::error::{Result, ScraperError};
use crate::http::{bytes_to_string, download_bytes};

/// Download the HTML document page for a publication number.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `number` - The publication number (e.g., "US9145048B2")
///
/// # Returns
/// Raw HTML content as a string
pub fn download_document_html(client: &Client, number: &str) -> Result<String> {
    let url = patent_url(number);
    let bytes = download_bytes(client, &url).map_err(|e| {
        if let ScraperError::Http(source) = e {
            ScraperError::DocumentDownload {
                number: number.to_string(),
                source,
            }
        } else {
            e
        }
    })?;

    Ok(bytes_to_string(&bytes, &format!("document page for {number}")))
}
