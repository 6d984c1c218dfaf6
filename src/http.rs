//! HTTP client wrapper for downloading document pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::Result;

/// User agent string identifying this scraper.
const USER_AGENT: &str = concat!("patent-scraper/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download content from a URL.
///
/// One GET per invocation, no retry. Any non-success status is an error.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
///
/// # Returns
/// Raw bytes of the response body
pub fn download_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    tracing::debug!(url, "Downloading");
    let response = client.get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    Ok(bytes.to_vec())
}

/// Decode raw response bytes to a string, replacing invalid UTF-8.
///
/// # Arguments
/// * `bytes` - Raw response body
/// * `context` - Description of what was downloaded, for the diagnostic
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(e) => {
            tracing::warn!(context, error = %e, "Invalid UTF-8 in response, replacing");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
