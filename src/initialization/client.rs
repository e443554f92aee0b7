//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every site visit.
///
/// The client keeps reqwest's defaults for redirects, cookies and headers. A
/// request timeout is only set when `config.timeout_seconds` is present;
/// without one a single unresponsive site blocks the run indefinitely.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new();
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
