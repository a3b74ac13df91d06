//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{AnalyzerConfig, MAX_REDIRECT_HOPS};

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the analyzer configuration
/// - Per-request timeout from the analyzer configuration
/// - Redirect following enabled (up to [`MAX_REDIRECT_HOPS`] hops)
///
/// The same client (and its connection pool) is shared read-only by the page
/// fetch and every concurrent link check.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &AnalyzerConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}
