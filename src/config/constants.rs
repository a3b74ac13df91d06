//! Configuration constants.
//!
//! Default values for the analyzer configuration. All of these can be
//! overridden per analysis via [`AnalyzerConfig`](super::AnalyzerConfig).

use std::time::Duration;

/// Default per-request timeout for the page fetch and for each link probe.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of link checks allowed in flight simultaneously.
pub const DEFAULT_MAX_CONCURRENT_LINKS: usize = 10;

/// Default number of retry attempts for the page fetch and per-link checks.
pub const DEFAULT_RETRY_ATTEMPTS: usize = 3;

/// Default cap on the number of links considered per page.
///
/// Reserved for crawl enforcement; analysis is currently fixed at depth 1 and
/// the cap is not applied.
pub const DEFAULT_MAX_LINKS_PER_PAGE: usize = 100;

/// Default crawl depth. Always 1 in the current scope.
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Default User-Agent header sent with the page fetch and every link probe.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 WebPageAnalyzer/1.0";

/// Maximum number of redirect hops the HTTP client follows.
///
/// Link accessibility is judged on the final status after redirects, so a 301
/// pointing at a 200 is accessible and a 301 pointing at a 404 is not.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Base of the exponential backoff between fetch attempts, in milliseconds.
///
/// tokio_retry's ExponentialBackoff yields base^attempt, so a base of 2 scaled
/// by [`RETRY_FACTOR`] produces 1s, 2s, 4s, ... (2^i seconds).
pub const RETRY_BASE: u64 = 2;
/// Multiplier applied to each backoff delay.
pub const RETRY_FACTOR: u64 = 500;
/// Cap on a single backoff delay between fetch attempts.
pub const RETRY_MAX_DELAY_SECS: u64 = 30;
