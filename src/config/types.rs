//! Configuration types.
//!
//! Defines the analyzer configuration struct and the logging enums shared
//! between the library and the CLI binary.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENT_LINKS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LINKS_PER_PAGE,
    DEFAULT_RETRY_ATTEMPTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Analyzer configuration.
///
/// Constructed once at startup and shared read-only (via `Arc`) by every
/// analysis request.
///
/// # Examples
///
/// ```no_run
/// use page_analyzer::AnalyzerConfig;
/// use std::time::Duration;
///
/// let config = AnalyzerConfig {
///     timeout: Duration::from_secs(5),
///     max_concurrent_links: 20,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Per-request timeout for the page fetch and each link probe
    pub timeout: Duration,

    /// Maximum number of link checks in flight simultaneously
    pub max_concurrent_links: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Retry attempts for the page fetch and per-link checks
    pub retry_attempts: usize,

    /// Cap on links considered per page (reserved, not currently enforced)
    pub max_links_per_page: usize,

    /// Crawl depth (reserved; always 1 in the current scope)
    pub max_depth: usize,

    /// Whether analyses report to the injected metrics sink
    pub enable_metrics: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_concurrent_links: DEFAULT_MAX_CONCURRENT_LINKS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            max_links_per_page: DEFAULT_MAX_LINKS_PER_PAGE,
            max_depth: DEFAULT_MAX_DEPTH,
            enable_metrics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_concurrent_links, 10);
        assert_eq!(config.user_agent, "Mozilla/5.0 WebPageAnalyzer/1.0");
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.max_links_per_page, 100);
        assert_eq!(config.max_depth, 1);
        assert!(config.enable_metrics);
    }
}
