//! Error type definitions.
//!
//! This module defines the analysis error taxonomy and initialization errors.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that abort a page analysis.
///
/// An analysis either produces a complete [`AnalysisResult`] or exactly one of
/// these; there is no partial-result-plus-error mode. Per-link accessibility
/// failures are never errors -- they degrade to `is_accessible = false` on the
/// affected link only.
///
/// [`AnalysisResult`]: crate::AnalysisResult
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The target URL is malformed or uses a scheme other than http/https.
    /// Raised before any network activity.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The page fetch failed: transport error, exhausted retries, or a final
    /// non-2xx response.
    #[error("failed to fetch '{url}': {reason}")]
    FetchFailed {
        /// The target URL
        url: String,
        /// Transport error or final HTTP status
        reason: String,
    },

    /// The response body could not be parsed as an HTML document.
    #[error("failed to parse HTML from '{url}': {reason}")]
    ParseFailed {
        /// The target URL
        url: String,
        /// Decode/parse failure detail
        reason: String,
    },

    /// The analysis deadline expired or the caller cancelled the request.
    #[error("analysis of '{url}' timed out or was cancelled")]
    Timeout {
        /// The target URL
        url: String,
    },

    /// The per-page link limit was exceeded. Reserved for future crawl
    /// enforcement; not raised while depth is fixed at 1.
    #[error("link limit of {limit} reached while analyzing '{url}'")]
    MaxLinksReached {
        /// The target URL
        url: String,
        /// The configured limit
        limit: usize,
    },

    /// The crawl depth limit was exceeded. Reserved for future crawl
    /// enforcement; not raised while depth is fixed at 1.
    #[error("crawl depth limit of {limit} reached while analyzing '{url}'")]
    MaxDepthReached {
        /// The target URL
        url: String,
        /// The configured limit
        limit: usize,
    },
}

impl AnalysisError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::InvalidUrl { .. } => "INVALID_URL",
            AnalysisError::FetchFailed { .. } => "FETCH_FAILED",
            AnalysisError::ParseFailed { .. } => "PARSE_FAILED",
            AnalysisError::Timeout { .. } => "TIMEOUT",
            AnalysisError::MaxLinksReached { .. } => "MAX_LINKS_REACHED",
            AnalysisError::MaxDepthReached { .. } => "MAX_DEPTH_REACHED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = AnalysisError::InvalidUrl {
            url: "ftp://example.com".into(),
            reason: "unsupported scheme".into(),
        };
        assert_eq!(err.code(), "INVALID_URL");

        let err = AnalysisError::FetchFailed {
            url: "http://example.com".into(),
            reason: "HTTP 503".into(),
        };
        assert_eq!(err.code(), "FETCH_FAILED");

        let err = AnalysisError::ParseFailed {
            url: "http://example.com".into(),
            reason: "invalid UTF-8".into(),
        };
        assert_eq!(err.code(), "PARSE_FAILED");

        let err = AnalysisError::Timeout {
            url: "http://example.com".into(),
        };
        assert_eq!(err.code(), "TIMEOUT");

        let err = AnalysisError::MaxLinksReached {
            url: "http://example.com".into(),
            limit: 100,
        };
        assert_eq!(err.code(), "MAX_LINKS_REACHED");

        let err = AnalysisError::MaxDepthReached {
            url: "http://example.com".into(),
            limit: 1,
        };
        assert_eq!(err.code(), "MAX_DEPTH_REACHED");
    }

    #[test]
    fn test_error_display_includes_url() {
        let err = AnalysisError::FetchFailed {
            url: "http://example.com/page".into(),
            reason: "HTTP 404".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://example.com/page"));
        assert!(msg.contains("HTTP 404"));
    }
}
