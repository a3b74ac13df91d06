//! Analyzer configuration.
//!
//! This module provides:
//! - [`AnalyzerConfig`]: the immutable per-process configuration shared by all
//!   analysis requests
//! - [`LogLevel`] / [`LogFormat`]: logging enums used by the CLI binary
//! - Default values for timeouts, concurrency, and retry behavior

mod constants;
mod types;

// Re-export public API
pub use constants::{
    DEFAULT_MAX_CONCURRENT_LINKS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LINKS_PER_PAGE,
    DEFAULT_RETRY_ATTEMPTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, RETRY_BASE,
    RETRY_FACTOR, RETRY_MAX_DELAY_SECS,
};
pub use types::{AnalyzerConfig, LogFormat, LogLevel};
