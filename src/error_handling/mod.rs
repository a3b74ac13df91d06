//! Error handling.
//!
//! This module provides:
//! - The analysis error taxonomy ([`AnalysisError`]) with stable error codes
//! - Initialization errors ([`InitializationError`])
//! - The retry backoff schedule used by the page fetch
//!
//! Propagation policy: `InvalidUrl`, `FetchFailed`, `ParseFailed`, and
//! `Timeout` abort the whole analysis and surface to the caller. Per-link
//! accessibility failures never abort anything; they degrade to an
//! inaccessible link.

mod retry;
mod types;

// Re-export public API
pub use retry::fetch_backoff;
pub use types::{AnalysisError, InitializationError};
