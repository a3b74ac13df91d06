//! Shared-resource initialization.
//!
//! This module provides functions to initialize the resources every analysis
//! shares:
//! - The HTTP client (user-agent, timeout, redirect policy)
//! - The logger
//! - The semaphore bounding concurrent link checks

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the admission gate for concurrent link checks.
///
/// Creates a semaphore with `count` permits; a check acquires a permit before
/// probing and releases it on completion regardless of outcome.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
