//! page_analyzer library: single-page web analysis
//!
//! This library fetches one web page, parses its HTML, and produces a
//! structured report: HTML version, title, heading counts, internal/external
//! link classification with per-link accessibility, and login-form detection.
//!
//! # Example
//!
//! ```no_run
//! use page_analyzer::{AnalyzerConfig, NoopMetrics, PageAnalyzer};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = PageAnalyzer::new(AnalyzerConfig::default(), Arc::new(NoopMetrics))?;
//! let cancel = CancellationToken::new();
//!
//! let result = analyzer.analyze(&cancel, "https://example.com").await?;
//! println!("{} — {} links ({} accessible), login form: {}",
//!          result.title,
//!          result.links.len(),
//!          result.accessible_links(),
//!          result.has_login_form);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod analyzer;
mod checker;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod metrics;
mod models;
mod parse;

// Re-export public API
pub use analyzer::PageAnalyzer;
pub use checker::LinkChecker;
pub use config::{AnalyzerConfig, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, InitializationError};
pub use metrics::{AnalysisMetrics, MetricsSink, MetricsSnapshot, NoopMetrics};
pub use models::{AnalysisResult, HtmlVersion, LinkRecord};
