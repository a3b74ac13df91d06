//! Metrics collection.
//!
//! The analyzer reports to an injected [`MetricsSink`] rather than a global
//! process-wide registry, so the core stays free of ambient state and can be
//! tested with a [`NoopMetrics`] or an inspectable [`AnalysisMetrics`].
//!
//! All sink calls are fire-and-forget: they never block and never fail the
//! analysis.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::error_handling::AnalysisError;
use crate::models::{AnalysisResult, HtmlVersion};

/// Sink for analysis metrics, injected into the analyzer at construction.
pub trait MetricsSink: Send + Sync {
    /// Records that an analysis request was received.
    fn record_request(&self);

    /// Records how long an analysis took, in seconds.
    fn record_duration(&self, seconds: f64);

    /// Records an analysis failure.
    fn record_error(&self, error: &AnalysisError);

    /// Records the outcome of a completed analysis: per-type link counts,
    /// per-level heading counts, login-form occurrence, and HTML version.
    fn record_result(&self, result: &AnalysisResult);
}

/// Metrics sink that discards everything.
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn record_request(&self) {}
    fn record_duration(&self, _seconds: f64) {}
    fn record_error(&self, _error: &AnalysisError) {}
    fn record_result(&self, _result: &AnalysisResult) {}
}

/// Thread-safe in-process metrics tracker.
///
/// Counts requests, errors, link and heading totals, login-form occurrences,
/// and the HTML-version distribution using atomic counters, so it can be
/// shared across concurrent analyses via `Arc` without locking.
pub struct AnalysisMetrics {
    requests: AtomicUsize,
    errors: AtomicUsize,
    duration_millis: AtomicU64,
    duration_samples: AtomicUsize,
    internal_links: AtomicUsize,
    external_links: AtomicUsize,
    inaccessible_links: AtomicUsize,
    // Index 0 = h1 .. index 5 = h6
    headings: [AtomicUsize; 6],
    login_forms: AtomicUsize,
    html_versions: HashMap<HtmlVersion, AtomicUsize>,
}

impl AnalysisMetrics {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut html_versions = HashMap::new();
        for version in HtmlVersion::iter() {
            html_versions.insert(version, AtomicUsize::new(0));
        }

        AnalysisMetrics {
            requests: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            duration_millis: AtomicU64::new(0),
            duration_samples: AtomicUsize::new(0),
            internal_links: AtomicUsize::new(0),
            external_links: AtomicUsize::new(0),
            inaccessible_links: AtomicUsize::new(0),
            headings: Default::default(),
            login_forms: AtomicUsize::new(0),
            html_versions,
        }
    }

    /// Point-in-time copy of every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let samples = self.duration_samples.load(Ordering::Relaxed);
        let total_ms = self.duration_millis.load(Ordering::Relaxed);
        let mut headings = HashMap::new();
        for (idx, counter) in self.headings.iter().enumerate() {
            let count = counter.load(Ordering::Relaxed);
            if count > 0 {
                headings.insert(format!("h{}", idx + 1), count);
            }
        }
        let mut html_versions = HashMap::new();
        for (version, counter) in &self.html_versions {
            let count = counter.load(Ordering::Relaxed);
            if count > 0 {
                html_versions.insert(version.to_string(), count);
            }
        }

        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            avg_duration_seconds: if samples > 0 {
                total_ms as f64 / samples as f64 / 1000.0
            } else {
                0.0
            },
            internal_links: self.internal_links.load(Ordering::Relaxed),
            external_links: self.external_links.load(Ordering::Relaxed),
            inaccessible_links: self.inaccessible_links.load(Ordering::Relaxed),
            headings,
            login_forms: self.login_forms.load(Ordering::Relaxed),
            html_versions,
        }
    }
}

impl Default for AnalysisMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSink for AnalysisMetrics {
    fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    fn record_duration(&self, seconds: f64) {
        self.duration_millis
            .fetch_add((seconds * 1000.0) as u64, Ordering::Relaxed);
        self.duration_samples.fetch_add(1, Ordering::Relaxed);
    }

    fn record_error(&self, _error: &AnalysisError) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    fn record_result(&self, result: &AnalysisResult) {
        self.internal_links
            .fetch_add(result.internal_links(), Ordering::Relaxed);
        self.external_links
            .fetch_add(result.external_links(), Ordering::Relaxed);
        self.inaccessible_links
            .fetch_add(result.inaccessible_links(), Ordering::Relaxed);

        for (level, count) in &result.headings {
            // Levels are "h1".."h6" by construction of the extractor
            if let Some(idx) = level
                .strip_prefix('h')
                .and_then(|digit| digit.parse::<usize>().ok())
                .filter(|d| (1..=6).contains(d))
            {
                self.headings[idx - 1].fetch_add(*count, Ordering::Relaxed);
            }
        }

        if result.has_login_form {
            self.login_forms.fetch_add(1, Ordering::Relaxed);
        }

        if let Some(counter) = self.html_versions.get(&result.html_version) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Serializable copy of the counters in an [`AnalysisMetrics`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Analyses requested
    pub requests: usize,
    /// Analyses that ended in an error
    pub errors: usize,
    /// Mean analysis duration in seconds
    pub avg_duration_seconds: f64,
    /// Internal links seen across all analyses
    pub internal_links: usize,
    /// External links seen across all analyses
    pub external_links: usize,
    /// Links that failed their accessibility probe
    pub inaccessible_links: usize,
    /// Heading totals keyed by level tag
    pub headings: HashMap<String, usize>,
    /// Pages on which a login form was detected
    pub login_forms: usize,
    /// HTML version distribution keyed by display name
    pub html_versions: HashMap<String, usize>,
}
