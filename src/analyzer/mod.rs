//! Analysis orchestration.
//!
//! [`PageAnalyzer`] sequences a full analysis: validate the target URL, fetch
//! the page (with retry and backoff), parse the body, extract structural
//! facts, classify forms, check link accessibility, and assemble the final
//! [`AnalysisResult`]. The whole pipeline is bound to one cancellation token
//! supplied by the caller; cancellation is observed by the fetch, every link
//! probe, and every backoff sleep.

use std::sync::Arc;
use std::time::Instant;

use scraper::Html;
use tokio_retry::Retry;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::checker::LinkChecker;
use crate::config::AnalyzerConfig;
use crate::error_handling::{fetch_backoff, AnalysisError, InitializationError};
use crate::initialization::init_client;
use crate::metrics::{MetricsSink, NoopMetrics};
use crate::models::{AnalysisResult, LinkRecord};
use crate::parse::{extract_document_facts, page_has_login_form};

/// Analyzes a single web page per request.
///
/// Construct once and share: the HTTP client, configuration, and metrics sink
/// are reused across requests, while every analysis produces its own immutable
/// result.
pub struct PageAnalyzer {
    client: Arc<reqwest::Client>,
    config: Arc<AnalyzerConfig>,
    checker: LinkChecker,
    metrics: Arc<dyn MetricsSink>,
}

impl PageAnalyzer {
    /// Creates an analyzer with the given configuration and metrics sink.
    ///
    /// The sink is replaced with a no-op when `config.enable_metrics` is off.
    ///
    /// # Errors
    ///
    /// Returns an [`InitializationError`] if the HTTP client cannot be built.
    pub fn new(
        config: AnalyzerConfig,
        metrics: Arc<dyn MetricsSink>,
    ) -> Result<Self, InitializationError> {
        let config = Arc::new(config);
        let client = init_client(&config)?;
        let checker = LinkChecker::new(Arc::clone(&client), Arc::clone(&config));
        let metrics: Arc<dyn MetricsSink> = if config.enable_metrics {
            metrics
        } else {
            Arc::new(NoopMetrics)
        };
        Ok(PageAnalyzer {
            client,
            config,
            checker,
            metrics,
        })
    }

    /// Creates an analyzer with default configuration and no metrics.
    pub fn with_defaults() -> Result<Self, InitializationError> {
        Self::new(AnalyzerConfig::default(), Arc::new(NoopMetrics))
    }

    /// Analyzes the page at `url`.
    ///
    /// Returns either a complete [`AnalysisResult`] or exactly one typed
    /// error; there is no partial-result mode. Per-link accessibility
    /// failures never fail the analysis. An already-cancelled token returns
    /// [`AnalysisError::Timeout`] before any network activity.
    pub async fn analyze(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let start = Instant::now();
        self.metrics.record_request();
        log::info!("analyzing web page url={url}");

        let outcome = self.run(cancel, url).await;
        let duration = start.elapsed().as_secs_f64();
        self.metrics.record_duration(duration);

        match &outcome {
            Ok(result) => {
                self.metrics.record_result(result);
                log::info!(
                    "analysis complete url={url} duration={duration:.3}s links={} accessible={} login_form={}",
                    result.links.len(),
                    result.accessible_links(),
                    result.has_login_form,
                );
            }
            Err(e) => {
                self.metrics.record_error(e);
                log::error!("analysis failed url={url} code={} error={e}", e.code());
            }
        }
        outcome
    }

    async fn run(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if cancel.is_cancelled() {
            return Err(AnalysisError::Timeout { url: url.into() });
        }
        let base = validate_target_url(url)?;

        // Fetching: transport failures and non-2xx responses are retried with
        // exponential backoff; a final non-2xx fails the whole analysis.
        log::debug!("fetching url={url}");
        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(AnalysisError::Timeout { url: url.into() }),
            result = Retry::spawn(fetch_backoff(self.config.retry_attempts), || {
                self.fetch_once(url)
            }) => result?,
        };

        let bytes = tokio::select! {
            _ = cancel.cancelled() => return Err(AnalysisError::Timeout { url: url.into() }),
            result = response.bytes() => result.map_err(|e| AnalysisError::FetchFailed {
                url: url.into(),
                reason: e.to_string(),
            })?,
        };

        // Parsing: html5ever recovers from malformed markup, so the only
        // rejectable body is one that is not text at all.
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| AnalysisError::ParseFailed {
            url: url.into(),
            reason: e.to_string(),
        })?;

        // Extracting and ClassifyingForms are synchronous and share one scope:
        // the parsed tree is not Send and must be dropped before suspending.
        let (facts, has_login_form) = {
            let document = Html::parse_document(&body);
            let facts = extract_document_facts(&document, &base);
            let has_login_form = page_has_login_form(&document);
            (facts, has_login_form)
        };
        log::debug!(
            "extracted url={url} version={} title_len={} headings={} links={} login_form={has_login_form}",
            facts.html_version,
            facts.title.len(),
            facts.headings.values().sum::<usize>(),
            facts.links.len(),
        );

        // CheckingLinks: probe the resolved form of each link concurrently.
        let targets: Vec<Url> = facts.links.iter().map(|l| l.resolved.clone()).collect();
        let accessibility = self.checker.check_links(cancel, &targets).await;

        // Assembled: freeze each link record exactly once.
        let links = facts
            .links
            .into_iter()
            .zip(accessibility)
            .map(|(link, is_accessible)| LinkRecord {
                url: link.raw_href,
                is_internal: link.is_internal,
                is_accessible,
            })
            .collect();

        Ok(AnalysisResult {
            url: url.to_string(),
            html_version: facts.html_version,
            title: facts.title,
            headings: facts.headings,
            links,
            has_login_form,
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<reqwest::Response, AnalysisError> {
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(AnalysisError::FetchFailed {
                url: url.into(),
                reason: format!("HTTP {}", response.status()),
            }),
            Err(e) if e.is_timeout() => Err(AnalysisError::Timeout { url: url.into() }),
            Err(e) => Err(AnalysisError::FetchFailed {
                url: url.into(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Validates the target URL before any network activity.
///
/// Only syntactically valid absolute http/https URLs are analyzable.
fn validate_target_url(url: &str) -> Result<Url, AnalysisError> {
    let parsed = Url::parse(url).map_err(|e| AnalysisError::InvalidUrl {
        url: url.into(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(AnalysisError::InvalidUrl {
            url: url.into(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(validate_target_url("http://example.com").is_ok());
        assert!(validate_target_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        let err = validate_target_url("ftp://example.com").unwrap_err();
        assert_eq!(err.code(), "INVALID_URL");
        let err = validate_target_url("file:///etc/hosts").unwrap_err();
        assert_eq!(err.code(), "INVALID_URL");
    }

    #[test]
    fn test_validate_rejects_relative_and_garbage() {
        assert!(validate_target_url("/just/a/path").is_err());
        assert!(validate_target_url("not a url at all").is_err());
        assert!(validate_target_url("").is_err());
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_short_circuits() {
        let analyzer = PageAnalyzer::with_defaults().expect("analyzer builds");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = analyzer
            .analyze(&cancel, "http://example.invalid/")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "TIMEOUT");
    }
}
