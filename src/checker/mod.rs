//! Link accessibility checking.
//!
//! Probes candidate URLs with a lightweight HEAD request, falling back to a
//! full GET when HEAD is rejected, under bounded parallelism. A link-check
//! failure is never an error: it degrades to "inaccessible" for that link
//! only.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::{AnalyzerConfig, RETRY_MAX_DELAY_SECS};
use crate::initialization::init_semaphore;

// 2^i seconds, capped so the shift cannot overflow and the wait cannot exceed
// the fetch backoff ceiling.
fn probe_backoff(attempt: usize) -> Duration {
    let secs = 1u64
        .checked_shl(attempt as u32)
        .unwrap_or(u64::MAX)
        .min(RETRY_MAX_DELAY_SECS);
    Duration::from_secs(secs)
}

/// Checks whether links are reachable over the network.
///
/// Shares the process-wide HTTP client (and its connection pool) with the page
/// fetch; cloning is cheap and every clone uses the same pool.
#[derive(Clone)]
pub struct LinkChecker {
    client: Arc<reqwest::Client>,
    config: Arc<AnalyzerConfig>,
}

impl LinkChecker {
    /// Creates a checker over a shared client and configuration.
    pub fn new(client: Arc<reqwest::Client>, config: Arc<AnalyzerConfig>) -> Self {
        LinkChecker { client, config }
    }

    /// Probes a single URL once.
    ///
    /// A HEAD request with a status in [200, 400) means accessible. On a
    /// transport failure or any other status, falls back to a GET and accepts
    /// a status in [200, 300). Transport errors and cancellation yield
    /// `false`; nothing propagates to the caller.
    pub async fn check_accessibility(&self, cancel: &CancellationToken, url: &str) -> bool {
        if cancel.is_cancelled() {
            return false;
        }

        let head = tokio::select! {
            _ = cancel.cancelled() => return false,
            result = self.client.head(url).send() => result,
        };
        match head {
            Ok(response) => {
                let status = response.status().as_u16();
                if (200..400).contains(&status) {
                    return true;
                }
                log::debug!("HEAD probe of {url} returned {status}, falling back to GET");
            }
            Err(e) => {
                log::debug!("HEAD probe of {url} failed: {e}");
            }
        }

        let get = tokio::select! {
            _ = cancel.cancelled() => return false,
            result = self.client.get(url).send() => result,
        };
        match get {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("GET probe of {url} failed: {e}");
                false
            }
        }
    }

    /// Probes a URL with retry and exponential backoff.
    ///
    /// Makes up to `retry_attempts` attempts, sleeping `2^i` seconds after
    /// attempt `i` (capped at [`RETRY_MAX_DELAY_SECS`]). Stops early on
    /// success or when the shared context is cancelled; never sleeps after the
    /// final attempt.
    pub async fn check_with_retry(&self, cancel: &CancellationToken, url: &str) -> bool {
        let attempts = self.config.retry_attempts.max(1);
        for attempt in 0..attempts {
            if self.check_accessibility(cancel, url).await {
                return true;
            }
            if attempt + 1 == attempts {
                break;
            }
            let backoff = probe_backoff(attempt);
            tokio::select! {
                _ = cancel.cancelled() => return false,
                _ = tokio::time::sleep(backoff) => {}
            }
        }
        false
    }

    /// Checks a batch of URLs with bounded parallelism.
    ///
    /// At most `max_concurrent_links` checks run at once, enforced by a
    /// semaphore acquired before each probe and released on completion
    /// regardless of outcome. Each task reports its outcome over a channel to
    /// a single collector keyed by index, so the returned vector is aligned
    /// with the input order no matter in which order checks complete.
    /// Cancellation makes pending and in-flight checks resolve to `false`
    /// promptly instead of hanging.
    pub async fn check_links(&self, cancel: &CancellationToken, urls: &[Url]) -> Vec<bool> {
        let mut results = vec![false; urls.len()];
        if urls.is_empty() {
            return results;
        }

        let semaphore = init_semaphore(self.config.max_concurrent_links.max(1));
        let (tx, mut rx) = mpsc::channel(urls.len());

        for (index, url) in urls.iter().enumerate() {
            let checker = self.clone();
            let cancel = cancel.clone();
            let semaphore = Arc::clone(&semaphore);
            let tx = tx.clone();
            let url = url.to_string();
            tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return,
                };
                let accessible = checker.check_with_retry(&cancel, &url).await;
                log::debug!("link check result url={url} accessible={accessible}");
                let _ = tx.send((index, accessible)).await;
            });
        }
        drop(tx);

        while let Some((index, accessible)) = rx.recv().await {
            results[index] = accessible;
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_backoff_doubles() {
        assert_eq!(probe_backoff(0), Duration::from_secs(1));
        assert_eq!(probe_backoff(1), Duration::from_secs(2));
        assert_eq!(probe_backoff(3), Duration::from_secs(8));
    }

    #[test]
    fn test_probe_backoff_is_capped() {
        assert_eq!(probe_backoff(5), Duration::from_secs(RETRY_MAX_DELAY_SECS));
        assert_eq!(probe_backoff(63), Duration::from_secs(RETRY_MAX_DELAY_SECS));
        // Shift widths past the bit width must not panic
        assert_eq!(
            probe_backoff(1000),
            Duration::from_secs(RETRY_MAX_DELAY_SECS)
        );
    }
}
