//! Retry backoff strategy.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{RETRY_BASE, RETRY_FACTOR, RETRY_MAX_DELAY_SECS};

/// Creates the exponential backoff schedule used by the page fetch.
///
/// Attempt `i` waits `2^i` seconds before retrying (1s, 2s, 4s, ...), capped
/// at [`RETRY_MAX_DELAY_SECS`] and limited to `attempts` retries after the
/// initial try.
///
/// # Returns
///
/// A delay iterator ready for use with `tokio_retry::Retry`.
pub fn fetch_backoff(attempts: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_BASE)
        .factor(RETRY_FACTOR)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_each_attempt() {
        let delays: Vec<Duration> = fetch_backoff(3).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
            ]
        );
    }

    #[test]
    fn test_backoff_is_bounded_by_attempts() {
        assert_eq!(fetch_backoff(0).count(), 0);
        assert_eq!(fetch_backoff(5).count(), 5);
    }

    #[test]
    fn test_backoff_respects_max_delay() {
        let last = fetch_backoff(10).last().unwrap();
        assert!(last <= Duration::from_secs(RETRY_MAX_DELAY_SECS));
    }
}
