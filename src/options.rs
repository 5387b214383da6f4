use std::time::Duration;

/// URL fetched by the binary when no other target is given.
pub const DEFAULT_URL: &str = "https://petstore.swagger.io/v2/pet/findByStatus?status=available";

/// Retries after the initial attempt (4 attempts in total).
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Base unit of the linear backoff, in milliseconds.
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 100;

/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchOptions {
    /// Per-request timeout in milliseconds. `None` leaves the transport default.
    pub timeout_ms: Option<u64>,
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Base retry backoff in milliseconds (linear strategy).
    pub retry_backoff_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }
}

impl FetchOptions {
    /// Builds the retry policy described by these options.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Attempt budget and linear backoff schedule for one retry loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub max_retries: usize,
    /// Delay unit; attempt `n` waits `n * base_backoff`.
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        FetchOptions::default().retry_policy()
    }
}

impl RetryPolicy {
    /// Total attempts allowed, counting the first one.
    pub fn total_attempts(&self) -> usize {
        self.max_retries.saturating_add(1)
    }

    /// Delay to wait before `attempt` (0-based). The first attempt never waits.
    pub fn backoff(&self, attempt: usize) -> Duration {
        let factor = u32::try_from(attempt).unwrap_or(u32::MAX);
        self.base_backoff.saturating_mul(factor)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{FetchOptions, RetryPolicy};

    #[test]
    fn defaults_allow_four_attempts_with_100ms_unit() {
        let policy = FetchOptions::default().retry_policy();
        assert_eq!(policy.total_attempts(), 4);
        assert_eq!(policy.base_backoff, Duration::from_millis(100));
    }

    #[test]
    fn backoff_grows_linearly_with_attempt_index() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(0), Duration::ZERO);
        assert_eq!(policy.backoff(1), Duration::from_millis(100));
        assert_eq!(policy.backoff(2), Duration::from_millis(200));
        assert_eq!(policy.backoff(3), Duration::from_millis(300));
    }

    #[test]
    fn backoff_saturates_instead_of_overflowing() {
        let policy = RetryPolicy {
            max_retries: usize::MAX,
            base_backoff: Duration::MAX,
        };
        assert_eq!(policy.backoff(2), Duration::MAX);
        assert_eq!(policy.total_attempts(), usize::MAX);
    }

    #[test]
    fn timeout_is_unset_by_default() {
        assert_eq!(FetchOptions::default().timeout(), None);
        let opts = FetchOptions {
            timeout_ms: Some(250),
            ..FetchOptions::default()
        };
        assert_eq!(opts.timeout(), Some(Duration::from_millis(250)));
    }
}
