//! Retry and backoff policy for the request core.

use std::time::Duration;

use crate::error::{DomainError, DomainResult};

/// Default number of attempts for one logical request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default backoff unit; the wait after attempt `n` is `unit * 2^n`.
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Returns true if a response with this status may succeed on retry.
///
/// Client errors (400-499) are durable and never retried.
#[must_use]
pub const fn is_retryable_status(status: u16) -> bool {
    !matches!(status, 400..=499)
}

/// Exponential backoff retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_base: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given attempt ceiling and backoff unit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroAttempts` if `max_attempts` is zero.
    pub const fn new(max_attempts: u32, backoff_base: Duration) -> DomainResult<Self> {
        if max_attempts == 0 {
            return Err(DomainError::ZeroAttempts);
        }
        Ok(Self {
            max_attempts,
            backoff_base,
        })
    }

    /// Maximum number of attempts, including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before the attempt following `attempt` (1-based).
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.backoff_base.saturating_mul(factor)
    }

    /// Whether a failed `attempt` (1-based) should be followed by another.
    #[must_use]
    pub const fn should_retry(&self, attempt: u32, retryable: bool) -> bool {
        retryable && attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(1), Duration::from_secs(2));
        assert_eq!(policy.backoff_for(2), Duration::from_secs(4));
        assert_eq!(policy.backoff_for(3), Duration::from_secs(8));
    }

    #[test]
    fn test_should_retry_stops_at_ceiling() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(1, true));
        assert!(policy.should_retry(2, true));
        assert!(!policy.should_retry(3, true));
        assert!(!policy.should_retry(1, false));
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(!is_retryable_status(400));
        assert!(!is_retryable_status(404));
        assert!(!is_retryable_status(499));
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(503));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert_eq!(
            RetryPolicy::new(0, DEFAULT_BACKOFF_BASE),
            Err(DomainError::ZeroAttempts)
        );
    }
}
