use std::time::Duration;

/// High-level classification of a fetch error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    /// HTTP error status; the image host serves transient 5xx and the
    /// legacy behavior retried every HTTP failure, so all are retryable.
    Http(u32),
    /// Any other error (storage write, bad URL). Not retried.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff policy: the delay before attempt N+1 is
/// `backoff_base ^ N` seconds, capped at `max_delay`. No sleep happens
/// after the final attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Backoff factor (legacy default 1.5).
    pub backoff_base: f64,
    /// Upper bound on backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: 1.5,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Compute the backoff decision for a failed attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). Returns `NoRetry` when
    /// the budget is exhausted or the error kind is not transient.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }

        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Timeout | ErrorKind::Connection | ErrorKind::Http(_) => {
                let secs = self.backoff_base.max(0.0).powi(attempt as i32);
                let raw = Duration::from_secs_f64(secs.min(self.max_delay.as_secs_f64()));
                RetryDecision::RetryAfter(raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_retry_for_other() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(1, ErrorKind::Other), RetryDecision::NoRetry);
    }

    #[test]
    fn backoff_grows_per_attempt() {
        let p = RetryPolicy::default();
        let d1 = match p.decide(1, ErrorKind::Timeout) {
            RetryDecision::RetryAfter(d) => d,
            _ => panic!("expected retry"),
        };
        let d2 = match p.decide(2, ErrorKind::Connection) {
            RetryDecision::RetryAfter(d) => d,
            _ => panic!("expected retry"),
        };
        // 1.5^1 = 1.5s, 1.5^2 = 2.25s
        assert!((d1.as_secs_f64() - 1.5).abs() < 1e-9);
        assert!((d2.as_secs_f64() - 2.25).abs() < 1e-9);
        assert!(d2 > d1);
    }

    #[test]
    fn backoff_is_capped() {
        let p = RetryPolicy {
            max_attempts: 50,
            backoff_base: 2.0,
            max_delay: Duration::from_secs(10),
        };
        let d = match p.decide(20, ErrorKind::Http(500)) {
            RetryDecision::RetryAfter(d) => d,
            _ => panic!("expected retry"),
        };
        assert_eq!(d, Duration::from_secs(10));
    }

    #[test]
    fn respects_max_attempts() {
        let p = RetryPolicy::default();
        assert!(matches!(p.decide(1, ErrorKind::Http(503)), RetryDecision::RetryAfter(_)));
        assert!(matches!(p.decide(2, ErrorKind::Http(503)), RetryDecision::RetryAfter(_)));
        assert_eq!(p.decide(3, ErrorKind::Http(503)), RetryDecision::NoRetry);
    }

    #[test]
    fn max_attempts_two_decides_only_first_retry() {
        let p = RetryPolicy {
            max_attempts: 2,
            ..Default::default()
        };
        assert!(matches!(p.decide(1, ErrorKind::Timeout), RetryDecision::RetryAfter(_)));
        assert_eq!(p.decide(2, ErrorKind::Timeout), RetryDecision::NoRetry);
    }
}
