//! Retry loop: run a closure until success or the policy says stop.

use std::time::Duration;

use super::classify::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::http::HttpError;

/// Runs `f` until it succeeds or the retry policy declines another
/// attempt, returning the last error. `sleep` is called with the backoff
/// delay between attempts; production passes `std::thread::sleep`, tests
/// pass a recorder.
pub fn run_with_retry<T, F, S>(
    policy: &RetryPolicy,
    mut sleep: S,
    mut f: F,
) -> Result<T, HttpError>
where
    F: FnMut() -> Result<T, HttpError>,
    S: FnMut(Duration),
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::debug!(attempt, delay_ms = d.as_millis() as u64, error = %e, "retrying after backoff");
                        sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
