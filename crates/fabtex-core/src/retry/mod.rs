//! Retry and backoff policy for the fetch engine.
//!
//! Error classification (timeouts, connection failures, HTTP errors) and
//! the exponential backoff decision live here so the engine stays a plain
//! loop. The sleep function is injected so the policy is testable with a
//! recorded clock.

mod classify;
mod policy;
mod run;

pub use classify::classify;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
