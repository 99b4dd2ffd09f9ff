//! Classify fetch errors into retry policy error kinds.

use super::policy::ErrorKind;
use crate::http::HttpError;

/// Classify an [`HttpError`] for retry decisions. Timeouts, connection
/// failures, and HTTP error statuses are transient; anything else fails
/// the task on the first attempt.
pub fn classify(e: &HttpError) -> ErrorKind {
    match e {
        HttpError::Timeout => ErrorKind::Timeout,
        HttpError::Connection(_) => ErrorKind::Connection,
        HttpError::Status(code) => ErrorKind::Http(*code),
        HttpError::Other(_) => ErrorKind::Other,
    }
}
