//! Classify HTTP status codes into retry policy error kinds.

use super::policy::ErrorKind;

/// Errors that may carry the HTTP status of the failed call.
///
/// Errors without a status (transport failures, malformed bodies) report
/// `None` and are never retried.
pub trait StatusCode {
    fn status_code(&self) -> Option<u16>;
}

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Retryable,
        _ => ErrorKind::Fatal,
    }
}

/// Classify an error by its status code.
pub fn classify<E: StatusCode + ?Sized>(e: &E) -> ErrorKind {
    e.status_code()
        .map(classify_http_status)
        .unwrap_or(ErrorKind::Fatal)
}
