//! Retry and backoff policy.
//!
//! This module encapsulates error classification (throttling, temporary
//! unavailability) and exponential backoff decisions so the provider call
//! and any future callers share a consistent policy.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_http_status, StatusCode};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
