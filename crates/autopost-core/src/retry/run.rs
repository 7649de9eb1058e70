//! Retry loop: run an async operation until success or policy says stop.

use super::classify::{self, StatusCode};
use super::policy::{RetryDecision, RetryPolicy};
use std::fmt::Display;
use std::future::Future;

/// Runs `f` until it succeeds or the retry policy says to stop.
///
/// On a retryable failure, suspends the current task for the backoff
/// duration then tries again. The last error is returned unchanged.
pub async fn run_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut f: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: StatusCode + Display,
{
    let mut attempt = 0u32;
    loop {
        match f().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            "{} (attempt {}/{}), retrying in {:?}",
                            e,
                            attempt + 1,
                            policy.max_attempts(),
                            d
                        );
                        tokio::time::sleep(d).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}
