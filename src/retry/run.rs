//! Retry loop: run an async operation until success or attempts run out.

use super::policy::RetryPolicy;
use std::future::Future;
use tokio::time::sleep;

/// Runs `operation` until it succeeds or `policy.max_attempts` attempts have
/// been made, suspending for `policy.backoff_delay(n)` after the n-th
/// failure. The suspension is non-blocking; concurrent tasks proceed.
///
/// On success the value is returned immediately with no further attempts and
/// no delay. On exhaustion the last attempt's error is returned unchanged,
/// never wrapped.
///
/// Preconditions (panics otherwise): `policy.max_attempts >= 1` and
/// `policy.factor >= 1.0`.
///
/// Caller obligations:
/// - `operation` must be safe to re-invoke; the executor cannot verify
///   idempotency.
/// - Every failure is retried identically, including
///   [`Canceled`](crate::error::ClientError::Canceled). A caller that must
///   abort on cancellation has to observe the signal inside `operation`
///   itself rather than rely on the executor giving up early.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    policy.assert_valid();

    let mut attempts_made = 0u32;
    loop {
        attempts_made += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempts_made >= policy.max_attempts {
                    return Err(err);
                }
                let delay = policy.backoff_delay(attempts_made);
                tracing::debug!(
                    attempt = attempts_made,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "attempt failed, backing off"
                );
                sleep(delay).await;
            }
        }
    }
}
