//! Retry and backoff policy.
//!
//! This module encapsulates the bounded exponential-backoff retry loop used
//! around fallible async operations (API calls, token refresh, uploads) so
//! that call sites share a consistent policy. The executor is deliberately
//! generic: it does not classify failures and it retries every error
//! identically until attempts are exhausted. Retryability and idempotency
//! are caller obligations.

mod policy;
mod run;

pub use policy::RetryPolicy;
pub use run::retry_with_backoff;
