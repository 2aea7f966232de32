//! Resilience and sanitization core for the chat client.
//!
//! Two leaf components live here: a bounded exponential-backoff retry
//! executor for fallible async operations ([`retry`]), and the typed
//! client-error taxonomy plus untrusted-text helpers that surround it
//! ([`error`], [`sanitize`], [`format`]).

pub mod config;
pub mod logging;

pub mod error;
pub mod format;
pub mod retry;
pub mod sanitize;
