//! Typed client-error taxonomy.
//!
//! A closed set of failure kinds, each with a fixed HTTP-compatible status
//! code and an optional human-readable message. Classification happens once,
//! at the boundary where a raw failure is first observed
//! ([`classify_io_error`], [`classify_http_status`]); from then on the typed
//! error is passed up unchanged and handlers branch
//! on the variant or [`status_code`](ClientError::status_code), never on the
//! message text, which is optional and non-normative.

mod classify;

pub use classify::{classify_http_status, classify_io_error};

use thiserror::Error;

/// A classified client failure. Construction never fails; values are
/// immutable once built.
///
/// `BadResponse` and `ConnectionRefused` belong to the narrower client-SDK
/// boundary and overlap in meaning with `Connection`/`Unknown`; they stay
/// separate variants because call sites branch on either set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Client aborted an in-flight request.
    #[error("{}", .0.as_deref().unwrap_or("request canceled"))]
    Canceled(Option<String>),
    /// Transport-level failure (reset, DNS, timeout).
    #[error("{}", .0.as_deref().unwrap_or("connection error"))]
    Connection(Option<String>),
    /// Input failed schema validation.
    #[error("{}", .0.as_deref().unwrap_or("validation failed"))]
    Validation(Option<String>),
    /// Unclassified failure, catch-all.
    #[error("{}", .0.as_deref().unwrap_or("unknown error"))]
    Unknown(Option<String>),
    /// SDK received a malformed or unexpected response.
    #[error("{}", .0.as_deref().unwrap_or("bad response"))]
    BadResponse(Option<String>),
    /// SDK could not establish a connection.
    #[error("{}", .0.as_deref().unwrap_or("connection refused"))]
    ConnectionRefused(Option<String>),
}

impl ClientError {
    /// Status code fixed per kind; encodes the taxonomy's meaning and is
    /// never caller-overridable (422 always means validation failure, 499
    /// always means client-initiated cancellation).
    pub const fn status_code(&self) -> u16 {
        match self {
            ClientError::Canceled(_) => 499,
            ClientError::Validation(_) => 422,
            ClientError::Connection(_)
            | ClientError::Unknown(_)
            | ClientError::BadResponse(_)
            | ClientError::ConnectionRefused(_) => 500,
        }
    }

    /// Stable kind tag, for logging and serialized error bodies.
    pub const fn name(&self) -> &'static str {
        match self {
            ClientError::Canceled(_) => "Canceled",
            ClientError::Connection(_) => "ConnectionError",
            ClientError::Validation(_) => "ValidationError",
            ClientError::Unknown(_) => "UnknownError",
            ClientError::BadResponse(_) => "BadResponse",
            ClientError::ConnectionRefused(_) => "ConnectionRefused",
        }
    }

    /// The optional message supplied at classification time.
    pub fn message(&self) -> Option<&str> {
        match self {
            ClientError::Canceled(m)
            | ClientError::Connection(m)
            | ClientError::Validation(m)
            | ClientError::Unknown(m)
            | ClientError::BadResponse(m)
            | ClientError::ConnectionRefused(m) => m.as_deref(),
        }
    }
}
