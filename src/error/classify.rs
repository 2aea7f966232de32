//! Classify raw failures into the typed client-error taxonomy.
//!
//! Called exactly once, at the boundary where the raw failure is first
//! observed. Intermediate layers pass the resulting [`ClientError`] through
//! unchanged.

use super::ClientError;
use std::io;

/// Classify an I/O failure from the transport layer.
pub fn classify_io_error(e: &io::Error) -> ClientError {
    let message = Some(e.to_string());
    match e.kind() {
        io::ErrorKind::ConnectionRefused => ClientError::ConnectionRefused(message),
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::TimedOut
        | io::ErrorKind::UnexpectedEof => ClientError::Connection(message),
        io::ErrorKind::Interrupted => ClientError::Canceled(message),
        io::ErrorKind::InvalidData => ClientError::BadResponse(message),
        io::ErrorKind::InvalidInput => ClientError::Validation(message),
        _ => ClientError::Unknown(message),
    }
}

/// Classify an HTTP status from a response body the SDK did not expect.
pub fn classify_http_status(code: u16) -> ClientError {
    let message = Some(format!("HTTP {code}"));
    match code {
        422 => ClientError::Validation(message),
        499 => ClientError::Canceled(message),
        _ => ClientError::BadResponse(message),
    }
}
