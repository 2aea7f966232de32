//! Untrusted-text sanitization: HTML attribute escaping and bearer-token
//! validation/cleanup. All helpers are pure and synchronous; consumers call
//! them before embedding untrusted strings into markup or storage.

mod html;
mod token;

pub use html::sanitize_attribute_value;
pub use token::{is_valid_jwt, sanitize_token};
