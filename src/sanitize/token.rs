//! Bearer-token structural validation and cleanup.

fn is_base64url(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Structural JWT check: exactly three dot-separated segments, the first two
/// non-empty, all three restricted to the base64url alphabet
/// (`A-Z a-z 0-9 - _`). The signature segment may be empty (unsigned
/// tokens). No decoding or signature verification happens here.
pub fn is_valid_jwt(token: &str) -> bool {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    !header.is_empty()
        && !payload.is_empty()
        && is_base64url(header)
        && is_base64url(payload)
        && is_base64url(signature)
}

/// Prepares a token for storage or display: trims surrounding whitespace,
/// then strips the HTML-significant characters so no executable markup
/// survives. A token that is already well-formed per [`is_valid_jwt`]
/// contains none of those characters and passes through unchanged.
pub fn sanitize_token(token: &str) -> String {
    token
        .trim()
        .chars()
        .filter(|c| !matches!(c, '&' | '<' | '>' | '"' | '\''))
        .collect()
}
