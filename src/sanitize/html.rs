//! HTML attribute-value escaping.

/// Escapes a value for safe embedding in an HTML attribute.
///
/// Replaces exactly the five HTML-significant characters with their named
/// entities (`&` -> `&amp;`, `<` -> `&lt;`, `>` -> `&gt;`, `"` -> `&quot;`,
/// `'` -> `&#39;`); everything else, including non-ASCII text and
/// whitespace, passes through unchanged. `None` is treated as the empty
/// string.
///
/// Each source character is classified once in a single pass, so no
/// replacement can re-escape the output of another (no `&amp;amp;`).
pub fn sanitize_attribute_value(value: Option<&str>) -> String {
    let value = value.unwrap_or("");
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
