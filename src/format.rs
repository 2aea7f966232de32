//! Human-readable byte-count formatting.

const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Formats a byte count with binary (1024) units, rounded to at most two
/// decimals with trailing zeros dropped: `1536` -> `"1.5 kB"`, `1048576` ->
/// `"1 MB"`.
///
/// Returns the empty string for `0` and for any value under 1 KiB. Both are
/// long-standing product behavior that attachment rows depend on (a file
/// under 1 KiB renders with no size label), so they are kept as-is rather
/// than showing `"500 B"`.
pub fn file_size_for_humans(bytes: u64) -> String {
    if bytes == 0 {
        return String::new();
    }
    // Exact unit index: floor(log1024) without float log precision issues.
    let i = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1) as usize;
    if i == 0 {
        return String::new();
    }
    let scaled = bytes as f64 / 1024f64.powi(i as i32);
    let mut text = format!("{scaled:.2}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    format!("{} {}", text, UNITS[i])
}
