//! HTML entity escaping.

/// Escape `&`, `<`, and `>` for safe insertion into HTML element content.
///
/// Quotes are left alone: cell values are only ever emitted as element
/// text, never inside attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
