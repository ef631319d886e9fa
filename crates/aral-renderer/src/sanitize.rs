//! Conservative tag-allowlist filter for marker-delimited HTML blocks.
//!
//! This is not a general HTML sanitizer. It handles the narrow case of
//! model-emitted table markup: allowlisted tags survive with their
//! attributes stripped, script and style elements vanish entirely, and
//! everything else is reduced to its text content.

/// Tags that survive sanitization. Table markup plus the few inline and
/// list elements models wrap cell text in.
const ALLOWED_TAGS: &[&str] = &[
    "table", "thead", "tbody", "tfoot", "tr", "th", "td", "caption", "colgroup", "col", "p", "br",
    "em", "strong", "ul", "ol", "li",
];

/// A parsed `<...>` sequence at the start of a slice.
struct ScannedTag {
    /// Lowercased element name.
    name: String,
    /// True for `</...>` close tags.
    closing: bool,
    /// Total byte length of the sequence including both angle brackets.
    len: usize,
}

/// Filter an HTML fragment through the tag allowlist.
///
/// - Allowlisted tags are re-emitted lowercased with attributes dropped.
/// - `<script>` and `<style>` elements are removed including their
///   content.
/// - Other tags are dropped; their text content is kept.
/// - A `<` that does not begin a parsable tag becomes `&lt;`.
/// - Text between tags passes through unchanged, so entity references the
///   model already encoded are preserved.
#[must_use]
pub fn sanitize_fragment(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        rest = &rest[lt..];
        match scan_tag(rest) {
            Some(tag) => {
                if matches!(tag.name.as_str(), "script" | "style") {
                    if tag.closing {
                        // Stray close tag with no matching open; drop it.
                        rest = &rest[tag.len..];
                    } else {
                        rest = skip_element(&rest[tag.len..], &tag.name);
                    }
                } else {
                    if ALLOWED_TAGS.contains(&tag.name.as_str()) {
                        out.push('<');
                        if tag.closing {
                            out.push('/');
                        }
                        out.push_str(&tag.name);
                        out.push('>');
                    }
                    rest = &rest[tag.len..];
                }
            }
            None => {
                out.push_str("&lt;");
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse the tag at the start of `s` (which begins with `<`).
///
/// Returns `None` when the bracket does not open a well-formed tag, such
/// as a missing name or an unterminated `<...` run.
fn scan_tag(s: &str) -> Option<ScannedTag> {
    let bytes = s.as_bytes();
    let closing = bytes.get(1) == Some(&b'/');
    let name_start = if closing { 2 } else { 1 };

    let mut pos = name_start;
    while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
        pos += 1;
    }
    if pos == name_start || !bytes[name_start].is_ascii_alphabetic() {
        return None;
    }

    let close_offset = s[pos..].find('>')?;
    Some(ScannedTag {
        name: s[name_start..pos].to_ascii_lowercase(),
        closing,
        len: pos + close_offset + 1,
    })
}

/// Skip past the close tag of `name`, dropping everything in between.
/// Swallows the remainder when the element is never closed.
fn skip_element<'a>(s: &'a str, name: &str) -> &'a str {
    let lowered = s.to_ascii_lowercase();
    let close = format!("</{name}");
    match lowered.find(&close) {
        Some(idx) => match s[idx..].find('>') {
            Some(gt) => &s[idx + gt + 1..],
            None => "",
        },
        None => "",
    }
}
