//! Table extraction and HTML rendering.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::sanitize::sanitize_fragment;

/// Literal marker separating a Markdown answer from a pre-rendered HTML
/// block in model output. Case-sensitive.
pub const HTML_MARKER: &str = "---HTML---";

/// Policy for the text following [`HTML_MARKER`].
///
/// The marker branch returns model-supplied markup directly, so the level
/// of trust placed in the upstream model is a deployment decision, not an
/// implementation detail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HtmlPassthrough {
    /// Return the block verbatim, unescaped. The upstream model is trusted
    /// to emit valid, safe markup.
    #[default]
    Trusted,
    /// Filter the block through a conservative tag allowlist before
    /// returning it. See [`sanitize_fragment`].
    Sanitized,
}

impl HtmlPassthrough {
    /// Look up a policy by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "trusted" => Some(Self::Trusted),
            "sanitized" => Some(Self::Sanitized),
            _ => None,
        }
    }
}

/// Converts raw model output into an HTML table fragment.
///
/// Two input forms are recognized, tried in order:
///
/// 1. A block behind [`HTML_MARKER`], returned according to the configured
///    [`HtmlPassthrough`] policy.
/// 2. A Markdown pipe table, located by keeping only the non-blank lines
///    that contain a `|` and rendered with every cell HTML-escaped.
///
/// All failures resolve to `None`; the renderer never panics on any input.
#[derive(Clone, Copy, Debug)]
pub struct TableRenderer {
    passthrough: HtmlPassthrough,
}

impl TableRenderer {
    /// Create a renderer with the default trusted passthrough policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            passthrough: HtmlPassthrough::Trusted,
        }
    }

    /// Set the policy applied to marker-delimited HTML blocks.
    #[must_use]
    pub fn with_passthrough(mut self, policy: HtmlPassthrough) -> Self {
        self.passthrough = policy;
        self
    }

    /// Render `text` to an HTML table fragment, or `None` when no table
    /// can be derived. The caller is expected to fall back to displaying
    /// the raw text.
    #[must_use]
    pub fn render(&self, text: &str) -> Option<String> {
        if let Some((_, block)) = text.split_once(HTML_MARKER) {
            let block = block.trim();
            return Some(match self.passthrough {
                HtmlPassthrough::Trusted => block.to_owned(),
                HtmlPassthrough::Sanitized => sanitize_fragment(block),
            });
        }
        render_markdown_table(text)
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a Markdown pipe table embedded in `text` to an HTML table.
///
/// Lines are trimmed and only those containing a `|` participate, which
/// drops surrounding prose. The first qualifying line is the header. The
/// second is discarded as the separator row only when it actually looks
/// like one; otherwise it is the first data row.
fn render_markdown_table(text: &str) -> Option<String> {
    let table_lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains('|'))
        .collect();
    if table_lines.len() < 2 {
        return None;
    }

    let header = split_cells(table_lines[0]);
    let body_start = if is_separator_row(table_lines[1]) { 2 } else { 1 };

    let mut html = String::with_capacity(text.len() + 128);
    html.push_str("<table class=\"lesson-table\">\n<thead><tr>");
    for cell in &header {
        write!(html, "<th>{}</th>", escape_html(cell)).unwrap();
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table_lines[body_start..] {
        html.push_str("<tr>");
        for cell in split_cells(row) {
            write!(html, "<td>{}</td>", escape_html(cell)).unwrap();
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    Some(html)
}

/// Split a table line on `|`, trimming each segment and dropping empty
/// ones. Dropping empties absorbs the leading and trailing pipe
/// delimiters common in Markdown tables.
fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// A separator row contains only dashes, colons, pipes, and whitespace,
/// with at least one dash. Anything else is data and must not be
/// discarded.
fn is_separator_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(text: &str) -> Option<String> {
        TableRenderer::new().render(text)
    }

    #[test]
    fn test_basic_table() {
        let html = render("Part | Desc\n---|---\nDrill | Quick recall exercise");
        assert_eq!(
            html.as_deref(),
            Some(
                "<table class=\"lesson-table\">\n\
                 <thead><tr><th>Part</th><th>Desc</th></tr></thead>\n\
                 <tbody>\n\
                 <tr><td>Drill</td><td>Quick recall exercise</td></tr>\n\
                 </tbody>\n\
                 </table>"
            )
        );
    }

    #[test]
    fn test_marker_returns_trimmed_block() {
        let html = render("Some text\n---HTML---\n<table><tr><td>x</td></tr></table>");
        assert_eq!(html.as_deref(), Some("<table><tr><td>x</td></tr></table>"));
    }

    #[test]
    fn test_marker_ignores_preceding_content() {
        let markdown_table = "A | B\n---|---\n1 | 2\n";
        let input = format!("{markdown_table}---HTML---\n<p>done</p>");
        assert_eq!(render(&input).as_deref(), Some("<p>done</p>"));
    }

    #[test]
    fn test_marker_block_is_not_escaped_when_trusted() {
        let html = render("---HTML---\n<td>5 < 6 & 7</td>");
        assert_eq!(html.as_deref(), Some("<td>5 < 6 & 7</td>"));
    }

    #[test]
    fn test_marker_block_sanitized_policy() {
        let renderer = TableRenderer::new().with_passthrough(HtmlPassthrough::Sanitized);
        let html = renderer.render("---HTML---\n<table onclick=\"x()\"><script>evil()</script><tr><td>ok</td></tr></table>");
        assert_eq!(html.as_deref(), Some("<table><tr><td>ok</td></tr></table>"));
    }

    #[test]
    fn test_no_pipes_yields_none() {
        assert_eq!(render("No table here at all"), None);
    }

    #[test]
    fn test_single_pipe_line_yields_none() {
        assert_eq!(render("only | one | line"), None);
        assert_eq!(render("prose before\nonly | one | line\nprose after"), None);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(render(""), None);
        assert_eq!(render("\n\n  \n"), None);
    }

    #[test]
    fn test_header_and_row_counts() {
        let html = render("A | B | C\n---|---|---\n1 | 2 | 3\n4 | 5 | 6\n7 | 8 | 9").unwrap();
        assert_eq!(html.matches("<th>").count(), 3);
        assert_eq!(html.matches("<tr>").count() - 1, 3);
    }

    #[test]
    fn test_separator_only_table_has_empty_body() {
        let html = render("A | B\n---|---").unwrap();
        assert!(html.contains("<tbody>\n</tbody>"));
        assert_eq!(html.matches("<th>").count(), 2);
    }

    #[test]
    fn test_cells_are_escaped() {
        let html = render("Tag | Use\n---|---\n<td> | a & b > c").unwrap();
        assert!(html.contains("<td>&lt;td&gt;</td>"));
        assert!(html.contains("<td>a &amp; b &gt; c</td>"));
    }

    #[test]
    fn test_surrounding_prose_is_dropped() {
        let html = render(
            "Here is your lesson plan:\n\nPart | Desc\n---|---\nDrill | Recall\n\nEnjoy teaching!",
        )
        .unwrap();
        assert!(!html.contains("Enjoy"));
        assert!(html.contains("<td>Drill</td>"));
    }

    #[test]
    fn test_leading_and_trailing_pipes_absorbed() {
        let html = render("| Part | Desc |\n|---|---|\n| Drill | Recall |").unwrap();
        assert_eq!(html.matches("<th>").count(), 2);
        assert!(html.contains("<td>Drill</td><td>Recall</td>"));
    }

    #[test]
    fn test_missing_separator_keeps_first_data_row() {
        let html = render("Part | Desc\nDrill | Quick recall exercise").unwrap();
        assert!(html.contains("<td>Drill</td><td>Quick recall exercise</td>"));
    }

    #[test]
    fn test_aligned_separator_is_discarded() {
        let html = render("A | B\n:--- | ---:\n1 | 2").unwrap();
        assert!(!html.contains(":---"));
        assert!(html.contains("<td>1</td><td>2</td>"));
    }

    #[test]
    fn test_determinism() {
        let input = "A | B\n---|---\n1 | 2";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn test_separator_row_detection() {
        assert!(is_separator_row("---|---"));
        assert!(is_separator_row("| :--- | ---: |"));
        assert!(is_separator_row(" - | - "));
        assert!(!is_separator_row("Drill | Recall"));
        assert!(!is_separator_row("| | |"));
        assert!(!is_separator_row("a---|---"));
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_cells("a|b|c"), vec!["a", "b", "c"]);
        assert_eq!(split_cells("|"), Vec::<&str>::new());
    }

    #[test]
    fn test_passthrough_from_name() {
        assert_eq!(
            HtmlPassthrough::from_name("trusted"),
            Some(HtmlPassthrough::Trusted)
        );
        assert_eq!(
            HtmlPassthrough::from_name("sanitized"),
            Some(HtmlPassthrough::Sanitized)
        );
        assert_eq!(HtmlPassthrough::from_name("Trusted"), None);
        assert_eq!(HtmlPassthrough::from_name(""), None);
    }
}
