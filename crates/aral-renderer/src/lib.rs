//! Best-effort conversion of model-generated lesson text to an HTML table.
//!
//! Model responses arrive in one of two forms: a Markdown pipe table, or a
//! pre-rendered HTML block behind a literal `---HTML---` marker. The
//! [`TableRenderer`] handles both and degrades to `None` when neither form
//! can be extracted, leaving the caller to display the raw text.
//!
//! # Example
//!
//! ```
//! use aral_renderer::TableRenderer;
//!
//! let renderer = TableRenderer::new();
//! let html = renderer.render("Part | Desc\n---|---\nDrill | Warm-up");
//! assert!(html.is_some());
//! ```

mod escape;
mod renderer;
mod sanitize;

pub use escape::escape_html;
pub use renderer::{HTML_MARKER, HtmlPassthrough, TableRenderer};
pub use sanitize::sanitize_fragment;
