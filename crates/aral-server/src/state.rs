//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use aral_model::ModelClient;
use aral_renderer::TableRenderer;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Model client for lesson generation (`None` when no API key is set).
    pub(crate) model: Option<Arc<dyn ModelClient>>,
    /// Renderer that turns model output into an HTML table.
    pub(crate) renderer: TableRenderer,
    /// Application version (reported by the health endpoint).
    pub(crate) version: String,
}
