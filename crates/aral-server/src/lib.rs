//! HTTP server for the aral lesson planner.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - API endpoints for lesson plan generation
//! - Static files for the lesson form frontend
//!
//! # Static Asset Modes
//!
//! This server supports two modes for serving static assets:
//!
//! - **Development** (default): Serves files from the `frontend/` directory
//! - **Production** (`embed` feature of `aral-assets`): Embeds assets in the binary
//!
//! # Quick Start
//!
//! ```ignore
//! use aral_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 3000,
//!         api_key: Some("sk-...".to_string()),
//!         model_id: "Qwen/Qwen3-0.6B".to_string(),
//!         base_url: "https://api.bytez.com/models/v2".to_string(),
//!         html_passthrough: "trusted".to_string(),
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (aral-server)
//!                        │
//!                        ├─► POST /api/generate-lesson
//!                        │       │
//!                        │       ├─► Model client ──► Inference API
//!                        │       └─► Table renderer (markdown table to HTML)
//!                        │
//!                        └─► Static files (embedded or filesystem)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use aral_model::{BytezClient, ModelClient};
use aral_renderer::{HtmlPassthrough, TableRenderer};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Inference API key (`None` disables generation).
    pub api_key: Option<String>,
    /// Model identifier.
    pub model_id: String,
    /// Inference API base URL.
    pub base_url: String,
    /// Policy name for model-supplied HTML ("trusted" or "sanitized").
    pub html_passthrough: String,
    /// Application version (reported by the health endpoint).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_key: None,
            model_id: "Qwen/Qwen3-0.6B".to_string(),
            base_url: "https://api.bytez.com/models/v2".to_string(),
            html_passthrough: "trusted".to_string(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create the model client if an API key is available. The server still
    // starts without one so the form and health endpoint stay reachable.
    let model: Option<Arc<dyn ModelClient>> = match config.api_key.as_deref() {
        Some(key) if !key.is_empty() => Some(Arc::new(BytezClient::from_config(
            key,
            &config.model_id,
            &config.base_url,
        ))),
        _ => {
            tracing::warn!("No model API key configured, lesson generation is disabled");
            None
        }
    };

    let passthrough = HtmlPassthrough::from_name(&config.html_passthrough).unwrap_or_default();
    let renderer = TableRenderer::new().with_passthrough(passthrough);

    // Create app state
    let state = Arc::new(AppState {
        model,
        renderer,
        version: config.version.clone(),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from aral config.
///
/// # Arguments
///
/// * `config` - aral configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &aral_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        api_key: config.model.api_key.clone(),
        model_id: config.model.model_id.clone(),
        base_url: config.model.base_url.clone(),
        html_passthrough: config.model.html_passthrough.clone(),
        version,
    }
}
