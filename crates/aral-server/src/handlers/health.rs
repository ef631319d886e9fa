//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /health.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status, always "ok" when the server answers.
    status: &'static str,
    /// Application version.
    version: String,
}

/// Handle GET /health.
pub(crate) async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: state.version.clone(),
    })
}
