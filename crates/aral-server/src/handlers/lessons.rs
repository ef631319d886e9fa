//! Lesson generation API endpoints.
//!
//! Handles lesson plan generation and returns JSON responses with the raw
//! model output and the rendered HTML table.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use aral_model::build_prompt;

use crate::error::ServerError;
use crate::state::AppState;

/// Request body for POST /api/generate-lesson.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateLessonRequest {
    /// Grade level (e.g., "Grade 7").
    #[serde(default)]
    grade: String,
    /// Subject (e.g., "Science").
    #[serde(default)]
    subject: String,
    /// Lesson objective.
    #[serde(default)]
    objective: String,
}

/// Response for POST /api/generate-lesson.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateLessonResponse {
    /// Raw model output, unchanged.
    raw: String,
    /// Rendered lesson table, `null` when no table could be recovered.
    html: Option<String>,
}

/// Handle POST /api/generate-lesson.
pub(crate) async fn generate_lesson(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateLessonRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let grade = request.grade.trim();
    let subject = request.subject.trim();
    let objective = request.objective.trim();

    if grade.is_empty() || subject.is_empty() || objective.is_empty() {
        return Err(ServerError::BadRequest(
            "grade, subject, and objective are required".to_string(),
        ));
    }

    let Some(model) = state.model.clone() else {
        return Err(ServerError::ModelUnavailable);
    };

    let prompt = build_prompt(grade, subject, objective);
    tracing::debug!(grade = %grade, subject = %subject, "Generating lesson plan");

    // The model client blocks on the HTTP call, so run it off the async runtime
    let result = tokio::task::spawn_blocking(move || model.generate(&prompt))
        .await
        .map_err(|err| ServerError::Internal(err.to_string()))?;

    let raw = match result {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(error = %err, "Model request failed");
            return Err(ServerError::Upstream(err));
        }
    };

    let html = state.renderer.render(&raw);

    Ok(Json(GenerateLessonResponse { raw, html }))
}

/// Handle POST /api/save-lesson.
///
/// Persistence has no backend yet. Always answers 501 so the frontend can
/// surface a useful message.
pub(crate) async fn save_lesson() -> ServerError {
    ServerError::NotImplemented(
        "Saving not configured. Add a database or storage backend to enable this feature."
            .to_string(),
    )
}
