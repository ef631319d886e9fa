//! Server error types.
//!
//! Every handler error is serialized as a JSON body of the form
//! `{"error": "<message>"}` with a matching HTTP status code.

use aral_model::ModelError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error type for request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request body failed validation.
    #[error("{0}")]
    BadRequest(String),
    /// Generation was requested but no model client is configured.
    #[error("Model API key not configured")]
    ModelUnavailable,
    /// Upstream model call failed.
    #[error("Model request failed: {0}")]
    Upstream(ModelError),
    /// Requested feature has no backend yet.
    #[error("{0}")]
    NotImplemented(String),
    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
