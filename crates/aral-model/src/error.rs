//! Error types for model-inference operations.

/// Error from model-inference API operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// The API accepted the request but reported a generation failure.
    #[error("model error: {message}")]
    Api {
        /// Error message reported by the API.
        message: String,
    },
}
