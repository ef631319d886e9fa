//! Static file serving.
//!
//! Serves the lesson form frontend. Uses `aral-assets` for asset retrieval
//! in both embedded and filesystem modes.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Create router for static file serving.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

/// Serve a static asset, mapping the root path to `index.html`.
async fn serve_asset(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    let file_path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = aral_assets::get(file_path) {
        let mime = aral_assets::mime_for(file_path);
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .body(Body::from(content.into_owned()))
            .unwrap();
    }

    StatusCode::NOT_FOUND.into_response()
}
