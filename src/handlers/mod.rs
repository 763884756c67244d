// HTTP handlers for the scanning API

pub mod docs; // Modular documentation structure
pub mod scan;

use crate::app::AppState;
use axum::{
    routing::{get, post},
    Router,
};

// Scan routes
pub fn scan_routes() -> Router<AppState> {
    Router::new().route("/scan", post(scan::scan_url))
}

// Documentation routes
pub fn docs_routes() -> Router<AppState> {
    Router::new()
        .route("/docs", get(docs::redirect_to_docs))
        .route("/docs/", get(docs::serve_swagger_ui))
        .route("/docs/openapi.json", get(docs::serve_openapi_spec))
}
