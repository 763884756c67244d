// API Documentation handlers - modular structure
pub mod health;
pub mod scan;
pub mod schemas;
pub mod swagger_ui;

use crate::app::AppState;
use crate::app_config::AppConfig;
use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{self, json};

/// Serve OpenAPI JSON specification at /v1/docs/openapi.json
pub async fn serve_openapi_spec(State(app_state): State<AppState>) -> Response {
    let spec = build_openapi_spec(app_state.config.as_ref());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(&spec).unwrap_or_default(),
    )
        .into_response()
}

/// Redirect /docs to /docs/ for proper relative path resolution
pub async fn redirect_to_docs(original_uri: OriginalUri) -> impl IntoResponse {
    let mut path = original_uri.0.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, path)]).into_response()
}

/// Re-export swagger UI handler
pub use swagger_ui::serve_swagger_ui;

/// Build the complete OpenAPI specification
pub fn build_openapi_spec(config: &AppConfig) -> serde_json::Value {
    // Determine the API base URL from environment
    let api_url = std::env::var("PUBLIC_API_URL")
        .unwrap_or_else(|_| format!("http://localhost:{}", config.port));

    let servers = vec![json!({
        "url": api_url,
        "description": format!("Current server ({})", config.environment)
    })];

    serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": "PhishScan API",
            "description": "URL phishing scanner grading links by lexical patterns, domain age, SSL posture and reachability",
            "version": "1.0.0"
        },
        "servers": servers,
        "tags": [
            {
                "name": "Scan",
                "description": "URL risk scanning operations"
            },
            {
                "name": "Health",
                "description": "Service health checks"
            }
        ],
        "paths": {
            "/v1/scan": scan::scan_endpoint(),
            "/v1/health": health::health_endpoint(),
        },
        "components": {
            "schemas": schemas::all_schemas()
        }
    })
}
