// Library exports for PhishScan
// This file exposes modules and functions for library consumers

pub mod app;
pub mod app_config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use app::AppState;
pub use app_config::{AppConfig, CONFIG};
pub use models::{
    AgeStatus, DomainAgeCheck, ReachabilityCheck, ReachabilityStatus, RiskLevel, RiskReport,
    ScanFactors, TransportCheck, TransportStatus, UrlAnalysis, Verdict,
};
pub use services::{classify, ScanService};
pub use utils::{ScanError, ScanTarget};

// Re-export handler route builders
pub use handlers::{docs_routes, scan_routes};

// Build the full application router (shared by main and the integration tests)
pub fn build_router(state: AppState) -> axum::Router {
    use axum::routing::get;

    axum::Router::new()
        .nest("/v1", handlers::scan_routes())
        .nest("/v1", handlers::docs_routes())
        .route("/v1/health", get(health_check))
        .with_state(state)
}

// Health check handler
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    use axum::http::StatusCode;
    use axum::Json;

    let timestamp = chrono::Utc::now().to_rfc3339();

    let response = serde_json::json!({
        "status": "healthy",
        "service": "phishscan-core",
        "timestamp": timestamp,
        "components": {
            "scanner": {
                "status": "healthy",
                "probe_timeout_secs": state.config.scanner.probe_timeout_secs,
                "rdap_base_url": state.config.scanner.rdap_base_url
            }
        }
    });

    (StatusCode::OK, Json(response))
}
