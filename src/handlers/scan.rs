// URL scanning API endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::{app::AppState, utils::ScanError};

/// Request body for a URL scan
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ScanRequest {
    /// URL to analyze. A missing scheme defaults to https://
    #[validate(length(min = 1, message = "URL is required"))]
    #[schema(example = "https://secure-login-verify.example.com/account")]
    pub url: String,
}

/// Scan a URL and return its risk report
/// POST /v1/scan
#[utoipa::path(
    post,
    path = "/v1/scan",
    tag = "Scan",
    operation_id = "scanUrl",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Scan completed", body = RiskReport),
        (status = 400, description = "Bad request - URL missing or empty"),
        (status = 500, description = "Internal error while processing the URL")
    )
)]
pub async fn scan_url(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> impl IntoResponse {
    // Validate request
    if let Err(e) = request.validate() {
        return ScanError::from(e).into_response();
    }

    info!("Scan requested for {}", request.url);

    match state.scanner.scan(&request.url).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => e.into_response(),
    }
}
