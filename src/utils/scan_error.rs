// Scan API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("URL is required")]
    MissingUrl,

    #[error("{0}")]
    ValidationError(String),

    #[error("Error processing URL: {0}")]
    Internal(String),
}

impl ScanError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScanError::MissingUrl => StatusCode::BAD_REQUEST,
            ScanError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ScanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScanError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

// Conversion from request validation failures
impl From<validator::ValidationErrors> for ScanError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .map(|e| e.message.as_ref().unwrap_or(&e.code).to_string())
            })
            .collect();

        ScanError::ValidationError(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_client_error() {
        assert_eq!(ScanError::MissingUrl.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ScanError::MissingUrl.to_string(), "URL is required");
    }

    #[test]
    fn test_internal_is_server_error() {
        let error = ScanError::Internal("probe task panicked".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Error processing URL: probe task panicked");
    }
}
