// OpenAPI schema definitions

use serde_json::json;
use utoipa::OpenApi;

// Import utoipa-generated schemas for the scan operation
use crate::handlers::scan::ScanRequest;
use crate::models::report::{
    AgeStatus, DomainAgeCheck, ReachabilityCheck, ReachabilityStatus, RiskLevel, RiskReport,
    ScanFactors, TransportCheck, TransportStatus, UrlAnalysis, Verdict,
};

/// Define utoipa OpenAPI document for the scan operation
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::scan::scan_url),
    components(
        schemas(
            ScanRequest,
            RiskReport,
            ScanFactors,
            UrlAnalysis,
            DomainAgeCheck,
            TransportCheck,
            ReachabilityCheck,
            Verdict,
            RiskLevel,
            AgeStatus,
            TransportStatus,
            ReachabilityStatus,
        )
    ),
    tags(
        (name = "Scan", description = "URL risk scanning endpoints")
    )
)]
struct ScanApiDoc;

/// Return all schema definitions including utoipa-generated ones
pub fn all_schemas() -> serde_json::Value {
    let mut schemas = json!({
        "ScanError": scan_error_schema(),
    });

    // Merge utoipa-generated schemas for the scan operation
    let openapi = ScanApiDoc::openapi();
    if let Some(components) = openapi.components {
        if let serde_json::Value::Object(ref mut map) = schemas {
            for (key, schema) in components.schemas {
                map.insert(key, serde_json::to_value(schema).unwrap_or_default());
            }
        }
    }

    schemas
}

fn scan_error_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["error", "status"],
        "properties": {
            "error": {
                "type": "string",
                "description": "Human-readable error message"
            },
            "status": {
                "type": "integer",
                "description": "HTTP status code mirrored into the body"
            }
        }
    })
}
