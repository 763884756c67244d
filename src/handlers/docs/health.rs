// Health check endpoint OpenAPI documentation

use serde_json::json;

/// Health check endpoint documentation
pub fn health_endpoint() -> serde_json::Value {
    json!({
        "get": {
            "tags": ["Health"],
            "summary": "Health check endpoint",
            "description": "Returns the health status of the service and its scanner configuration",
            "operationId": "healthCheck",
            "responses": {
                "200": {
                    "description": "Service is healthy",
                    "content": {
                        "application/json": {
                            "schema": {
                                "type": "object",
                                "properties": {
                                    "status": {
                                        "type": "string",
                                        "enum": ["healthy"],
                                        "description": "Overall health status"
                                    },
                                    "service": {
                                        "type": "string",
                                        "description": "Service name"
                                    },
                                    "timestamp": {
                                        "type": "string",
                                        "format": "date-time",
                                        "description": "Health check timestamp"
                                    },
                                    "components": {
                                        "type": "object",
                                        "properties": {
                                            "scanner": {
                                                "type": "object",
                                                "properties": {
                                                    "status": {
                                                        "type": "string",
                                                        "enum": ["healthy"]
                                                    },
                                                    "probe_timeout_secs": {
                                                        "type": "integer",
                                                        "description": "Upper bound on each network probe"
                                                    },
                                                    "rdap_base_url": {
                                                        "type": "string",
                                                        "description": "Registry used for domain age lookups"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
