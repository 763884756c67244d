// Scan endpoint OpenAPI documentation

use serde_json::json;

/// Scan endpoint definition
pub fn scan_endpoint() -> serde_json::Value {
    json!({
        "post": {
            "tags": ["Scan"],
            "summary": "Scan a URL for phishing indicators",
            "description": "Runs lexical analysis plus domain age, SSL and reachability probes against the submitted URL and returns an additive risk score with a verdict. Network probes are bounded, so a scan always completes even when the target is down.",
            "operationId": "scanUrl",
            "requestBody": {
                "required": true,
                "content": {
                    "application/json": {
                        "schema": {
                            "$ref": "#/components/schemas/ScanRequest"
                        },
                        "example": {
                            "url": "https://secure-login-verify.example.com/account"
                        }
                    }
                }
            },
            "responses": {
                "200": {
                    "description": "Scan completed",
                    "content": {
                        "application/json": {
                            "schema": {
                                "$ref": "#/components/schemas/RiskReport"
                            },
                            "example": {
                                "url": "https://secure-login-verify.example.com/account",
                                "status": "suspicious",
                                "risk_level": "medium",
                                "risk_score": 3,
                                "factors": {
                                    "url_analysis": {
                                        "score": 3,
                                        "suspicious_keywords": ["login", "verify", "secure"],
                                        "url_length": 47,
                                        "has_at_symbol": false,
                                        "has_hyphens": false,
                                        "multiple_subdomains": false,
                                        "comment": "No suspicious patterns detected"
                                    },
                                    "domain_age": {
                                        "score": 0,
                                        "age_days": 5840,
                                        "status": "established",
                                        "comment": "Established domain (5840 days old)"
                                    },
                                    "ssl": {
                                        "score": 0,
                                        "status": "secure",
                                        "uses_https": true,
                                        "reachable": true,
                                        "http_status": 200,
                                        "comment": "Uses HTTPS (secure)"
                                    },
                                    "reachability": {
                                        "score": 0,
                                        "status": "ok",
                                        "reachable": true,
                                        "status_code": 200,
                                        "comment": "Website is reachable"
                                    }
                                },
                                "scanned_at": "2025-06-01T12:00:00Z",
                                "scan_duration_ms": 412
                            }
                        }
                    }
                },
                "400": {
                    "description": "Bad request - URL missing or empty",
                    "content": {
                        "application/json": {
                            "schema": {
                                "$ref": "#/components/schemas/ScanError"
                            },
                            "example": {
                                "error": "URL is required",
                                "status": 400
                            }
                        }
                    }
                },
                "500": {
                    "description": "Internal error while processing the URL",
                    "content": {
                        "application/json": {
                            "schema": {
                                "$ref": "#/components/schemas/ScanError"
                            },
                            "example": {
                                "error": "Error processing URL: probe task panicked",
                                "status": 500
                            }
                        }
                    }
                }
            }
        }
    })
}
