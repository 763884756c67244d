// Common test utilities and helper structs
// Shared across all test files to avoid duplication

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use phishscan_core::{
    app::AppState,
    app_config::{AppConfig, Environment, ScannerConfig, ServerConfig},
    build_router,
};
use serde::Serialize;
use tower::util::ServiceExt;

/// Configuration whose network probes all point at a closed local port.
/// Scans complete quickly with deterministic failure outcomes and never
/// leave the machine.
pub fn local_test_config() -> AppConfig {
    AppConfig {
        bind_address: "127.0.0.1:0".to_string(),
        port: 0,
        environment: Environment::Test,
        rust_log: "error".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        server: ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            port: 0,
            environment: Environment::Test,
            rust_log: "error".to_string(),
        },
        scanner: ScannerConfig {
            probe_timeout_secs: 2,
            user_agent: "PhishScan/1.0 (URL Safety Scanner)".to_string(),
            rdap_base_url: "https://127.0.0.1:1".to_string(),
        },
    }
}

/// Setup test application backed by the local test configuration
pub fn setup_test_app() -> TestApp {
    TestApp {
        app: build_router(AppState::new(local_test_config())),
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Send a POST request
    pub fn post(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "POST", uri)
    }

    /// Send a GET request
    pub fn get(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "GET", uri)
    }
}

/// Test request builder
pub struct TestRequest<'a> {
    app: &'a TestApp,
    request: Request<Body>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: &str, uri: &str) -> Self {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        Self { app, request }
    }

    /// Add JSON body to request
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        let body_bytes = serde_json::to_vec(body).unwrap();
        self.request = Request::builder()
            .method(self.request.method().clone())
            .uri(self.request.uri().clone())
            .header("content-type", "application/json")
            .body(Body::from(body_bytes))
            .unwrap();
        self
    }

    /// Send the request
    pub async fn send(self) -> TestResponse {
        let response = self.app.app.clone().oneshot(self.request).await.unwrap();

        TestResponse { response }
    }
}

/// Test response wrapper
pub struct TestResponse {
    response: Response<Body>,
}

impl TestResponse {
    /// Get status code
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Get a response header as a string
    pub fn header(&self, name: &str) -> Option<String> {
        self.response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    /// Parse JSON response
    pub async fn json(self) -> serde_json::Value {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Get response body as text
    pub async fn text(self) -> String {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }
}
