// Centralized configuration management for PhishScan
// Load ALL env vars ONCE at startup

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Global application configuration loaded once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    // For tests, load .env file first
    #[cfg(test)]
    dotenv::dotenv().ok();

    AppConfig::from_env().expect("Failed to load configuration")
});

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    // Server
    pub bind_address: String,
    pub port: u16,
    pub environment: Environment,
    pub rust_log: String,

    // Security
    pub cors_allowed_origins: Vec<String>,

    // Nested configs
    pub server: ServerConfig,
    pub scanner: ScannerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub environment: Environment,
    pub rust_log: String,
}

/// Probe configuration for the URL scanner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Per-probe network timeout in seconds
    pub probe_timeout_secs: u64,
    /// User-Agent sent on all outbound probe requests
    pub user_agent: String,
    /// Base URL of the RDAP registration-data service
    pub rdap_base_url: String,
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Helper function to get optional env var with default
        let get_or_default = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        // Helper function to parse env var with default
        let parse_u64_or_default = |key: &str, default: &str| -> Result<u64, ConfigError> {
            get_or_default(key, default).parse().map_err(|_| {
                ConfigError::InvalidValue(key.to_string(), "not a valid u64".to_string())
            })
        };

        // Parse bind address to extract port
        let bind_address = get_or_default("BIND_ADDRESS", "127.0.0.1:8080");
        let port = bind_address
            .rsplit(':')
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let environment_str = get_or_default("ENVIRONMENT", "development");
        let environment = Environment::from(environment_str);

        let rust_log = get_or_default("RUST_LOG", "info");

        let cors_allowed_origins: Vec<String> = get_or_default("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let probe_timeout_secs = parse_u64_or_default("PROBE_TIMEOUT_SECS", "5")?;
        let user_agent = get_or_default("SCANNER_USER_AGENT", "PhishScan/1.0 (URL Safety Scanner)");
        let rdap_base_url = get_or_default("RDAP_BASE_URL", "https://rdap.org");

        let server = ServerConfig {
            bind_address: bind_address.clone(),
            port,
            environment: environment.clone(),
            rust_log: rust_log.clone(),
        };

        let scanner = ScannerConfig {
            probe_timeout_secs,
            user_agent,
            rdap_base_url,
        };

        Ok(Self {
            bind_address,
            port,
            environment,
            rust_log,
            cors_allowed_origins,
            server,
            scanner,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Check if running in test environment
    pub fn is_test(&self) -> bool {
        self.environment == Environment::Test
    }
}

/// Get the global configuration instance
/// This is the primary way to access configuration throughout the app
pub fn config() -> &'static AppConfig {
    &CONFIG
}
