// Application state and configuration
use std::sync::Arc;

use crate::{app_config::AppConfig, services::ScanService};

// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scanner: Arc<ScanService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let scanner = Arc::new(ScanService::new(&config));
        AppState {
            config: Arc::new(config),
            scanner,
        }
    }
}
