// Transport security probe
// One bounded GET with certificate verification on; an invalid chain is
// signal, not an error

use crate::models::TransportCheck;
use crate::utils::ScanTarget;
use std::time::Duration;
use tracing::{debug, warn};

pub struct TransportProber {
    client: reqwest::Client,
}

impl TransportProber {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    pub async fn check(&self, target: &ScanTarget) -> TransportCheck {
        // Explicit plain HTTP is scored without touching the network
        if target.is_explicit_http() {
            return TransportCheck::insecure_scheme();
        }

        match self.client.get(&target.request_url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                debug!("{} answered {} over verified TLS", target.request_url, code);
                TransportCheck::secure(code)
            },
            Err(e) if is_certificate_error(&e) => {
                warn!("Certificate rejected for {}: {}", target.request_url, e);
                TransportCheck::certificate_error()
            },
            Err(e) if e.is_connect() || e.is_timeout() => TransportCheck::unreachable(),
            Err(e) => TransportCheck::probe_error(format!("Error checking SSL: {}", e)),
        }
    }
}

/// reqwest has no certificate-error predicate; the TLS failure only
/// shows up in the error source chain
fn is_certificate_error(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let text = cause.to_string().to_lowercase();
        if text.contains("certificate") || text.contains("self signed") {
            return true;
        }
        source = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportStatus;

    #[test]
    fn test_explicit_http_is_insecure_without_probing() {
        let target = ScanTarget::from_input("http://example.com/login");
        assert!(target.is_explicit_http());

        let check = TransportCheck::insecure_scheme();
        assert_eq!(check.status, TransportStatus::Insecure);
        assert!(!check.uses_https);
        assert!(!check.reachable);
        assert_eq!(check.comment, "Uses HTTP (not secure)");
    }

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        let prober = TransportProber::new(Duration::from_millis(200), "test-agent");
        let target = ScanTarget::from_input("https://127.0.0.1:1/");
        let result = prober.check(&target).await;

        assert_eq!(result.status, TransportStatus::Unreachable);
        assert_eq!(result.score, 1);
        assert!(result.uses_https);
        assert!(!result.reachable);
    }

    #[tokio::test]
    async fn test_scheme_less_input_probes_https() {
        let prober = TransportProber::new(Duration::from_millis(200), "test-agent");
        let target = ScanTarget::from_input("127.0.0.1:1");
        assert_eq!(target.request_url, "https://127.0.0.1:1");

        let result = prober.check(&target).await;
        assert_eq!(result.status, TransportStatus::Unreachable);
        assert!(result.uses_https);
        assert_eq!(result.score, 1);
    }
}
