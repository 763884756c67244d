// Scan orchestration
// Fans the three network probes out concurrently, joins, sums the four
// probe scores, and classifies against fixed thresholds

use crate::app_config::AppConfig;
use crate::models::{
    DomainAgeCheck, ReachabilityCheck, RiskLevel, RiskReport, ScanFactors, TransportCheck, Verdict,
};
use crate::services::probes::{self, DomainAgeProber, ReachabilityProber, TransportProber};
use crate::utils::{ScanError, ScanTarget};
use chrono::Utc;
use std::time::{Duration, Instant};
use tracing::info;

// Classification thresholds over the summed probe scores
const PHISHING_THRESHOLD: u32 = 4;
const SUSPICIOUS_THRESHOLD: u32 = 2;

pub struct ScanService {
    domain_age: DomainAgeProber,
    transport: TransportProber,
    reachability: ReachabilityProber,
    probe_timeout: Duration,
}

impl ScanService {
    pub fn new(config: &AppConfig) -> Self {
        let timeout = Duration::from_secs(config.scanner.probe_timeout_secs);
        let user_agent = &config.scanner.user_agent;

        Self {
            domain_age: DomainAgeProber::new(&config.scanner.rdap_base_url, timeout, user_agent),
            transport: TransportProber::new(timeout, user_agent),
            reachability: ReachabilityProber::new(timeout, user_agent),
            probe_timeout: timeout,
        }
    }

    /// Run one full scan. The only error is a missing URL; every probe
    /// fault is absorbed into that probe's result, so a report is
    /// produced even when all three network probes fail.
    pub async fn scan(&self, url: &str) -> Result<RiskReport, ScanError> {
        let start_time = Instant::now();

        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ScanError::MissingUrl);
        }

        let target = ScanTarget::from_input(trimmed);

        // Lexical analysis is synchronous and instantaneous
        let url_analysis = probes::lexical::analyze(&target);

        // The network probes have no data dependency on each other. Each
        // carries its own timeout, so one slow probe cannot hold up the
        // others past its bound.
        let (domain_age, ssl, reachability) = tokio::join!(
            self.domain_age_bounded(&target),
            self.transport_bounded(&target),
            self.reachability_bounded(&target),
        );

        let risk_score = u32::from(url_analysis.score)
            + u32::from(domain_age.score)
            + u32::from(ssl.score)
            + u32::from(reachability.score);
        let (verdict, risk_level) = classify(risk_score);

        info!(
            "Scanned {} in {}ms: score {} -> {}",
            target.raw,
            start_time.elapsed().as_millis(),
            risk_score,
            verdict
        );

        Ok(RiskReport {
            url: target.raw,
            status: verdict,
            risk_level,
            risk_score,
            factors: ScanFactors {
                url_analysis,
                domain_age,
                ssl,
                reachability,
            },
            scanned_at: Utc::now(),
            scan_duration_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    // The probers enforce the same bound on their HTTP clients; the
    // wrappers keep a hung probe from ever stalling the join

    async fn domain_age_bounded(&self, target: &ScanTarget) -> DomainAgeCheck {
        match tokio::time::timeout(self.probe_timeout, self.domain_age.check(target)).await {
            Ok(result) => result,
            Err(_) => DomainAgeCheck::lookup_error("Could not check domain age: lookup timed out"),
        }
    }

    async fn transport_bounded(&self, target: &ScanTarget) -> TransportCheck {
        match tokio::time::timeout(self.probe_timeout, self.transport.check(target)).await {
            Ok(result) => result,
            Err(_) => TransportCheck::unreachable(),
        }
    }

    async fn reachability_bounded(&self, target: &ScanTarget) -> ReachabilityCheck {
        match tokio::time::timeout(self.probe_timeout, self.reachability.check(target)).await {
            Ok(result) => result,
            Err(_) => ReachabilityCheck::timed_out(),
        }
    }
}

/// Pure classification over the summed score. The thresholds are fixed
/// constants, not tunable per call.
pub fn classify(total_score: u32) -> (Verdict, RiskLevel) {
    match total_score {
        s if s >= PHISHING_THRESHOLD => (Verdict::Phishing, RiskLevel::High),
        s if s >= SUSPICIOUS_THRESHOLD => (Verdict::Suspicious, RiskLevel::Medium),
        _ => (Verdict::Safe, RiskLevel::Low),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::{Environment, ScannerConfig, ServerConfig};
    use crate::models::{AgeStatus, ReachabilityStatus, TransportStatus};

    fn local_only_config() -> AppConfig {
        // Everything points at closed local ports so no probe leaves the
        // machine and every network path fails fast
        AppConfig {
            bind_address: "127.0.0.1:0".to_string(),
            port: 0,
            environment: Environment::Test,
            rust_log: "info".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            server: ServerConfig {
                bind_address: "127.0.0.1:0".to_string(),
                port: 0,
                environment: Environment::Test,
                rust_log: "info".to_string(),
            },
            scanner: ScannerConfig {
                probe_timeout_secs: 2,
                user_agent: "PhishScan-Test/1.0".to_string(),
                rdap_base_url: "https://127.0.0.1:1".to_string(),
            },
        }
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(0), (Verdict::Safe, RiskLevel::Low));
        assert_eq!(classify(1), (Verdict::Safe, RiskLevel::Low));
        assert_eq!(classify(2), (Verdict::Suspicious, RiskLevel::Medium));
        assert_eq!(classify(3), (Verdict::Suspicious, RiskLevel::Medium));
        assert_eq!(classify(4), (Verdict::Phishing, RiskLevel::High));
        assert_eq!(classify(11), (Verdict::Phishing, RiskLevel::High));
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected_before_probing() {
        let service = ScanService::new(&local_only_config());

        let result = service.scan("").await;
        assert!(matches!(result, Err(ScanError::MissingUrl)));

        let result = service.scan("   ").await;
        assert!(matches!(result, Err(ScanError::MissingUrl)));
    }

    #[tokio::test]
    async fn test_report_is_produced_when_every_network_probe_fails() {
        let service = ScanService::new(&local_only_config());
        let report = service
            .scan("http://127.0.0.1:1/login")
            .await
            .expect("scan must complete");

        // Lexical: one keyword. Age: IP host has no registrable domain.
        // Transport: explicit http. Reachability: connection refused.
        assert_eq!(report.factors.url_analysis.score, 1);
        assert_eq!(report.factors.domain_age.status, AgeStatus::Error);
        assert_eq!(report.factors.ssl.status, TransportStatus::Insecure);
        assert_eq!(
            report.factors.reachability.status,
            ReachabilityStatus::Error
        );

        assert_eq!(report.risk_score, 5);
        assert_eq!(report.status, Verdict::Phishing);
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_risk_score_equals_factor_sum() {
        let service = ScanService::new(&local_only_config());
        let report = service
            .scan("https://127.0.0.1:1/bank")
            .await
            .expect("scan must complete");

        assert_eq!(report.risk_score, report.factor_total());
    }

    #[tokio::test]
    async fn test_report_echoes_trimmed_url() {
        let service = ScanService::new(&local_only_config());
        let report = service
            .scan("  http://127.0.0.1:1/page  ")
            .await
            .expect("scan must complete");

        assert_eq!(report.url, "http://127.0.0.1:1/page");
    }
}
