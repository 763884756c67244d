// Risk report models for URL scanning
// Probe results, verdicts, and the aggregate report returned by the scan API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// VERDICT & RISK LEVEL
// =============================================================================

/// Three-way classification derived from the summed risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Suspicious,
    Phishing,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Safe => write!(f, "safe"),
            Verdict::Suspicious => write!(f, "suspicious"),
            Verdict::Phishing => write!(f, "phishing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

// =============================================================================
// LEXICAL ANALYSIS RESULT
// =============================================================================

/// Result of the lexical URL inspection (no network I/O)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UrlAnalysis {
    pub score: u8,
    pub suspicious_keywords: Vec<String>,
    pub url_length: usize,
    pub has_at_symbol: bool,
    pub has_hyphens: bool,
    pub multiple_subdomains: bool,
    pub comment: String,
}

// =============================================================================
// DOMAIN AGE RESULT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgeStatus {
    Established,
    RelativelyNew,
    New,
    FutureDate,
    NoCreationDate,
    Error,
}

/// Result of the domain-registration age lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DomainAgeCheck {
    pub score: u8,
    pub age_days: i64,
    pub status: AgeStatus,
    pub comment: String,
}

impl DomainAgeCheck {
    /// No registrable domain, failed lookup, or malformed registry data
    pub fn lookup_error(reason: impl Into<String>) -> Self {
        Self {
            score: 1,
            age_days: 0,
            status: AgeStatus::Error,
            comment: reason.into(),
        }
    }

    /// Registry answered but carried no creation date
    pub fn no_creation_date() -> Self {
        Self {
            score: 1,
            age_days: 0,
            status: AgeStatus::NoCreationDate,
            comment: "Could not determine domain age".to_string(),
        }
    }

    /// Creation date lies in the future (clock skew or bogus registry data)
    pub fn future_dated() -> Self {
        Self {
            score: 2,
            age_days: 0,
            status: AgeStatus::FutureDate,
            comment: "Domain registration date is in the future".to_string(),
        }
    }

    pub fn new_domain(age_days: i64) -> Self {
        Self {
            score: 2,
            age_days,
            status: AgeStatus::New,
            comment: format!("New domain ({} days old)", age_days),
        }
    }

    pub fn relatively_new(age_days: i64) -> Self {
        Self {
            score: 1,
            age_days,
            status: AgeStatus::RelativelyNew,
            comment: format!("Relatively new domain ({} days old)", age_days),
        }
    }

    pub fn established(age_days: i64) -> Self {
        Self {
            score: 0,
            age_days,
            status: AgeStatus::Established,
            comment: format!("Established domain ({} days old)", age_days),
        }
    }
}

// =============================================================================
// TRANSPORT SECURITY RESULT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransportStatus {
    Secure,
    Insecure,
    Unreachable,
}

/// Result of the HTTPS/certificate probe
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransportCheck {
    pub score: u8,
    pub status: TransportStatus,
    pub uses_https: bool,
    pub reachable: bool,
    pub http_status: Option<u16>,
    pub comment: String,
}

impl TransportCheck {
    /// URL is explicitly plain-HTTP; no request is made
    pub fn insecure_scheme() -> Self {
        Self {
            score: 1,
            status: TransportStatus::Insecure,
            uses_https: false,
            reachable: false,
            http_status: None,
            comment: "Uses HTTP (not secure)".to_string(),
        }
    }

    /// Verified HTTPS request succeeded
    pub fn secure(http_status: u16) -> Self {
        Self {
            score: 0,
            status: TransportStatus::Secure,
            uses_https: true,
            reachable: true,
            http_status: Some(http_status),
            comment: "Uses HTTPS (secure)".to_string(),
        }
    }

    /// Site answered but its certificate failed verification
    pub fn certificate_error() -> Self {
        Self {
            score: 1,
            status: TransportStatus::Insecure,
            uses_https: false,
            reachable: true,
            http_status: None,
            comment: "SSL certificate error (suspicious)".to_string(),
        }
    }

    /// DNS failure, refused connection, or timeout on a secure attempt
    pub fn unreachable() -> Self {
        Self {
            score: 1,
            status: TransportStatus::Unreachable,
            uses_https: true,
            reachable: false,
            http_status: None,
            comment: "Could not establish secure connection".to_string(),
        }
    }

    /// Catch-all for faults outside the connection path
    pub fn probe_error(reason: impl Into<String>) -> Self {
        Self {
            score: 1,
            status: TransportStatus::Unreachable,
            uses_https: false,
            reachable: false,
            http_status: None,
            comment: reason.into(),
        }
    }
}

// =============================================================================
// REACHABILITY RESULT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReachabilityStatus {
    Ok,
    HttpError,
    Timeout,
    Error,
}

/// Result of the plain reachability probe (redirects followed)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReachabilityCheck {
    pub score: u8,
    pub status: ReachabilityStatus,
    pub reachable: bool,
    pub status_code: Option<u16>,
    pub comment: String,
}

impl ReachabilityCheck {
    pub fn ok(status_code: u16) -> Self {
        Self {
            score: 0,
            status: ReachabilityStatus::Ok,
            reachable: true,
            status_code: Some(status_code),
            comment: "Website is reachable".to_string(),
        }
    }

    /// Server answered with an error status
    pub fn http_error(status_code: u16) -> Self {
        Self {
            score: 1,
            status: ReachabilityStatus::HttpError,
            reachable: true,
            status_code: Some(status_code),
            comment: format!("Website returned error {}", status_code),
        }
    }

    /// Request exceeded the probe timeout
    pub fn timed_out() -> Self {
        Self {
            score: 2,
            status: ReachabilityStatus::Timeout,
            reachable: false,
            status_code: None,
            comment: "Connection timed out (suspicious)".to_string(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            score: 2,
            status: ReachabilityStatus::Error,
            reachable: false,
            status_code: None,
            comment: format!("Could not reach website: {}", reason.into()),
        }
    }
}

// =============================================================================
// AGGREGATE REPORT
// =============================================================================

/// The four probe results, keyed the way the scan API exposes them
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScanFactors {
    pub url_analysis: UrlAnalysis,
    pub domain_age: DomainAgeCheck,
    pub ssl: TransportCheck,
    pub reachability: ReachabilityCheck,
}

/// Full scan report returned by `POST /v1/scan`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "url": "http://secure-login-update.example.com/verify",
    "status": "phishing",
    "risk_level": "high",
    "risk_score": 6,
    "factors": {
        "url_analysis": {
            "score": 4,
            "suspicious_keywords": ["login", "verify", "secure", "update"],
            "url_length": 45,
            "has_at_symbol": false,
            "has_hyphens": false,
            "multiple_subdomains": false,
            "comment": "No suspicious patterns detected"
        },
        "domain_age": {
            "score": 1,
            "age_days": 90,
            "status": "relatively_new",
            "comment": "Relatively new domain (90 days old)"
        },
        "ssl": {
            "score": 1,
            "status": "insecure",
            "uses_https": false,
            "reachable": false,
            "http_status": null,
            "comment": "Uses HTTP (not secure)"
        },
        "reachability": {
            "score": 0,
            "status": "ok",
            "reachable": true,
            "status_code": 200,
            "comment": "Website is reachable"
        }
    },
    "scanned_at": "2025-01-01T12:00:00Z",
    "scan_duration_ms": 412
}))]
pub struct RiskReport {
    pub url: String,
    pub status: Verdict,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub factors: ScanFactors,
    pub scanned_at: DateTime<Utc>,
    pub scan_duration_ms: u64,
}

impl RiskReport {
    /// Sum of the four probe scores; always equals `risk_score`
    pub fn factor_total(&self) -> u32 {
        u32::from(self.factors.url_analysis.score)
            + u32::from(self.factors.domain_age.score)
            + u32::from(self.factors.ssl.score)
            + u32::from(self.factors.reachability.score)
    }
}
