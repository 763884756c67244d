pub mod report;

// Re-export common types
pub use report::{
    AgeStatus, DomainAgeCheck, ReachabilityCheck, ReachabilityStatus, RiskLevel, RiskReport,
    ScanFactors, TransportCheck, TransportStatus, UrlAnalysis, Verdict,
};
