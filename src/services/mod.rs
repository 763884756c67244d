// Services module for PhishScan
// Business logic layer for the application

pub mod probes;
pub mod scanner;

// Re-export commonly used services
pub use probes::{DomainAgeProber, ReachabilityProber, TransportProber};
pub use scanner::{classify, ScanService};
