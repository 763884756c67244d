// Probe modules: one independent signal each

pub mod domain_age;
pub mod lexical;
pub mod reachability;
pub mod transport;

pub use domain_age::DomainAgeProber;
pub use reachability::ReachabilityProber;
pub use transport::TransportProber;
