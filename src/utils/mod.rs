// Utility modules for PhishScan

pub mod domain;
pub mod rdap_client;
pub mod scan_error;

pub use domain::{registrable_domain, ScanTarget};
pub use rdap_client::{RdapClient, RdapDomain, RdapError};
pub use scan_error::ScanError;
