// Domain registration age probe
// Young domains are the strongest single phishing signal; throwaway
// domains are often registered hours before a campaign starts

use crate::models::DomainAgeCheck;
use crate::utils::rdap_client::RdapClient;
use crate::utils::ScanTarget;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

const NEW_DOMAIN_DAYS: i64 = 30;
const RELATIVELY_NEW_DOMAIN_DAYS: i64 = 180;

pub struct DomainAgeProber {
    rdap: RdapClient,
}

impl DomainAgeProber {
    pub fn new(rdap_base_url: &str, timeout: Duration, user_agent: &str) -> Self {
        Self {
            rdap: RdapClient::new(rdap_base_url, timeout, user_agent),
        }
    }

    /// Look up the registration record and score by age.
    /// Total by construction: every failure becomes a scored result.
    pub async fn check(&self, target: &ScanTarget) -> DomainAgeCheck {
        let domain = match target.registrable_domain.as_deref() {
            Some(domain) => domain,
            None => return DomainAgeCheck::lookup_error("Could not extract domain"),
        };

        let record = match self.rdap.lookup(domain).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Registration lookup failed for {}: {}", domain, e);
                return DomainAgeCheck::lookup_error(format!("Could not check domain age: {}", e));
            },
        };

        let created = match record.registration_date() {
            Some(created) => created,
            None => return DomainAgeCheck::no_creation_date(),
        };

        let age_days = (Utc::now() - created).num_days();
        debug!("{} registered {} days ago", domain, age_days);
        score_age(age_days)
    }
}

/// The age ladder, in days. Negative ages mean clock skew or a bogus
/// future-dated registration and are treated as maximally suspicious.
fn score_age(age_days: i64) -> DomainAgeCheck {
    match age_days {
        d if d < 0 => DomainAgeCheck::future_dated(),
        d if d < NEW_DOMAIN_DAYS => DomainAgeCheck::new_domain(d),
        d if d < RELATIVELY_NEW_DOMAIN_DAYS => DomainAgeCheck::relatively_new(d),
        d => DomainAgeCheck::established(d),
    }
}
