// RDAP registration-data client
// Looks up domain registration metadata over the RDAP JSON protocol
// (https://rdap.org bootstraps to the authoritative registry by default)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, Error)]
pub enum RdapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Domain not found in registry")]
    NotFound,

    #[error("Registry returned status {0}")]
    UnexpectedStatus(u16),
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Subset of the RDAP domain object we care about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdapDomain {
    #[serde(rename = "ldhName", default)]
    pub ldh_name: Option<String>,

    #[serde(default)]
    pub events: Vec<RdapEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdapEvent {
    #[serde(rename = "eventAction")]
    pub event_action: String,

    // Kept as a string; registries are inconsistent enough that date
    // parsing failures must not invalidate the whole response
    #[serde(rename = "eventDate", default)]
    pub event_date: Option<String>,
}

impl RdapDomain {
    /// Earliest registration event date, if any parses.
    /// Multi-record registries can report several; the earliest wins.
    pub fn registration_date(&self) -> Option<DateTime<Utc>> {
        self.events
            .iter()
            .filter(|event| event.event_action == "registration")
            .filter_map(|event| event.event_date.as_deref())
            .filter_map(|date| DateTime::parse_from_rfc3339(date).ok())
            .map(|date| date.with_timezone(&Utc))
            .min()
    }
}

// =============================================================================
// RDAP CLIENT
// =============================================================================

pub struct RdapClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RdapClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the RDAP record for a registrable domain
    pub async fn lookup(&self, domain: &str) -> Result<RdapDomain, RdapError> {
        let lookup_url = format!("{}/domain/{}", self.base_url, domain);
        debug!("RDAP lookup for {} via {}", domain, lookup_url);

        let response = self
            .http_client
            .get(&lookup_url)
            .header(reqwest::header::ACCEPT, "application/rdap+json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let record = response.json::<RdapDomain>().await?;
            return Ok(record);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RdapError::NotFound);
        }

        Err(RdapError::UnexpectedStatus(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "objectClassName": "domain",
        "ldhName": "example.com",
        "events": [
            {"eventAction": "registration", "eventDate": "1995-08-14T04:00:00Z"},
            {"eventAction": "expiration", "eventDate": "2026-08-13T04:00:00Z"},
            {"eventAction": "last changed", "eventDate": "2024-08-14T07:01:31Z"}
        ]
    }"#;

    #[test]
    fn test_parses_registry_response() {
        let record: RdapDomain = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        assert_eq!(record.ldh_name.as_deref(), Some("example.com"));
        assert_eq!(record.events.len(), 3);

        let registered = record.registration_date().unwrap();
        assert_eq!(registered.to_rfc3339(), "1995-08-14T04:00:00+00:00");
    }

    #[test]
    fn test_earliest_of_multiple_registration_events() {
        let json = r#"{
            "events": [
                {"eventAction": "registration", "eventDate": "2010-01-01T00:00:00Z"},
                {"eventAction": "registration", "eventDate": "2003-06-15T12:00:00Z"}
            ]
        }"#;
        let record: RdapDomain = serde_json::from_str(json).unwrap();
        let registered = record.registration_date().unwrap();
        assert_eq!(registered.to_rfc3339(), "2003-06-15T12:00:00+00:00");
    }

    #[test]
    fn test_no_registration_event() {
        let json = r#"{"events": [{"eventAction": "expiration", "eventDate": "2026-01-01T00:00:00Z"}]}"#;
        let record: RdapDomain = serde_json::from_str(json).unwrap();
        assert!(record.registration_date().is_none());

        let empty: RdapDomain = serde_json::from_str("{}").unwrap();
        assert!(empty.registration_date().is_none());
    }

    #[test]
    fn test_unparseable_event_date_is_skipped() {
        let json = r#"{
            "events": [
                {"eventAction": "registration", "eventDate": "not-a-date"},
                {"eventAction": "registration", "eventDate": "2012-03-01T00:00:00+02:00"}
            ]
        }"#;
        let record: RdapDomain = serde_json::from_str(json).unwrap();
        let registered = record.registration_date().unwrap();
        assert_eq!(registered.to_rfc3339(), "2012-02-29T22:00:00+00:00");
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = RdapClient::new("https://rdap.org/", Duration::from_secs(5), "test-agent");
        assert_eq!(client.base_url, "https://rdap.org");
    }
}
