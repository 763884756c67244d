// Reachability probe
// Independent of the transport probe: separate client, separate timeout,
// redirects followed. Timeouts score higher than plain refusals.

use crate::models::ReachabilityCheck;
use crate::utils::ScanTarget;
use std::time::Duration;
use tracing::debug;

pub struct ReachabilityProber {
    client: reqwest::Client,
}

impl ReachabilityProber {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .unwrap_or_default();

        Self { client }
    }

    pub async fn check(&self, target: &ScanTarget) -> ReachabilityCheck {
        match self.client.get(&target.request_url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                debug!("{} answered {}", target.request_url, code);
                if code >= 400 {
                    ReachabilityCheck::http_error(code)
                } else {
                    ReachabilityCheck::ok(code)
                }
            },
            Err(e) if e.is_timeout() => ReachabilityCheck::timed_out(),
            Err(e) => ReachabilityCheck::failed(e.to_string()),
        }
    }
}
