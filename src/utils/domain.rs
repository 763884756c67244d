// Scan target extraction
// Builds the per-scan view of a URL: trimmed raw string, scheme-defaulted
// request URL, host, and registrable domain via the public suffix list

use url::Url;

/// Everything the probes need to know about one submitted URL.
/// Built once per scan and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    /// Trimmed input exactly as the lexical rules score it
    pub raw: String,
    /// URL the network probes fetch; secure scheme assumed when none given
    pub request_url: String,
    pub host: Option<String>,
    /// Domain label plus public suffix, e.g. `example.com` for `login.example.com`
    pub registrable_domain: Option<String>,
    /// Bare domain label, e.g. `example`
    pub domain_label: Option<String>,
}

impl ScanTarget {
    pub fn from_input(input: &str) -> Self {
        let raw = input.trim().to_string();
        let request_url = ensure_scheme(&raw);
        let host = extract_host(&request_url);
        let registrable_domain = host.as_deref().and_then(registrable_domain);
        let domain_label = registrable_domain
            .as_deref()
            .map(|domain| domain.split('.').next().unwrap_or(domain).to_string());

        Self {
            raw,
            request_url,
            host,
            registrable_domain,
            domain_label,
        }
    }

    /// True when the caller explicitly asked for plain HTTP
    pub fn is_explicit_http(&self) -> bool {
        self.request_url.starts_with("http://")
    }
}

/// Exact prefix check; anything without a scheme is probed over HTTPS
fn ensure_scheme(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

fn extract_host(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()))
}

/// Registrable domain per the public suffix list, `None` for IP hosts.
/// The suffix list's fallback rule would otherwise hand back the tail of
/// a dotted IP as if it were a domain.
pub fn registrable_domain(host: &str) -> Option<String> {
    let bare = host.trim_matches(|c| c == '[' || c == ']');
    if bare.parse::<std::net::IpAddr>().is_ok() {
        return None;
    }
    psl::domain_str(host).map(|domain| domain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_defaulting() {
        let target = ScanTarget::from_input("example.com/path");
        assert_eq!(target.request_url, "https://example.com/path");
        assert_eq!(target.raw, "example.com/path");

        let target = ScanTarget::from_input("http://example.com");
        assert_eq!(target.request_url, "http://example.com");
        assert!(target.is_explicit_http());
    }

    #[test]
    fn test_scheme_check_is_case_sensitive() {
        // Uppercase schemes are not recognized and get the secure prefix
        let target = ScanTarget::from_input("HTTP://example.com");
        assert_eq!(target.request_url, "https://HTTP://example.com");
        assert!(!target.is_explicit_http());
    }

    #[test]
    fn test_input_is_trimmed() {
        let target = ScanTarget::from_input("  https://example.com  ");
        assert_eq!(target.raw, "https://example.com");
        assert_eq!(target.request_url, "https://example.com");
    }

    #[test]
    fn test_host_and_registrable_domain() {
        let target = ScanTarget::from_input("https://login.bank.example.com/verify");
        assert_eq!(target.host.as_deref(), Some("login.bank.example.com"));
        assert_eq!(target.registrable_domain.as_deref(), Some("example.com"));
        assert_eq!(target.domain_label.as_deref(), Some("example"));
    }

    #[test]
    fn test_multi_label_public_suffix() {
        let target = ScanTarget::from_input("https://news.example.co.uk");
        assert_eq!(target.registrable_domain.as_deref(), Some("example.co.uk"));
        assert_eq!(target.domain_label.as_deref(), Some("example"));
    }

    #[test]
    fn test_ip_host_has_no_registrable_domain() {
        let target = ScanTarget::from_input("http://192.168.10.20/login");
        assert_eq!(target.host.as_deref(), Some("192.168.10.20"));
        assert!(target.registrable_domain.is_none());
        assert!(target.domain_label.is_none());

        let target = ScanTarget::from_input("https://[2001:db8::1]/login");
        assert!(target.registrable_domain.is_none());
    }

    #[test]
    fn test_unparseable_input_yields_no_host() {
        let target = ScanTarget::from_input("not a url at all");
        assert!(target.host.is_none());
        assert!(target.registrable_domain.is_none());
    }

    #[test]
    fn test_empty_input() {
        let target = ScanTarget::from_input("   ");
        assert_eq!(target.raw, "");
        assert!(target.host.is_none());
    }
}
