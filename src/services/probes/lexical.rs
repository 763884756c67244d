// Lexical URL analysis
// Pure string heuristics over the submitted URL; no network I/O

use crate::models::UrlAnalysis;
use crate::utils::ScanTarget;

/// Keywords phishing URLs lean on to look legitimate
const SUSPICIOUS_KEYWORDS: [&str; 8] = [
    "login", "verify", "bank", "secure", "update", "free", "password", "confirm",
];

const LONG_URL_THRESHOLD: usize = 75;
const HYPHEN_THRESHOLD: usize = 3;
const DOT_THRESHOLD: usize = 3;

/// Score the URL string itself. Additive: every matched condition
/// contributes independently. Cannot fail; garbage input scores low.
pub fn analyze(target: &ScanTarget) -> UrlAnalysis {
    let url = &target.raw;
    let url_lower = url.to_lowercase();
    let mut score = 0u8;

    // 1. Keyword hits, one point each
    let mut suspicious_keywords = Vec::new();
    for keyword in SUSPICIOUS_KEYWORDS {
        if url_lower.contains(keyword) {
            suspicious_keywords.push(keyword.to_string());
            score += 1;
        }
    }

    // 2. Overall length
    let url_length = url.chars().count();
    let long_url = url_length > LONG_URL_THRESHOLD;
    if long_url {
        score += 1;
    }

    // 3. Embedded @ hides the real destination behind fake userinfo
    let has_at_symbol = url.contains('@');
    if has_at_symbol {
        score += 2;
    }

    // 4. Hyphen stuffing
    let has_hyphens = url.matches('-').count() > HYPHEN_THRESHOLD;
    if has_hyphens {
        score += 1;
    }

    // 5. Subdomain nesting. Only counts when a domain label was
    //    extractable and still appears verbatim in the URL, so IP hosts
    //    and punycode domains slip past this check.
    let multiple_subdomains = url.matches('.').count() > DOT_THRESHOLD
        && target
            .domain_label
            .as_deref()
            .map(|label| !label.is_empty() && url.contains(label))
            .unwrap_or(false);
    if multiple_subdomains {
        score += 1;
    }

    // Keyword hits never drive the summary line
    let comment = if has_at_symbol {
        "URL contains @ symbol (suspicious)"
    } else if has_hyphens {
        "Multiple hyphens in domain (suspicious)"
    } else if multiple_subdomains {
        "Multiple subdomains detected"
    } else if long_url {
        "Long URL detected"
    } else {
        "No suspicious patterns detected"
    };

    UrlAnalysis {
        score,
        suspicious_keywords,
        url_length,
        has_at_symbol,
        has_hyphens,
        multiple_subdomains,
        comment: comment.to_string(),
    }
}
