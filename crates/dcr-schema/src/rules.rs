//! Field-level validation rules.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Pattern a software_id must match.
static SOFTWARE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9a-zA-Z]{1,22}$").expect("valid software_id pattern"));

/// Checks whether a string is a valid Open Banking URL: an absolute
/// `https` URI with no fragment whose host is not a loopback name.
#[must_use]
pub fn is_ob_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };

    if url.scheme() != "https" || url.fragment().is_some() {
        return false;
    }

    match url.host_str() {
        Some(host) => {
            host != "localhost" && host != "127.0.0.1" && !host.ends_with(".localhost")
        }
        None => false,
    }
}

/// Checks a software_id against its required pattern.
#[must_use]
pub fn is_software_id(value: &str) -> bool {
    SOFTWARE_ID_PATTERN.is_match(value)
}

/// Appends a failure when a required string field is absent or outside
/// its length bounds.
pub fn require_bounded(
    failures: &mut Vec<String>,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) {
    match value {
        None => failures.push(format!("{field}: is required")),
        Some(value) if value.len() < min || value.len() > max => {
            failures.push(format!("{field}: length must be between {min} and {max}"));
        }
        Some(_) => {}
    }
}

/// Appends a failure when an optional string field is present but outside
/// its length bounds.
pub fn optional_bounded(
    failures: &mut Vec<String>,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) {
    if let Some(value) = value {
        if value.len() < min || value.len() > max {
            failures.push(format!("{field}: length must be between {min} and {max}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ob_url_accepts_plain_https() {
        assert!(is_ob_url("https://0.0.0.0"));
        assert!(is_ob_url("https://tpp.example.com/redirect"));
    }

    #[test]
    fn ob_url_rejects_wrong_scheme() {
        assert!(!is_ob_url("http://0.0.0.0"));
        assert!(!is_ob_url("ftp://example.com"));
    }

    #[test]
    fn ob_url_rejects_loopback_hosts() {
        assert!(!is_ob_url("https://localhost"));
        assert!(!is_ob_url("https://127.0.0.1"));
        assert!(!is_ob_url("https://x.localhost"));
    }

    #[test]
    fn ob_url_rejects_fragments_and_relative_uris() {
        assert!(!is_ob_url("https://example.com/path#section"));
        assert!(!is_ob_url("/relative/path"));
        assert!(!is_ob_url("not a url"));
    }

    #[test]
    fn software_id_pattern() {
        assert!(is_software_id("abcDEF123"));
        assert!(is_software_id("a"));
        assert!(is_software_id("a".repeat(22).as_str()));
        assert!(!is_software_id(""));
        assert!(!is_software_id("a".repeat(23).as_str()));
        assert!(!is_software_id("has-dash"));
    }

    #[test]
    fn required_bounds() {
        let mut failures = Vec::new();
        require_bounded(&mut failures, "client_id", None, 1, 36);
        require_bounded(&mut failures, "scope", Some(""), 1, 256);
        require_bounded(&mut failures, "ok", Some("fine"), 1, 36);

        assert_eq!(
            failures,
            vec![
                "client_id: is required".to_string(),
                "scope: length must be between 1 and 256".to_string(),
            ]
        );
    }

    #[test]
    fn optional_bounds_ignore_absent() {
        let mut failures = Vec::new();
        optional_bounded(&mut failures, "software_id", None, 1, 22);
        assert!(failures.is_empty());

        optional_bounded(&mut failures, "alg", Some("toolong"), 1, 5);
        assert_eq!(failures.len(), 1);
    }
}
