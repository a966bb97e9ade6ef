//! Syntactic validation for original URLs.

use url::Url;

/// Checks that `candidate` parses as an absolute URL with scheme `http` or
/// `https`.
///
/// Syntactic validity only: no DNS lookup, no reachability check. Any parse
/// failure or other scheme yields `false`.
pub fn is_valid_absolute_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
