//! URL Utility Functions
//!
//! Helpers for turning the site's relative hrefs and image sources into
//! absolute URLs, and for cutting ids out of fixed-shape paths.

use url::Url;

/// Host used for cookies when the base URL cannot be parsed.
pub const FALLBACK_DOMAIN: &str = "mikanani.me";

/// Check if a string is a valid absolute URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Prefix a site-relative path with the base URL.
///
/// The site emits root-relative paths (`/Home/Bangumi/3141`), so this is a
/// plain concatenation. An empty path stays empty rather than collapsing to
/// the bare base URL.
#[must_use]
pub fn join_base(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    format!("{base}{path}")
}

/// Drop everything from the first `?`.
///
/// Cover images carry cache-busting query strings (`/images/x.jpg?width=400`).
#[must_use]
pub fn strip_query(s: &str) -> &str {
    s.split('?').next().unwrap_or_default().trim()
}

/// Drop everything from the first `#`.
#[must_use]
pub fn strip_fragment(s: &str) -> &str {
    s.split('#').next().unwrap_or_default()
}

/// Everything after the last `/`.
#[must_use]
pub fn last_segment(s: &str) -> &str {
    s.rsplit('/').next().unwrap_or_default()
}

/// Skip a fixed-length path prefix, counted in characters.
///
/// Used where the site's hrefs share a known prefix such as
/// `/Home/Bangumi/` (14) or `/Home/PublishGroup/` (19).
#[must_use]
pub fn skip_prefix(s: &str, len: usize) -> String {
    s.chars().skip(len).collect()
}

/// Extract the hostname used to key cookies for a base URL.
///
/// # Returns
/// * The hostname, or [`FALLBACK_DOMAIN`] if the URL is not absolute
#[must_use]
pub fn cookie_domain(url_str: &str) -> String {
    let (_, parsed) = is_absolute_url(url_str);

    parsed
        .and_then(|url| url.host_str().map(std::string::ToString::to_string))
        .unwrap_or_else(|| FALLBACK_DOMAIN.to_string())
}
