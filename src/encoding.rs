//! Character encoding detection for raw page bytes.
//!
//! The site serves UTF-8, but hosts sometimes hand over bytes from caches or
//! proxies that re-encode to GBK or Big5. Detection honours a byte-order mark
//! first, then a `<meta>` charset declaration, then falls back to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` or the `charset=` inside a Content-Type meta
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("valid regex")
});

/// Bytes examined for a meta declaration.
const SNIFF_LEN: usize = 1024;

/// Detect character encoding from HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared in a `<meta>` tag, if any.
fn declared_charset(head: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD; this never fails.
///
/// ```
/// use rs_mikan::encoding::transcode_to_utf8;
///
/// let html = "<html><body>星期一</body></html>".as_bytes();
/// assert!(transcode_to_utf8(html).contains("星期一"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    // decode() strips a matching BOM itself
    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
