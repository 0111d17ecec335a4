//! Text normalization helpers shared by every parser.

use std::fmt::Display;

/// Stringify any displayable value and trim surrounding whitespace.
///
/// Never fails; a `&str`, a `StrTendril`, or a number all come back as an
/// owned, trimmed `String`.
#[must_use]
pub fn trim<T: Display + ?Sized>(v: &T) -> String {
    let s = v.to_string();
    let trimmed = s.trim();
    if trimmed.len() == s.len() {
        s
    } else {
        trimmed.to_string()
    }
}

/// Trim, then map an empty result to `None`.
#[must_use]
pub fn non_empty<T: Display + ?Sized>(v: &T) -> Option<String> {
    let s = trim(v);
    (!s.is_empty()).then_some(s)
}

/// Parse the leading run of ASCII digits, ignoring anything after it.
///
/// `"12"` and `"12集"` give 12; text with no leading digit gives 0.
#[must_use]
pub fn leading_int(s: &str) -> u32 {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().unwrap_or(0)
}
