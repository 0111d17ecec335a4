//! Publish-date formatting and weekday-section naming.

use chrono::{Datelike, NaiveDateTime};

/// Layout the site uses for publish timestamps.
pub const PUBLISH_LAYOUT: &str = "%Y/%m/%d %H:%M";

/// Weekday labels indexed by days from Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

/// Section headings of the season grid, mapped to a canonical name.
///
/// Covers full Chinese weekday names, single-character Japanese weekday
/// kanji, and the theatrical/OVA sections with their short forms.
pub static WEEK_SECTION_NAMES: &[(&str, &str)] = &[
    ("星期一", "星期一"),
    ("星期二", "星期二"),
    ("星期三", "星期三"),
    ("星期四", "星期四"),
    ("星期五", "星期五"),
    ("星期六", "星期六"),
    ("星期日", "星期日"),
    ("月", "星期一"),
    ("火", "星期二"),
    ("水", "星期三"),
    ("木", "星期四"),
    ("金", "星期五"),
    ("土", "星期六"),
    ("日", "星期日"),
    ("剧场版", "剧场版"),
    ("剧", "剧场版"),
    ("ova", "OVA"),
    ("o", "OVA"),
];

/// Canonical section name, or the input unchanged when unmapped.
#[must_use]
pub fn week_section_name(name: &str) -> String {
    WEEK_SECTION_NAMES
        .iter()
        .find(|(label, _)| *label == name)
        .map_or_else(|| name.to_string(), |(_, canonical)| (*canonical).to_string())
}

/// Re-render `YYYY/MM/DD HH:mm` as `M月D日周X HH:mm`.
///
/// Anything that does not parse against [`PUBLISH_LAYOUT`] is returned
/// unchanged, including the empty string.
///
/// ```rust
/// use rs_mikan::calendar::format_publish_at;
///
/// assert_eq!(format_publish_at("2024/03/15 18:30"), "3月15日周五 18:30");
/// assert_eq!(format_publish_at("昨天"), "昨天");
/// ```
#[must_use]
pub fn format_publish_at(date_str: &str) -> String {
    if date_str.is_empty() {
        return String::new();
    }

    let Ok(date) = NaiveDateTime::parse_from_str(date_str, PUBLISH_LAYOUT) else {
        return date_str.to_string();
    };

    let weekday = WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}月{}日{} {}",
        date.month(),
        date.day(),
        weekday,
        date.format("%H:%M")
    )
}
