//! Show detail page.

use std::collections::BTreeMap;

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::patterns::{
    DETAIL_INTRO, DETAIL_TABLES, DETAIL_TITLE, DETAIL_TITLE_LINK, RSS_LINK, SUBGROUP_DROPDOWN,
    SUBGROUP_HEADER, SUBGROUP_MEMBERS, SUBGROUP_SUBSCRIBED, TABLE_ROW, UNKNOWN_SUBGROUP,
};
use crate::result::{ReleaseState, ShowDetail, SubgroupRelease, SubtitleGroupRef};
use crate::text;
use crate::url_utils;
use crate::Options;

use super::table::{record_from_cells, DETAIL_LAYOUT};
use super::{absolute, badge_subscribed, info_lines, poster_cover};

/// Paragraph indent used by the intro text.
const INTRO_INDENT: &str = "\u{3000}\u{3000}";

/// Parse a show detail page.
///
/// Release tables are paired with subtitle-group headers by position; extra
/// tables or headers on either side are ignored.
#[must_use]
pub fn parse_show_detail(doc: &Document, opts: &Options) -> ShowDetail {
    let tables = dom::each(&doc.select(DETAIL_TABLES));
    let headers = dom::each(&doc.select(SUBGROUP_HEADER));
    debug!(tables = tables.len(), headers = headers.len(), "parsing show detail");

    let mut subgroup_releases = BTreeMap::new();
    for (table, header) in tables.iter().zip(&headers) {
        let mut release = parse_subgroup_release(header, opts);
        release.records = dom::each(&table.select(TABLE_ROW))
            .iter()
            .map(|row| record_from_cells(&dom::children(row), DETAIL_LAYOUT, opts))
            .collect();
        subgroup_releases.insert(release.data_id.clone(), release);
    }

    let href = dom::attr(&doc.select(DETAIL_TITLE_LINK), "href");

    ShowDetail {
        id: href.split('=').nth(1).unwrap_or_default().to_string(),
        cover: poster_cover(doc, opts),
        name: dom::text(&doc.select(DETAIL_TITLE)),
        intro: indent_intro(&dom::text(&doc.select(DETAIL_INTRO))),
        subscribed: badge_subscribed(doc),
        more: info_lines(doc, true),
        subgroup_releases,
    }
}

/// Indent each intro paragraph with two ideographic spaces.
///
/// ```rust
/// use rs_mikan::parser::show::indent_intro;
///
/// assert_eq!(indent_intro("一\n二"), "\u{3000}\u{3000}一\n\u{3000}\u{3000}二");
/// assert_eq!(indent_intro(""), "");
/// ```
#[must_use]
pub fn indent_intro(intro: &str) -> String {
    if intro.is_empty() {
        return String::new();
    }
    format!("{INTRO_INDENT}{}", intro.replace('\n', &format!("\n{INTRO_INDENT}")))
}

fn parse_subgroup_release(header: &Selection, opts: &Options) -> SubgroupRelease {
    let badge = header.select(SUBGROUP_SUBSCRIBED);
    // a styled badge is the hidden template the page toggles client side;
    // headers without any badge count as subscribed
    let subscribed = !dom::has_attribute(&badge, "style");
    let sublang = text::non_empty(&dom::text(&badge));

    let subgroups = dom::each(&header.select(SUBGROUP_MEMBERS))
        .iter()
        .map(|a| SubtitleGroupRef {
            id: dom::get_attribute(a, "href").map(|href| url_utils::last_segment(&href).to_string()),
            name: dom::text(a),
        })
        .collect();

    SubgroupRelease {
        data_id: dom::attr(header, "id"),
        name: subgroup_name(header).unwrap_or_else(|| UNKNOWN_SUBGROUP.to_string()),
        subscribed,
        state: ReleaseState::derive(subscribed, sublang.as_deref()),
        sublang,
        rss: dom::get_attribute(&header.select(RSS_LINK).first(), "href")
            .map(|href| absolute(opts, &href))
            .filter(|rss| !rss.is_empty()),
        subgroups,
        records: Vec::new(),
    }
}

/// Group name from the header's first element, tried in order: its own
/// text node, the dropdown label, its first child's text, its full text.
fn subgroup_name(header: &Selection) -> Option<String> {
    let first = dom::nth_child(header, 0)?;

    let name = dom::first_text_node(&first).unwrap_or_else(|| {
        let dropdown = header.select(SUBGROUP_DROPDOWN);
        if dropdown.exists() {
            dom::text(&dropdown)
        } else {
            dom::nth_child(&first, 0).map_or_else(|| dom::text(&first), |child| dom::text(&child))
        }
    });

    text::non_empty(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(html: &str) -> Document {
        dom::parse(&format!(r#"<div class="subgroup-text" id="583">{html}</div>"#))
    }

    #[test]
    fn name_from_direct_text_node() {
        let doc = header(r#"<a href="/Home/PublishGroup/583"> ANi <i></i></a>"#);
        assert_eq!(subgroup_name(&doc.select(".subgroup-text")).as_deref(), Some("ANi"));
    }

    #[test]
    fn name_from_dropdown_label() {
        let doc = header(r#"<div><b></b></div><div class="dropdown"><span>LoliHouse</span></div>"#);
        assert_eq!(subgroup_name(&doc.select(".subgroup-text")).as_deref(), Some("LoliHouse"));
    }

    #[test]
    fn name_from_first_child_text() {
        let doc = header(r#"<div><span>喵萌奶茶屋</span></div>"#);
        assert_eq!(subgroup_name(&doc.select(".subgroup-text")).as_deref(), Some("喵萌奶茶屋"));
    }

    #[test]
    fn blank_header_uses_placeholder() {
        let doc = header("生肉");
        let release = parse_subgroup_release(&doc.select(".subgroup-text"), &Options::default());

        assert_eq!(release.name, UNKNOWN_SUBGROUP);
        assert_eq!(release.data_id, "583");
        assert_eq!(release.state, ReleaseState::Subscribed);
        assert_eq!(release.rss, None);
    }

    #[test]
    fn subscribed_release_with_language() {
        let doc = header(
            r#"<a href="/Home/PublishGroup/583">ANi</a>
               <span class="subscribed">繁中</span>
               <a class="mikan-rss" href="/RSS/Bangumi?bangumiId=3141&subgroupid=583"></a>
               <ul><li><a href="/Home/PublishGroup/583">ANi</a></li></ul>"#,
        );
        let release = parse_subgroup_release(&doc.select(".subgroup-text"), &Options::default());

        assert!(release.subscribed);
        assert_eq!(release.sublang.as_deref(), Some("繁中"));
        assert_eq!(release.state, ReleaseState::Traditional);
        assert_eq!(
            release.rss.as_deref(),
            Some("https://mikanani.me/RSS/Bangumi?bangumiId=3141&subgroupid=583")
        );
        assert_eq!(release.subgroups[0].id.as_deref(), Some("583"));
    }

    #[test]
    fn styled_badge_is_not_subscribed() {
        let doc = header(r#"<a>ANi</a><span class="subscribed" style="display:none"></span>"#);
        let release = parse_subgroup_release(&doc.select(".subgroup-text"), &Options::default());

        assert!(!release.subscribed);
        assert_eq!(release.sublang, None);
    }

    #[test]
    fn header_without_badge_is_subscribed() {
        let doc = header(r#"<a href="/Home/PublishGroup/583">ANi</a>"#);
        let release = parse_subgroup_release(&doc.select(".subgroup-text"), &Options::default());

        assert!(release.subscribed);
        assert_eq!(release.sublang, None);
        assert_eq!(release.state, ReleaseState::Subscribed);
    }
}
