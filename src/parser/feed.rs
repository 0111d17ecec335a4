//! Daily update feed.

use dom_query::{Document, Selection};
use tracing::{debug, trace};

use crate::calendar::format_publish_at;
use crate::dom;
use crate::patterns::{
    BANGUMI_PREFIX_LEN, FEED_ITEM, FEED_LINKS, FEED_NAME_LINK, FEED_PUBLISH_AT, FEED_THUMB,
    PAREN_CONTENT, SIZE_BRACKETS,
};
use crate::result::FeedRecord;
use crate::tags::parse_tags_and_title;
use crate::text;
use crate::url_utils;
use crate::Options;

use super::{absolute, capture};

/// Parse every item of the daily update feed.
#[must_use]
pub fn parse_daily_feed(doc: &Document, opts: &Options) -> Vec<FeedRecord> {
    let items = dom::each(&doc.select(FEED_ITEM));
    debug!(items = items.len(), "parsing daily feed");

    items.iter().map(|item| parse_feed_item(item, opts)).collect()
}

fn parse_feed_item(item: &Selection, opts: &Options) -> FeedRecord {
    let mut record = FeedRecord::default();

    let thumb_style = dom::attr(&item.select(FEED_THUMB), "style");
    record.cover = capture(&PAREN_CONTENT, &thumb_style)
        .map(|path| absolute(opts, path))
        .filter(|cover| !cover.is_empty());

    let name_link = item.select(FEED_NAME_LINK).first();
    if name_link.exists() {
        record.name = text::non_empty(&dom::text(&name_link));
        record.id = dom::get_attribute(&name_link, "href")
            .map(|href| url_utils::strip_fragment(&url_utils::skip_prefix(&href, BANGUMI_PREFIX_LEN)).to_string())
            .filter(|id| !id.is_empty());
    }

    // torrent, magnet, page url; by position
    let links = item.select(FEED_LINKS);
    if let Some(torrent_link) = dom::nth(&links, 0) {
        record.torrent = absolute(opts, &dom::attr(&torrent_link, "href"));

        let copy = dom::detached(&torrent_link);
        let link = dom::detached_root(&copy, "a");
        let badge = link.select("span");
        if badge.exists() {
            record.size = text::trim(&SIZE_BRACKETS.replace_all(&dom::text_content(&badge), ""));
            dom::remove(&badge);
        }

        // trimmed first; surrounding whitespace is markup indentation
        let tagged = parse_tags_and_title(&dom::text(&link));
        record.title = tagged.title;
        record.tags = tagged.tags;
    } else {
        trace!("feed item without download links");
    }

    record.magnet = dom::nth(&links, 1)
        .map(|a| dom::attr(&a, "data-clipboard-text"))
        .unwrap_or_default();
    record.url = dom::nth(&links, 2)
        .map(|a| absolute(opts, &dom::attr(&a, "href")))
        .unwrap_or_default();

    record.publish_at = format_publish_at(&dom::text(&item.select(FEED_PUBLISH_AT)));

    record
}
