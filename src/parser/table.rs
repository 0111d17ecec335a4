//! Release tables: classic list, expanded show table, and the shared row
//! reader used by the show detail and search pages.

use dom_query::{Document, Selection};
use tracing::{debug, trace};

use crate::calendar::format_publish_at;
use crate::dom;
use crate::patterns::{LIST_ROW, MIN_ROW_CELLS, PUBLISH_GROUP_PREFIX_LEN, TABLE_ROW};
use crate::result::{FeedRecord, SubtitleGroupRef};
use crate::tags::parse_tags_and_title;
use crate::url_utils;
use crate::Options;

use super::absolute;

/// Cell positions of a release row.
///
/// The title cell holds the page link first and the magnet copy button
/// second; the torrent cell holds the download link first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowLayout {
    pub title: usize,
    pub size: usize,
    pub publish_at: usize,
    pub torrent: usize,
}

/// Show detail tables and search results.
pub(crate) const DETAIL_LAYOUT: RowLayout = RowLayout {
    title: 1,
    size: 2,
    publish_at: 3,
    torrent: 4,
};

/// Expanded episode table.
pub(crate) const EXPANDED_LAYOUT: RowLayout = RowLayout {
    title: 0,
    size: 1,
    publish_at: 2,
    torrent: 3,
};

/// Classic list; cell 1 holds the subtitle groups.
pub(crate) const LIST_LAYOUT: RowLayout = RowLayout {
    title: 2,
    size: 3,
    publish_at: 0,
    torrent: 4,
};

const LIST_GROUP_CELL: usize = 1;

/// Build a record from the cells of one table row.
pub(crate) fn record_from_cells(cells: &Selection, layout: RowLayout, opts: &Options) -> FeedRecord {
    let cell = |index| dom::nth(cells, index);
    let cell_text = |index| cell(index).map(|td| dom::text(&td)).unwrap_or_default();

    let title_cell = cell(layout.title);
    let link = title_cell.as_ref().and_then(|td| dom::nth_child(td, 0));
    let tagged = parse_tags_and_title(&link.as_ref().map(dom::text).unwrap_or_default());

    FeedRecord {
        title: tagged.title,
        tags: tagged.tags,
        url: link
            .as_ref()
            .map(|a| absolute(opts, &dom::attr(a, "href")))
            .unwrap_or_default(),
        magnet: title_cell
            .as_ref()
            .and_then(|td| dom::nth_child(td, 1))
            .map(|a| dom::attr(&a, "data-clipboard-text"))
            .unwrap_or_default(),
        size: cell_text(layout.size),
        publish_at: format_publish_at(&cell_text(layout.publish_at)),
        torrent: cell(layout.torrent)
            .and_then(|td| dom::nth_child(&td, 0))
            .map(|a| absolute(opts, &dom::attr(&a, "href")))
            .unwrap_or_default(),
        ..FeedRecord::default()
    }
}

/// Parse the classic (site-wide) release list.
///
/// Rows with fewer than five cells are skipped.
#[must_use]
pub fn parse_classic_list(doc: &Document, opts: &Options) -> Vec<FeedRecord> {
    let rows = dom::each(&doc.select(LIST_ROW));
    debug!(rows = rows.len(), "parsing classic list");

    rows.iter()
        .filter_map(|row| {
            let cells = dom::children(row);
            if cells.length() < MIN_ROW_CELLS {
                trace!(cells = cells.length(), "skipping short list row");
                return None;
            }

            let mut record = record_from_cells(&cells, LIST_LAYOUT, opts);
            record.groups = dom::nth(&cells, LIST_GROUP_CELL)
                .map(|td| parse_group_cell(&td))
                .unwrap_or_default();
            Some(record)
        })
        .collect()
}

/// Subtitle groups of a classic-list row.
///
/// The cell is either a list of links (joint releases), a single link, or
/// bare text for releases without a registered group.
fn parse_group_cell(td: &Selection) -> Vec<SubtitleGroupRef> {
    let items = td.select("li");
    if items.exists() {
        return dom::each(&items)
            .iter()
            .map(|li| dom::nth_child(li, 0).map(|a| group_from_link(&a)).unwrap_or_default())
            .collect();
    }

    match dom::nth_child(td, 0) {
        Some(a) => vec![group_from_link(&a)],
        None => vec![SubtitleGroupRef {
            id: None,
            name: dom::text(td),
        }],
    }
}

fn group_from_link(a: &Selection) -> SubtitleGroupRef {
    SubtitleGroupRef {
        id: dom::get_attribute(a, "href").map(|href| url_utils::skip_prefix(&href, PUBLISH_GROUP_PREFIX_LEN)),
        name: dom::text(a),
    }
}

/// Parse the expanded episode table of one show and subtitle group.
#[must_use]
pub fn parse_expanded_records(doc: &Document, opts: &Options) -> Vec<FeedRecord> {
    let rows = dom::each(&doc.select(TABLE_ROW));
    debug!(rows = rows.len(), "parsing expanded episode table");

    rows.iter()
        .map(|row| record_from_cells(&dom::children(row), EXPANDED_LAYOUT, opts))
        .collect()
}
