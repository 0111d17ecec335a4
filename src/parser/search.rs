//! Search results page.

use dom_query::Document;
use tracing::{debug, trace};

use crate::dom;
use crate::patterns::{AN_TEXT, BANGUMI_PATH, MIN_ROW_CELLS, SEARCH_ROW, SEARCH_SHOW, SEARCH_SUBGROUP};
use crate::result::{SearchResult, Show, SubtitleGroupRef};
use crate::Options;

use super::table::{record_from_cells, DETAIL_LAYOUT};
use super::tile_cover;

/// Parse a search page into its three independent lists.
#[must_use]
pub fn parse_search(doc: &Document, opts: &Options) -> SearchResult {
    let subgroups: Vec<SubtitleGroupRef> = dom::each(&doc.select(SEARCH_SUBGROUP))
        .iter()
        .filter_map(|entry| {
            let id = dom::attr_trimmed(entry, "data-subgroupid");
            (!id.is_empty()).then(|| SubtitleGroupRef {
                id: Some(id),
                name: dom::text(entry),
            })
        })
        .collect();

    let shows: Vec<Show> = dom::each(&doc.select(SEARCH_SHOW))
        .iter()
        .map(|li| Show {
            id: dom::attr_trimmed(&li.select("a"), "href").replacen(BANGUMI_PATH, "", 1),
            cover: tile_cover(&li.select("span"), opts),
            name: dom::attr_trimmed(&li.select(AN_TEXT), "title"),
            ..Show::default()
        })
        .collect();

    let records = dom::each(&doc.select(SEARCH_ROW))
        .iter()
        .filter_map(|row| {
            let cells = row.select("td");
            if cells.length() < MIN_ROW_CELLS {
                trace!(cells = cells.length(), "skipping short search row");
                return None;
            }
            Some(record_from_cells(&cells, DETAIL_LAYOUT, opts))
        })
        .collect::<Vec<_>>();

    debug!(
        subgroups = subgroups.len(),
        shows = shows.len(),
        records = records.len(),
        "parsed search page"
    );

    SearchResult {
        shows,
        subgroups,
        records,
    }
}
