//! Season grid and my-subscribed tiles.

use dom_query::{Document, Selection};
use tracing::{debug, trace};

use crate::calendar::week_section_name;
use crate::dom;
use crate::patterns::{ACTIVE_MARKER, AN_TEXT, DATE_TEXT, DATE_TEXT_TITLED, GREY_MARKER, NUM_NODE, SEASON_ROW};
use crate::result::{Show, ShowRow};
use crate::text;
use crate::Options;

use super::tile_cover;

/// Parse the weekday sections of a season grid.
///
/// Shows inside each section are reordered so that airing shows come before
/// greyed ones and subscribed before unsubscribed; equal entries keep their
/// page order.
#[must_use]
pub fn parse_season_grid(doc: &Document, opts: &Options) -> Vec<ShowRow> {
    let rows = dom::each(&doc.select(SEASON_ROW));
    debug!(rows = rows.len(), "parsing season grid");

    rows.iter()
        .map(|row| {
            let name = dom::nth_child(row, 0)
                .map(|label| dom::text(&label))
                .unwrap_or_default();
            let sname = week_section_name(&name);

            let mut shows: Vec<Show> = dom::each(&row.select("li"))
                .iter()
                .map(|li| parse_tile(li, opts, &name))
                .collect();
            sort_shows(&mut shows);

            ShowRow::new(name, sname, shows)
        })
        .collect()
}

/// Parse the tiles of the my-subscribed page.
///
/// Only list items whose first `span` carries a show id count. Page order is
/// kept and no weekday is attached.
#[must_use]
pub fn parse_my_subscribed(doc: &Document, opts: &Options) -> Vec<Show> {
    let items = dom::each(&doc.select("li"));
    debug!(items = items.len(), "parsing subscribed tiles");

    items
        .iter()
        .filter(|li| {
            let keep = !dom::attr_trimmed(&li.select("span").first(), "data-bangumiid").is_empty();
            if !keep {
                trace!("skipping list item without a show id");
            }
            keep
        })
        .map(|li| parse_tile(li, opts, ""))
        .collect()
}

/// One show tile of a season grid or subscription page.
pub(crate) fn parse_tile(li: &Selection, opts: &Options, week: &str) -> Show {
    let span = li.select("span").first();

    let name = dom::get_attribute(&li.select(AN_TEXT), "title")
        .filter(|title| !title.is_empty())
        .or_else(|| dom::get_attribute(&li.select(DATE_TEXT_TITLED), "title"))
        .map(|title| text::trim(&title))
        .unwrap_or_default();

    Show {
        id: dom::attr_trimmed(&span, "data-bangumiid"),
        cover: tile_cover(&span, opts),
        name,
        subscribed: dom::has_match(li, ACTIVE_MARKER),
        grey: dom::has_match(li, GREY_MARKER),
        num: text::leading_int(&dom::text(&li.select(NUM_NODE))),
        // first date label only
        update_at: dom::text(&li.select(DATE_TEXT).first()),
        week: week.to_string(),
    }
}

/// Airing before greyed, then subscribed before unsubscribed. Stable.
pub(crate) fn sort_shows(shows: &mut [Show]) {
    shows.sort_by_key(|show| (show.grey, !show.subscribed));
}
