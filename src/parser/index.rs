//! Home page widgets and the aggregated index view.

use std::collections::BTreeMap;

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::patterns::{CAROUSEL_ITEM, SELECTED_SEASON, SINGLE_QUOTED, YEAR_ITEM};
use crate::result::{Carousel, FeedRecord, Index, Season, YearSeasonGroup};
use crate::url_utils;
use crate::Options;

use super::{
    absolute, capture, parse_announcements, parse_daily_feed, parse_season_grid, parse_session,
};

/// Parse the featured-show carousel.
#[must_use]
pub fn parse_carousels(doc: &Document, opts: &Options) -> Vec<Carousel> {
    dom::each(&doc.select(CAROUSEL_ITEM))
        .iter()
        .map(|item| {
            let onclick = dom::attr(item, "onclick");
            let style = dom::attr(item, "style");

            Carousel {
                id: capture(&SINGLE_QUOTED, &onclick)
                    .map(url_utils::last_segment)
                    .unwrap_or_default()
                    .to_string(),
                cover: absolute(opts, capture(&SINGLE_QUOTED, &style).unwrap_or_default()),
            }
        })
        .collect()
}

/// Parse the year/season drop-down.
///
/// A season is `active` when its `"{year} {label}"` title matches the label
/// of the drop-down toggle.
#[must_use]
pub fn parse_year_seasons(doc: &Document) -> Vec<YearSeasonGroup> {
    let selected = dom::text(&doc.select(SELECTED_SEASON));

    dom::each(&doc.select(YEAR_ITEM))
        .iter()
        .map(|item| {
            let year = dom::nth_child(item, 0).map(|label| dom::text(&label)).unwrap_or_default();
            let seasons = dom::nth_child(item, 1)
                .map(|list| {
                    dom::each(&dom::children(&list))
                        .iter()
                        .map(|entry| {
                            let (year, season, label) = dom::nth_child(entry, 0)
                                .map(|a| {
                                    (
                                        dom::attr_trimmed(&a, "data-year"),
                                        dom::attr_trimmed(&a, "data-season"),
                                        dom::text(&a),
                                    )
                                })
                                .unwrap_or_default();
                            let title = format!("{year} {label}");
                            Season {
                                active: title == selected,
                                year,
                                season,
                                title,
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();

            YearSeasonGroup { year, seasons }
        })
        .collect()
}

/// Parse the home page into one aggregate.
///
/// Feed records are grouped by show id; records without one are dropped from
/// the grouping.
#[must_use]
pub fn parse_index(doc: &Document, opts: &Options) -> Index {
    let mut rss: BTreeMap<String, Vec<FeedRecord>> = BTreeMap::new();
    for record in parse_daily_feed(doc, opts) {
        if let Some(id) = record.id.clone() {
            rss.entry(id).or_default().push(record);
        }
    }

    let index = Index {
        years: parse_year_seasons(doc),
        show_rows: parse_season_grid(doc, opts),
        rss,
        carousels: parse_carousels(doc, opts),
        user: parse_session(doc, opts),
        announcements: parse_announcements(doc),
    };
    debug!(
        rows = index.show_rows.len(),
        feed_groups = index.rss.len(),
        signed_in = index.user.is_some(),
        "parsed index"
    );

    index
}
