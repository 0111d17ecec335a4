//! Publish-group (subtitle group) season gallery.

use std::collections::HashMap;

use dom_query::{Document, Selection};
use tracing::{debug, trace};

use crate::dom;
use crate::patterns::{
    GALLERY_CURRENT, GALLERY_DATE, GALLERY_ITEM, GALLERY_SEASON, GALLERY_SHOW,
    GALLERY_SHOW_ACTIVE, GALLERY_SHOW_COVER, GALLERY_SHOW_NAME,
};
use crate::result::{SeasonGallery, Show};
use crate::Options;

use super::tile_cover;

/// Parse the season timeline of a publish-group page.
#[must_use]
pub fn parse_publish_group(doc: &Document, opts: &Options) -> Vec<SeasonGallery> {
    let items = dom::each(&doc.select(GALLERY_ITEM));
    debug!(seasons = items.len(), "parsing publish group gallery");

    items.iter().map(|item| parse_season_item(item, opts)).collect()
}

fn parse_season_item(item: &Selection, opts: &Options) -> SeasonGallery {
    let title = format!(
        "{} {}",
        dom::text(&item.select(GALLERY_DATE)),
        dom::text(&item.select(GALLERY_SEASON))
    );
    let (year, season) = title.split_once(' ').unwrap_or((title.as_str(), ""));

    let shows = dom::each(&item.select(GALLERY_SHOW))
        .iter()
        .map(|li| Show {
            id: dom::attr_trimmed(li, "data-bangumiid"),
            name: dom::attr_trimmed(&li.select(GALLERY_SHOW_NAME), "title"),
            subscribed: dom::has_match(li, GALLERY_SHOW_ACTIVE),
            cover: tile_cover(&li.select(GALLERY_SHOW_COVER), opts),
            ..Show::default()
        })
        .collect();
    let mut shows = dedup_last_wins(shows);
    shows.sort_by_key(|show| !show.subscribed);

    SeasonGallery {
        year: year.to_string(),
        season: season.to_string(),
        active: dom::has_match(item, GALLERY_CURRENT),
        shows,
        title,
    }
}

/// Keep only the last entry for each show id, at that entry's position.
#[must_use]
pub fn dedup_last_wins(shows: Vec<Show>) -> Vec<Show> {
    let last: HashMap<String, usize> = shows
        .iter()
        .enumerate()
        .map(|(index, show)| (show.id.clone(), index))
        .collect();

    shows
        .into_iter()
        .enumerate()
        .filter_map(|(index, show)| {
            if last.get(&show.id) == Some(&index) {
                Some(show)
            } else {
                trace!(id = %show.id, "dropping duplicate gallery entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: &str, name: &str, subscribed: bool) -> Show {
        Show {
            id: id.to_string(),
            name: name.to_string(),
            subscribed,
            ..Show::default()
        }
    }

    #[test]
    fn later_duplicate_wins_at_its_position() {
        let shows = vec![show("1", "first", false), show("2", "b", false), show("1", "again", false)];
        let deduped = dedup_last_wins(shows);

        let names: Vec<&str> = deduped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "again"]);
    }

    #[test]
    fn season_item_title_split() {
        let doc = dom::parse(
            r#"<div id="js-sort-wrapper"><div class="pubgroup-timeline-item" data-index="0">
                <div class="pubgroup-date">2024</div>
                <div class="pubgroup-season current-season">春季 番组</div>
                <ul>
                    <li data-bangumiid="1"><span data-bangumiid="1" data-src="/images/1.jpg?x"></span>
                        <div class="an-info-group"><a title="A">A</a></div></li>
                    <li data-bangumiid="2"><span data-bangumiid="2"></span>
                        <div class="an-info-group"><a title="B">B</a><i class="an-info-icon active"></i></div></li>
                </ul>
            </div></div>"#,
        );
        let galleries = parse_publish_group(&doc, &Options::default());

        assert_eq!(galleries.len(), 1);
        let gallery = &galleries[0];
        assert_eq!(gallery.title, "2024 春季 番组");
        assert_eq!(gallery.year, "2024");
        assert_eq!(gallery.season, "春季 番组");
        assert!(gallery.active);

        let ids: Vec<&str> = gallery.shows.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(gallery.shows[1].cover, "https://mikanani.me/images/1.jpg");
    }
}
