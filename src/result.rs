//! Record types produced by the page parsers.
//!
//! Every record is built fresh from one document and never mutated after
//! it is returned. Absent markup shows up as empty strings, `0`, `false`,
//! empty collections, or `None`, never as an error.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// One show tile as rendered in a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    /// Show id; empty when the tile carries none.
    pub id: String,

    /// Absolute cover URL with the query string removed.
    pub cover: String,

    /// Display name.
    pub name: String,

    /// The signed-in user follows this show.
    pub subscribed: bool,

    /// Greyed out: not airing in the selected season.
    pub grey: bool,

    /// Episode-count badge, `0` when absent or unparsable.
    pub num: u32,

    /// Text of the first date label.
    pub update_at: String,

    /// Section label of the row the tile was found in.
    pub week: String,
}

/// One weekday section of the season grid.
///
/// The counters are derived from `shows` on construction and cannot be set
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowRow {
    /// Section label as printed.
    pub name: String,

    /// Canonical section name (see [`crate::calendar::week_section_name`]).
    pub sname: String,

    num: usize,
    updated_num: usize,
    subscribed_num: usize,
    subscribed_updated_num: usize,

    /// Tiles in display order.
    pub shows: Vec<Show>,
}

impl ShowRow {
    /// Build a row, computing all counters from `shows`.
    #[must_use]
    pub fn new(name: String, sname: String, shows: Vec<Show>) -> Self {
        let updated = |s: &&Show| s.num > 0;
        Self {
            num: shows.len(),
            updated_num: shows.iter().filter(updated).count(),
            subscribed_num: shows.iter().filter(|s| s.subscribed).count(),
            subscribed_updated_num: shows
                .iter()
                .filter(|s| s.subscribed)
                .filter(updated)
                .count(),
            name,
            sname,
            shows,
        }
    }

    /// Number of shows.
    #[must_use]
    pub fn num(&self) -> usize {
        self.num
    }

    /// Shows with a non-zero episode badge.
    #[must_use]
    pub fn updated_num(&self) -> usize {
        self.updated_num
    }

    /// Subscribed shows.
    #[must_use]
    pub fn subscribed_num(&self) -> usize {
        self.subscribed_num
    }

    /// Subscribed shows with a non-zero episode badge.
    #[must_use]
    pub fn subscribed_updated_num(&self) -> usize {
        self.subscribed_updated_num
    }
}

/// A subtitle group reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleGroupRef {
    /// Group id; absent when the markup has no link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,
}

/// One downloadable release (torrent + magnet + metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    /// Parent show id, when the listing links to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Parent show name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parent show cover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    /// Bracket-normalized release title.
    pub title: String,

    /// Classified release tags, descending order.
    pub tags: Vec<String>,

    /// Formatted publish time (see [`crate::calendar::format_publish_at`]).
    pub publish_at: String,

    /// Absolute `.torrent` URL.
    pub torrent: String,

    /// Magnet URI.
    pub magnet: String,

    /// Size label, e.g. `1.2GB`.
    pub size: String,

    /// Absolute URL of the episode page.
    pub url: String,

    /// Publishing subtitle groups.
    pub groups: Vec<SubtitleGroupRef>,
}

/// Subscription state of a subtitle-group release.
///
/// Serialized as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReleaseState {
    /// Not subscribed (-1).
    #[default]
    Unsubscribed,
    /// Subscribed, no language preference (0).
    Subscribed,
    /// Subscribed to simplified Chinese (1).
    Simplified,
    /// Subscribed to traditional Chinese (2).
    Traditional,
}

impl ReleaseState {
    /// Derive the state from the subscribed flag and the language label.
    #[must_use]
    pub fn derive(subscribed: bool, sublang: Option<&str>) -> Self {
        if !subscribed {
            return Self::Unsubscribed;
        }
        match sublang {
            Some("简中") => Self::Simplified,
            Some("繁中") => Self::Traditional,
            _ => Self::Subscribed,
        }
    }

    /// Numeric code used by the site's front end.
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Self::Unsubscribed => -1,
            Self::Subscribed => 0,
            Self::Simplified => 1,
            Self::Traditional => 2,
        }
    }
}

impl Serialize for ReleaseState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// One subtitle group's releases of a show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgroupRelease {
    /// Group id from the header's `id` attribute.
    pub data_id: String,

    pub name: String,

    pub subscribed: bool,

    /// Subscribed language label (`简中`, `繁中`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublang: Option<String>,

    /// Absolute RSS URL for this group's releases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss: Option<String>,

    /// Derived from `subscribed` and `sublang`.
    pub state: ReleaseState,

    /// Member groups of a joint release.
    pub subgroups: Vec<SubtitleGroupRef>,

    pub records: Vec<FeedRecord>,
}

/// Show page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDetail {
    pub id: String,
    pub cover: String,
    pub name: String,

    /// Synopsis, each paragraph indented with two ideographic spaces.
    pub intro: String,

    pub subscribed: bool,

    /// Sidebar metadata lines split on the full-width colon.
    pub more: BTreeMap<String, String>,

    /// Releases keyed by subtitle-group id.
    pub subgroup_releases: BTreeMap<String, SubgroupRelease>,
}

/// Episode page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDetail {
    /// Parent show id; episode pages often omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub tags: Vec<String>,
    pub subscribed: bool,
    pub more: BTreeMap<String, String>,

    /// Description as serialized HTML.
    pub intro: String,

    /// Description rendered as Markdown, when enabled in [`crate::Options`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro_markdown: Option<String>,

    pub torrent: String,
    pub magnet: String,
}

/// Search page: three independent lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub shows: Vec<Show>,
    pub subgroups: Vec<SubtitleGroupRef>,
    pub records: Vec<FeedRecord>,
}

/// One season of a publish group's timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonGallery {
    pub year: String,
    pub season: String,

    /// `"<date label> <season label>"`.
    pub title: String,

    pub active: bool,
    pub shows: Vec<Show>,
}

/// Featured show in the index carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Carousel {
    pub id: String,
    pub cover: String,
}

/// A year in the season navigation widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSeasonGroup {
    pub year: String,
    pub seasons: Vec<Season>,
}

/// One broadcast season entry of the navigation widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub year: String,

    /// Season code as sent back to the site (`春`, `夏`, ...).
    pub season: String,

    /// `"<year> <label>"`; compared against the selected label.
    pub title: String,

    pub active: bool,
}

/// Signed-in state scraped from a page header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Anti-forgery token of the login form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Personal RSS feed URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss: Option<String>,
}

/// Semantic type of an announcement node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    Url,
    Bold,
}

/// One run of announcement content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementNode {
    /// Text; links and bold runs are wrapped in `{...}`.
    pub text: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnnouncementKind>,

    /// Link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

/// Site announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub date: String,
    pub nodes: Vec<AnnouncementNode>,
}

/// Everything on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub years: Vec<YearSeasonGroup>,
    pub show_rows: Vec<ShowRow>,

    /// Daily feed grouped by show id.
    pub rss: BTreeMap<String, Vec<FeedRecord>>,

    pub carousels: Vec<Carousel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSession>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub announcements: Vec<Announcement>,
}
