//! Compiled regex patterns and CSS selectors for page parsing.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Selectors are grouped by the page they target.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Inline Style / Attribute Patterns
// =============================================================================

/// Captures the contents of the first `(...)` group, e.g. the URL inside
/// `background-image: url(/images/Bangumi/x.jpg)`.
///
/// Greedy on purpose: the feed thumbnail style has exactly one paren pair.
pub static PAREN_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*)\)").expect("PAREN_CONTENT regex"));

/// Captures the first single-quoted value, e.g. the URL in
/// `background-image: url('/images/x.jpg?width=400')` or the target in
/// `onclick="window.open('/Home/Bangumi/3141')"`.
pub static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("SINGLE_QUOTED regex"));

/// Square brackets around a size badge (`[1.2GB]`).
pub static SIZE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\]]").expect("SIZE_BRACKETS regex"));

// =============================================================================
// Shared Constants
// =============================================================================

/// Metadata line separator (full-width colon).
pub const INFO_SEPARATOR: char = '：';

/// Label fragment prefixed to the bangumi.tv link line in the show sidebar.
pub const PLAN_LINK_LABEL: &str = "番组计划链接";

/// Placeholder for releases with no identifiable subtitle group.
pub const UNKNOWN_SUBGROUP: &str = "生肉/不明字幕";

/// Link text of the torrent download button on episode pages.
pub const TORRENT_LINK_TEXT: &str = "下载种子";

/// Link text of the magnet button on episode pages.
pub const MAGNET_LINK_TEXT: &str = "磁力链接";

/// Inline style of the decorative block at the top of an episode description.
pub const EPISODE_DESC_DECORATION: &str = "margin-top: -10px; margin-bottom: 10px;";

/// Length of the `/Home/Bangumi/` href prefix.
pub const BANGUMI_PREFIX_LEN: usize = 14;

/// Length of the `/Home/PublishGroup/` href prefix.
pub const PUBLISH_GROUP_PREFIX_LEN: usize = 19;

/// Href prefix of show pages.
pub const BANGUMI_PATH: &str = "/Home/Bangumi/";

/// Name of the anti-forgery form field.
pub const TOKEN_FIELD: &str = "__RequestVerificationToken";

// =============================================================================
// CSS Selectors: Season Grid / Tiles
// =============================================================================

/// One weekday section of the season grid.
pub const SEASON_ROW: &str = "div.sk-bangumi";

/// Date label elements within a show tile.
pub const DATE_TEXT: &str = ".date-text";

/// Date label carrying the full show name in its `title` attribute.
pub const DATE_TEXT_TITLED: &str = ".date-text[title]";

/// Element carrying the show name in its `title` attribute.
pub const AN_TEXT: &str = ".an-text";

/// Episode-count badge.
pub const NUM_NODE: &str = ".num-node";

/// Subscribed marker inside a tile.
pub const ACTIVE_MARKER: &str = ".active";

/// Greyed-out marker (show not airing in the selected season).
pub const GREY_MARKER: &str = "span.greyout";

// =============================================================================
// CSS Selectors: Daily Feed
// =============================================================================

pub const FEED_ITEM: &str = "#an-list-res .my-rss-item";
pub const FEED_THUMB: &str = "div.sk-col.rss-thumb";
pub const FEED_NAME_LINK: &str = "div.sk-col.rss-name > div > a";
pub const FEED_LINKS: &str = "div.sk-col.rss-name > a";
pub const FEED_PUBLISH_AT: &str = "div.sk-col.pull-right";

// =============================================================================
// CSS Selectors: Search / Classic List / Expand Table
// =============================================================================

pub const SEARCH_SUBGROUP: &str = "div.leftbar-container .leftbar-item .subgroup-longname";
pub const SEARCH_SHOW: &str = "div.central-container > ul > li";
pub const SEARCH_ROW: &str = "tr.js-search-results-row";
pub const LIST_ROW: &str = "#sk-body > table > tbody > tr";
pub const TABLE_ROW: &str = "tbody > tr";

/// Minimum cell count of a usable result row.
pub const MIN_ROW_CELLS: usize = 5;

// =============================================================================
// CSS Selectors: Show / Episode Detail
// =============================================================================

pub const DETAIL_TITLE: &str = "#sk-container > div.pull-left.leftbar-container > p.bangumi-title";
pub const DETAIL_TITLE_LINK: &str =
    "#sk-container > div.pull-left.leftbar-container > p.bangumi-title > a";
pub const DETAIL_POSTER: &str =
    "#sk-container > div.pull-left.leftbar-container > div.bangumi-poster";
pub const DETAIL_INFO: &str = "#sk-container > div.pull-left.leftbar-container > p.bangumi-info";
pub const DETAIL_INTRO: &str = "#sk-container > div.central-container > p";
pub const SUBSCRIBED_BADGE: &str = "#sk-container .subscribed-badge";
pub const DETAIL_TABLES: &str = "#sk-container > div.central-container > div.episode-table > table";
pub const SUBGROUP_HEADER: &str = ".subgroup-text";
pub const SUBGROUP_DROPDOWN: &str = ".dropdown span";
pub const SUBGROUP_SUBSCRIBED: &str = ".subscribed";
pub const SUBGROUP_MEMBERS: &str = "ul > li > a";
pub const RSS_LINK: &str = ".mikan-rss";

pub const EPISODE_SUBSCRIBE_BUTTON: &str =
    "#sk-container > div.pull-left.leftbar-container > div.leftbar-nav > button";
pub const EPISODE_NAV_LINKS: &str =
    "#sk-container > div.pull-left.leftbar-container > div.leftbar-nav > a";
pub const EPISODE_TITLE: &str = "#sk-container > div.central-container > div.episode-header > p";
pub const EPISODE_DESC: &str = "#sk-container > div.central-container > div.episode-desc";

// =============================================================================
// CSS Selectors: Publish-Group Gallery
// =============================================================================

pub const GALLERY_ITEM: &str = "#js-sort-wrapper > div.pubgroup-timeline-item[data-index]";
pub const GALLERY_DATE: &str = ".pubgroup-date";
pub const GALLERY_SEASON: &str = ".pubgroup-season";
pub const GALLERY_CURRENT: &str = ".pubgroup-season.current-season";
pub const GALLERY_SHOW: &str = "li[data-bangumiid]";
pub const GALLERY_SHOW_NAME: &str = "div.an-info-group > a";
pub const GALLERY_SHOW_ACTIVE: &str = ".an-info-icon.active";
pub const GALLERY_SHOW_COVER: &str = "span[data-bangumiid]";

// =============================================================================
// CSS Selectors: Index Widgets / Session
// =============================================================================

pub const CAROUSEL_ITEM: &str = "#myCarousel > div.carousel-inner > div.item.carousel-bg";
pub const SELECTED_SEASON: &str = "#sk-data-nav .date-select div.date-text";
pub const YEAR_ITEM: &str = "#sk-data-nav > div > ul.navbar-nav.date-select > li > ul > li";
pub const ANNOUNCEMENT: &str = ".announcement-popover-content > div";
pub const ANNOUNCEMENT_DATE: &str = ".anndate";

pub const USER_NAME: &str = "#user-name .text-right";
pub const USER_AVATAR: &str = "#user-welcome #head-pic";
pub const LOGIN_TOKEN: &str = "#login input[name=__RequestVerificationToken]";
pub const FORM_TOKEN: &str = "input[name=__RequestVerificationToken]";
pub const USER_RSS: &str = "#an-episode-updates .mikan-rss";
