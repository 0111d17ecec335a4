//! Page parsers.
//!
//! One submodule per page family. Every parser takes an already-parsed
//! [`Document`] and returns a fully populated record; a selector miss
//! yields the field's default instead of an error.

pub mod announcement;
pub mod episode;
pub mod feed;
pub mod gallery;
pub mod index;
pub mod page;
pub mod search;
pub mod season;
pub mod session;
pub mod show;
pub mod table;

use std::collections::BTreeMap;

use dom_query::{Document, Selection};
use regex::Regex;

use crate::dom;
use crate::patterns::{
    DETAIL_INFO, DETAIL_POSTER, INFO_SEPARATOR, PLAN_LINK_LABEL, SINGLE_QUOTED, SUBSCRIBED_BADGE,
};
use crate::error::Result;
use crate::result::{
    Announcement, Carousel, EpisodeDetail, FeedRecord, Index, SearchResult, SeasonGallery, Show,
    ShowDetail, ShowRow, UserSession, YearSeasonGroup,
};
use crate::url_utils;
use crate::Options;

pub use announcement::parse_announcements;
pub use episode::parse_episode_detail;
pub use feed::parse_daily_feed;
pub use gallery::parse_publish_group;
pub use index::{parse_carousels, parse_index, parse_year_seasons};
pub use search::parse_search;
pub use season::{parse_my_subscribed, parse_season_grid};
pub use session::{
    parse_forgot_password_token, parse_login_token, parse_register_token, parse_session,
};
pub use page::{Page, PageKind};
pub use show::parse_show_detail;
pub use table::{parse_classic_list, parse_expanded_records};

/// Page parser bound to one site mirror.
///
/// # Example
///
/// ```rust
/// use rs_mikan::{parse_document, PageKind, Parser};
///
/// let parser = Parser::default();
/// let doc = parse_document("<html><body></body></html>");
/// let page = parser.extract(PageKind::Season, &doc);
/// assert_eq!(serde_json::to_string(&page).ok().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    /// Validate `options` and build a parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`](crate::Error::InvalidBaseUrl) when
    /// the base URL is not absolute.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Run the parser for `kind`.
    #[must_use]
    pub fn extract(&self, kind: PageKind, doc: &Document) -> Page {
        tracing::debug!(page = %kind, "extracting page");
        match kind {
            PageKind::Index => Page::Index(Box::new(self.index(doc))),
            PageKind::Season => Page::ShowRows(self.season(doc)),
            PageKind::Day => Page::Records(self.day(doc)),
            PageKind::Search => Page::Search(self.search(doc)),
            PageKind::List => Page::Records(self.list(doc)),
            PageKind::Subgroup => Page::Galleries(self.subgroup(doc)),
            PageKind::Bangumi => Page::Show(Box::new(self.bangumi(doc))),
            PageKind::BangumiMore => Page::Records(self.bangumi_more(doc)),
            PageKind::Episode => Page::Episode(Box::new(self.episode(doc))),
            PageKind::MyBangumi => Page::Shows(self.my_bangumi(doc)),
            PageKind::User => Page::Session(self.user(doc)),
            PageKind::Login => Page::Token(parse_login_token(doc)),
            PageKind::Register => Page::Token(parse_register_token(doc)),
            PageKind::ForgotPassword => Page::Token(parse_forgot_password_token(doc)),
        }
    }

    #[must_use]
    pub fn index(&self, doc: &Document) -> Index {
        parse_index(doc, &self.options)
    }

    #[must_use]
    pub fn season(&self, doc: &Document) -> Vec<ShowRow> {
        parse_season_grid(doc, &self.options)
    }

    /// Daily feed; the OVA listing uses the same markup.
    #[must_use]
    pub fn day(&self, doc: &Document) -> Vec<FeedRecord> {
        parse_daily_feed(doc, &self.options)
    }

    #[must_use]
    pub fn search(&self, doc: &Document) -> SearchResult {
        parse_search(doc, &self.options)
    }

    #[must_use]
    pub fn list(&self, doc: &Document) -> Vec<FeedRecord> {
        parse_classic_list(doc, &self.options)
    }

    #[must_use]
    pub fn subgroup(&self, doc: &Document) -> Vec<SeasonGallery> {
        parse_publish_group(doc, &self.options)
    }

    #[must_use]
    pub fn bangumi(&self, doc: &Document) -> ShowDetail {
        parse_show_detail(doc, &self.options)
    }

    #[must_use]
    pub fn bangumi_more(&self, doc: &Document) -> Vec<FeedRecord> {
        parse_expanded_records(doc, &self.options)
    }

    #[must_use]
    pub fn episode(&self, doc: &Document) -> EpisodeDetail {
        parse_episode_detail(doc, &self.options)
    }

    #[must_use]
    pub fn my_bangumi(&self, doc: &Document) -> Vec<Show> {
        parse_my_subscribed(doc, &self.options)
    }

    #[must_use]
    pub fn user(&self, doc: &Document) -> Option<UserSession> {
        parse_session(doc, &self.options)
    }

    #[must_use]
    pub fn carousels(&self, doc: &Document) -> Vec<Carousel> {
        parse_carousels(doc, &self.options)
    }

    #[must_use]
    pub fn year_seasons(&self, doc: &Document) -> Vec<YearSeasonGroup> {
        parse_year_seasons(doc)
    }

    #[must_use]
    pub fn announcements(&self, doc: &Document) -> Vec<Announcement> {
        parse_announcements(doc)
    }
}

/// Prefix a site-relative path with the configured base URL.
pub(crate) fn absolute(opts: &Options, path: &str) -> String {
    url_utils::join_base(opts.base(), path)
}

/// First capture group of `re` in `haystack`.
pub(crate) fn capture<'t>(re: &Regex, haystack: &'t str) -> Option<&'t str> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Cover URL from a tile's lazy-load `data-src`, query string removed.
pub(crate) fn tile_cover(span: &Selection, opts: &Options) -> String {
    absolute(opts, url_utils::strip_query(&dom::attr(span, "data-src")))
}

/// Cover URL from the detail-page poster's inline style.
pub(crate) fn poster_cover(doc: &Document, opts: &Options) -> String {
    let style = dom::attr(&doc.select(DETAIL_POSTER), "style");
    let path = capture(&SINGLE_QUOTED, &style).map_or("", url_utils::strip_query);
    absolute(opts, path)
}

/// The detail-page subscribe badge is present and not hidden by a style.
pub(crate) fn badge_subscribed(doc: &Document) -> bool {
    let badge = doc.select(SUBSCRIBED_BADGE);
    badge.exists() && dom::attr_trimmed(&badge, "style").is_empty()
}

/// Split a sidebar line on the full-width colon.
///
/// Only lines with exactly one separator qualify; key and value come back
/// trimmed. A URL value such as `官方网站：https://…` still splits because
/// its own colon is ASCII.
///
/// ```rust
/// use rs_mikan::parser::split_info_line;
///
/// assert_eq!(split_info_line("放送开始：2024/4/6"), Some(("放送开始", "2024/4/6")));
/// assert_eq!(split_info_line("没有分隔符"), None);
/// assert_eq!(split_info_line("a：b：c"), None);
/// ```
#[must_use]
pub fn split_info_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(INFO_SEPARATOR);
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((key.trim(), value.trim()))
}

/// Sidebar metadata of a show or episode page.
///
/// With `strip_plan_label`, the bangumi.tv link label is cut out of keys.
pub(crate) fn info_lines(doc: &Document, strip_plan_label: bool) -> BTreeMap<String, String> {
    let mut more = BTreeMap::new();

    for p in dom::each(&doc.select(DETAIL_INFO)) {
        let line = dom::text(&p);
        let Some((key, value)) = split_info_line(&line) else {
            tracing::trace!(line = %line, "dropping info line without a single separator");
            continue;
        };
        let key = if strip_plan_label {
            key.replacen(PLAN_LINK_LABEL, "", 1).trim().to_string()
        } else {
            key.to_string()
        };
        more.insert(key, value.to_string());
    }

    more
}
