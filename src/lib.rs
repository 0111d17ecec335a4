//! # rs-mikan
//!
//! Structured data extraction for the Mikan Project anime torrent site.
//!
//! The site renders everything server side. This library turns its pages
//! (season grid, daily feed, search, show and episode detail, subtitle group
//! timelines, account forms) into typed, serializable records. It does no
//! network I/O; the host fetches pages and hands over the HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_mikan::{parse_document, Parser};
//!
//! let html = r#"<div class="sk-bangumi"><div>月</div><ul>
//!   <li><span data-bangumiid="3141" data-src="/images/a.jpg?w=1"></span>
//!       <a class="an-text" title="葬送的芙莉莲"></a></li>
//! </ul></div>"#;
//!
//! let doc = parse_document(html);
//! let rows = Parser::default().season(&doc);
//! assert_eq!(rows[0].sname, "星期一");
//! assert_eq!(rows[0].shows[0].cover, "https://mikanani.me/images/a.jpg");
//! ```
//!
//! ## Tolerance
//!
//! Parsers never fail. A missing element yields an empty string, `0`,
//! `false`, an empty collection or `None` in the corresponding field.
//! [`Error`] only comes from configuration and page-kind lookup.

mod error;
mod options;
mod result;

/// Text normalization helpers.
pub mod text;

/// Release-tag classification of torrent titles.
pub mod tags;

/// Publish-time formatting and weekday vocabulary.
pub mod calendar;

/// Compiled regexes and CSS selectors.
pub mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// URL helpers for joining, stripping, and cookie domains.
pub mod url_utils;

/// Site endpoint URLs and request bodies.
pub mod endpoints;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page parsers and dispatch.
pub mod parser;

// Public API - re-exports
pub use dom::Document;
pub use error::{Error, Result};
pub use options::Options;
pub use parser::{Page, PageKind, Parser};
pub use result::{
    Announcement, AnnouncementKind, AnnouncementNode, Carousel, EpisodeDetail, FeedRecord, Index,
    ReleaseState, SearchResult, Season, SeasonGallery, Show, ShowDetail, ShowRow, SubgroupRelease,
    SubtitleGroupRef, UserSession, YearSeasonGroup,
};

/// Parse an HTML string into a document.
#[must_use]
pub fn parse_document(html: &str) -> Document {
    dom::parse(html)
}

/// Parse HTML bytes into a document, honouring a declared charset.
///
/// ```rust
/// use rs_mikan::parse_document_bytes;
///
/// // 星期一 in GBK
/// let mut html = br#"<meta charset="gbk"><div id="d">"#.to_vec();
/// html.extend_from_slice(&[0xD0, 0xC7, 0xC6, 0xDA, 0xD2, 0xBB]);
/// html.extend_from_slice(b"</div>");
///
/// let doc = parse_document_bytes(&html);
/// assert_eq!(doc.select("#d").text().to_string(), "星期一");
/// ```
#[must_use]
pub fn parse_document_bytes(html: &[u8]) -> Document {
    dom::parse(&encoding::transcode_to_utf8(html))
}

/// Parse `html` as a page of the given kind.
///
/// # Example
///
/// ```rust
/// use rs_mikan::{extract_page, Options, Page, PageKind};
///
/// let html = r#"<form id="login"><input name="__RequestVerificationToken" value="t0k"></form>"#;
/// let page = extract_page(PageKind::Login, html, &Options::default())?;
/// assert_eq!(page, Page::Token(Some("t0k".to_string())));
/// # Ok::<(), rs_mikan::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options` does not validate.
pub fn extract_page(kind: PageKind, html: &str, options: &Options) -> Result<Page> {
    let parser = Parser::new(options.clone())?;
    Ok(parser.extract(kind, &parse_document(html)))
}

/// Like [`extract_page`], for raw bytes in any declared charset.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `options` does not validate.
pub fn extract_page_bytes(kind: PageKind, html: &[u8], options: &Options) -> Result<Page> {
    let parser = Parser::new(options.clone())?;
    Ok(parser.extract(kind, &parse_document_bytes(html)))
}
