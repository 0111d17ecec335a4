//! Episode detail page.

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::patterns::{
    DETAIL_TITLE, EPISODE_DESC, EPISODE_DESC_DECORATION, EPISODE_NAV_LINKS,
    EPISODE_SUBSCRIBE_BUTTON, EPISODE_TITLE, MAGNET_LINK_TEXT, TORRENT_LINK_TEXT,
};
use crate::result::EpisodeDetail;
use crate::tags::parse_tags_and_title;
use crate::text;
use crate::Options;

use super::{absolute, badge_subscribed, info_lines, poster_cover};

/// Parse an episode detail page.
///
/// The description is kept as an HTML fragment; with
/// [`Options::intro_markdown`] it is also rendered as Markdown.
#[must_use]
pub fn parse_episode_detail(doc: &Document, opts: &Options) -> EpisodeDetail {
    let heading = dom::text(&doc.select(EPISODE_TITLE));
    let tagged = text::non_empty(&heading).map(|heading| parse_tags_and_title(&heading));
    let (torrent, magnet) = download_links(doc, opts);
    let intro = description_html(doc);

    let intro_markdown = if opts.intro_markdown && !intro.is_empty() {
        render_markdown(&intro, opts)
    } else {
        None
    };
    debug!(
        has_intro = !intro.is_empty(),
        has_torrent = !torrent.is_empty(),
        "parsed episode detail"
    );

    EpisodeDetail {
        id: text::non_empty(&dom::attr(&doc.select(EPISODE_SUBSCRIBE_BUTTON), "data-bangumiid")),
        cover: text::non_empty(&poster_cover(doc, opts)),
        name: text::non_empty(&dom::text(&doc.select(DETAIL_TITLE))),
        tags: tagged.as_ref().map(|t| t.tags.clone()).unwrap_or_default(),
        title: tagged.map(|t| t.title),
        subscribed: badge_subscribed(doc),
        more: info_lines(doc, false),
        intro,
        intro_markdown,
        torrent,
        magnet,
    }
}

/// Torrent and magnet links of the sidebar, matched by their label.
fn download_links(doc: &Document, opts: &Options) -> (String, String) {
    let mut torrent = String::new();
    let mut magnet = String::new();

    for link in dom::each(&doc.select(EPISODE_NAV_LINKS)) {
        match dom::text(&link).as_str() {
            TORRENT_LINK_TEXT => torrent = absolute(opts, &dom::attr(&link, "href")),
            MAGNET_LINK_TEXT => magnet = dom::attr(&link, "href"),
            _ => {}
        }
    }

    (torrent, magnet)
}

/// Inner HTML of the description without its decorative header block.
fn description_html(doc: &Document) -> String {
    let desc = doc.select(EPISODE_DESC).first();
    if !desc.exists() {
        return String::new();
    }

    let copy = dom::detached(&desc);
    let root = dom::detached_root(&copy, "div");
    for child in dom::each(&dom::children(&root)) {
        if dom::attr_trimmed(&child, "style") == EPISODE_DESC_DECORATION {
            dom::remove(&child);
        }
    }

    text::trim(&*dom::inner_html(&root))
}

#[cfg(feature = "markdown")]
fn render_markdown(html: &str, opts: &Options) -> Option<String> {
    use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

    let md_options = MarkdownOptions::new()
        .include_links(opts.markdown_links)
        .include_images(true)
        .preserve_tables(true);

    text::non_empty(&html_to_markdown_with_options(html, &md_options))
}

#[cfg(not(feature = "markdown"))]
fn render_markdown(_html: &str, _opts: &Options) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<div id="sk-container">
        <div class="pull-left leftbar-container">
            <p class="bangumi-title"><a href="/Home/Bangumi/3141">葬送的芙莉莲</a></p>
            <div class="leftbar-nav">
                <button data-bangumiid="3141">订阅</button>
                <a href="/Download/abc.torrent">下载种子</a>
                <a href="magnet:?xt=urn:btih:abc">磁力链接</a>
                <a href="/Home/Other">其他</a>
            </div>
            <p class="bangumi-info">番组计划链接：bgm</p>
        </div>
        <div class="central-container">
            <div class="episode-header"><p>【ANi】葬送的芙莉莲 - 28 [1080P][Baha]</p></div>
            <div class="episode-desc">
                <div style="margin-top: -10px; margin-bottom: 10px;">share</div>
                <p>第28话</p>
            </div>
        </div>
    </div>"#;

    #[test]
    fn episode_fields() {
        let doc = dom::parse(PAGE);
        let detail = parse_episode_detail(&doc, &Options::default());

        assert_eq!(detail.id.as_deref(), Some("3141"));
        assert_eq!(detail.name.as_deref(), Some("葬送的芙莉莲"));
        assert_eq!(detail.title.as_deref(), Some("[ANi]葬送的芙莉莲 - 28 [1080P][Baha]"));
        assert_eq!(detail.tags, vec!["巴哈", "1080P"]);
        assert_eq!(detail.torrent, "https://mikanani.me/Download/abc.torrent");
        assert_eq!(detail.magnet, "magnet:?xt=urn:btih:abc");
        assert_eq!(detail.intro, "<p>第28话</p>");
        assert!(detail.more.contains_key("番组计划链接"));
        assert_eq!(detail.cover, None);
        assert_eq!(detail.intro_markdown, None);
    }

    #[test]
    fn decoration_removal_leaves_document_untouched() {
        let doc = dom::parse(PAGE);
        let _ = parse_episode_detail(&doc, &Options::default());
        assert!(doc.select(".episode-desc > div").exists());
    }

    #[test]
    fn empty_heading_gives_no_title() {
        let doc = dom::parse("<div id=\"sk-container\"></div>");
        let detail = parse_episode_detail(&doc, &Options::default());

        assert_eq!(detail.title, None);
        assert!(detail.tags.is_empty());
        assert_eq!(detail.intro, "");
        assert_eq!(detail.torrent, "");
    }

    #[cfg(feature = "markdown")]
    #[test]
    fn markdown_rendering_is_opt_in() {
        let doc = dom::parse(PAGE);
        let opts = Options {
            intro_markdown: true,
            ..Options::default()
        };
        let detail = parse_episode_detail(&doc, &opts);

        assert!(detail.intro_markdown.is_some_and(|md| md.contains("第28话")));
    }
}
