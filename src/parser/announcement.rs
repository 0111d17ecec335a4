//! Site announcement popover.

use dom_query::{Document, NodeRef, Selection};
use tracing::debug;

use crate::dom;
use crate::patterns::{ANNOUNCEMENT, ANNOUNCEMENT_DATE};
use crate::result::{Announcement, AnnouncementKind, AnnouncementNode};
use crate::text;

/// Parse every announcement of the popover.
///
/// Link and bold text is wrapped in `{}` so the client can render it as a
/// highlighted span.
#[must_use]
pub fn parse_announcements(doc: &Document) -> Vec<Announcement> {
    let entries = dom::each(&doc.select(ANNOUNCEMENT));
    debug!(announcements = entries.len(), "parsing announcements");

    entries
        .iter()
        .map(|entry| {
            let copy = dom::detached(entry);
            let root = dom::detached_root(&copy, "div");

            let date_label = root.select(ANNOUNCEMENT_DATE);
            let date = dom::text(&date_label);
            dom::remove(&date_label);

            let nodes = dom::child_nodes(&root)
                .into_iter()
                .filter_map(announcement_node)
                .collect();

            Announcement { date, nodes }
        })
        .collect()
}

fn announcement_node(node: NodeRef) -> Option<AnnouncementNode> {
    if node.is_text() {
        return Some(AnnouncementNode {
            text: text::trim(&*node.text()),
            ..AnnouncementNode::default()
        });
    }
    if !node.is_element() {
        return None;
    }

    let element = Selection::from(node);
    let content = dom::text(&element);

    let entry = match dom::tag_name(&element).as_deref() {
        Some("a") => AnnouncementNode {
            text: format!("{{{content}}}"),
            kind: Some(AnnouncementKind::Url),
            place: dom::get_attribute(&element, "href"),
        },
        Some("b") => AnnouncementNode {
            text: format!("{{{content}}}"),
            kind: Some(AnnouncementKind::Bold),
            place: None,
        },
        _ => AnnouncementNode {
            text: content,
            ..AnnouncementNode::default()
        },
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_in_document_order() {
        let doc = dom::parse(
            r#"<div class="announcement-popover-content"><div><span class="anndate">2024/04/01</span>新域名 <a href="https://mikanime.tv">mikanime.tv</a> 已启用，<b>请更新</b><span>书签</span></div></div>"#,
        );
        let announcements = parse_announcements(&doc);
        assert_eq!(announcements.len(), 1);

        let announcement = &announcements[0];
        assert_eq!(announcement.date, "2024/04/01");

        let texts: Vec<&str> = announcement.nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["新域名", "{mikanime.tv}", "已启用，", "{请更新}", "书签"]);

        assert_eq!(announcement.nodes[1].kind, Some(AnnouncementKind::Url));
        assert_eq!(announcement.nodes[1].place.as_deref(), Some("https://mikanime.tv"));
        assert_eq!(announcement.nodes[3].kind, Some(AnnouncementKind::Bold));
        assert_eq!(announcement.nodes[4].kind, None);

        // source document keeps its date label
        assert!(doc.select(".anndate").exists());
    }
}
