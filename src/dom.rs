//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate that turn every selector or
//! attribute miss into a default value. Parsers build on these so that a
//! page missing an element yields an empty string, not an error.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::text;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Copy a selection's first element into a fresh document.
///
/// Parsers that need to drop a child before reading text (size badges,
/// announcement dates, decorative blocks) work on the copy so the caller's
/// document is never modified.
#[must_use]
pub fn detached(sel: &Selection) -> Document {
    Document::from(outer_html(sel).to_string())
}

/// Root element of a document built by [`detached`].
#[must_use]
pub fn detached_root<'a>(doc: &'a Document, tag: &str) -> Selection<'a> {
    doc.select(tag).first()
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute value, or an empty string when absent.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    sel.attr(name).map(|s| s.to_string()).unwrap_or_default()
}

/// Attribute value trimmed, or an empty string when absent.
#[inline]
#[must_use]
pub fn attr_trimmed(sel: &Selection, name: &str) -> String {
    sel.attr(name).map(|s| text::trim(&*s)).unwrap_or_default()
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content of the selection, trimmed.
#[inline]
#[must_use]
pub fn text(sel: &Selection) -> String {
    text::trim(&*sel.text())
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// The `index`-th node of a selection.
#[must_use]
pub fn nth<'a>(sel: &Selection<'a>, index: usize) -> Option<Selection<'a>> {
    sel.nodes().get(index).map(|node| Selection::from(*node))
}

/// The `index`-th element child of the selection's first node.
#[must_use]
pub fn nth_child<'a>(sel: &Selection<'a>, index: usize) -> Option<Selection<'a>> {
    nth(&sel.first().children(), index)
}

/// All child nodes (elements and text) of the selection's first node, in
/// document order.
#[must_use]
pub fn child_nodes<'a>(sel: &Selection<'a>) -> Vec<NodeRef<'a>> {
    sel.nodes()
        .first()
        .map(|node| node.children().into_iter().collect())
        .unwrap_or_default()
}

/// Trimmed text of the first non-blank text node among the direct children.
#[must_use]
pub fn first_text_node(sel: &Selection) -> Option<String> {
    child_nodes(sel)
        .into_iter()
        .filter(NodeRef::is_text)
        .find_map(|node| text::non_empty(&*node.text()))
}

/// Each node of a selection as its own single-node selection.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Querying ===

/// `true` when any descendant matches `selector`.
#[inline]
#[must_use]
pub fn has_match(sel: &Selection, selector: &str) -> bool {
    sel.select(selector).exists()
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_default_to_empty() {
        let doc = parse(r#"<div>no attributes</div>"#);
        let div = doc.select("div");

        assert_eq!(get_attribute(&div, "data-src"), None);
        assert_eq!(attr(&div, "data-src"), "");
        assert_eq!(attr_trimmed(&div, "href"), "");
    }

    #[test]
    fn test_attr_trimmed() {
        let doc = parse(r#"<span data-bangumiid=" 3141 "></span>"#);
        assert_eq!(attr_trimmed(&doc.select("span"), "data-bangumiid"), "3141");
    }

    #[test]
    fn test_operations_on_empty_selection() {
        let doc = parse(r#"<div>content</div>"#);
        let empty = doc.select("span");

        remove(&empty);

        assert_eq!(text(&empty), "");
        assert!(inner_html(&empty).is_empty());
        assert!(nth_child(&empty, 0).is_none());
        assert!(child_nodes(&empty).is_empty());
        assert!(first_text_node(&empty).is_none());
    }

    #[test]
    fn test_nth_child() {
        let doc = parse(r#"<table><tr><td><a href="/a">A</a><a data-x="m">M</a></td></tr></table>"#);
        let td = doc.select("td");

        let second = nth_child(&td, 1).map(|a| attr(&a, "data-x"));
        assert_eq!(second.as_deref(), Some("m"));
        assert!(nth_child(&td, 2).is_none());
    }

    #[test]
    fn test_first_text_node_skips_whitespace_and_elements() {
        let doc = parse("<div class=\"h\">\n  <span>x</span>\n  ANi  <b>y</b></div>");
        assert_eq!(first_text_node(&doc.select("div.h")).as_deref(), Some("ANi"));
    }

    #[test]
    fn test_detached_copy_leaves_source_untouched() {
        let doc = parse(r#"<div id="d"><a>title<span>[1GB]</span></a></div>"#);
        let a = doc.select("#d a");

        let copy = detached(&a);
        let root = detached_root(&copy, "a");
        root.select("span").remove();

        assert_eq!(text(&root), "title");
        assert_eq!(text(&a), "title[1GB]");
    }

    #[test]
    fn test_each_and_has_match() {
        let doc = parse(r#"<ul><li class="active">1</li><li>2</li></ul>"#);
        let items = each(&doc.select("li"));

        assert_eq!(items.len(), 2);
        assert!(has_match(&doc.select("ul"), ".active"));
        assert!(!has_match(&items[1], ".active"));
    }

    #[test]
    fn test_tag_name() {
        let doc = parse(r#"<article><section>content</section></article>"#);
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
        assert!(has_attribute(&parse(r#"<p style="">x</p>"#).select("p"), "style"));
    }
}
