//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the three things the tree
//! walker needs from the parser: node kind, lowercase tag name, and
//! attribute lookup. Parsing is html5ever's forgiving tree construction, so
//! unclosed and misnested tags are repaired before traversal.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Kind of a child node as seen by the tree walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element with a tag name.
    Element,
    /// Character data.
    Text,
    /// Comments, doctypes, processing instructions.
    Other,
}

/// Parse an HTML string into a document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<html>` element, which the parser always synthesizes.
#[must_use]
pub fn root_element(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("html").nodes().first().copied()
}

/// Classify a node.
#[must_use]
pub fn node_kind(node: &NodeRef) -> NodeKind {
    if node.is_element() {
        NodeKind::Element
    } else if node.is_text() {
        NodeKind::Text
    } else {
        NodeKind::Other
    }
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

/// Get all child nodes (elements, text, comments) in document order.
#[inline]
#[must_use]
pub fn child_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
}

/// Text of a character-data node.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}
