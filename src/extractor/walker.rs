//! Depth-first walk of the parsed tag tree into a block sequence.

use tracing::debug;

use crate::dom::{self, Document, NodeKind, NodeRef};
use crate::error::{Error, Result};
use crate::normalize::prepare_markup;
use crate::options::Options;

use super::state::{Page, ParseState};

/// Parses `html` and segments it into a [`Page`].
///
/// Raw markup is pre-normalized (punctuation, line endings) before parsing.
#[allow(clippy::missing_errors_doc)]
pub fn segment_html(html: &str, options: &Options) -> Result<Page> {
    let document = dom::parse(&prepare_markup(html));
    segment(&document, options)
}

/// Segments a parsed document into a [`Page`].
///
/// Walks pre-order from the `<html>` element, feeding every element, text
/// node, and closing boundary through a fresh [`ParseState`].
#[allow(clippy::missing_errors_doc)]
pub fn segment(document: &Document, options: &Options) -> Result<Page> {
    let mut state = ParseState::new();
    if let Some(root) = dom::root_element(document) {
        descend(&root, &mut state, options.max_tree_depth)?;
    }
    let page = state.into_page();
    debug!(blocks = page.blocks.len(), title = %page.title, "segmented document");
    Ok(page)
}

fn descend(node: &NodeRef, state: &mut ParseState, max_depth: usize) -> Result<()> {
    if state.open_tags() >= max_depth {
        return Err(Error::TooDeep(max_depth));
    }

    let name = dom::tag_name(node).unwrap_or_default();
    let id = dom::get_attribute(node, "id").unwrap_or_default();
    let size = if name == "font" { dom::get_attribute(node, "size") } else { None };
    state.tag_start(&name, &id, size.as_deref())?;

    for child in dom::child_nodes(node) {
        match dom::node_kind(&child) {
            NodeKind::Element => descend(&child, state, max_depth)?,
            NodeKind::Text => state.characters(&dom::text_content(&child)),
            NodeKind::Other => {}
        }
    }

    state.tag_end(&name)
}
