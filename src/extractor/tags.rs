//! Tag catalogs and the tag-action table.
//!
//! Every tag the walker meets is looked up in a fixed table that decides
//! whether it cuts the text buffer, pads it, or opens an ignored region.
//! Tags with no entry get [`TagAction::Default`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// What the walker does when entering and leaving a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagAction {
    /// `a`: tracks anchor nesting; nested anchors are rejected.
    Anchor,
    /// Script-like tags whose text is never content.
    Ignore,
    /// `body`: cut and track body nesting.
    Body,
    /// Formatting tags: pad with a space so words do not glue together.
    Inline,
    /// `li`, `h1`-`h3`: cut, label the block with the tag and `heading`.
    Block,
    /// `p`: cut, label the block `maybe_content`.
    Paragraph,
    /// `title`: cut, label `title`, derive the page title.
    Title,
    /// `br`: nothing.
    Nop,
    /// Anything else: cut on both sides.
    Default,
}

/// Tags whose text is excluded from content (`ignore_depth` > 0).
pub static IGNORABLE_TAGS: [&str; 10] = [
    "style", "script", "option", "object", "embed", "applet", "link", "abbr", "acronym",
    "noscript",
];

/// Formatting tags that never cut the buffer.
pub static INLINE_TAGS: [&str; 14] = [
    "strike", "u", "b", "i", "em", "strong", "span", "sup", "code", "tt", "sub", "var", "font",
    "inline",
];

/// Block-level tags that label the block they close.
pub static BLOCK_TAGS: [&str; 4] = ["li", "h1", "h2", "h3"];

/// Emphasis tags whose long direct text runs are treated as pull-quotes.
pub static EMPHASIS_TAGS: [&str; 4] = ["b", "em", "i", "strong"];

/// Tag name to action.
pub static TAG_ACTIONS: LazyLock<HashMap<&'static str, TagAction>> = LazyLock::new(|| {
    let mut actions = HashMap::new();
    actions.insert("a", TagAction::Anchor);
    actions.insert("body", TagAction::Body);
    actions.insert("br", TagAction::Nop);
    actions.insert("title", TagAction::Title);
    actions.insert("p", TagAction::Paragraph);
    actions.extend(INLINE_TAGS.iter().map(|tag| (*tag, TagAction::Inline)));
    actions.extend(BLOCK_TAGS.iter().map(|tag| (*tag, TagAction::Block)));
    // Inserted last: `abbr`/`acronym` are ignored, not inline.
    actions.extend(IGNORABLE_TAGS.iter().map(|tag| (*tag, TagAction::Ignore)));
    actions
});

/// Look up the action for a lowercase tag name.
#[must_use]
pub fn action_for(tag: &str) -> TagAction {
    TAG_ACTIONS.get(tag).copied().unwrap_or(TagAction::Default)
}

/// Check if a tag is an emphasis tag (b, em, i, strong).
#[must_use]
pub fn is_emphasis_tag(tag: &str) -> bool {
    EMPHASIS_TAGS.contains(&tag)
}
