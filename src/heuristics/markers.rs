//! Labeling passes driven by block features: density, word counts, and
//! boilerplate phrases.

use crate::block::{Block, Features, Label};
use crate::patterns::COMMENT_COUNT;

use super::{mark, neighbours, unmark_ignored};

/// Highest link density a block may have to be content.
pub const MAX_LINK_DENSITY: f64 = 0.333_333;

/// Highest link density of the predecessor for the plain-text branch.
pub const MAX_PREV_LINK_DENSITY: f64 = 0.555_556;

/// Boilerplate lead-ins that end the article text.
const END_OF_TEXT_PREFIXES: [&str; 12] = [
    "comments",
    "\u{a9} reuters",
    "please rate this",
    "post a comment",
    "what you think",
    "add your comment",
    "add comment",
    "reader views",
    "have your say",
    "reader comments",
    "r\u{e4}tta artikeln",
    "thanks for your comments - this feedback is now closed",
];

/// Lone chrome phrases seen in the wild ("Create AccountSign In" is YouTube).
const CHROME_PREFIXES: [&str; 4] = [
    "sign in",
    "forgot your password?",
    "create accountsign in",
    "you are using an outdated browser",
];

/// Labels `content` by word and link density relative to the neighbours.
pub fn density_marker(blocks: &mut [Block]) {
    for i in 0..blocks.len() {
        let (prev, next) = neighbours(blocks, i);
        if is_dense_text(&blocks[i].features(), &prev, &next) {
            mark(&mut blocks[i], Label::Content, "density_marker");
        }
    }
}

fn is_dense_text(curr: &Features, prev: &Features, next: &Features) -> bool {
    if curr.link_density > MAX_LINK_DENSITY || prev.link_density > MAX_PREV_LINK_DENSITY {
        return false;
    }
    if curr.word_density <= 9.0 {
        next.word_density > 10.0 || prev.word_density > 4.0
    } else {
        next.word_density > 0.0
    }
}

/// Labels `content` / `maybe_content` by word counts of the block and its
/// neighbours. Sees labels this pass added to the predecessor.
pub fn content_marker(blocks: &mut [Block]) {
    for i in 0..blocks.len() {
        let curr = blocks[i].features();
        if curr.link_density > MAX_LINK_DENSITY {
            continue;
        }
        let (prev, next) = neighbours(blocks, i);
        let block = &mut blocks[i];

        if prev.link_density <= MAX_PREV_LINK_DENSITY {
            if curr.word_count > 16 && next.word_count > 15 && prev.word_count > 4 {
                mark(block, Label::Content, "content_marker1");
            } else if prev.is_content && curr.word_count > 20 && next.word_count > 7 {
                mark(block, Label::MaybeContent, "content_marker");
            }
        } else if curr.word_count > 40 && next.word_count > 17 {
            mark(block, Label::Content, "content_marker2");
        } else if curr.word_count > 100 && block.has(Label::MaybeContent) {
            mark(block, Label::Content, "content_marker3");
        }
    }
}

/// Labels `end_of_text` on short blocks that open a comments section or
/// footer, and on comment links.
pub fn terminating_blocks(blocks: &mut [Block]) {
    for block in blocks.iter_mut() {
        let text = block.text.trim().to_lowercase();
        let terminates = if block.word_count < 15 && block.len() >= 8 {
            COMMENT_COUNT.is_match(&text)
                || END_OF_TEXT_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
        } else {
            block.link_density > 0.99 && block.link_density < 1.01 && text.starts_with("comment")
        };
        if terminates {
            mark(block, Label::EndOfText, "terminating_blocks");
        }
    }
}

/// Ignores blocks that open with login or browser-warning chrome.
pub fn ignore_comments(blocks: &mut [Block]) {
    for block in blocks.iter_mut() {
        let text = block.text.trim_start().to_lowercase();
        if CHROME_PREFIXES.iter().any(|prefix| text.starts_with(prefix)) {
            mark(block, Label::Ignore, "ignore_comments");
        }
    }
}

/// Un-ignores and labels `content` list items nested under the main block.
///
/// The threshold is the tag depth of the last `likely_content` block seen;
/// any block that neither sets it nor qualifies resets it.
pub fn li_tags_are_content(blocks: &mut [Block]) {
    let mut threshold: Option<usize> = None;
    for block in blocks.iter_mut() {
        if block.is_content() && block.has(Label::LikelyContent) {
            threshold = Some(block.tag_depth());
        } else if threshold.is_some_and(|depth| block.tag_depth() > depth)
            && block.has(Label::MaybeContent)
            && block.has(Label::ListItem)
            && block.link_density == 0.0
        {
            unmark_ignored(block, "li_tags_are_content");
        } else {
            threshold = None;
        }
    }
}
