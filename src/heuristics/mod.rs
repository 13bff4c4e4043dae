//! Block classification heuristics and the two strategies built from them.
//!
//! Every pass takes the ordered block sequence and mutates labels (and, for
//! the merging passes, text) in place. Passes are composed by
//! [`article_filter`] and [`simple_filter`]; each one sees the effects of
//! the passes before it.

pub mod markers;
pub mod merging;
pub mod selection;

use tracing::{debug, trace};

use crate::block::{Block, Features, Label};
use crate::extractor::Page;
use crate::options::Options;

pub use markers::{
    content_marker, density_marker, ignore_comments, li_tags_are_content, terminating_blocks,
};
pub use merging::{merge_blocks, merge_text_density};
pub use selection::{
    content_by_taglevel, ignore_after_content, ignore_trailing_headlines, largest_block,
    title_starts_content,
};

/// Features of the blocks on either side of `i`, with the empty default
/// standing in past either end.
pub(crate) fn neighbours(blocks: &[Block], i: usize) -> (Features, Features) {
    let prev = i
        .checked_sub(1)
        .and_then(|j| blocks.get(j))
        .map(Block::features)
        .unwrap_or_default();
    let next = blocks.get(i + 1).map(Block::features).unwrap_or_default();
    (prev, next)
}

/// Adds `label` to `block`, logging the pass responsible.
pub(crate) fn mark(block: &mut Block, label: Label, pass: &'static str) {
    trace!(pass, %label, words = block.word_count, "label added");
    block.label(label);
}

/// Promotes `block` to content, lifting any `ignore` label.
pub(crate) fn unmark_ignored(block: &mut Block, pass: &'static str) {
    if block.has(Label::Ignore) {
        trace!(pass, words = block.word_count, "ignore lifted");
        block.unlabel(Label::Ignore);
    }
    mark(block, Label::Content, pass);
}

/// Blocks captured under `script`, `style` and the other ignorable tags are
/// dropped before any strategy runs.
fn visible_blocks(page: &Page) -> Vec<Block> {
    page.blocks
        .iter()
        .filter(|block| block.ignore_depth == 0)
        .cloned()
        .collect()
}

fn good_blocks(blocks: &[Block]) -> Vec<Block> {
    blocks.iter().filter(|block| block.is_content()).cloned().collect()
}

/// Runs the density-driven strategy.
///
/// `merge_text_density`, `merge_blocks`, `density_marker`, then
/// `largest_block` to grow content around the biggest block.
#[must_use]
pub fn simple_filter(page: &Page, options: &Options) -> Page {
    let mut blocks = visible_blocks(page);
    if options.ignore_chrome_text {
        ignore_comments(&mut blocks);
    }

    merge_text_density(&mut blocks);
    merge_blocks(&mut blocks, false, false);
    density_marker(&mut blocks);

    largest_block(&mut blocks, options.largest_block_min_words);
    let good = good_blocks(&blocks);

    debug!(blocks = blocks.len(), good = good.len(), "simple filter");
    Page {
        title: page.title.clone(),
        blocks,
        good,
    }
}

/// Runs the word-count-driven strategy.
///
/// Content and end-of-text marking, headline and trailer removal, two merge
/// sweeps, then the passes that grow content out from the largest block.
#[must_use]
pub fn article_filter(page: &Page, options: &Options) -> Page {
    let mut blocks = visible_blocks(page);
    if options.ignore_chrome_text {
        ignore_comments(&mut blocks);
    }
    if options.detect_end_of_text {
        terminating_blocks(&mut blocks);
    }

    content_marker(&mut blocks);
    ignore_after_content(&mut blocks, options.after_content_min_words);
    ignore_trailing_headlines(&mut blocks);
    merge_blocks(&mut blocks, false, false);

    blocks.retain(Block::is_content);
    merge_blocks(&mut blocks, true, true);
    largest_block(&mut blocks, options.largest_block_min_words);
    title_starts_content(&mut blocks);
    content_by_taglevel(&mut blocks, options.taglevel_min_words);
    li_tags_are_content(&mut blocks);

    let good = good_blocks(&blocks);
    debug!(blocks = blocks.len(), good = good.len(), "article filter");
    Page {
        title: page.title.clone(),
        blocks,
        good,
    }
}
