//! Passes that fold adjacent blocks together.

use tracing::trace;

use crate::block::{Block, Label};

use super::mark;

/// Combined word count two blocks must exceed to be density-merged.
const DENSITY_MERGE_MIN_WORDS: usize = 30;

/// Merges adjacent blocks of similar word density.
///
/// For each adjacent pair with text on both sides and more than 30 words
/// together, if `prev.word_density / curr.word_density` lies strictly
/// between 0.5 and 2.0 the later block absorbs the earlier one
/// (`curr.merge(prev)`) and the earlier one is ignored. Absorbed text
/// accumulates down a chain of similar blocks.
pub fn merge_text_density(blocks: &mut [Block]) {
    for i in 1..blocks.len() {
        let (head, tail) = blocks.split_at_mut(i);
        let prev = &mut head[i - 1];
        let curr = &mut tail[0];

        if prev.word_count == 0
            || curr.word_count == 0
            || prev.word_count + curr.word_count <= DENSITY_MERGE_MIN_WORDS
        {
            continue;
        }
        let ratio = prev.word_density / curr.word_density;
        if ratio > 0.5 && ratio < 2.0 {
            trace!(prev = prev.word_density, curr = curr.word_density, "merge_text_density");
            curr.merge(prev);
            mark(prev, Label::Ignore, "merge_text_density");
        }
    }
}

/// Folds runs of content blocks into a trailing accumulator.
///
/// A block is passed over (and becomes the new accumulator) when it is not
/// content, when `content_only` is set and either side is not content, or
/// when `same_depth_only` is set and the tag depths differ. Otherwise the
/// accumulator absorbs it and it is ignored; the accumulator stays put.
pub fn merge_blocks(blocks: &mut [Block], content_only: bool, same_depth_only: bool) {
    let mut acc: Option<usize> = None;

    for i in 0..blocks.len() {
        let curr_content = blocks[i].is_content();
        let Some(a) = acc else {
            // Nothing to absorb into yet
            acc = Some(i);
            continue;
        };
        let acc_content = blocks[a].is_content();
        let depth_differs = blocks[a].tag_depth() != blocks[i].tag_depth();

        if !curr_content
            || (content_only && !acc_content)
            || (same_depth_only && depth_differs)
        {
            acc = Some(i);
            continue;
        }

        let (head, tail) = blocks.split_at_mut(i);
        head[a].merge(&tail[0]);
        mark(&mut tail[0], Label::Ignore, "merge_blocks");
    }
}
