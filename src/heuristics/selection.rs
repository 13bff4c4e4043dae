//! Passes that grow or cut the content region around already-marked blocks.

use crate::block::{Block, Label};

use super::{mark, unmark_ignored};

/// Labels the biggest content block `likely_content` and spreads `content`
/// to its same-depth neighbours.
///
/// Candidates are blocks that are content or `maybe_content` with more than
/// `min_words` words; the later block wins a tie. With no candidate the pass
/// does nothing. Otherwise every block gets `maybe_content`, and the scan
/// outward in each direction labels same-depth blocks `content` until it
/// reaches a shallower block.
pub fn largest_block(blocks: &mut [Block], min_words: usize) {
    let mut best: Option<(usize, usize)> = None;
    for (i, block) in blocks.iter().enumerate() {
        if (block.is_content() || block.has(Label::MaybeContent))
            && block.word_count > min_words
            && best.is_none_or(|(words, _)| block.word_count >= words)
        {
            best = Some((block.word_count, i));
        }
    }
    let Some((_, main)) = best else {
        return;
    };

    mark(&mut blocks[main], Label::LikelyContent, "largest_block");
    for block in blocks.iter_mut() {
        block.label(Label::MaybeContent);
    }

    let depth = blocks[main].tag_depth();
    let (before, rest) = blocks.split_at_mut(main);
    let after = &mut rest[1..];
    for adjacent in before.iter_mut().rev() {
        if !spread_content(adjacent, depth) {
            break;
        }
    }
    for adjacent in after.iter_mut() {
        if !spread_content(adjacent, depth) {
            break;
        }
    }
}

/// Returns `false` once the scan has climbed above `depth`.
fn spread_content(block: &mut Block, depth: usize) -> bool {
    let here = block.tag_depth();
    if here < depth {
        return false;
    }
    if here == depth {
        mark(block, Label::Content, "largest_block");
    }
    true
}

/// Ignores the headings that open the sequence ahead of any content.
pub fn ignore_trailing_headlines(blocks: &mut [Block]) {
    for block in blocks.iter_mut() {
        if block.is_content() || !block.has(Label::Heading) {
            break;
        }
        mark(block, Label::Ignore, "ignore_trailing_headlines");
    }
}

/// Ignores everything after the first `end_of_text` block reached once
/// more than `min_words` words of content have been seen.
pub fn ignore_after_content(blocks: &mut [Block], min_words: usize) {
    let mut words = 0;
    let mut cut = None;
    for (i, block) in blocks.iter().enumerate() {
        if block.is_content() {
            words += block.word_count;
        }
        if block.has(Label::EndOfText) && words > min_words {
            cut = Some(i + 1);
            break;
        }
    }
    if let Some(cut) = cut {
        for block in &mut blocks[cut..] {
            mark(block, Label::Ignore, "ignore_after_content");
        }
    }
}

/// Promotes `maybe_content` and `likely_content` blocks following a title
/// block that is itself content.
pub fn title_starts_content(blocks: &mut [Block]) {
    let Some(title) = blocks
        .iter()
        .position(|block| block.has(Label::Title) && block.is_content())
    else {
        return;
    };
    for block in &mut blocks[title + 1..] {
        if (block.has(Label::MaybeContent) || block.has(Label::LikelyContent)) && !block.is_content() {
            unmark_ignored(block, "title_starts_content");
        }
    }
}

/// Promotes blocks at the tag depth of the first `likely_content` block that
/// carry at least `min_words` words.
pub fn content_by_taglevel(blocks: &mut [Block], min_words: usize) {
    let Some(depth) = blocks
        .iter()
        .find(|block| block.has(Label::LikelyContent))
        .map(Block::tag_depth)
    else {
        return;
    };
    for block in blocks.iter_mut() {
        if !block.is_content() && block.tag_depth() == depth && block.word_count >= min_words {
            unmark_ignored(block, "content_by_taglevel");
        }
    }
}
