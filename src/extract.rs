//! Strategy selection: run the pipelines over one segmented page and pick
//! the body text.

use std::cmp::Reverse;

use tracing::debug;

use crate::block::{Block, Label};
use crate::cleanup::clean_body;
use crate::error::Result;
use crate::extractor::{segment_html, Page};
use crate::heuristics::markers::MAX_LINK_DENSITY;
use crate::heuristics::{article_filter, simple_filter};
use crate::options::Options;
use crate::result::{ExtractResult, Strategy};

/// Segments `html` once and tries each strategy in turn, returning the
/// first whose cleaned title and body are both non-empty.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let page = segment_html(html, options)?;
    if page.title.is_empty() {
        debug!("no title, nothing to extract");
        return Ok(ExtractResult::default());
    }

    let mut strategies = vec![Strategy::Article, Strategy::Simple];
    if options.paragraph_fallback {
        strategies.push(Strategy::Paragraph);
    }

    for strategy in strategies {
        let Some(body) = select_body(&page, strategy, options) else {
            debug!(?strategy, "strategy found no body");
            continue;
        };
        let body = clean_body(&body, &page.title);
        if body.is_empty() {
            debug!(?strategy, "body empty after cleanup");
            continue;
        }
        debug!(?strategy, words = body.split_whitespace().count(), "extracted body");
        return Ok(ExtractResult {
            title: page.title.clone(),
            body,
            strategy: Some(strategy),
        });
    }

    Ok(ExtractResult::default())
}

fn select_body(page: &Page, strategy: Strategy, options: &Options) -> Option<String> {
    match strategy {
        Strategy::Article => article_body(&article_filter(page, options)),
        Strategy::Simple => simple_body(&simple_filter(page, options)),
        Strategy::Paragraph => paragraph_body(page, options.fallback_min_words),
    }
}

/// The `likely_content` block if one survived, else the first
/// `maybe_content` block in document order.
fn article_body(page: &Page) -> Option<String> {
    let mut by_size: Vec<&Block> = page.good.iter().collect();
    by_size.sort_by_key(|block| Reverse(block.word_count));

    by_size
        .into_iter()
        .find(|block| block.has(Label::LikelyContent))
        .or_else(|| page.good.iter().find(|block| block.has(Label::MaybeContent)))
        .map(|block| block.text.clone())
}

/// The biggest content block; the later one on a tie.
fn simple_body(page: &Page) -> Option<String> {
    let mut by_size: Vec<&Block> = page.good.iter().collect();
    by_size.sort_by_key(|block| block.word_count);
    by_size.last().map(|block| block.text.clone())
}

/// The biggest mostly link-free paragraph of at least `min_words` words.
///
/// Anchors inside a `<p>` close before it flushes, so `link_density` stays
/// zero there; the anchored-word share is what keeps link strips out.
fn paragraph_body(page: &Page, min_words: usize) -> Option<String> {
    page.blocks
        .iter()
        .filter(|block| {
            block.ignore_depth == 0
                && !block.has(Label::Ignore)
                && block.has(Label::MaybeContent)
                && block.link_density <= MAX_LINK_DENSITY
                && block.anchor_share() <= MAX_LINK_DENSITY
                && block.word_count >= min_words
        })
        .max_by_key(|block| block.word_count)
        .map(|block| block.text.clone())
}
