//! Parse state for one document.
//!
//! `ParseState` is the accumulator the tree walker owns while it traverses
//! a document: the open-tag and id stacks, nesting counters, the font-size
//! stack, the text buffer, and the finished blocks. It is created per
//! document and turned into a [`Page`] when the walk completes.

use tracing::trace;

use crate::block::{word_count, Block, Label};
use crate::cleanup::derive_title;
use crate::error::{Error, Result};
use crate::patterns::{FONT_SIZE_ABSOLUTE, FONT_SIZE_DELTA};

use super::tags::{action_for, is_emphasis_tag, TagAction};

/// Font size in effect before any `<font>` tag.
pub const BASE_FONT_SIZE: i32 = 3;

/// Emphasized direct text runs longer than this many words become their own
/// ignored block.
pub const EMPHASIS_RUN_WORDS: usize = 5;

/// Walker output: the page title and every captured block in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Title derived from the `<title>` block.
    pub title: String,
    /// All blocks, including ones under ignorable tags.
    pub blocks: Vec<Block>,
    /// Blocks a strategy selected as content. Empty until a strategy runs.
    pub good: Vec<Block>,
}

/// Mutable traversal state.
#[derive(Debug)]
pub struct ParseState {
    tags: Vec<String>,
    ids: Vec<String>,
    ignore_depth: usize,
    anchor_depth: usize,
    body_depth: usize,
    font_sizes: Vec<i32>,
    buffer: String,
    /// Words appended to `buffer` while inside an anchor.
    anchored_words: usize,
    blocks: Vec<Block>,
    title: String,
}

impl ParseState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            ids: Vec::new(),
            ignore_depth: 0,
            anchor_depth: 0,
            body_depth: 0,
            font_sizes: vec![BASE_FONT_SIZE],
            buffer: String::new(),
            anchored_words: 0,
            blocks: Vec::new(),
            title: String::new(),
        }
    }

    /// Emits the buffered text as a block carrying `labels`, then clears the
    /// buffer. Returns `false` (and emits nothing) for a blank buffer.
    ///
    /// Inline padding spaces at either end are dropped; edge newlines stay,
    /// since they count as lines.
    pub fn flush(&mut self, labels: &[Label]) -> bool {
        let emitted = !self.buffer.trim().is_empty();
        if emitted {
            let mut block = Block::new(
                self.buffer.trim_matches(' '),
                self.tags.len() + 1,
                self.ignore_depth,
                self.tags.clone(),
                self.ids.clone(),
            );
            block.anchored_words = self.anchored_words.min(block.word_count);
            for label in labels {
                block.label(*label);
            }
            trace!(depth = block.depth, labels = ?block.labels, text = %block.text, "block");
            self.blocks.push(block);
        }
        self.buffer.clear();
        self.anchored_words = 0;
        emitted
    }

    /// Enters a tag. `id` is the element's `id` attribute (empty if absent),
    /// `size` its `size` attribute.
    pub fn tag_start(&mut self, name: &str, id: &str, size: Option<&str>) -> Result<()> {
        let action = action_for(name);
        self.tags.push(name.to_string());
        self.ids.push(id.to_string());

        match action {
            TagAction::Anchor => {
                if self.anchor_depth > 0 {
                    return Err(Error::NestedAnchor);
                }
                self.anchor_depth += 1;
            }
            TagAction::Ignore => {
                self.flush(&[]);
                self.ignore_depth += 1;
            }
            TagAction::Body => {
                self.flush(&[]);
                self.body_depth += 1;
            }
            TagAction::Inline => {
                self.pad_buffer(trim_spaces);
                if name == "font" {
                    let size = apply_font_size(self.font_size(), size);
                    self.font_sizes.push(size);
                }
            }
            TagAction::Block | TagAction::Paragraph | TagAction::Title | TagAction::Default => {
                self.flush(&[]);
            }
            TagAction::Nop => {}
        }
        Ok(())
    }

    /// Appends character data to the buffer.
    pub fn characters(&mut self, text: &str) {
        if text.trim().starts_with("html PUBLIC") {
            // DOCTYPE leaking through a malformed parse
            return;
        }
        if self.tags.last().is_some_and(|tag| is_emphasis_tag(tag))
            && word_count(text) > EMPHASIS_RUN_WORDS
        {
            self.flush(&[]);
            self.append(text);
            self.flush(&[Label::Ignore]);
            return;
        }
        self.append(text);
    }

    fn append(&mut self, text: &str) {
        if self.anchor_depth > 0 {
            self.anchored_words += word_count(text);
        }
        self.buffer.push_str(text);
    }

    /// Leaves a tag. Fails if `name` is not the innermost open tag.
    pub fn tag_end(&mut self, name: &str) -> Result<()> {
        match action_for(name) {
            TagAction::Anchor => {
                self.anchor_depth = self.anchor_depth.saturating_sub(1);
            }
            TagAction::Ignore => {
                self.flush(&[]);
                self.ignore_depth = self.ignore_depth.saturating_sub(1);
            }
            TagAction::Body => {
                self.flush(&[]);
                self.body_depth = self.body_depth.saturating_sub(1);
            }
            TagAction::Inline => {
                self.pad_buffer(str::trim);
                if name == "font" && self.font_sizes.len() > 1 {
                    self.font_sizes.pop();
                }
            }
            TagAction::Block => {
                let mut labels = vec![Label::Heading];
                labels.extend(Label::for_block_tag(name));
                self.flush(&labels);
            }
            TagAction::Paragraph => {
                self.flush(&[Label::MaybeContent]);
            }
            TagAction::Title => {
                if self.flush(&[Label::Title]) {
                    if let Some(block) = self.blocks.last() {
                        self.title = derive_title(&block.text);
                    }
                }
            }
            TagAction::Default => {
                self.flush(&[]);
            }
            TagAction::Nop => {}
        }

        match self.tags.pop() {
            Some(open) if open == name => {
                self.ids.pop();
                Ok(())
            }
            Some(open) => Err(Error::UnbalancedTags {
                expected: open,
                found: name.to_string(),
            }),
            None => Err(Error::UnbalancedTags {
                expected: String::new(),
                found: name.to_string(),
            }),
        }
    }

    /// Number of currently open tags.
    #[must_use]
    pub fn open_tags(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn ignore_depth(&self) -> usize {
        self.ignore_depth
    }

    #[must_use]
    pub fn anchor_depth(&self) -> usize {
        self.anchor_depth
    }

    #[must_use]
    pub fn body_depth(&self) -> usize {
        self.body_depth
    }

    /// Font size in effect at the current position.
    #[must_use]
    pub fn font_size(&self) -> i32 {
        self.font_sizes.last().copied().unwrap_or(BASE_FONT_SIZE)
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Flushes any trailing text and hands over the finished page.
    #[must_use]
    pub fn into_page(mut self) -> Page {
        self.flush(&[]);
        Page {
            title: self.title,
            blocks: self.blocks,
            good: Vec::new(),
        }
    }

    /// Trims both ends with `trim` and appends one space, so words on either
    /// side of an inline tag stay apart. An empty buffer stays empty.
    fn pad_buffer(&mut self, trim: fn(&str) -> &str) {
        let trimmed = trim(&self.buffer);
        if trimmed.is_empty() {
            self.buffer.clear();
            return;
        }
        if trimmed.len() != self.buffer.len() {
            self.buffer = format!("{trimmed} ");
        } else {
            self.buffer.push(' ');
        }
    }
}

fn trim_spaces(text: &str) -> &str {
    text.trim_matches(' ')
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a `<font size>` attribute to the enclosing size.
///
/// Accepts `smaller`/`larger` (±1), `+N`/`-N` deltas, and absolute `N`;
/// anything else keeps the enclosing size.
#[must_use]
pub fn apply_font_size(current: i32, size: Option<&str>) -> i32 {
    let Some(size) = size.map(str::trim).filter(|s| !s.is_empty()) else {
        return current;
    };
    match size {
        "smaller" => current - 1,
        "larger" => current + 1,
        _ => {
            if let Some(delta) = FONT_SIZE_DELTA.captures(size) {
                delta[1]
                    .parse::<i32>()
                    .ok()
                    .and_then(|d| current.checked_add(d))
                    .unwrap_or(current)
            } else if let Some(absolute) = FONT_SIZE_ABSOLUTE.captures(size) {
                absolute[1].parse::<i32>().unwrap_or(current)
            } else {
                current
            }
        }
    }
}
