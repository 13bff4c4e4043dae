//! Text blocks and their label sets.
//!
//! A [`Block`] is one contiguous span of text found between structural tag
//! boundaries, together with the tag path it was captured under and the
//! density features the heuristics classify it by.

use std::fmt;
use std::ops::BitOr;

use crate::normalize::normalize;

/// Classification labels accumulated by the tree walker and heuristics.
///
/// Labels are never exclusive: a block may be `Content` and `Ignore` at
/// once, in which case `Ignore` wins (see [`Block::is_content`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Content,
    MaybeContent,
    LikelyContent,
    Ignore,
    Heading,
    Title,
    EndOfText,
    /// Captured from an `<li>`.
    ListItem,
    /// Captured from an `<h1>`.
    H1,
    /// Captured from an `<h2>`.
    H2,
    /// Captured from an `<h3>`.
    H3,
}

impl Label {
    const ALL: [Label; 11] = [
        Label::Content,
        Label::MaybeContent,
        Label::LikelyContent,
        Label::Ignore,
        Label::Heading,
        Label::Title,
        Label::EndOfText,
        Label::ListItem,
        Label::H1,
        Label::H2,
        Label::H3,
    ];

    /// Label naming a block-level tag, for the tags that carry one.
    #[must_use]
    pub fn for_block_tag(tag: &str) -> Option<Self> {
        match tag {
            "li" => Some(Self::ListItem),
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            _ => None,
        }
    }

    /// Snake-case name, as used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::MaybeContent => "maybe_content",
            Self::LikelyContent => "likely_content",
            Self::Ignore => "ignore",
            Self::Heading => "heading",
            Self::Title => "title",
            Self::EndOfText => "end_of_text",
            Self::ListItem => "li",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Small bit set of [`Label`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LabelSet(u16);

impl LabelSet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn contains(self, label: Label) -> bool {
        self.0 & label.bit() != 0
    }

    pub fn insert(&mut self, label: Label) {
        self.0 |= label.bit();
    }

    pub fn remove(&mut self, label: Label) {
        self.0 &= !label.bit();
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Label> {
        Label::ALL.into_iter().filter(move |label| self.contains(*label))
    }
}

impl BitOr for LabelSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Snapshot of the features a neighbouring block contributes to a decision.
///
/// The default value stands in for the virtual empty block before the first
/// and after the last block of a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Features {
    pub word_count: usize,
    pub word_density: f64,
    pub link_density: f64,
    pub tag_depth: usize,
    pub is_content: bool,
}

/// One contiguous span of normalized text plus structural and density metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// Normalized text, never raw markup.
    pub text: String,
    /// Open-tag depth + 1 when the block was captured.
    pub depth: usize,
    /// Enclosing ignorable tags (`script`, `style`, ...) when captured.
    pub ignore_depth: usize,
    /// Enclosing tag names, outermost first.
    pub tag_path: Vec<String>,
    /// `id` attributes parallel to `tag_path`, empty where absent.
    pub id_path: Vec<String>,
    pub labels: LabelSet,
    pub word_count: usize,
    pub line_count: usize,
    pub word_density: f64,
    pub link_density: f64,
    /// Words captured while an `<a>` was open.
    pub anchored_words: usize,
}

impl Block {
    /// Builds a block from raw buffered text, normalizing it and computing
    /// the derived metrics.
    #[must_use]
    pub fn new(
        text: &str,
        depth: usize,
        ignore_depth: usize,
        tag_path: Vec<String>,
        id_path: Vec<String>,
    ) -> Self {
        let mut block = Self {
            text: normalize(text),
            depth,
            ignore_depth,
            tag_path,
            id_path,
            ..Self::default()
        };
        block.recalc();
        block
    }

    /// Recomputes word count, line count, and both densities from `text`
    /// and `tag_path`.
    pub fn recalc(&mut self) {
        self.word_count = word_count(&self.text);
        self.line_count = self.text.matches('\n').count() + 1;
        self.word_density = if self.word_count == 0 {
            0.0
        } else {
            self.word_count as f64 / self.line_count as f64
        };
        // Words per enclosing anchor, not the share of words inside links.
        // The pass thresholds are calibrated against this figure.
        let anchors = self.tag_path.iter().filter(|tag| *tag == "a").count();
        self.link_density = if anchors == 0 {
            0.0
        } else {
            self.word_count as f64 / anchors as f64
        };
    }

    /// Appends `other`'s text (space-joined) and labels to `self`.
    ///
    /// The caller marks `other` as consumed.
    pub fn merge(&mut self, other: &Block) {
        self.text.push(' ');
        self.text.push_str(&other.text);
        self.labels = self.labels | other.labels;
        self.anchored_words += other.anchored_words;
        self.recalc();
    }

    /// `content` and not `ignore`.
    #[must_use]
    pub fn is_content(&self) -> bool {
        self.labels.contains(Label::Content) && !self.labels.contains(Label::Ignore)
    }

    #[must_use]
    pub fn has(&self, label: Label) -> bool {
        self.labels.contains(label)
    }

    pub fn label(&mut self, label: Label) {
        self.labels.insert(label);
    }

    pub fn unlabel(&mut self, label: Label) {
        self.labels.remove(label);
    }

    /// Length of the tag path.
    #[must_use]
    pub fn tag_depth(&self) -> usize {
        self.tag_path.len()
    }

    /// Share of the words that sat inside anchors, in `[0, 1]`.
    ///
    /// Unlike `link_density`, this sees anchors that closed before the
    /// block was flushed.
    #[must_use]
    pub fn anchor_share(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.anchored_words.min(self.word_count) as f64 / self.word_count as f64
        }
    }

    /// Character count of the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn features(&self) -> Features {
        Features {
            word_count: self.word_count,
            word_density: self.word_density,
            link_density: self.link_density,
            tag_depth: self.tag_depth(),
            is_content: self.is_content(),
        }
    }
}

/// Whitespace-delimited word tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
