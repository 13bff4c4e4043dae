//! Configuration options for content extraction.
//!
//! The `Options` struct carries the word-count parameters of the heuristic
//! passes and switches for the optional passes. `Options::default()`
//! reproduces the standard article and simple pipelines.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     detect_end_of_text: true,
///     paragraph_fallback: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Maximum tag nesting depth the tree walker will descend into.
    ///
    /// Deeper documents fail with `Error::TooDeep` instead of recursing
    /// without bound.
    ///
    /// Default: `512`
    pub max_tree_depth: usize,

    /// Words a block must exceed to be picked by the largest-block pass.
    ///
    /// Default: `150`
    pub largest_block_min_words: usize,

    /// Content words that must precede an end-of-text marker before the
    /// rest of the page is ignored.
    ///
    /// Default: `60`
    pub after_content_min_words: usize,

    /// Minimum words for a block at the main block's tag level to be
    /// promoted to content.
    ///
    /// Default: `100`
    pub taglevel_min_words: usize,

    /// Label end-of-text markers ("post a comment", copyright lines, ...)
    /// before the article strategy runs.
    ///
    /// Default: `false`
    pub detect_end_of_text: bool,

    /// Ignore blocks starting with site chrome phrases ("Sign in", ...)
    /// in both strategies.
    ///
    /// Default: `false`
    pub ignore_chrome_text: bool,

    /// Fall back to the largest link-free paragraph when both heuristic
    /// strategies decline.
    ///
    /// Default: `true`
    pub paragraph_fallback: bool,

    /// Minimum words for the paragraph fallback to accept a block.
    ///
    /// Default: `30`
    pub fallback_min_words: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_tree_depth: 512,
            largest_block_min_words: 150,
            after_content_min_words: 60,
            taglevel_min_words: 100,
            detect_end_of_text: false,
            ignore_chrome_text: false,
            paragraph_fallback: true,
            fallback_min_words: 30,
        }
    }
}
