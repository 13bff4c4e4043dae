//! Error types for rs-boilerpipe.
//!
//! Extraction fails only when the tag tree cannot be segmented safely.
//! A page with no identifiable content is not an error: it yields an
//! empty [`ExtractResult`](crate::ExtractResult).

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A closing tag did not match the innermost open tag.
    #[error("unbalanced tag nesting: expected </{expected}>, found </{found}>")]
    UnbalancedTags {
        /// Tag on top of the open-tag stack.
        expected: String,
        /// Tag that was being closed.
        found: String,
    },

    /// An anchor was opened while another anchor was still open.
    #[error("anchor tags cannot be nested")]
    NestedAnchor,

    /// The tag tree is nested deeper than `Options::max_tree_depth`.
    #[error("tag tree nested deeper than {0} levels")]
    TooDeep(usize),
}

impl Error {
    /// Returns `true` for malformed tag structure (unbalanced tags, nested anchors).
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::UnbalancedTags { .. } | Self::NestedAnchor)
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
