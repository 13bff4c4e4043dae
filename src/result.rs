//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Heuristic pipeline that produced an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Multi-heuristic article pipeline (tried first).
    Article,
    /// Density-only pipeline.
    Simple,
    /// Largest link-free paragraph, used when both pipelines decline.
    Paragraph,
}

/// Result of content extraction from an HTML document.
///
/// `title` and `body` are either both non-empty or both empty; empty means
/// the extractor declined to produce content for this page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Cleaned page title.
    pub title: String,

    /// Main body text.
    pub body: String,

    /// Pipeline that produced the body, `None` when nothing was found.
    pub strategy: Option<Strategy>,
}

impl ExtractResult {
    /// Returns `true` when no content was identified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }
}
