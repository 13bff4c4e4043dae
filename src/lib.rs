//! # rs-boilerpipe
//!
//! Main-content extraction for HTML pages, after the boilerpipe family of
//! shallow-text-feature classifiers.
//!
//! A page is parsed, cut into text blocks at structural tag boundaries, and
//! each block is labeled by word counts, word density, and link density
//! relative to its neighbours. The block judged to be the article body is
//! returned together with a cleaned-up page title.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_boilerpipe::{extract, Strategy};
//!
//! let paragraph = "Main content goes here and keeps going with more words. ".repeat(3);
//! let html = format!(
//!     "<html><head><title>My Article About Rust - Example Site</title></head>\
//!      <body><div>Posted by the editorial team</div>\
//!      <p>{paragraph}</p><p>{paragraph}</p><p>{paragraph}</p></body></html>",
//! );
//!
//! let result = extract(&html)?;
//! assert_eq!(result.title, "My Article About Rust");
//! assert!(result.body.contains("Main content"));
//! assert_eq!(result.strategy, Some(Strategy::Article));
//! # Ok::<(), rs_boilerpipe::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Normalization**: entities, vendor punctuation, whitespace
//! - **Segmentation**: tag-driven block boundaries with tag and id paths
//! - **Classification**: an article strategy, a density strategy, and a
//!   largest-paragraph fallback, tried in that order
//! - **Cleanup**: title echo, dateline, and sentence-fragment stripping

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Text blocks and their labels.
pub mod block;

/// Title derivation and body finishing.
pub mod cleanup;

/// Thin adapter over the `dom_query` tree.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Tree walking into blocks (tag actions, parse state, walker).
pub mod extractor;

/// Labeling, merging, and selection passes.
pub mod heuristics;

/// Entity decoding and whitespace normalization.
pub mod normalize;

// Public API - re-exports
pub use block::{Block, Label};
pub use error::{Error, Result};
pub use extractor::Page;
pub use options::Options;
pub use result::{ExtractResult, Strategy};

/// Extracts the title and main body text of an HTML document using default
/// options.
///
/// Returns an empty [`ExtractResult`] when no content could be identified.
///
/// # Errors
///
/// Fails on structurally broken trees and on documents nested deeper than
/// [`Options::max_tree_depth`].
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the title and main body text with custom options.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::{extract_with_options, Options};
///
/// let options = Options {
///     detect_end_of_text: true,
///     ..Options::default()
/// };
/// let result = extract_with_options("<html><body></body></html>", &options)?;
/// assert!(result.is_empty());
/// # Ok::<(), rs_boilerpipe::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts from raw bytes, decoding them in the charset the document
/// declares (UTF-8 when it declares none).
///
/// ```rust
/// use rs_boilerpipe::extract_bytes;
///
/// let mut html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head>\
///     <body><div>Filed under food and drink today</div>".to_vec();
/// for _ in 0..3 {
///     html.extend_from_slice(b"<p>");
///     html.extend("Coffee was served in the garden all afternoon. ".repeat(4).bytes());
///     html.extend_from_slice(b"</p>");
/// }
/// html.extend_from_slice(b"</body></html>");
///
/// let result = extract_bytes(&html)?;
/// assert_eq!(result.title, "Caf\u{e9}");
/// assert!(result.body.contains("garden"));
/// # Ok::<(), rs_boilerpipe::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Byte-input counterpart of [`extract_with_options`].
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html = encoding::decode_html(html);
    extract_with_options(&html, options)
}

/// Segments an HTML document into its block sequence without classifying
/// it.
#[allow(clippy::missing_errors_doc)]
pub fn segment(html: &str) -> Result<Page> {
    extractor::segment_html(html, &Options::default())
}
