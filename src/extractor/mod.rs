//! Segmentation: turning a parsed document into an ordered block sequence.
//!
//! # Module Structure
//!
//! - `tags`: tag catalogs and the tag-action table
//! - `state`: the per-document accumulator and the resulting [`Page`]
//! - `walker`: pre-order traversal feeding the accumulator
//!
//! # Usage
//!
//! ```rust
//! use rs_boilerpipe::extractor::segment_html;
//! use rs_boilerpipe::Options;
//!
//! let page = segment_html("<title>Hello</title><p>First paragraph.</p>", &Options::default())?;
//! assert_eq!(page.title, "Hello");
//! assert_eq!(page.blocks.len(), 2);
//! # Ok::<(), rs_boilerpipe::Error>(())
//! ```

pub mod state;
pub mod tags;
pub mod walker;

pub use state::{Page, ParseState};
pub use tags::{action_for, TagAction};
pub use walker::{segment, segment_html};
