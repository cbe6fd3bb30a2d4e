//! Markdown segmentation for the one-pager layout.
//!
//! Only a narrow subset of markdown is understood:
//!
//! - `# Title` lines (dropped, the page title comes from the render options)
//! - `## Section` headings
//! - numbered items (`1. Item`) with `- bullet` sub-items
//! - any other line, kept as a plain line
//!
//! The parsed blocks are split by index into a left and a right [`Column`].

mod block;
mod segmenter;

pub use block::{Block, Column};
pub use segmenter::{parse_blocks, segment, split_columns};
