//! Layout for the one-page outline: font sizing, emoji tagging, paragraph
//! markup, line wrapping and placement of the title and two-column table.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Table row has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Invalid font size {0}: sizes must be positive and finite.")]
    InvalidFontSize(f32),
    #[error("Columns of {0:.2}pt are too narrow for the configured padding and indent.")]
    ContentTooNarrow(f32),
}

pub mod config;
pub mod elements;
pub mod emoji;
pub mod engine;
pub mod fonts;
pub mod markup;
mod metrics;
pub mod output;
pub mod sizing;
pub mod style;
pub mod table;
pub mod text;

pub use self::config::{CellPadding, LayoutConfig};
pub use self::elements::{LayoutElement, PositionedElement, RectElement, RuleElement, TextElement};
pub use self::emoji::{EMOJI_RANGES, is_emoji, tag_emoji};
pub use self::engine::{LayoutEngine, LayoutRequest};
pub use self::fonts::{EmojiFace, FontError, FontKey, FontLibrary, FontSet, GlyphMetrics};
pub use self::output::LaidOutDocument;
pub use self::sizing::{SizeProfile, compute_sizes, count_elements};
pub use self::style::{ParagraphStyle, StyleSheet, TextAlign};

#[cfg(test)]
mod test_utils;
