use onepager_types::{Color, PageGeometry};
use serde::{Deserialize, Serialize};

/// Inner spacing of every table cell, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellPadding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for CellPadding {
    fn default() -> Self {
        Self {
            left: 2.0,
            right: 2.0,
            top: 1.0,
            bottom: 1.0,
        }
    }
}

/// Geometry and decoration of the one-page layout.
///
/// Every field has a default, so a partial JSON object is enough to tweak a
/// single value:
///
/// ```
/// # use onepager_layout::LayoutConfig;
/// let config: LayoutConfig = serde_json::from_str(r#"{"divider_width": 1.0}"#).unwrap();
/// assert_eq!(config.divider_width, 1.0);
/// assert_eq!(config.leading_ratio, 1.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page: PageGeometry,
    pub cell_padding: CellPadding,
    /// Line height as a multiple of the font size.
    pub leading_ratio: f32,
    /// Extra space after the title paragraph.
    pub title_space_after: f32,
    /// Fixed gap between the title and the table.
    pub title_spacer: f32,
    pub section_space_after: f32,
    pub item_space_after: f32,
    pub sub_item_space_after: f32,
    /// Left indent of sub-item paragraphs inside their cell.
    pub sub_item_indent: f32,
    pub heading_color: Color,
    pub text_color: Color,
    pub background: Color,
    pub divider_color: Color,
    pub divider_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            cell_padding: CellPadding::default(),
            leading_ratio: 1.2,
            title_space_after: 6.0,
            title_spacer: 10.0,
            section_space_after: 2.0,
            item_space_after: 1.0,
            sub_item_space_after: 1.0,
            sub_item_indent: 10.0,
            heading_color: Color::DARK_BLUE,
            text_color: Color::BLACK,
            background: Color::WHITE,
            divider_color: Color::GREY,
            divider_width: 0.5,
        }
    }
}
