use crate::config::LayoutConfig;
use crate::fonts::FontKey;
use crate::sizing::SizeProfile;
use onepager_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// The resolved formatting of one paragraph kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub font: FontKey,
    pub font_size: f32,
    /// Distance between consecutive baselines.
    pub leading: f32,
    pub color: Color,
    pub space_after: f32,
    pub left_indent: f32,
    pub align: TextAlign,
}

impl ParagraphStyle {
    /// Offset of the first baseline below the top of the paragraph: the
    /// glyph box is centred in the leading, and the baseline sits at 80% of
    /// the glyph box.
    pub fn baseline_offset(&self) -> f32 {
        (self.leading - self.font_size) / 2.0 + self.font_size * 0.8
    }

    /// Height of a paragraph with `line_count` lines, including the space
    /// after it.
    pub fn block_height(&self, line_count: usize) -> f32 {
        line_count as f32 * self.leading + self.space_after
    }
}

/// The four paragraph styles of a one-pager, computed for one size profile.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub title: ParagraphStyle,
    pub section: ParagraphStyle,
    pub item: ParagraphStyle,
    pub sub_item: ParagraphStyle,
}

impl StyleSheet {
    pub fn new(sizes: &SizeProfile, config: &LayoutConfig) -> Self {
        let leading = |size: f32| size * config.leading_ratio;
        Self {
            title: ParagraphStyle {
                font: FontKey::HelveticaBold,
                font_size: sizes.title,
                leading: leading(sizes.title),
                color: config.heading_color,
                space_after: config.title_space_after,
                left_indent: 0.0,
                align: TextAlign::Center,
            },
            section: ParagraphStyle {
                font: FontKey::HelveticaBold,
                font_size: sizes.section,
                leading: leading(sizes.section),
                color: config.heading_color,
                space_after: config.section_space_after,
                left_indent: 0.0,
                align: TextAlign::Left,
            },
            item: ParagraphStyle {
                font: FontKey::Helvetica,
                font_size: sizes.item,
                leading: leading(sizes.item),
                color: config.text_color,
                space_after: config.item_space_after,
                left_indent: 0.0,
                align: TextAlign::Left,
            },
            sub_item: ParagraphStyle {
                font: FontKey::Helvetica,
                font_size: sizes.sub_item,
                leading: leading(sizes.sub_item),
                color: config.text_color,
                space_after: config.sub_item_space_after,
                left_indent: config.sub_item_indent,
                align: TextAlign::Left,
            },
        }
    }
}
