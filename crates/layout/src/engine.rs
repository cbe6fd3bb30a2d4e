use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::elements::{LayoutElement, PositionedElement, RectElement, RuleElement, TextElement};
use crate::emoji::tag_emoji;
use crate::fonts::{EmojiFace, FontKey, FontSet};
use crate::markup::convert_strong;
use crate::output::LaidOutDocument;
use crate::sizing::SizeProfile;
use crate::style::{ParagraphStyle, StyleSheet, TextAlign};
use crate::table::{CellContent, CellKind, table_rows};
use crate::text::{Line, break_lines, build_runs};
use onepager_markdown::Column;
use onepager_types::Rect;
use std::collections::BTreeSet;
use std::sync::Arc;

const EPSILON: f32 = 0.01;

/// Everything one layout pass needs besides the engine's configuration.
#[derive(Debug, Clone)]
pub struct LayoutRequest<'a> {
    pub title: &'a str,
    pub left: &'a Column,
    pub right: &'a Column,
    pub sizes: SizeProfile,
    /// Face for emoji runs. Without one, emoji are left untagged.
    pub emoji_face: Option<Arc<EmojiFace>>,
}

/// Places the title and the two-column table onto landscape pages.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

struct Paragraph<'s> {
    style: &'s ParagraphStyle,
    lines: Vec<Line>,
}

struct CellLayout<'s> {
    paragraph: Paragraph<'s>,
    height: f32,
}

/// The part of the table on the current page. Text is collected separately
/// so the background is drawn underneath it.
struct TableSegment {
    top: f32,
    height: f32,
    texts: Vec<PositionedElement>,
}

impl TableSegment {
    fn starting_at(top: f32) -> Self {
        Self {
            top,
            height: 0.0,
            texts: Vec::new(),
        }
    }

    fn close_into(self, page: &mut Vec<PositionedElement>, frame: &Rect, config: &LayoutConfig) {
        if self.height <= 0.0 {
            return;
        }
        page.push(PositionedElement {
            x: frame.x,
            y: self.top,
            width: frame.width,
            height: self.height,
            element: LayoutElement::Rectangle(RectElement {
                fill: config.background,
            }),
        });
        page.extend(self.texts);
        page.push(PositionedElement {
            x: frame.x + frame.width / 2.0,
            y: self.top,
            width: 0.0,
            height: self.height,
            element: LayoutElement::Rule(RuleElement {
                color: config.divider_color,
                line_width: config.divider_width,
            }),
        });
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self, request: LayoutRequest<'_>) -> Result<LaidOutDocument, LayoutError> {
        let sizes = request.sizes;
        if !(sizes.sub_item.is_finite() && sizes.sub_item > 0.0 && sizes.title.is_finite()) {
            return Err(LayoutError::InvalidFontSize(sizes.item));
        }

        let config = &self.config;
        let frame = config.page.content_rect();
        let padding = config.cell_padding;
        let col_width = frame.width / 2.0;
        let cell_width = col_width - padding.left - padding.right;
        if cell_width <= config.sub_item_indent {
            return Err(LayoutError::ContentTooNarrow(col_width));
        }

        let styles = StyleSheet::new(&sizes, config);
        let fonts = FontSet::new(request.emoji_face.clone());

        let mut pages = Vec::new();
        let mut page = Vec::new();
        let mut cursor = frame.y;

        let title = self.paragraph(request.title, &styles.title, &fonts, frame.width);
        if !title.lines.is_empty() {
            emit_paragraph(&mut page, &title, frame.x, cursor, frame.width);
            cursor += styles.title.block_height(title.lines.len()) + config.title_spacer;
        }

        let rows = table_rows(request.left, request.right);
        log::debug!(
            "Laying out {} table rows, column width {:.2}pt, item size {:.2}pt",
            rows.len(),
            col_width,
            sizes.item
        );

        let mut segment = TableSegment::starting_at(cursor);
        for (index, (left, right)) in rows.iter().enumerate() {
            let cells = [left, right].map(|cell| {
                cell.as_ref()
                    .map(|content| self.cell(content, &styles, &fonts, cell_width))
            });
            let row_height = cells
                .iter()
                .flatten()
                .map(|c| c.height)
                .fold(0.0f32, f32::max);

            if row_height > frame.height + EPSILON {
                return Err(LayoutError::ElementTooLarge(row_height, frame.height));
            }
            if cursor + row_height > frame.bottom() + EPSILON && cursor > frame.y + EPSILON {
                log::warn!(
                    "Content overflows page {}: row {} of {} continues on a new page",
                    pages.len() + 1,
                    index + 1,
                    rows.len()
                );
                std::mem::replace(&mut segment, TableSegment::starting_at(frame.y))
                    .close_into(&mut page, &frame, config);
                pages.push(std::mem::take(&mut page));
                cursor = frame.y;
            }

            for (column, cell) in cells.iter().enumerate() {
                if let Some(cell) = cell {
                    let x = frame.x + column as f32 * col_width + padding.left;
                    emit_paragraph(
                        &mut segment.texts,
                        &cell.paragraph,
                        x,
                        cursor + padding.top,
                        cell_width,
                    );
                }
            }
            segment.height += row_height;
            cursor += row_height;
        }
        segment.close_into(&mut page, &frame, config);
        pages.push(page);

        Ok(LaidOutDocument {
            page_size: config.page.size(),
            pages,
            emoji_face: request.emoji_face,
            title: request.title.to_string(),
        })
    }

    fn cell<'s>(
        &self,
        content: &CellContent,
        styles: &'s StyleSheet,
        fonts: &FontSet,
        width: f32,
    ) -> CellLayout<'s> {
        let style = match content.kind {
            CellKind::Section => &styles.section,
            CellKind::Item => &styles.item,
            CellKind::SubItem => &styles.sub_item,
        };
        let paragraph = self.paragraph(&content.text, style, fonts, width);
        let padding = self.config.cell_padding;
        let height = padding.top + style.block_height(paragraph.lines.len()) + padding.bottom;
        CellLayout { paragraph, height }
    }

    fn paragraph<'s>(
        &self,
        text: &str,
        style: &'s ParagraphStyle,
        fonts: &FontSet,
        width: f32,
    ) -> Paragraph<'s> {
        let markup = convert_strong(text);
        let markup = match fonts.emoji_face() {
            Some(face) => tag_emoji(&markup, face.name()),
            None => markup,
        };
        let runs = build_runs(&markup, style.font, fonts);

        if let Some(face) = fonts.emoji_face() {
            let missing: BTreeSet<char> = runs
                .iter()
                .filter(|run| run.font == FontKey::Emoji)
                .flat_map(|run| run.text.chars())
                .filter(|&c| face.glyph(c).is_none())
                .collect();
            if !missing.is_empty() {
                log::warn!(
                    "Emoji face '{}' has no glyph for {:?}",
                    face.name(),
                    missing
                );
            }
        }

        let lines = break_lines(&runs, fonts, style.font_size, width - style.left_indent);
        Paragraph { style, lines }
    }
}

fn emit_paragraph(
    out: &mut Vec<PositionedElement>,
    paragraph: &Paragraph<'_>,
    x: f32,
    y: f32,
    width: f32,
) {
    let style = paragraph.style;
    let baseline = style.baseline_offset();
    for (i, line) in paragraph.lines.iter().enumerate() {
        let line_x = x
            + style.left_indent
            + match style.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => ((width - style.left_indent - line.width) / 2.0).max(0.0),
            };
        let top = y + i as f32 * style.leading;

        for fragment in &line.fragments {
            if fragment.text.trim().is_empty() {
                continue;
            }
            out.push(PositionedElement {
                x: line_x + fragment.x,
                y: top,
                width: fragment.width,
                height: style.leading,
                element: LayoutElement::Text(TextElement {
                    content: fragment.text.clone(),
                    font: fragment.font,
                    font_size: style.font_size,
                    color: style.color,
                    baseline,
                }),
            });
        }
    }
}
