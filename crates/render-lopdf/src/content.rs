//! Turns positioned layout elements into PDF content stream operations.

use crate::encoding::to_win_ansi;
use crate::error::RenderError;
use crate::fonts::{EmbeddedEmojiFont, resource_name};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use onepager_layout::{FontKey, LayoutElement, PositionedElement, RectElement, RuleElement, TextElement};
use onepager_types::Color;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontKey, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Drawing state for one page. Layout coordinates grow downwards from the top
/// edge; PDF user space grows upwards from the bottom edge.
pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    emoji: Option<&'a mut EmbeddedEmojiFont>,
}

fn color_operands(color: &Color) -> Vec<Object> {
    color.to_unit_rgb().iter().map(|&c| c.into()).collect()
}

impl<'a> PageContext<'a> {
    pub fn new(page_height: f32, emoji: Option<&'a mut EmbeddedEmojiFont>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            emoji,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => {
                self.draw_rect(rect, el);
                Ok(())
            }
            LayoutElement::Rule(rule) => {
                self.draw_rule(rule, el);
                Ok(())
            }
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            self.push("rg", color_operands(color));
            self.state.fill_color = Some(*color);
        }
    }

    fn set_stroke(&mut self, color: &Color, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
        if self.state.stroke_color.as_ref() != Some(color) {
            self.push("RG", color_operands(color));
            self.state.stroke_color = Some(*color);
        }
    }

    fn set_font(&mut self, font: FontKey, size: f32) {
        if self.state.font != Some((font, size)) {
            self.push(
                "Tf",
                vec![Object::Name(resource_name(font).as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((font, size));
        }
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let y = self.page_height - (el.y + el.height);
        self.set_fill_color(&rect.fill);
        self.push("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.push("f", vec![]);
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) {
        self.set_stroke(&rule.color, rule.line_width);
        let top = self.page_height - el.y;
        let bottom = self.page_height - (el.y + el.height);
        self.push("m", vec![el.x.into(), top.into()]);
        self.push("l", vec![(el.x + el.width).into(), bottom.into()]);
        self.push("S", vec![]);
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }

        let (font, bytes, format) = match (text.font, self.emoji.as_deref_mut()) {
            (FontKey::Emoji, Some(emoji)) => (
                FontKey::Emoji,
                emoji.encode(&text.content),
                StringFormat::Hexadecimal,
            ),
            (FontKey::Emoji, None) => {
                log::warn!("No emoji face for {:?}; drawing it with Helvetica", text.content);
                (FontKey::Helvetica, to_win_ansi(&text.content), StringFormat::Literal)
            }
            (font, _) => (font, to_win_ansi(&text.content), StringFormat::Literal),
        };
        if bytes.is_empty() {
            return Ok(());
        }

        self.push("BT", vec![]);
        self.set_font(font, text.font_size);
        self.set_fill_color(&text.color);
        let pdf_y = self.page_height - (el.y + text.baseline);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        self.push("Tj", vec![Object::String(bytes, format)]);
        self.push("ET", vec![]);
        Ok(())
    }
}
