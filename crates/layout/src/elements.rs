use crate::fonts::FontKey;
use onepager_types::Color;

/// An element placed on a page. Coordinates are in points from the top-left
/// corner of the page; `y` grows downwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Rule(RuleElement),
}

/// A single-face text fragment. `baseline` is the distance from the element's
/// top edge to the text baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: FontKey,
    pub font_size: f32,
    pub color: Color,
    pub baseline: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

/// A straight stroke from the element's top-left to its bottom-right corner.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleElement {
    pub color: Color,
    pub line_width: f32,
}

impl PositionedElement {
    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(t) => Some(t),
            _ => None,
        }
    }
}
