//! Output types from the layout engine.

use crate::elements::{LayoutElement, PositionedElement};
use crate::fonts::EmojiFace;
use onepager_types::Size;
use std::sync::Arc;

/// A fully positioned document, ready for rendering.
#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub page_size: Size,
    /// Elements of each page in drawing order.
    pub pages: Vec<Vec<PositionedElement>>,
    /// The emoji face referenced by `FontKey::Emoji` elements, if any.
    pub emoji_face: Option<Arc<EmojiFace>>,
    /// Plain title text, for document metadata.
    pub title: String,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Iterates over every text element of every page.
    pub fn text_elements(&self) -> impl Iterator<Item = &PositionedElement> {
        self.pages
            .iter()
            .flatten()
            .filter(|el| matches!(el.element, LayoutElement::Text(_)))
    }
}
