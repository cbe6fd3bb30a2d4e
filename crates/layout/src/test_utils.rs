use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::engine::{LayoutEngine, LayoutRequest};
use crate::output::LaidOutDocument;
use crate::sizing::compute_sizes;
use crate::{LayoutElement, PositionedElement, TextElement};
use onepager_markdown::segment;

/// Creates a default layout engine for testing purposes.
pub fn create_test_engine() -> LayoutEngine {
    LayoutEngine::new(LayoutConfig::default())
}

/// Segments `markdown` and lays it out at a fixed item size without an emoji
/// face.
pub fn layout_markdown(
    engine: &LayoutEngine,
    title: &str,
    markdown: &str,
    item_size: f32,
) -> Result<LaidOutDocument, LayoutError> {
    let (left, right) = segment(markdown);
    engine.layout(LayoutRequest {
        title,
        left: &left,
        right: &right,
        sizes: compute_sizes(0, item_size, false),
        emoji_face: None,
    })
}

pub fn find_first_text_box_with_content<'a>(
    elements: &'a [PositionedElement],
    content: &str,
) -> Option<&'a PositionedElement> {
    elements.iter().find(|el| {
        matches!(&el.element, LayoutElement::Text(TextElement { content: c, .. }) if c.contains(content))
    })
}

pub fn page_text(elements: &[PositionedElement]) -> String {
    elements
        .iter()
        .filter_map(PositionedElement::as_text)
        .map(|t| t.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
