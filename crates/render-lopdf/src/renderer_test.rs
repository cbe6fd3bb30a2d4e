#![cfg(test)]

use crate::{LopdfRenderer, RenderError};
use lopdf::Document;
use lopdf::content::Content;
use onepager_layout::{LaidOutDocument, LayoutConfig, LayoutEngine, LayoutRequest, compute_sizes};
use onepager_markdown::segment;
use onepager_types::Size;

const OUTLINE: &str = "\
## Core ML Techniques
1. Mixture of Experts
- Dynamic routing
## Training Methods
1. RLHF
- Reward model
";

fn laid_out(title: &str, markdown: &str) -> LaidOutDocument {
    let (left, right) = segment(markdown);
    LayoutEngine::new(LayoutConfig::default())
        .layout(LayoutRequest {
            title,
            left: &left,
            right: &right,
            sizes: compute_sizes(0, 10.0, false),
            emoji_face: None,
        })
        .unwrap()
}

fn page_operations(doc: &Document) -> Vec<lopdf::content::Operation> {
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let data = doc.get_page_content(page_id).unwrap();
    Content::decode(&data).unwrap().operations
}

#[test]
fn test_renders_one_landscape_page() {
    let bytes = LopdfRenderer::new().render(&laid_out("Outline", OUTLINE)).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();

    assert_eq!(doc.get_pages().len(), 1);
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    assert!((media_box[2].as_float().unwrap() - 841.89).abs() < 0.01);
    assert!((media_box[3].as_float().unwrap() - 595.28).abs() < 0.01);
}

fn page_fonts(doc: &Document) -> lopdf::Dictionary {
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let resources_id = page.get(b"Resources").unwrap().as_reference().unwrap();
    let resources = doc.get_dictionary(resources_id).unwrap();
    resources.get(b"Font").unwrap().as_dict().unwrap().clone()
}

#[test]
fn test_standard_fonts_are_declared() {
    let bytes = LopdfRenderer::new().render(&laid_out("Outline", OUTLINE)).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    let fonts = page_fonts(&doc);

    assert!(fonts.has(b"F1"));
    assert!(fonts.has(b"F2"));
    assert!(!fonts.has(b"F3"));
    let bold = fonts.get(b"F2").unwrap().as_dict().unwrap();
    assert_eq!(bold.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica-Bold");
    assert_eq!(bold.get(b"Encoding").unwrap().as_name().unwrap(), b"WinAnsiEncoding");
}

#[test]
fn test_content_contains_text_and_divider() {
    let bytes = LopdfRenderer::new().render(&laid_out("Outline", OUTLINE)).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    let ops = page_operations(&doc);

    let strings: Vec<Vec<u8>> = ops
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first()?.as_str().ok().map(|s| s.to_vec()))
        .collect();
    assert!(strings.contains(&b"Outline".to_vec()));
    assert!(strings.contains(&b"Core ML Techniques".to_vec()));
    assert!(strings.contains(&b"- Reward model".to_vec()));

    assert_eq!(ops.iter().filter(|op| op.operator == "S").count(), 1);
    assert_eq!(ops.iter().filter(|op| op.operator == "re").count(), 1);
}

#[test]
fn test_uncompressed_output_is_readable() {
    let bytes = LopdfRenderer::new()
        .with_compression(false)
        .render(&laid_out("Outline", OUTLINE))
        .unwrap();

    let haystack = String::from_utf8_lossy(&bytes);
    assert!(haystack.contains("(1. Mixture of Experts)"));
    assert!(!haystack.contains("FlateDecode"));
}

#[test]
fn test_metadata() {
    let bytes = LopdfRenderer::new().render(&laid_out("Outline", OUTLINE)).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();

    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_dictionary(info_id).unwrap();
    assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Outline");
    assert_eq!(info.get(b"Producer").unwrap().as_str().unwrap(), b"onepager");
}

#[test]
fn test_output_is_deterministic() {
    let document = laid_out("Outline", OUTLINE);
    let renderer = LopdfRenderer::new();
    assert_eq!(renderer.render(&document).unwrap(), renderer.render(&document).unwrap());
}

#[test]
fn test_overflowing_layout_renders_every_page() {
    let markdown: String = (0..200).map(|i| format!("line {}\n", i)).collect();
    let document = laid_out("Outline", &markdown);
    let bytes = LopdfRenderer::new().render(&document).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();

    assert!(document.page_count() > 1);
    assert_eq!(doc.get_pages().len(), document.page_count());
}

#[test]
fn test_document_without_pages_is_rejected() {
    let document = LaidOutDocument {
        page_size: Size::new(100.0, 100.0),
        pages: vec![],
        emoji_face: None,
        title: String::new(),
    };
    let result = LopdfRenderer::new().render(&document);
    assert!(matches!(result, Err(RenderError::EmptyDocument)));
}
