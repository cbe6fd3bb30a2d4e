mod common;

use common::pdf_assertions::{page_font, shown_text, vertical_rules};
use common::{GeneratedPdf, TestResult, fixture_font_library, generate, generate_pdf, init_logging};
use onepager::{DEFAULT_MARKDOWN, EmojiFontChoice, PipelineError, RenderOptions};

const OUTLINE: &str = "\
# Dropped title
## Core ML Techniques
1. Mixture of Experts
   - Sparse gating
   - Expert routing
2. Fine-Tuning
   - Loss functions
## Deployment
3. Distillation
   - Quantization
4. Retrieval
   - Vector stores
";

fn fixed_size(size: u32) -> RenderOptions {
    RenderOptions::new().with_auto_size(false).with_base_font_size(size)
}

#[test]
fn test_sample_outline_fits_on_one_page() -> TestResult {
    let document = generate(DEFAULT_MARKDOWN, &RenderOptions::default())?;

    assert_eq!(document.page_count, 1);
    assert_eq!(document.left_blocks, 8);
    assert_eq!(document.right_blocks, 8);
    assert_eq!(document.element_count, 52);
    // 200 / 52 is below the auto-size floor.
    assert_eq!(document.sizes.item, 6.0);

    let pdf = GeneratedPdf::from_bytes(document.pdf)?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn test_columns_are_separated_by_one_divider() -> TestResult {
    let pdf = generate_pdf(OUTLINE, &fixed_size(10))?;
    assert_pdf_page_count!(pdf, 1);

    let rules = vertical_rules(&pdf.doc, 1);
    assert_eq!(rules.len(), 1, "expected a single divider, got {:?}", rules);
    let divider = rules[0];

    let texts = shown_text(&pdf.doc, 1);
    let find = |needle: &str| {
        texts
            .iter()
            .find(|t| t.text == needle)
            .unwrap_or_else(|| panic!("'{}' not drawn in {:?}", needle, texts))
    };

    // Six blocks: the first three go left, the rest right.
    assert!(find("Core ML Techniques").x < divider);
    assert!(find("2. Fine-Tuning").x < divider);
    assert!(find("Deployment").x > divider);
    assert!(find("4. Retrieval").x > divider);
    assert!(!texts.iter().any(|t| t.text.contains("Dropped title")));
    Ok(())
}

#[test]
fn test_rows_pair_left_and_right_cells() -> TestResult {
    let pdf = generate_pdf(OUTLINE, &fixed_size(10))?;
    let texts = shown_text(&pdf.doc, 1);
    let y_of = |needle: &str| texts.iter().find(|t| t.text == needle).map(|t| t.y);

    // Both columns start on the first table row.
    assert_eq!(y_of("Core ML Techniques"), y_of("Deployment"));
    Ok(())
}

#[test]
fn test_sub_items_are_indented() -> TestResult {
    let pdf = generate_pdf(OUTLINE, &fixed_size(10))?;
    let texts = shown_text(&pdf.doc, 1);
    let x_of = |needle: &str| texts.iter().find(|t| t.text == needle).map(|t| t.x).unwrap_or_default();

    assert!(x_of("- Sparse gating") > x_of("1. Mixture of Experts") + 9.0);
    Ok(())
}

#[test]
fn test_title_is_drawn_and_can_be_overridden() -> TestResult {
    let pdf = generate_pdf(OUTLINE, &fixed_size(10))?;
    assert_pdf_contains_text!(pdf, "Cutting-Edge ML Outline");

    let pdf = generate_pdf(OUTLINE, &fixed_size(10).with_title("Reading List"))?;
    let texts = shown_text(&pdf.doc, 1);
    assert!(texts.iter().any(|t| t.text == "Reading List"));
    assert!(!texts.iter().any(|t| t.text.contains("Cutting-Edge")));
    Ok(())
}

#[test]
fn test_bold_markers_are_not_drawn() -> TestResult {
    let pdf = generate_pdf("1. **Mixture** of Experts\n", &fixed_size(10))?;
    let texts = shown_text(&pdf.doc, 1);

    assert!(texts.iter().any(|t| t.text.contains("Mixture")));
    assert!(!texts.iter().any(|t| t.text.contains("**")));
    Ok(())
}

#[test]
fn test_empty_input_renders_title_only() -> TestResult {
    let pdf = generate_pdf("", &RenderOptions::default())?;

    assert_pdf_page_count!(pdf, 1);
    assert!(vertical_rules(&pdf.doc, 1).is_empty());
    let texts = shown_text(&pdf.doc, 1);
    assert!(!texts.is_empty());
    assert!(texts.iter().all(|t| "Cutting-Edge ML Outline".contains(t.text.trim())));
    Ok(())
}

#[test]
fn test_overflow_continues_on_new_pages() -> TestResult {
    let markdown: String = (0..300).map(|i| format!("Line number {}\n", i)).collect();
    let document = generate(&markdown, &fixed_size(16))?;
    assert!(document.page_count > 1);

    let pdf = GeneratedPdf::from_bytes(document.pdf)?;
    assert_pdf_min_pages!(pdf, 2);
    for page in 1..=pdf.page_count() as u32 {
        assert_eq!(vertical_rules(&pdf.doc, page).len(), 1);
    }
    Ok(())
}

#[test]
fn test_markdown_is_written_back_unchanged() -> TestResult {
    let dir = tempfile::tempdir()?;
    let document = generate(OUTLINE, &RenderOptions::default())?;

    let md_path = dir.path().join("ml_outline.md");
    let pdf_path = dir.path().join("ml_outline.pdf");
    document.write_markdown(&md_path)?;
    document.write_pdf(&pdf_path)?;

    assert_eq!(std::fs::read_to_string(&md_path)?, OUTLINE);
    assert_eq!(std::fs::read(&pdf_path)?, document.pdf);
    Ok(())
}

#[test]
fn test_font_size_outside_range_is_rejected() {
    let result = generate(OUTLINE, &fixed_size(17));
    assert!(matches!(result, Err(PipelineError::Config(_))));

    let result = generate(OUTLINE, &fixed_size(5));
    assert!(matches!(result, Err(PipelineError::Config(_))));
}

#[test]
fn test_unloaded_emoji_font_is_rejected() {
    let options = RenderOptions::default().with_emoji_font(EmojiFontChoice::Bold);
    let result = generate(OUTLINE, &options);
    assert!(matches!(result, Err(PipelineError::Config(_))));
}

#[test]
fn test_missing_font_file_fails_at_build() {
    let dir = tempfile::tempdir().unwrap();
    let result = onepager::OnePagerBuilder::new()
        .with_font_dir(dir.path())
        .with_emoji_font(EmojiFontChoice::Regular)
        .build();
    assert!(matches!(result, Err(PipelineError::Font(_))));
}

#[test]
fn test_generation_is_deterministic() -> TestResult {
    let first = generate(DEFAULT_MARKDOWN, &RenderOptions::default())?;
    let second = generate(DEFAULT_MARKDOWN, &RenderOptions::default())?;
    assert_eq!(first.pdf, second.pdf);
    Ok(())
}

#[test]
fn test_emoji_font_is_embedded() -> TestResult {
    init_logging();
    let choice = EmojiFontChoice::Regular;
    let generator = onepager::OnePagerBuilder::new()
        .with_font_library(fixture_font_library(choice.face_name())?)
        .build()?;
    let options = RenderOptions::default().with_emoji_font(choice);
    let document = generator.generate("## Sun ☀\n1. 🚀 go ✈\n", &options)?;
    let pdf = GeneratedPdf::from_bytes(document.pdf)?;

    assert_pdf_page_count!(pdf, 1);
    let font = page_font(&pdf.doc, 1, "F3").ok_or("page has no F3 font")?;
    assert_eq!(font.get(b"Subtype")?.as_name()?, b"Type0");
    assert_eq!(font.get(b"Encoding")?.as_name()?, b"Identity-H");

    let text = pdf.doc.extract_text(&[1])?;
    assert!(text.contains('☀'), "{text}");
    assert!(text.contains('✈'), "{text}");
    assert!(text.contains("Sun"), "{text}");
    Ok(())
}

#[test]
fn test_emoji_font_is_omitted_when_unused() -> TestResult {
    init_logging();
    let choice = EmojiFontChoice::Regular;
    let generator = onepager::OnePagerBuilder::new()
        .with_font_library(fixture_font_library(choice.face_name())?)
        .build()?;
    let options = RenderOptions::default().with_emoji_font(choice);
    let pdf = GeneratedPdf::from_bytes(generator.generate("## Plain\n1. text\n", &options)?.pdf)?;
    assert!(page_font(&pdf.doc, 1, "F3").is_none());
    assert!(page_font(&pdf.doc, 1, "F1").is_some());
    Ok(())
}
