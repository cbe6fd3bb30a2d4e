use lopdf::Document as LopdfDocument;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object};

/// Extract all text shown on every page, one `Tj` string per line
#[allow(dead_code)]
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        for shown in shown_text(doc, page_num as u32) {
            text.push_str(&shown.text);
            text.push('\n');
        }
    }
    text
}

/// Decoded content stream operations of a 1-based page
pub fn page_operations(doc: &LopdfDocument, page_num: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|data| Content::decode(&data).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

/// The font dictionary a page selects with `/resource`, references resolved
#[allow(dead_code)]
pub fn page_font(doc: &LopdfDocument, page_num: u32, resource: &str) -> Option<Dictionary> {
    let resolve = |object: &Object| -> Option<Dictionary> {
        match object {
            Object::Reference(id) => doc.get_dictionary(*id).ok().cloned(),
            Object::Dictionary(dict) => Some(dict.clone()),
            _ => None,
        }
    };
    let page_id = *doc.get_pages().get(&page_num)?;
    let page = doc.get_dictionary(page_id).ok()?;
    let resources = resolve(page.get(b"Resources").ok()?)?;
    let fonts = resolve(resources.get(b"Font").ok()?)?;
    resolve(fonts.get(resource.as_bytes()).ok()?)
}

/// A string shown with `Tj`, with the position of the preceding `Td`
#[derive(Debug, Clone)]
pub struct ShownText {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Every `Tj` string on a page, decoded as Latin-1
pub fn shown_text(doc: &LopdfDocument, page_num: u32) -> Vec<ShownText> {
    let mut shown = Vec::new();
    let (mut x, mut y) = (0.0, 0.0);
    for op in page_operations(doc, page_num) {
        match op.operator.as_str() {
            "Td" if op.operands.len() == 2 => {
                x = op.operands[0].as_float().unwrap_or(0.0);
                y = op.operands[1].as_float().unwrap_or(0.0);
            }
            "Tj" => {
                if let Some(Ok(bytes)) = op.operands.first().map(|o| o.as_str()) {
                    shown.push(ShownText {
                        text: bytes.iter().map(|&b| b as char).collect(),
                        x,
                        y,
                    });
                }
            }
            _ => {}
        }
    }
    shown
}

/// X positions of the vertical lines stroked on a page
#[allow(dead_code)]
pub fn vertical_rules(doc: &LopdfDocument, page_num: u32) -> Vec<f32> {
    let ops = page_operations(doc, page_num);
    ops.windows(3)
        .filter(|w| w[0].operator == "m" && w[1].operator == "l" && w[2].operator == "S")
        .filter_map(|w| {
            let x0 = w[0].operands.first()?.as_float().ok()?;
            let x1 = w[1].operands.first()?.as_float().ok()?;
            ((x0 - x1).abs() < 0.01).then_some(x0)
        })
        .collect()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
