pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use onepager::{EmojiFace, FontLibrary, GeneratedDocument, OnePagerBuilder, PipelineError, RenderOptions};
use std::path::{Path, PathBuf};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate a document with the default configuration and no emoji font
pub fn generate(markdown: &str, options: &RenderOptions) -> Result<GeneratedDocument, PipelineError> {
    init_logging();
    OnePagerBuilder::new().build()?.generate(markdown, options)
}

/// Generate and load the PDF back with lopdf
pub fn generate_pdf(markdown: &str, options: &RenderOptions) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let document = generate(markdown, options)?;
    GeneratedPdf::from_bytes(document.pdf)
}

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// A font library holding the fixture TrueType face under `face_name`
#[allow(dead_code)]
pub fn fixture_font_library(face_name: &str) -> Result<FontLibrary, PipelineError> {
    let face = EmojiFace::load(face_name, &fixture_path("DejaVuSans.ttf"))?;
    Ok(FontLibrary::new().with_emoji_face(face))
}
