//! Rasterizes page 1 of a generated PDF for preview.
//!
//! Rendering goes through MuPDF and is only compiled in with the `preview`
//! feature. Callers treat every error here as non-fatal: the PDF itself is
//! still usable without a preview.

use image::RgbImage;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[cfg(feature = "preview")]
    #[error("MuPDF error: {0}")]
    MuPdf(#[from] mupdf::Error),

    #[error("Invalid preview scale {0}: it must be positive and finite.")]
    InvalidScale(f32),

    #[error("The document has no pages to preview.")]
    NoPages,

    #[error("Pixmap of {width}x{height} could not be turned into an image.")]
    Pixmap { width: u32, height: u32 },

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Preview rendering is not available in this build (enable the `preview` feature).")]
    Unavailable,
}

/// Renders the first page of `pdf` at `scale` times its size in points.
pub fn render_preview(pdf: &[u8], scale: f32) -> Result<RgbImage, PreviewError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PreviewError::InvalidScale(scale));
    }
    rasterize_first_page(pdf, scale)
}

#[cfg(feature = "preview")]
fn rasterize_first_page(pdf: &[u8], scale: f32) -> Result<RgbImage, PreviewError> {
    use mupdf::{Colorspace, Document, Matrix};

    let doc = Document::from_bytes(pdf, "application/pdf")?;
    if doc.page_count()? < 1 {
        return Err(PreviewError::NoPages);
    }
    let page = doc.load_page(0)?;
    let matrix = Matrix::new_scale(scale, scale);
    let pixmap = page.to_pixmap(&matrix, &Colorspace::device_rgb(), false, false)?;

    let width = pixmap.width() as u32;
    let height = pixmap.height() as u32;
    let samples = pixmap.samples();
    let n = pixmap.n() as usize;

    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = (y * width as usize + x) * n;
            let pixel = samples
                .get(offset..offset + 3)
                .ok_or(PreviewError::Pixmap { width, height })?;
            rgb.extend_from_slice(pixel);
        }
    }

    log::debug!("Rendered preview of {}x{} pixels at {}x", width, height, scale);
    RgbImage::from_raw(width, height, rgb).ok_or(PreviewError::Pixmap { width, height })
}

#[cfg(not(feature = "preview"))]
fn rasterize_first_page(_pdf: &[u8], _scale: f32) -> Result<RgbImage, PreviewError> {
    Err(PreviewError::Unavailable)
}

/// Encodes a preview as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, PreviewError> {
    let mut output = Vec::new();
    image.write_to(&mut Cursor::new(&mut output), image::ImageFormat::Png)?;
    Ok(output)
}

pub fn save_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), PreviewError> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
