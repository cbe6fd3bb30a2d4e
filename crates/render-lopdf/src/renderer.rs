use crate::content::PageContext;
use crate::encoding::to_text_string;
use crate::error::RenderError;
use crate::fonts::{EMOJI_RESOURCE, EmbeddedEmojiFont, standard_fonts};
use crate::writer::PdfWriter;
use lopdf::{Object, StringFormat, dictionary};
use onepager_layout::LaidOutDocument;
use std::io::Cursor;

pub const PRODUCER: &str = "onepager";

/// Renders laid-out documents into PDF bytes.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    compress: bool,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self { compress: true }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables Flate compression of content and font streams.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        if document.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let mut writer = PdfWriter::new(Cursor::new(Vec::new()), "1.7")?;
        let mut emoji = document.emoji_face.clone().map(EmbeddedEmojiFont::new);
        let page_size = document.page_size;
        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            page_size.width.into(),
            page_size.height.into(),
        ];

        let mut page_ids = Vec::with_capacity(document.pages.len());
        for elements in &document.pages {
            let mut page_ctx = PageContext::new(page_size.height, emoji.as_mut());
            for el in elements {
                page_ctx.draw_element(el)?;
            }
            let content_id = writer.buffer_content_stream(page_ctx.finish(), self.compress)?;
            let page_id = writer.buffer_object(
                dictionary! {
                    "Type" => "Page",
                    "Parent" => writer.pages_id,
                    "MediaBox" => media_box.clone(),
                    "Contents" => content_id,
                    "Resources" => writer.resources_id,
                }
                .into(),
            );
            page_ids.push(page_id);
        }

        let mut fonts = standard_fonts();
        if let Some(emoji) = emoji.as_ref().filter(|e| e.is_used()) {
            let font_id = emoji.write(&mut writer, self.compress)?;
            fonts.set(EMOJI_RESOURCE, font_id);
        }
        writer.set_resources(dictionary! {
            "Font" => fonts,
            "ProcSet" => vec![Object::from("PDF"), Object::from("Text")],
        });
        writer.set_page_ids(page_ids);
        writer.set_info(dictionary! {
            "Title" => Object::String(to_text_string(&document.title), StringFormat::Literal),
            "Producer" => Object::String(PRODUCER.as_bytes().to_vec(), StringFormat::Literal),
        });

        let cursor = writer.finish()?;
        let bytes = cursor.into_inner();
        log::debug!(
            "Rendered {} page(s) into {} bytes",
            document.pages.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
