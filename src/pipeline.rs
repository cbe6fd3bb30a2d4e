// src/pipeline.rs
use crate::config::{EmojiFontChoice, GeneratorConfig, RenderOptions};
use crate::error::PipelineError;
use crate::preview::{PreviewError, render_preview};
use image::RgbImage;
use onepager_layout::{
    EmojiFace, FontLibrary, LayoutEngine, LayoutRequest, SizeProfile, compute_sizes,
    count_elements,
};
use onepager_markdown::segment;
use onepager_render_lopdf::LopdfRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a [`OnePager`].
#[derive(Default)]
pub struct OnePagerBuilder {
    config: GeneratorConfig,
    font_dir: Option<PathBuf>,
    emoji_fonts: Vec<EmojiFontChoice>,
    font_library: Option<FontLibrary>,
}

impl OnePagerBuilder {
    /// Creates a new `OnePagerBuilder` with the default configuration and no emoji fonts.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole generator configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the directory the emoji font files are read from.
    pub fn with_font_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.font_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Queues one of the bundled emoji fonts to be loaded by [`build`](Self::build).
    pub fn with_emoji_font(mut self, choice: EmojiFontChoice) -> Self {
        if !self.emoji_fonts.contains(&choice) {
            self.emoji_fonts.push(choice);
        }
        self
    }

    /// Starts from an already populated font library, e.g. faces read from memory.
    pub fn with_font_library(mut self, library: FontLibrary) -> Self {
        self.font_library = Some(library);
        self
    }

    /// Consumes the builder, loading every queued font file exactly once.
    pub fn build(mut self) -> Result<OnePager, PipelineError> {
        if let Some(dir) = self.font_dir.take() {
            self.config.font_dir = dir;
        }
        let mut fonts = self.font_library.take().unwrap_or_default();

        for choice in &self.emoji_fonts {
            if fonts.emoji_face(choice.face_name()).is_some() {
                continue;
            }
            let path = choice.path_in(&self.config.font_dir);
            let face = EmojiFace::load(choice.face_name(), &path)?;
            log::info!("Loaded emoji font '{}' from {}", choice, path.display());
            fonts.register_emoji_face(face);
        }

        Ok(OnePager {
            engine: LayoutEngine::new(self.config.layout.clone()),
            renderer: LopdfRenderer::new(),
            fonts,
            config: self.config,
        })
    }
}

/// Turns outline markdown into a two-column one-page PDF.
///
/// Holds only immutable state, so one instance can serve any number of
/// requests.
pub struct OnePager {
    config: GeneratorConfig,
    fonts: FontLibrary,
    engine: LayoutEngine,
    renderer: LopdfRenderer,
}

impl OnePager {
    pub fn builder() -> OnePagerBuilder {
        OnePagerBuilder::new()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    fn emoji_face(&self, choice: Option<EmojiFontChoice>) -> Result<Option<Arc<EmojiFace>>, PipelineError> {
        choice
            .map(|choice| {
                self.fonts.emoji_face(choice.face_name()).ok_or_else(|| {
                    PipelineError::Config(format!(
                        "Emoji font '{}' was not loaded; add it with `with_emoji_font`",
                        choice
                    ))
                })
            })
            .transpose()
    }

    /// Runs segmentation, sizing, layout and PDF rendering for one request.
    pub fn generate(&self, markdown: &str, options: &RenderOptions) -> Result<GeneratedDocument, PipelineError> {
        options.validate()?;
        let emoji_face = self.emoji_face(options.emoji_font)?;

        let (left, right) = segment(markdown);
        let element_count = count_elements(&left, &right);
        let sizes = compute_sizes(element_count, options.base_font_size as f32, options.auto_size);
        log::debug!(
            "{} + {} blocks, {} paragraphs, sizes {:?}",
            left.len(),
            right.len(),
            element_count,
            sizes
        );

        let title = options.title.as_deref().unwrap_or(&self.config.title);
        let layout = self.engine.layout(LayoutRequest {
            title,
            left: &left,
            right: &right,
            sizes,
            emoji_face,
        })?;
        let pdf = self.renderer.render(&layout)?;
        log::info!("Generated {} page(s), {} bytes", layout.page_count(), pdf.len());

        Ok(GeneratedDocument {
            pdf,
            markdown: markdown.to_string(),
            sizes,
            page_count: layout.page_count(),
            left_blocks: left.len(),
            right_blocks: right.len(),
            element_count,
        })
    }

    /// Renders the preview at the configured scale.
    pub fn preview(&self, document: &GeneratedDocument) -> Result<RgbImage, PreviewError> {
        document.preview(self.config.preview_scale)
    }
}

/// The outputs of one generation request.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub pdf: Vec<u8>,
    /// The markdown the PDF was generated from, unchanged.
    pub markdown: String,
    pub sizes: SizeProfile,
    pub page_count: usize,
    pub left_blocks: usize,
    pub right_blocks: usize,
    pub element_count: usize,
}

impl GeneratedDocument {
    pub fn write_pdf<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        fs::write(path, &self.pdf)?;
        Ok(())
    }

    pub fn write_markdown<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        fs::write(path, &self.markdown)?;
        Ok(())
    }

    pub fn preview(&self, scale: f32) -> Result<RgbImage, PreviewError> {
        render_preview(&self.pdf, scale)
    }
}
