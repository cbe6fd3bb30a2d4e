// src/error.rs
use crate::preview::PreviewError;
use onepager_layout::{FontError, LayoutError};
use onepager_render_lopdf::RenderError;
use thiserror::Error;

/// A comprehensive error type for the entire one-pager generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Font loading failed: {0}")]
    Font(#[from] FontError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Preview failed: {0}")]
    Preview(#[from] PreviewError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
