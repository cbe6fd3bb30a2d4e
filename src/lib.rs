//! Markdown outline to two-column one-page PDF.
//!
//! ```no_run
//! use onepager::{DEFAULT_MARKDOWN, EmojiFontChoice, OnePagerBuilder, RenderOptions};
//!
//! let generator = OnePagerBuilder::new()
//!     .with_font_dir("fonts")
//!     .with_emoji_font(EmojiFontChoice::Variable)
//!     .build()?;
//! let options = RenderOptions::new().with_emoji_font(EmojiFontChoice::Variable);
//! let document = generator.generate(DEFAULT_MARKDOWN, &options)?;
//! document.write_pdf("ml_outline.pdf")?;
//! # Ok::<(), onepager::PipelineError>(())
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod pipeline;
pub mod preview;

pub use config::{EmojiFontChoice, GeneratorConfig, RenderOptions};
pub use defaults::{DEFAULT_MARKDOWN, DEFAULT_TITLE};
pub use error::PipelineError;
pub use pipeline::{GeneratedDocument, OnePager, OnePagerBuilder};
pub use preview::{PreviewError, encode_png, render_preview, save_png};

pub use onepager_layout::{EmojiFace, FontLibrary, SizeProfile, compute_sizes, tag_emoji};
pub use onepager_markdown::{Block, Column, segment};
pub use onepager_types::{Color, Orientation, PageGeometry};
