//! PDF renderer for laid-out one-pagers, built on lopdf.
//!
//! Objects are buffered in memory and written with a classic cross-reference
//! table. Body text uses the standard Helvetica faces; an emoji face, when
//! the document uses one, is embedded as a composite TrueType font.

mod content;
pub mod encoding;
mod error;
pub mod fonts;
mod renderer;
mod writer;

pub use error::RenderError;
pub use renderer::{LopdfRenderer, PRODUCER};
pub use writer::PdfWriter;

#[cfg(test)]
mod renderer_test;
