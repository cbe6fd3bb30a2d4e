//! Paragraph text: from marked-up strings to measured, wrapped lines.

pub mod builder;
pub mod wrapper;

pub use builder::{TextRun, build_runs};
pub use wrapper::{Line, LineFragment, break_lines};
