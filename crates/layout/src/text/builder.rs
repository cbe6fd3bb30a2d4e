use crate::fonts::{FontKey, FontSet};
use crate::markup::parse_markup;

/// Text drawn in a single face.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: FontKey,
}

/// Parses paragraph markup and resolves every span to a face of `fonts`.
///
/// Spans without a `<font>` tag use `base_font`. A face name the set does not
/// know is reported and ignored, so its text keeps the surrounding face.
pub fn build_runs(markup: &str, base_font: FontKey, fonts: &FontSet) -> Vec<TextRun> {
    let mut runs: Vec<TextRun> = Vec::new();

    for span in parse_markup(markup) {
        let mut font = match span.face.as_deref() {
            None => base_font,
            Some(name) => fonts.resolve(name).unwrap_or_else(|| {
                log::warn!("Unknown font face '{}', keeping {:?}", name, base_font);
                base_font
            }),
        };
        if span.bold {
            font = font.bold();
        }

        match runs.last_mut() {
            Some(last) if last.font == font => last.text.push_str(&span.text),
            _ => runs.push(TextRun {
                text: span.text,
                font,
            }),
        }
    }

    runs
}
