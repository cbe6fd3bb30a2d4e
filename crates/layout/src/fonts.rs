//! Font library for the layout and rendering pipeline.
//!
//! Body text is set in the standard Helvetica faces, which every PDF viewer
//! provides, so only their metrics live here. Emoji are drawn with a
//! TrueType face that is read once at startup and embedded into each PDF
//! that uses it.
//!
//! There is no global registry: a [`FontLibrary`] is built explicitly and
//! handed to the layout engine and the renderer.

use crate::emoji::emoji_chars;
use crate::metrics::{HELVETICA, HELVETICA_BOLD, StandardMetrics};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

pub const HELVETICA_NAME: &str = "Helvetica";
pub const HELVETICA_BOLD_NAME: &str = "Helvetica-Bold";

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Font file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read font file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Font '{name}' could not be parsed: {message}")]
    Parse { name: String, message: String },
}

/// The faces a text run can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontKey {
    Helvetica,
    HelveticaBold,
    /// The emoji face selected for the current document.
    Emoji,
}

impl FontKey {
    /// The bold counterpart of a text face. Emoji stay emoji.
    pub fn bold(self) -> Self {
        match self {
            FontKey::Helvetica | FontKey::HelveticaBold => FontKey::HelveticaBold,
            FontKey::Emoji => FontKey::Emoji,
        }
    }

    fn standard_metrics(self) -> Option<&'static StandardMetrics> {
        match self {
            FontKey::Helvetica => Some(&HELVETICA),
            FontKey::HelveticaBold => Some(&HELVETICA_BOLD),
            FontKey::Emoji => None,
        }
    }
}

/// Glyph id and horizontal advance (in font units) of one mapped character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub glyph_id: u16,
    pub advance: u16,
}

/// A TrueType emoji face: the raw file plus the metrics the layout and the
/// PDF font descriptor need.
pub struct EmojiFace {
    name: String,
    postscript_name: String,
    data: Arc<Vec<u8>>,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    cap_height: i16,
    bbox: [i16; 4],
    notdef_advance: u16,
    glyphs: HashMap<char, GlyphMetrics>,
}

impl std::fmt::Debug for EmojiFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiFace")
            .field("name", &self.name)
            .field("postscript_name", &self.postscript_name)
            .field("data_len", &self.data.len())
            .field("mapped_glyphs", &self.glyphs.len())
            .finish()
    }
}

impl EmojiFace {
    /// Reads and parses a font file. `name` is the face name used in
    /// `<font face="…">` markup.
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FontError::NotFound(path.to_path_buf())
            } else {
                FontError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        log::debug!("Loaded {} bytes of font data from {}", data.len(), path.display());
        Self::from_bytes(name, data)
    }

    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, FontError> {
        let name = name.into();
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::Parse {
            name: name.clone(),
            message: e.to_string(),
        })?;

        let postscript_name = face
            .names()
            .into_iter()
            .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .find_map(|n| n.to_string())
            .unwrap_or_else(|| name.replace(' ', ""));

        let glyphs: HashMap<char, GlyphMetrics> = emoji_chars()
            .filter_map(|c| {
                let id = face.glyph_index(c)?;
                Some((
                    c,
                    GlyphMetrics {
                        glyph_id: id.0,
                        advance: face.glyph_hor_advance(id).unwrap_or(0),
                    },
                ))
            })
            .collect();

        let units_per_em = face.units_per_em();
        let bounds = face.global_bounding_box();
        let notdef_advance = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .unwrap_or(units_per_em);
        let cap_height = face.capital_height().unwrap_or(face.ascender());
        let (ascender, descender) = (face.ascender(), face.descender());

        log::debug!(
            "Parsed emoji face '{}' ({}), {} emoji glyphs mapped",
            name,
            postscript_name,
            glyphs.len()
        );

        Ok(Self {
            name,
            postscript_name,
            units_per_em,
            ascender,
            descender,
            cap_height,
            bbox: [bounds.x_min, bounds.y_min, bounds.x_max, bounds.y_max],
            notdef_advance,
            glyphs,
            data: Arc::new(data),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    pub fn data(&self) -> &Arc<Vec<u8>> {
        &self.data
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn ascender(&self) -> i16 {
        self.ascender
    }

    pub fn descender(&self) -> i16 {
        self.descender
    }

    pub fn cap_height(&self) -> i16 {
        self.cap_height
    }

    /// `[x_min, y_min, x_max, y_max]` in font units.
    pub fn bbox(&self) -> [i16; 4] {
        self.bbox
    }

    pub fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        self.glyphs.get(&c).copied()
    }

    /// The glyph drawn for `c`, falling back to `.notdef`.
    pub fn glyph_or_notdef(&self, c: char) -> GlyphMetrics {
        self.glyph(c).unwrap_or(GlyphMetrics {
            glyph_id: 0,
            advance: self.notdef_advance,
        })
    }

    /// Converts a font-unit advance into thousandths of an em, as PDF width
    /// arrays expect.
    pub fn to_pdf_units(&self, advance: u16) -> f32 {
        advance as f32 * 1000.0 / self.units_per_em.max(1) as f32
    }

    pub fn char_width(&self, c: char, font_size: f32) -> f32 {
        self.glyph_or_notdef(c).advance as f32 * font_size / self.units_per_em.max(1) as f32
    }
}

/// All faces known to the process. Built once, then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    emoji_faces: Vec<Arc<EmojiFace>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an emoji face, replacing an earlier face with the same name.
    pub fn register_emoji_face(&mut self, face: EmojiFace) -> Arc<EmojiFace> {
        let face = Arc::new(face);
        self.emoji_faces.retain(|f| f.name() != face.name());
        self.emoji_faces.push(face.clone());
        face
    }

    pub fn with_emoji_face(mut self, face: EmojiFace) -> Self {
        self.register_emoji_face(face);
        self
    }

    pub fn emoji_face(&self, name: &str) -> Option<Arc<EmojiFace>> {
        self.emoji_faces.iter().find(|f| f.name() == name).cloned()
    }

    pub fn emoji_faces(&self) -> impl Iterator<Item = &Arc<EmojiFace>> {
        self.emoji_faces.iter()
    }
}

/// The faces active for one document: the standard pair plus at most one
/// emoji face.
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    emoji: Option<Arc<EmojiFace>>,
}

impl FontSet {
    pub fn new(emoji: Option<Arc<EmojiFace>>) -> Self {
        Self { emoji }
    }

    pub fn emoji_face(&self) -> Option<&Arc<EmojiFace>> {
        self.emoji.as_ref()
    }

    /// Maps a `<font face>` name onto a face of this set.
    pub fn resolve(&self, face_name: &str) -> Option<FontKey> {
        match face_name {
            HELVETICA_NAME => Some(FontKey::Helvetica),
            HELVETICA_BOLD_NAME => Some(FontKey::HelveticaBold),
            name => self
                .emoji
                .as_ref()
                .filter(|face| face.name() == name)
                .map(|_| FontKey::Emoji),
        }
    }

    pub fn char_width(&self, font: FontKey, c: char, font_size: f32) -> f32 {
        match (font.standard_metrics(), &self.emoji) {
            (Some(metrics), _) => metrics.char_width(c) as f32 * font_size / 1000.0,
            (None, Some(face)) => face.char_width(c, font_size),
            // Emoji runs are only produced when a face is present; measure
            // a stray one like the text it will be drawn as.
            (None, None) => HELVETICA.char_width(c) as f32 * font_size / 1000.0,
        }
    }

    pub fn text_width(&self, font: FontKey, text: &str, font_size: f32) -> f32 {
        text.chars().map(|c| self.char_width(font, c, font_size)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_faces_resolve_by_name() {
        let fonts = FontSet::default();
        assert_eq!(fonts.resolve("Helvetica"), Some(FontKey::Helvetica));
        assert_eq!(fonts.resolve("Helvetica-Bold"), Some(FontKey::HelveticaBold));
        assert_eq!(fonts.resolve("NotoEmoji-Regular"), None);
        assert!(fonts.emoji_face().is_none());
    }

    #[test]
    fn bold_counterparts() {
        assert_eq!(FontKey::Helvetica.bold(), FontKey::HelveticaBold);
        assert_eq!(FontKey::HelveticaBold.bold(), FontKey::HelveticaBold);
        assert_eq!(FontKey::Emoji.bold(), FontKey::Emoji);
    }

    #[test]
    fn standard_text_width() {
        let fonts = FontSet::default();
        // h e l l o = 556 + 556 + 222 + 222 + 556
        let width = fonts.text_width(FontKey::Helvetica, "hello", 10.0);
        assert!((width - 21.12).abs() < 1e-4);
        assert!(fonts.text_width(FontKey::HelveticaBold, "hello", 10.0) > width);
    }

    #[test]
    fn missing_font_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = EmojiFace::load("Noto", &dir.path().join("absent.ttf")).unwrap_err();
        assert!(matches!(err, FontError::NotFound(_)));
    }

    #[test]
    fn garbage_font_data_fails_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = EmojiFace::load("Broken", &path).unwrap_err();
        assert!(matches!(err, FontError::Parse { ref name, .. } if name == "Broken"));
    }

    #[test]
    fn empty_library_has_no_faces() {
        let library = FontLibrary::new();
        assert!(library.emoji_face("Noto Emoji").is_none());
        assert_eq!(library.emoji_faces().count(), 0);
    }
}
