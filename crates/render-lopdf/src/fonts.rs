//! Font resources: the two standard faces and the embedded emoji face.

use crate::error::RenderError;
use crate::writer::PdfWriter;
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use onepager_layout::EmojiFace;
use onepager_layout::fonts::{HELVETICA_BOLD_NAME, HELVETICA_NAME};
use onepager_layout::FontKey;
use std::collections::BTreeMap;
use std::io::{Seek, Write};
use std::sync::Arc;

pub const HELVETICA_RESOURCE: &str = "F1";
pub const HELVETICA_BOLD_RESOURCE: &str = "F2";
pub const EMOJI_RESOURCE: &str = "F3";

/// The resource name a face is selected by in content streams.
pub fn resource_name(font: FontKey) -> &'static str {
    match font {
        FontKey::Helvetica => HELVETICA_RESOURCE,
        FontKey::HelveticaBold => HELVETICA_BOLD_RESOURCE,
        FontKey::Emoji => EMOJI_RESOURCE,
    }
}

pub fn standard_font_dict(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

pub fn standard_fonts() -> Dictionary {
    dictionary! {
        HELVETICA_RESOURCE => standard_font_dict(HELVETICA_NAME),
        HELVETICA_BOLD_RESOURCE => standard_font_dict(HELVETICA_BOLD_NAME),
    }
}

#[derive(Debug, Clone, Copy)]
struct UsedGlyph {
    width: f32,
    unicode: char,
}

/// Tracks which glyphs of the emoji face a document draws, then embeds the
/// face as a composite font with Identity-H encoding.
pub struct EmbeddedEmojiFont {
    face: Arc<EmojiFace>,
    used: BTreeMap<u16, UsedGlyph>,
}

impl EmbeddedEmojiFont {
    pub fn new(face: Arc<EmojiFace>) -> Self {
        Self {
            face,
            used: BTreeMap::new(),
        }
    }

    pub fn is_used(&self) -> bool {
        !self.used.is_empty()
    }

    /// Encodes text as big-endian glyph ids and records the glyphs used.
    pub fn encode(&mut self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for c in text.chars() {
            let glyph = self.face.glyph_or_notdef(c);
            self.used.entry(glyph.glyph_id).or_insert(UsedGlyph {
                width: self.face.to_pdf_units(glyph.advance),
                unicode: c,
            });
            bytes.extend_from_slice(&glyph.glyph_id.to_be_bytes());
        }
        bytes
    }

    /// Buffers the font program, descriptor, CID font and ToUnicode map;
    /// returns the id of the Type0 font dictionary.
    pub fn write<W: Write + Seek>(
        &self,
        writer: &mut PdfWriter<W>,
        compress: bool,
    ) -> Result<ObjectId, RenderError> {
        let face = &self.face;
        let data = face.data();
        let font_file_id = writer.buffer_stream(
            dictionary! { "Length1" => data.len() as i64 },
            data.to_vec(),
            compress,
        )?;

        let scale = |v: i16| (face.to_pdf_units(v.unsigned_abs()) * v.signum() as f32).round() as i64;
        let [x_min, y_min, x_max, y_max] = face.bbox();
        let base_font = face.postscript_name().to_string();

        let descriptor_id = writer.buffer_object(
            dictionary! {
                "Type" => "FontDescriptor",
                "FontName" => Object::Name(base_font.clone().into_bytes()),
                "Flags" => 4,
                "FontBBox" => [x_min, y_min, x_max, y_max].map(|v| Object::Integer(scale(v))).to_vec(),
                "ItalicAngle" => 0,
                "Ascent" => scale(face.ascender()),
                "Descent" => scale(face.descender()),
                "CapHeight" => scale(face.cap_height()),
                "StemV" => 80,
                "FontFile2" => font_file_id,
            }
            .into(),
        );

        let widths: BTreeMap<u16, f32> = self.used.iter().map(|(&gid, g)| (gid, g.width)).collect();
        let cid_font_id = writer.buffer_object(
            dictionary! {
                "Type" => "Font",
                "Subtype" => "CIDFontType2",
                "BaseFont" => Object::Name(base_font.clone().into_bytes()),
                "CIDSystemInfo" => dictionary! {
                    "Registry" => Object::String(b"Adobe".to_vec(), StringFormat::Literal),
                    "Ordering" => Object::String(b"Identity".to_vec(), StringFormat::Literal),
                    "Supplement" => 0,
                },
                "FontDescriptor" => descriptor_id,
                "DW" => 1000,
                "W" => width_array(&widths),
                "CIDToGIDMap" => "Identity",
            }
            .into(),
        );

        let unicode: BTreeMap<u16, char> = self.used.iter().map(|(&gid, g)| (gid, g.unicode)).collect();
        let to_unicode_id =
            writer.buffer_stream(Dictionary::new(), to_unicode_cmap(&unicode).into_bytes(), compress)?;

        log::debug!(
            "Embedding emoji face '{}' ({} bytes, {} glyphs used)",
            base_font,
            data.len(),
            self.used.len()
        );

        Ok(writer.buffer_object(
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type0",
                "BaseFont" => Object::Name(base_font.into_bytes()),
                "Encoding" => "Identity-H",
                "DescendantFonts" => vec![Object::Reference(cid_font_id)],
                "ToUnicode" => to_unicode_id,
            }
            .into(),
        ))
    }
}

/// Builds a `/W` array, grouping consecutive glyph ids:
/// `[first [w1 w2 …] first [w …] …]`.
pub fn width_array(widths: &BTreeMap<u16, f32>) -> Vec<Object> {
    let mut out = Vec::new();
    let mut group: Vec<Object> = Vec::new();
    let mut start: Option<u16> = None;
    let mut previous = 0u16;

    for (&gid, &width) in widths {
        match start {
            Some(_) if gid == previous.wrapping_add(1) => {}
            Some(first) => {
                out.push(Object::Integer(first as i64));
                out.push(Object::Array(std::mem::take(&mut group)));
                start = Some(gid);
            }
            None => start = Some(gid),
        }
        group.push(Object::Integer(width.round() as i64));
        previous = gid;
    }
    if let Some(first) = start {
        out.push(Object::Integer(first as i64));
        out.push(Object::Array(group));
    }
    out
}

/// Builds a ToUnicode CMap mapping two-byte glyph ids back to characters.
pub fn to_unicode_cmap(map: &BTreeMap<u16, char>) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    let entries: Vec<(&u16, &char)> = map.iter().collect();
    // At most 100 entries per bfchar block.
    for chunk in entries.chunks(100) {
        cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
        for (gid, c) in chunk {
            let mut units = [0u16; 2];
            let hex: String = c
                .encode_utf16(&mut units)
                .iter()
                .map(|u| format!("{:04X}", u))
                .collect();
            cmap.push_str(&format!("<{:04X}> <{}>\n", gid, hex));
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");
    cmap
}
