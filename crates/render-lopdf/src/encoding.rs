//! Text encodings used in content streams and metadata.

/// Characters that only modify emoji presentation. They have no glyph in the
/// standard faces and are dropped from their runs.
pub fn is_presentation_modifier(c: char) -> bool {
    matches!(c, '\u{200D}' | '\u{FE0E}' | '\u{FE0F}')
}

/// Encodes text for a Type1 font with `/WinAnsiEncoding`. Characters the
/// encoding cannot represent become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .filter(|&c| !is_presentation_modifier(c))
        .map(win_ansi_byte)
        .collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => c as u8,
        0x09 | 0x0A | 0x0D => b' ',
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        },
    }
}

/// Encodes a text string for the document information dictionary: plain
/// bytes for ASCII, UTF-16BE with a byte order mark otherwise.
pub fn to_text_string(s: &str) -> Vec<u8> {
    if s.is_ascii() {
        return s.as_bytes().to_vec();
    }
    let mut out = vec![0xFE, 0xFF];
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}
