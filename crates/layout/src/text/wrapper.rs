use super::builder::TextRun;
use crate::fonts::{FontKey, FontSet};

// Tolerance for accumulated float error when a line fills the width exactly.
const FIT_EPSILON: f32 = 0.01;

/// A piece of a line drawn in one face, positioned relative to the line start.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFragment {
    pub text: String,
    pub font: FontKey,
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub fragments: Vec<LineFragment>,
    pub width: f32,
}

impl Line {
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
struct Piece {
    text: String,
    font: FontKey,
    width: f32,
}

enum Token {
    Space(Vec<Piece>),
    Word(Vec<Piece>),
}

fn breaks_line(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn width_of(pieces: &[Piece]) -> f32 {
    pieces.iter().map(|p| p.width).sum()
}

fn push_char(pieces: &mut Vec<Piece>, c: char, font: FontKey, width: f32) {
    match pieces.last_mut() {
        Some(last) if last.font == font => {
            last.text.push(c);
            last.width += width;
        }
        _ => pieces.push(Piece {
            text: c.to_string(),
            font,
            width,
        }),
    }
}

/// Splits runs into alternating word and whitespace tokens. A word can span
/// several runs, e.g. bold text directly followed by an emoji.
fn tokenize(runs: &[TextRun], fonts: &FontSet, font_size: f32) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Vec<Piece> = Vec::new();
    let mut in_space = false;

    for run in runs {
        for c in run.text.chars() {
            let space = breaks_line(c);
            if space != in_space && !current.is_empty() {
                let pieces = std::mem::take(&mut current);
                tokens.push(if in_space {
                    Token::Space(pieces)
                } else {
                    Token::Word(pieces)
                });
            }
            in_space = space;
            // Tabs and newlines are drawn as plain spaces.
            let c = if space { ' ' } else { c };
            push_char(&mut current, c, run.font, fonts.char_width(run.font, c, font_size));
        }
    }
    if !current.is_empty() {
        tokens.push(if in_space {
            Token::Space(current)
        } else {
            Token::Word(current)
        });
    }
    tokens
}

#[derive(Default)]
struct LineBuilder {
    pieces: Vec<Piece>,
    width: f32,
}

impl LineBuilder {
    fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn push(&mut self, piece: Piece) {
        self.width += piece.width;
        match self.pieces.last_mut() {
            Some(last) if last.font == piece.font => {
                last.text.push_str(&piece.text);
                last.width += piece.width;
            }
            _ => self.pieces.push(piece),
        }
    }

    fn finish(&mut self) -> Line {
        let pieces = std::mem::take(&mut self.pieces);
        let width = std::mem::take(&mut self.width);
        let mut x = 0.0;
        let fragments = pieces
            .into_iter()
            .map(|p| {
                let fragment = LineFragment {
                    text: p.text,
                    font: p.font,
                    x,
                    width: p.width,
                };
                x += p.width;
                fragment
            })
            .collect();
        Line { fragments, width }
    }
}

/// Greedy line breaking at spaces.
///
/// Whitespace at the start or end of a line is dropped. A word that is wider
/// than `max_width` on its own is split between characters.
pub fn break_lines(runs: &[TextRun], fonts: &FontSet, font_size: f32, max_width: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = LineBuilder::default();
    let mut pending_space: Vec<Piece> = Vec::new();

    for token in tokenize(runs, fonts, font_size) {
        let word = match token {
            Token::Space(pieces) => {
                if !line.is_empty() {
                    pending_space.extend(pieces);
                }
                continue;
            }
            Token::Word(pieces) => pieces,
        };

        let word_width = width_of(&word);
        if !line.is_empty() {
            let needed = line.width + width_of(&pending_space) + word_width;
            if needed <= max_width + FIT_EPSILON {
                for piece in pending_space.drain(..) {
                    line.push(piece);
                }
                word.into_iter().for_each(|p| line.push(p));
                continue;
            }
            lines.push(line.finish());
        }
        pending_space.clear();

        if word_width <= max_width + FIT_EPSILON {
            word.into_iter().for_each(|p| line.push(p));
            continue;
        }

        for piece in word {
            for c in piece.text.chars() {
                let w = fonts.char_width(piece.font, c, font_size);
                if !line.is_empty() && line.width + w > max_width + FIT_EPSILON {
                    lines.push(line.finish());
                }
                line.push(Piece {
                    text: c.to_string(),
                    font: piece.font,
                    width: w,
                });
            }
        }
    }

    if !line.is_empty() {
        lines.push(line.finish());
    }
    lines
}
