//! The small inline markup language paragraphs are written in.
//!
//! Supported: `<b>…</b>`, `<font face="…">…</font>` and the entities `&amp;`
//! `&lt;` `&gt;` `&quot;` `&#39;`. Anything else that looks like a tag or an
//! entity is kept as literal text, so arbitrary markdown lines never fail to
//! parse.

use once_cell::sync::Lazy;
use regex::Regex;

static FONT_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<font\s+face\s*=\s*"([^"]*)"\s*>"#).expect("valid font tag pattern")
});

static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid strong pattern"));

const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// A stretch of text sharing one weight and one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub bold: bool,
    /// The innermost `<font face>` in effect, if any.
    pub face: Option<String>,
}

/// Rewrites `**strong**` into `<b>strong</b>`.
pub fn convert_strong(text: &str) -> String {
    STRONG.replace_all(text, "<b>$1</b>").into_owned()
}

/// Splits marked-up text into spans. Adjacent spans with the same formatting
/// are merged; unbalanced closing tags are ignored.
pub fn parse_markup(input: &str) -> Vec<MarkupSpan> {
    let mut parser = MarkupParser::default();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        let consumed = match c {
            '<' => parser.tag(rest),
            '&' => parser.entity(rest),
            _ => None,
        };
        let consumed = consumed.unwrap_or_else(|| {
            parser.push_char(c);
            c.len_utf8()
        });
        rest = &rest[consumed..];
    }

    parser.finish()
}

#[derive(Default)]
struct MarkupParser {
    spans: Vec<MarkupSpan>,
    current: String,
    bold_depth: usize,
    faces: Vec<String>,
}

impl MarkupParser {
    /// Handles a tag at the start of `rest`, returning its byte length.
    fn tag(&mut self, rest: &str) -> Option<usize> {
        if rest.starts_with("<b>") {
            self.flush();
            self.bold_depth += 1;
            return Some(3);
        }
        if rest.starts_with("</b>") {
            self.flush();
            self.bold_depth = self.bold_depth.saturating_sub(1);
            return Some(4);
        }
        if rest.starts_with("</font>") {
            self.flush();
            self.faces.pop();
            return Some(7);
        }
        let caps = FONT_OPEN.captures(rest)?;
        self.flush();
        self.faces.push(caps[1].to_string());
        Some(caps[0].len())
    }

    fn entity(&mut self, rest: &str) -> Option<usize> {
        let (name, c) = ENTITIES.iter().find(|(name, _)| rest.starts_with(name))?;
        self.push_char(*c);
        Some(name.len())
    }

    fn push_char(&mut self, c: char) {
        self.current.push(c);
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.current);
        let bold = self.bold_depth > 0;
        let face = self.faces.last().cloned();

        match self.spans.last_mut() {
            Some(last) if last.bold == bold && last.face == face => last.text.push_str(&text),
            _ => self.spans.push(MarkupSpan { text, bold, face }),
        }
    }

    fn finish(mut self) -> Vec<MarkupSpan> {
        self.flush();
        self.spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, bold: bool, face: Option<&str>) -> MarkupSpan {
        MarkupSpan {
            text: text.to_string(),
            bold,
            face: face.map(str::to_string),
        }
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(parse_markup("hello world"), vec![span("hello world", false, None)]);
        assert!(parse_markup("").is_empty());
    }

    #[test]
    fn bold_and_font_tags() {
        let spans = parse_markup("a <b>bold</b> and <font face=\"Noto\">🚀</font>!");
        assert_eq!(
            spans,
            vec![
                span("a ", false, None),
                span("bold", true, None),
                span(" and ", false, None),
                span("🚀", false, Some("Noto")),
                span("!", false, None),
            ]
        );
    }

    #[test]
    fn nested_font_inside_bold() {
        let spans = parse_markup("<b>x<font face=\"E\">🔥</font>y</b>");
        assert_eq!(
            spans,
            vec![
                span("x", true, None),
                span("🔥", true, Some("E")),
                span("y", true, None),
            ]
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            parse_markup("a &amp; b &lt;c&gt; &quot;d&quot; &#39;e&#39;"),
            vec![span("a & b <c> \"d\" 'e'", false, None)]
        );
    }

    #[test]
    fn unknown_tags_and_entities_stay_literal() {
        assert_eq!(
            parse_markup("x < y && <i>z</i> &nbsp;"),
            vec![span("x < y && <i>z</i> &nbsp;", false, None)]
        );
    }

    #[test]
    fn stray_closing_tags_are_ignored() {
        assert_eq!(parse_markup("a</b>b</font>c"), vec![span("abc", false, None)]);
    }

    #[test]
    fn strong_becomes_bold() {
        assert_eq!(convert_strong("**RL**: reward"), "<b>RL</b>: reward");
        assert_eq!(convert_strong("a ** b"), "a ** b");
        assert_eq!(
            parse_markup(&convert_strong("use **LoRA** now")),
            vec![
                span("use ", false, None),
                span("LoRA", true, None),
                span(" now", false, None),
            ]
        );
    }
}
