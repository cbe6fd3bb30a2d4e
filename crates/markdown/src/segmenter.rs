use crate::block::{Block, Column};
use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("ordered item pattern is valid"));

/// How a single trimmed, non-empty line is classified.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Title,
    Section(&'a str),
    OrderedItem,
    Bullet,
    Other,
}

fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with("# ") {
        LineKind::Title
    } else if let Some(rest) = line.strip_prefix("## ") {
        LineKind::Section(rest.trim())
    } else if ORDERED_ITEM.is_match(line) {
        LineKind::OrderedItem
    } else if line.starts_with("- ") {
        LineKind::Bullet
    } else {
        LineKind::Other
    }
}

/// The numbered item currently collecting bullets. While one is pending the
/// segmenter is "inside a list item".
struct PendingItem {
    heading: String,
    sub_items: Vec<String>,
}

impl From<PendingItem> for Block {
    fn from(item: PendingItem) -> Self {
        Block::ItemGroup {
            heading: item.heading,
            sub_items: item.sub_items,
        }
    }
}

#[derive(Default)]
struct Segmenter {
    blocks: Vec<Block>,
    pending: Option<PendingItem>,
}

impl Segmenter {
    fn flush(&mut self) {
        if let Some(item) = self.pending.take() {
            self.blocks.push(item.into());
        }
    }

    fn feed(&mut self, line: &str) {
        match classify(line) {
            LineKind::Title => log::trace!("dropping title line {:?}", line),
            LineKind::Section(text) => {
                self.flush();
                self.blocks.push(Block::section(text));
            }
            LineKind::OrderedItem => {
                self.flush();
                self.pending = Some(PendingItem {
                    heading: line.to_string(),
                    sub_items: Vec::new(),
                });
            }
            LineKind::Bullet => match self.pending.as_mut() {
                Some(item) => item.sub_items.push(line.to_string()),
                None => log::trace!("dropping bullet outside of a list item: {:?}", line),
            },
            LineKind::Other => {
                if self.pending.is_some() {
                    log::trace!("dropping unrecognized line inside a list item: {:?}", line);
                } else {
                    self.blocks.push(Block::plain(line));
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

/// Parses markdown into blocks in document order.
///
/// Never fails: lines that fit none of the recognized shapes in their
/// context are dropped.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut segmenter = Segmenter::default();
    for line in markdown.lines().map(str::trim).filter(|l| !l.is_empty()) {
        segmenter.feed(line);
    }
    segmenter.finish()
}

/// Splits blocks by index: the left column receives the first `len / 2`
/// blocks, the right column the remainder.
pub fn split_columns(mut blocks: Vec<Block>) -> (Column, Column) {
    let right = blocks.split_off(blocks.len() / 2);
    (Column::new(blocks), Column::new(right))
}

/// Parses `markdown` and splits the result into left and right columns.
pub fn segment(markdown: &str) -> (Column, Column) {
    let blocks = parse_blocks(markdown);
    log::debug!("segmented markdown into {} blocks", blocks.len());
    split_columns(blocks)
}
