//! Turns the two block columns into the rows of the page table.

use itertools::{EitherOrBoth, Itertools};
use onepager_markdown::{Block, Column};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Section,
    Item,
    SubItem,
}

/// The paragraph held by one table cell, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
    pub kind: CellKind,
    pub text: String,
}

impl CellContent {
    fn new(kind: CellKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// One table row. `None` is the empty cell padding the shorter column.
pub type Row = (Option<CellContent>, Option<CellContent>);

/// Flattens a column into cells: one per section or plain line, and one per
/// item heading followed by one per sub-item.
pub fn column_cells(column: &Column) -> Vec<CellContent> {
    let mut cells = Vec::with_capacity(column.element_count());
    for block in column {
        match block {
            Block::Section { text } => cells.push(CellContent::new(CellKind::Section, text)),
            Block::ItemGroup { heading, sub_items } => {
                cells.push(CellContent::new(CellKind::Item, heading));
                cells.extend(
                    sub_items
                        .iter()
                        .map(|s| CellContent::new(CellKind::SubItem, s)),
                );
            }
            Block::PlainLine { text } => cells.push(CellContent::new(CellKind::Item, text)),
        }
    }
    cells
}

/// Zips the cells of both columns row by row.
pub fn table_rows(left: &Column, right: &Column) -> Vec<Row> {
    column_cells(left)
        .into_iter()
        .zip_longest(column_cells(right))
        .map(|pair| match pair {
            EitherOrBoth::Both(l, r) => (Some(l), Some(r)),
            EitherOrBoth::Left(l) => (Some(l), None),
            EitherOrBoth::Right(r) => (None, Some(r)),
        })
        .collect()
}
