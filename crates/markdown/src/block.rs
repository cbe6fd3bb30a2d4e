use serde::Serialize;

/// One parsed markdown unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A `## ` heading, stored without its marker.
    Section { text: String },
    /// A numbered item line together with the bullet lines that followed it.
    ItemGroup {
        heading: String,
        sub_items: Vec<String>,
    },
    /// Any other line outside of a list item.
    PlainLine { text: String },
}

impl Block {
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section { text: text.into() }
    }

    pub fn item_group<I, S>(heading: impl Into<String>, sub_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::ItemGroup {
            heading: heading.into(),
            sub_items: sub_items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Block::PlainLine { text: text.into() }
    }

    /// How many paragraphs this block turns into: one per line, so an item
    /// group counts its heading plus every sub-item.
    pub fn element_count(&self) -> usize {
        match self {
            Block::Section { .. } | Block::PlainLine { .. } => 1,
            Block::ItemGroup { sub_items, .. } => 1 + sub_items.len(),
        }
    }
}

/// One half of the page, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Column {
    blocks: Vec<Block>,
}

impl Column {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sum of [`Block::element_count`] over the column.
    pub fn element_count(&self) -> usize {
        self.blocks.iter().map(Block::element_count).sum()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl From<Vec<Block>> for Column {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for Column {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}
