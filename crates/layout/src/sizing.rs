//! Font size heuristics.
//!
//! Every size is derived from one "item" size by fixed ratios. With
//! auto-sizing the item size shrinks as the amount of content grows so a
//! typical outline still fits on one page.

use onepager_markdown::Column;
use serde::Serialize;

/// Element budget divided by the element count when auto-sizing.
pub const AUTO_SIZE_BUDGET: f32 = 200.0;
pub const MIN_AUTO_SIZE: f32 = 6.0;
pub const MAX_AUTO_SIZE: f32 = 12.0;
/// Upper bound for the title size.
pub const TITLE_CAP: f32 = 16.0;

pub const SUB_ITEM_RATIO: f32 = 0.9;
pub const SECTION_RATIO: f32 = 1.2;
pub const TITLE_RATIO: f32 = 1.5;

/// The four font sizes used by one render, in points.
///
/// Always ordered `sub_item <= item <= section <= title`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeProfile {
    pub title: f32,
    pub section: f32,
    pub item: f32,
    pub sub_item: f32,
}

impl SizeProfile {
    /// Derives the other tiers from the item size.
    pub fn from_item_size(item: f32) -> Self {
        let section = item * SECTION_RATIO;
        // The cap alone would drop the title under large section sizes.
        let title = (item * TITLE_RATIO).min(TITLE_CAP).max(section);
        Self {
            title,
            section,
            item,
            sub_item: item * SUB_ITEM_RATIO,
        }
    }
}

/// Computes the size profile for a document with `total_element_count`
/// paragraphs.
///
/// Without `auto_size` the item size is `base_size` exactly. With it the
/// item size is `200 / count` clamped to `6..=12`; an empty document gets the
/// minimum.
pub fn compute_sizes(total_element_count: usize, base_size: f32, auto_size: bool) -> SizeProfile {
    let item = if !auto_size {
        base_size
    } else if total_element_count == 0 {
        MIN_AUTO_SIZE
    } else {
        (AUTO_SIZE_BUDGET / total_element_count as f32).clamp(MIN_AUTO_SIZE, MAX_AUTO_SIZE)
    };
    SizeProfile::from_item_size(item)
}

/// Counts the paragraphs both columns will produce.
pub fn count_elements(left: &Column, right: &Column) -> usize {
    left.element_count() + right.element_count()
}
