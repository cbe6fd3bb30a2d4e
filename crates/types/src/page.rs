//! Page geometry. The generator only ever produces A4 pages; orientation and
//! margins are the adjustable parts.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// A4 in portrait orientation, in points.
pub const A4: Size = Size {
    width: 595.28,
    height: 841.89,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    /// Half an inch on every side.
    fn default() -> Self {
        Self::all(36.0)
    }
}

/// The physical page plus its margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub orientation: Orientation,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn size(&self) -> Size {
        match self.orientation {
            Orientation::Portrait => A4,
            Orientation::Landscape => A4.transposed(),
        }
    }

    /// The frame inside the margins that content is laid out in.
    pub fn content_rect(&self) -> Rect {
        let size = self.size();
        Rect::new(
            self.margins.left,
            self.margins.top,
            (size.width - self.margins.horizontal()).max(0.0),
            (size.height - self.margins.vertical()).max(0.0),
        )
    }
}
