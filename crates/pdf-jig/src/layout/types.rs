//! Layout data types
//!
//! These types sit between the source document and PDF rendering: pages are
//! read into [`PageRef`] values, the layout engine turns them into plans, and
//! the renderer replays the plans against lopdf.

use crate::types::{JigError, Result};

use super::rotation::{HiddenRotation, hidden_rotation, normalize_rotation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The axis along which pages are split or stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Side by side (left | right); the active dimension is the width
    #[default]
    Horizontal,
    /// Stacked (top / bottom); the active dimension is the height
    Vertical,
}

impl Axis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Axis::Vertical
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from two opposite corners in any order
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Size along an axis
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Read-only geometry of one source page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageRef {
    pub media_box: Rect,
    /// Falls back to the media box when the page has none
    pub trim_box: Rect,
    /// Clockwise display rotation, normalized to 0, 90, 180 or 270
    pub rotation: i32,
}

impl PageRef {
    /// A page of the given size at the origin, unrotated, with no trim box
    pub fn new(width: f32, height: f32) -> Self {
        let media_box = Rect::new(0.0, 0.0, width, height);
        Self {
            media_box,
            trim_box: media_box,
            rotation: 0,
        }
    }

    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation = normalize_rotation(degrees);
        self
    }

    pub fn with_trim_box(mut self, trim_box: Rect) -> Self {
        self.trim_box = trim_box;
        self
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.trim_box.x += x - self.media_box.x;
        self.trim_box.y += y - self.media_box.y;
        self.media_box.x = x;
        self.media_box.y = y;
        self
    }

    pub fn width(&self) -> f32 {
        self.media_box.width
    }

    pub fn height(&self) -> f32 {
        self.media_box.height
    }

    /// Media box size along an axis
    pub fn extent(&self, axis: Axis) -> f32 {
        self.media_box.extent(axis)
    }

    pub fn hidden_rotation(&self) -> Option<HiddenRotation> {
        hidden_rotation(self.rotation)
    }

    /// A page is "singled" when its trimmed content covers less than half
    /// of the media box along the axis: it looks like a spread but holds one page.
    pub fn is_singled(&self, axis: Axis) -> bool {
        self.trim_box.extent(axis) < self.media_box.extent(axis) / 2.0
    }

    /// Reject degenerate geometry before any layout is computed
    pub fn validate(&self) -> Result<()> {
        let Rect { width, height, .. } = self.media_box;
        if !(width > 0.0 && height > 0.0) {
            return Err(JigError::Geometry(format!(
                "page size must be positive, got {} x {}",
                width, height
            )));
        }
        Ok(())
    }
}

/// A region of a source page, relative to its media box origin
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CropRegion {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRegion {
    /// Absolute rectangle of this region on the given page
    pub fn on_page(&self, page: &PageRef) -> Rect {
        Rect::new(
            page.media_box.x + self.offset_x,
            page.media_box.y + self.offset_y,
            self.width,
            self.height,
        )
    }

    /// Check that the region has a positive size and lies inside the page
    pub fn validate_within(&self, page: &PageRef) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(JigError::Geometry(format!(
                "crop region must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        let fits = self.offset_x >= 0.0
            && self.offset_y >= 0.0
            && self.offset_x + self.width <= page.width()
            && self.offset_y + self.height <= page.height();
        if !fits {
            return Err(JigError::Geometry(format!(
                "crop region {:?} exceeds page {} x {}",
                self,
                page.width(),
                page.height()
            )));
        }
        Ok(())
    }
}

/// A 2D translation, i.e. the affine matrix `[1 0 0 1 x y]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn matrix(&self) -> [f32; 6] {
        [1.0, 0.0, 0.0, 1.0, self.x, self.y]
    }
}

/// One source page drawn onto a spread canvas
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index into the source page list
    pub source: usize,
    pub translation: Translation,
}

/// A two-page canvas produced by spreading
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpreadPlacement {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub rotation: i32,
    /// The first placement sits at the canvas origin
    pub placements: Vec<Placement>,
}

/// What happens to one source page when splitting
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SplitAction {
    /// Copied unchanged
    Keep { source: usize },
    /// A singled page, cropped once around its content
    Single {
        source: usize,
        crop: CropRegion,
        rotation: i32,
    },
    /// A spread, cropped into two pages emitted in order
    Halves {
        source: usize,
        crops: [CropRegion; 2],
        rotation: i32,
    },
}

impl SplitAction {
    pub fn source(&self) -> usize {
        match self {
            SplitAction::Keep { source }
            | SplitAction::Single { source, .. }
            | SplitAction::Halves { source, .. } => *source,
        }
    }

    /// Number of output pages this action produces
    pub fn output_pages(&self) -> usize {
        match self {
            SplitAction::Keep { .. } | SplitAction::Single { .. } => 1,
            SplitAction::Halves { .. } => 2,
        }
    }
}

/// One output page of a spread
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpreadAction {
    /// Copied unchanged (single top page, trailing odd page)
    Keep { source: usize },
    /// Two pages merged onto one canvas
    Merge(SpreadPlacement),
}
