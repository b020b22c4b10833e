use crate::layout::{MarginRatios, is_right_angle, parse_margin};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pages to keep when extracting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractOptions {
    /// Range expression (1-origin, comma-separated, dash-joined)
    pub range: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            range: "1--1".to_string(),
        }
    }
}

/// Where pages of another document go when inserting or swapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementOptions {
    /// 1-origin page position; -1 is the last page
    pub start: i64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self { start: 1 }
    }
}

/// Page rotation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotateOptions {
    /// Clockwise degrees, a multiple of 90
    pub degrees: i32,
    /// Range expression of the pages to rotate
    pub pages: String,
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self {
            degrees: 90,
            pages: "1,-1".to_string(),
        }
    }
}

impl RotateOptions {
    pub fn validate(&self) -> Result<()> {
        if !is_right_angle(self.degrees) {
            return Err(JigError::Config(format!(
                "Invalid degree (must be 90-unit): {}",
                self.degrees
            )));
        }
        Ok(())
    }
}

/// Half-splitting of spread pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitOptions {
    /// Split into upper and lower halves
    pub vertical: bool,
    /// Emit each pair of halves in the opposite order
    pub opposite: bool,
}

/// Merging of consecutive pages into spreads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpreadOptions {
    /// Stack pages top to bottom instead of left to right
    pub vertical: bool,
    /// Keep the first page on its own (book-like)
    pub single_top: bool,
    /// Right to left (bottom to top when vertical)
    pub opposite: bool,
}

/// Margin trimming
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrimMarginOptions {
    /// CSS-style percentages: "all", "v,h" or "top,right,bottom,left"
    pub margin: String,
}

impl TrimMarginOptions {
    pub fn ratios(&self) -> Result<MarginRatios> {
        parse_margin(&self.margin)
    }
}

/// Text watermark along the page edge
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatermarkOptions {
    pub text: String,
    /// Number printed after the text on the first page
    pub start: i64,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            start: 1,
        }
    }
}

impl WatermarkOptions {
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(JigError::Config("Watermark text is empty".to_string()));
        }
        Ok(())
    }

    /// Label drawn on the page at `index`
    pub fn label(&self, index: usize) -> String {
        format!("{}(p.{:03})  ", self.text, self.start + index as i64)
    }
}
