//! Margin trimming geometry
//!
//! Margins are percentages of the page size, written like CSS margins:
//! one value for all sides, two for vertical/horizontal, or four for
//! top, right, bottom, left.

use crate::types::{JigError, Result};

use super::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Margins as percentages of the page size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarginRatios {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl MarginRatios {
    pub fn uniform(percent: f32) -> Self {
        Self {
            top: percent,
            right: percent,
            bottom: percent,
            left: percent,
        }
    }
}

/// Parse a CSS-style margin list such as `"5"`, `"5,10"` or `"5,10,5,0"`.
pub fn parse_margin(spec: &str) -> Result<MarginRatios> {
    let invalid = || JigError::Config(format!("Invalid margin: {:?}", spec));

    let values = spec
        .split(',')
        .map(|part| part.trim().parse::<f32>().ok())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(invalid());
    }

    match values[..] {
        [all] => Ok(MarginRatios::uniform(all)),
        [vertical, horizontal] => Ok(MarginRatios {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }),
        [top, right, bottom, left] => Ok(MarginRatios {
            top,
            right,
            bottom,
            left,
        }),
        _ => Err(invalid()),
    }
}

/// Shrink a box by the given margins.
///
/// Fails when the margins leave no positive area.
pub fn apply_margin(rect: &Rect, margin: &MarginRatios) -> Result<Rect> {
    let top = margin.top / 100.0 * rect.height;
    let right = margin.right / 100.0 * rect.width;
    let bottom = margin.bottom / 100.0 * rect.height;
    let left = margin.left / 100.0 * rect.width;

    let trimmed = Rect::new(
        rect.x + left,
        rect.y + bottom,
        rect.width - left - right,
        rect.height - top - bottom,
    );

    if trimmed.width <= 0.0 || trimmed.height <= 0.0 {
        return Err(JigError::Geometry(format!(
            "margins {:?} leave no area on a {} x {} page",
            margin, rect.width, rect.height
        )));
    }
    Ok(trimmed)
}
