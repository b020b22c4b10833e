//! Page rotation helpers
//!
//! PDF `/Rotate` values are clockwise multiples of 90. A quarter turn (90 or 270)
//! swaps the displayed width and height relative to the media box; this module
//! calls that a "hidden" rotation.

use super::types::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rotation that swaps the displayed axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HiddenRotation {
    /// 90° clockwise (or -270°)
    Quarter,
    /// 270° clockwise (or -90°)
    ThreeQuarter,
}

/// Normalize any angle into `0..360`
pub fn normalize_rotation(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Whether an angle is usable as a page rotation
pub fn is_right_angle(degrees: i32) -> bool {
    degrees.rem_euclid(90) == 0
}

pub fn hidden_rotation(degrees: i32) -> Option<HiddenRotation> {
    match normalize_rotation(degrees) {
        90 => Some(HiddenRotation::Quarter),
        270 => Some(HiddenRotation::ThreeQuarter),
        _ => None,
    }
}

/// Whether the half farther from the origin (top or right) is read first.
///
/// The PDF origin is bottom-left, so an unrotated vertical pair reads its top
/// half first. A 270° page shows its top (or right) side on the left after
/// rotation and also reads far side first; a 90° page shows its bottom side
/// on the left and reads near side first.
pub fn reads_far_side_first(hidden: Option<HiddenRotation>, axis: Axis) -> bool {
    match hidden {
        Some(HiddenRotation::ThreeQuarter) => true,
        Some(HiddenRotation::Quarter) => false,
        None => axis.is_vertical(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(0), 0);
        assert_eq!(normalize_rotation(360), 0);
        assert_eq!(normalize_rotation(-90), 270);
        assert_eq!(normalize_rotation(-270), 90);
        assert_eq!(normalize_rotation(450), 90);
    }

    #[test]
    fn test_hidden_rotation_accounts_for_negative_angles() {
        assert_eq!(hidden_rotation(90), Some(HiddenRotation::Quarter));
        assert_eq!(hidden_rotation(-270), Some(HiddenRotation::Quarter));
        assert_eq!(hidden_rotation(270), Some(HiddenRotation::ThreeQuarter));
        assert_eq!(hidden_rotation(-90), Some(HiddenRotation::ThreeQuarter));
        assert_eq!(hidden_rotation(180), None);
        assert_eq!(hidden_rotation(0), None);
    }

    #[test]
    fn test_is_right_angle() {
        assert!(is_right_angle(-90));
        assert!(is_right_angle(180));
        assert!(!is_right_angle(45));
    }

    #[test]
    fn test_reads_far_side_first() {
        assert!(reads_far_side_first(None, Axis::Vertical));
        assert!(!reads_far_side_first(None, Axis::Horizontal));
        assert!(reads_far_side_first(Some(HiddenRotation::ThreeQuarter), Axis::Horizontal));
        assert!(!reads_far_side_first(Some(HiddenRotation::Quarter), Axis::Vertical));
    }
}
