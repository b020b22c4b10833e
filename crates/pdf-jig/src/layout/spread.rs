//! Spread layout: merging page pairs onto one canvas
//!
//! Pages are paired in order. Each pair decides its own axis: a quarter-turned
//! page in the pair flips the requested direction for that pair only, so one
//! odd page can't change the layout of the rest of the document.

use crate::options::SpreadOptions;
use log::debug;

use super::rotation::reads_far_side_first;
use super::{Axis, PageRef, Placement, SpreadAction, SpreadPlacement, Translation};

/// Plan the output pages of a spread.
pub fn plan_spread(pages: &[PageRef], options: &SpreadOptions) -> Vec<SpreadAction> {
    let mut actions = Vec::with_capacity(pages.len() / 2 + 1);

    let start = if options.single_top && !pages.is_empty() {
        actions.push(SpreadAction::Keep { source: 0 });
        1
    } else {
        0
    };

    for first in (start..pages.len()).step_by(2) {
        let second = first + 1;
        if second == pages.len() {
            actions.push(SpreadAction::Keep { source: first });
            continue;
        }
        actions.push(SpreadAction::Merge(spread_pair(pages, first, second, options)));
    }

    actions
}

/// Axis of one pair's canvas
pub fn pair_axis(first: &PageRef, second: &PageRef, vertical: bool) -> Axis {
    let axis = Axis::from_vertical(vertical);
    if first.hidden_rotation().is_some() || second.hidden_rotation().is_some() {
        axis.flipped()
    } else {
        axis
    }
}

/// Canvas `(width, height)` holding both pages along `axis`
pub fn canvas_size(a: &PageRef, b: &PageRef, axis: Axis) -> (f32, f32) {
    match axis {
        Axis::Horizontal => (a.width() + b.width(), a.height().max(b.height())),
        Axis::Vertical => (a.width().max(b.width()), a.height() + b.height()),
    }
}

/// Place one pair on a canvas.
///
/// The reading-order rule follows the first page's quarter turn, falling
/// back to the second page's. A pair mixing 90 and 270 degrees therefore
/// reads in the first page's direction, matching the canvas rotation, which
/// also comes from the first page.
fn spread_pair(
    pages: &[PageRef],
    first: usize,
    second: usize,
    options: &SpreadOptions,
) -> SpreadPlacement {
    let (first_page, second_page) = (&pages[first], &pages[second]);
    let axis = pair_axis(first_page, second_page, options.vertical);
    let hidden = first_page
        .hidden_rotation()
        .or_else(|| second_page.hidden_rotation());
    if hidden.is_some() {
        debug!(
            "pages {}-{} are rotated, spreading along the other axis",
            first + 1,
            second + 1
        );
    }

    let (lead, follow) = if options.opposite {
        (second, first)
    } else {
        (first, second)
    };

    // The page at the origin is the base; the other sits past it on the far side.
    let (base, far) = if reads_far_side_first(hidden, axis) {
        (follow, lead)
    } else {
        (lead, follow)
    };
    let base_page = &pages[base];
    let offset = match axis {
        Axis::Horizontal => Translation::new(base_page.width(), 0.0),
        Axis::Vertical => Translation::new(0.0, base_page.height()),
    };

    let (canvas_width, canvas_height) = canvas_size(base_page, &pages[far], axis);

    SpreadPlacement {
        canvas_width,
        canvas_height,
        rotation: first_page.rotation,
        placements: vec![
            Placement {
                source: base,
                translation: Translation::default(),
            },
            Placement {
                source: far,
                translation: offset,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_uses_sum_and_max() {
        let a = PageRef::new(300.0, 500.0);
        let b = PageRef::new(301.0, 499.0);
        assert_eq!(canvas_size(&a, &b, Axis::Horizontal), (601.0, 500.0));
        assert_eq!(canvas_size(&a, &b, Axis::Vertical), (301.0, 999.0));
    }

    #[test]
    fn test_pair_axis_is_local() {
        let plain = PageRef::new(300.0, 500.0);
        let rotated = PageRef::new(300.0, 500.0).with_rotation(270);
        assert_eq!(pair_axis(&plain, &plain, false), Axis::Horizontal);
        assert_eq!(pair_axis(&plain, &rotated, false), Axis::Vertical);
        assert_eq!(pair_axis(&rotated, &plain, true), Axis::Horizontal);
        assert_eq!(
            pair_axis(&plain, &plain.with_rotation(180), true),
            Axis::Vertical
        );
    }
}
