//! Split layout: dividing oversized pages in two
//!
//! Each source page becomes one of:
//! - a kept page (the smallest size of a mixed-size document, e.g. a cover)
//! - a singled page, cropped once to the middle half of the active axis
//! - a spread, cropped into two halves emitted in reading order

use crate::options::SplitOptions;
use crate::types::Result;
use log::{debug, info};

use super::rotation::reads_far_side_first;
use super::{Axis, CropRegion, PageRef, SplitAction};

/// Distinct page sizes along one axis
#[derive(Debug, Clone, PartialEq)]
pub struct SizeVariants {
    variants: Vec<f32>,
}

impl SizeVariants {
    pub fn collect(pages: &[PageRef], axis: Axis) -> Self {
        let mut variants: Vec<f32> = pages.iter().map(|page| page.extent(axis)).collect();
        variants.sort_by(f32::total_cmp);
        variants.dedup();
        Self { variants }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn min(&self) -> Option<f32> {
        self.variants.first().copied()
    }

    pub fn max(&self) -> Option<f32> {
        self.variants.last().copied()
    }

    /// True for the smallest size of a document that has more than one size
    pub fn is_minimal(&self, size: f32) -> bool {
        self.len() > 1 && self.min() == Some(size)
    }
}

/// Axis actually used for the whole document.
///
/// A quarter-turned page anywhere in the document means the requested
/// direction refers to the displayed page, so the axis flips once, globally.
pub fn effective_split_axis(pages: &[PageRef], vertical: bool) -> Axis {
    let axis = Axis::from_vertical(vertical);
    if pages.iter().any(|page| page.hidden_rotation().is_some()) {
        debug!("hidden rotation found, splitting along the other axis");
        axis.flipped()
    } else {
        axis
    }
}

/// Plan how every page of a document is split.
pub fn plan_split(pages: &[PageRef], options: &SplitOptions) -> Result<Vec<SplitAction>> {
    let axis = effective_split_axis(pages, options.vertical);
    let sizes = SizeVariants::collect(pages, axis);

    pages
        .iter()
        .enumerate()
        .map(|(idx, page)| {
            page.validate()?;

            if sizes.is_minimal(page.extent(axis)) {
                info!("- Skip: page {} is minimal size.", idx + 1);
                return Ok(SplitAction::Keep { source: idx });
            }

            if page.is_singled(axis) {
                info!("- Note: page {} is non-spreaded.", idx + 1);
                return single_action(idx, page, axis);
            }

            halves_action(idx, page, axis, options.opposite)
        })
        .collect()
}

fn single_action(source: usize, page: &PageRef, axis: Axis) -> Result<SplitAction> {
    let size = page.extent(axis);
    let quarter = (size / 4.0).floor();
    let half = (size / 2.0).floor();

    let crop = crop_region(page, axis, quarter, half);
    crop.validate_within(page)?;

    Ok(SplitAction::Single {
        source,
        crop,
        rotation: page.rotation,
    })
}

fn halves_action(source: usize, page: &PageRef, axis: Axis, opposite: bool) -> Result<SplitAction> {
    let half = (page.extent(axis) / 2.0).floor();

    let far_first = reads_far_side_first(page.hidden_rotation(), axis);
    let offsets = if far_first != opposite {
        [half, 0.0]
    } else {
        [0.0, half]
    };

    let crops = offsets.map(|offset| crop_region(page, axis, offset, half));
    for crop in &crops {
        crop.validate_within(page)?;
    }

    Ok(SplitAction::Halves {
        source,
        crops,
        rotation: page.rotation,
    })
}

/// A crop spanning the full cross-axis and `length` along `axis` from `offset`.
pub fn crop_region(page: &PageRef, axis: Axis, offset: f32, length: f32) -> CropRegion {
    match axis {
        Axis::Horizontal => CropRegion {
            offset_x: offset,
            offset_y: 0.0,
            width: length,
            height: page.height(),
        },
        Axis::Vertical => CropRegion {
            offset_x: 0.0,
            offset_y: offset,
            width: page.width(),
            height: length,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_variants() {
        let pages = [
            PageRef::new(400.0, 600.0),
            PageRef::new(800.0, 600.0),
            PageRef::new(800.0, 600.0),
        ];
        let sizes = SizeVariants::collect(&pages, Axis::Horizontal);
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.min(), Some(400.0));
        assert_eq!(sizes.max(), Some(800.0));
        assert!(sizes.is_minimal(400.0));
        assert!(!sizes.is_minimal(800.0));

        let uniform = SizeVariants::collect(&pages, Axis::Vertical);
        assert_eq!(uniform.len(), 1);
        assert!(!uniform.is_minimal(600.0));
    }

    #[test]
    fn test_crop_region_axes() {
        let page = PageRef::new(800.0, 600.0);
        assert_eq!(
            crop_region(&page, Axis::Horizontal, 400.0, 400.0),
            CropRegion {
                offset_x: 400.0,
                offset_y: 0.0,
                width: 400.0,
                height: 600.0,
            }
        );
        assert_eq!(
            crop_region(&page, Axis::Vertical, 300.0, 300.0),
            CropRegion {
                offset_x: 0.0,
                offset_y: 300.0,
                width: 800.0,
                height: 300.0,
            }
        );
    }

    #[test]
    fn test_effective_axis_flips_globally() {
        let pages = [PageRef::new(800.0, 600.0), PageRef::new(800.0, 600.0).with_rotation(-90)];
        assert_eq!(effective_split_axis(&pages, false), Axis::Vertical);
        assert_eq!(effective_split_axis(&pages[..1], false), Axis::Horizontal);
    }
}
