//! Page box adjustments: apply-trimbox and trim-margin

use crate::layout::{Rect, apply_margin};
use crate::options::TrimMarginOptions;
use crate::render::{ObjectCache, OutputDocument, box_object, read_pages};
use crate::types::*;
use log::info;
use lopdf::Document;

/// Make each page's TrimBox its visible area.
///
/// Pages without a distinct TrimBox are copied unchanged.
pub fn apply_trimbox(doc: &Document) -> Result<Document> {
    let pages = read_pages(doc)?;

    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    for (idx, page) in pages.iter().enumerate() {
        let new_id = output.copy_page(doc, page.id, &mut cache)?;
        let geometry = &page.geometry;
        if geometry.trim_box == geometry.media_box {
            info!("UNCHANGED: page {} has no trimbox.", idx + 1);
            continue;
        }
        set_visible_box(output.page_mut(new_id)?, &geometry.trim_box);
    }
    Ok(output.finish())
}

/// Shrink each page's MediaBox by percentage margins.
///
/// Every page is checked before any output is built, so a margin too large
/// for one page fails the whole document.
pub fn trim_margin(doc: &Document, options: &TrimMarginOptions) -> Result<Document> {
    let ratios = options.ratios()?;
    let pages = read_pages(doc)?;
    let boxes = pages
        .iter()
        .map(|page| apply_margin(&page.geometry.media_box, &ratios))
        .collect::<Result<Vec<_>>>()?;

    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    for (page, trimmed) in pages.iter().zip(&boxes) {
        let new_id = output.copy_page(doc, page.id, &mut cache)?;
        let dict = output.page_mut(new_id)?;
        dict.set("MediaBox", box_object(trimmed));
        dict.remove(b"CropBox");
    }
    Ok(output.finish())
}

fn set_visible_box(dict: &mut lopdf::Dictionary, rect: &Rect) {
    for key in ["MediaBox", "CropBox", "BleedBox"] {
        dict.set(key, box_object(rect));
    }
}
