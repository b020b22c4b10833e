//! Splitting spread pages in two

use crate::layout::{CropRegion, PageRef, SplitAction, Translation, plan_split};
use crate::options::SplitOptions;
use crate::render::{ObjectCache, OutputDocument, RegionDraw, SourcePage, read_pages};
use crate::types::*;
use lopdf::Document;

/// Compute the split plan of a document without rendering it
pub fn plan_document_split(doc: &Document, options: &SplitOptions) -> Result<Vec<SplitAction>> {
    let pages = read_pages(doc)?;
    let geometry: Vec<PageRef> = pages.iter().map(|page| page.geometry).collect();
    plan_split(&geometry, options)
}

/// Split every spread page of a document into two pages
pub fn split_pages(doc: &Document, options: &SplitOptions) -> Result<Document> {
    let pages = read_pages(doc)?;
    let geometry: Vec<PageRef> = pages.iter().map(|page| page.geometry).collect();
    let plan = plan_split(&geometry, options)?;

    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    for action in &plan {
        let page = &pages[action.source()];
        match action {
            SplitAction::Keep { .. } => {
                output.copy_page(doc, page.id, &mut cache)?;
            }
            SplitAction::Single { crop, rotation, .. } => {
                add_cropped_page(&mut output, doc, page, crop, *rotation, &mut cache)?;
            }
            SplitAction::Halves {
                crops, rotation, ..
            } => {
                for crop in crops {
                    add_cropped_page(&mut output, doc, page, crop, *rotation, &mut cache)?;
                }
            }
        }
    }
    Ok(output.finish())
}

fn add_cropped_page(
    output: &mut OutputDocument,
    doc: &Document,
    page: &SourcePage,
    crop: &CropRegion,
    rotation: i32,
    cache: &mut ObjectCache,
) -> Result<()> {
    let draw = RegionDraw {
        page_id: page.id,
        region: crop.on_page(&page.geometry),
        translation: Translation::default(),
    };
    output.add_composed_page(doc, crop.width, crop.height, rotation, &[draw], cache)?;
    Ok(())
}
