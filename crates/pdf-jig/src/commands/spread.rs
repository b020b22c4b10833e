//! Merging consecutive pages into spreads

use crate::layout::{PageRef, SpreadAction, SpreadPlacement, plan_spread};
use crate::options::SpreadOptions;
use crate::render::{ObjectCache, OutputDocument, RegionDraw, SourcePage, read_pages};
use crate::types::*;
use lopdf::Document;

/// Compute the spread plan of a document without rendering it
pub fn plan_document_spread(doc: &Document, options: &SpreadOptions) -> Result<Vec<SpreadAction>> {
    let pages = read_pages(doc)?;
    let geometry: Vec<PageRef> = pages.iter().map(|page| page.geometry).collect();
    Ok(plan_spread(&geometry, options))
}

/// Merge consecutive page pairs onto single canvases
pub fn spread_pages(doc: &Document, options: &SpreadOptions) -> Result<Document> {
    let pages = read_pages(doc)?;
    let geometry: Vec<PageRef> = pages.iter().map(|page| page.geometry).collect();

    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    for action in plan_spread(&geometry, options) {
        match action {
            SpreadAction::Keep { source } => {
                output.copy_page(doc, pages[source].id, &mut cache)?;
            }
            SpreadAction::Merge(spread) => {
                add_spread_page(&mut output, doc, &pages, &spread, &mut cache)?;
            }
        }
    }
    Ok(output.finish())
}

fn add_spread_page(
    output: &mut OutputDocument,
    doc: &Document,
    pages: &[SourcePage],
    spread: &SpreadPlacement,
    cache: &mut ObjectCache,
) -> Result<()> {
    let draws: Vec<RegionDraw> = spread
        .placements
        .iter()
        .map(|placement| {
            let page = &pages[placement.source];
            RegionDraw {
                page_id: page.id,
                region: page.geometry.media_box,
                translation: placement.translation,
            }
        })
        .collect();

    output.add_composed_page(
        doc,
        spread.canvas_width,
        spread.canvas_height,
        spread.rotation,
        &draws,
        cache,
    )?;
    Ok(())
}
