//! Page selection: extract, unzip, rotate

use crate::layout::normalize_rotation;
use crate::options::{ExtractOptions, RotateOptions};
use crate::range::select_pages;
use crate::render::{ObjectCache, OutputDocument, page_ids};
use crate::types::*;
use log::info;
use lopdf::{Document, Object};
use std::collections::{BTreeSet, HashSet};

/// Copy the pages selected by a range expression.
///
/// Pages keep their document order and are copied once each, however the
/// expression orders or repeats them. Out-of-range indices are dropped; an
/// empty selection is an error.
pub fn extract_pages(doc: &Document, options: &ExtractOptions) -> Result<Document> {
    let ids = page_ids(doc);
    let indices: BTreeSet<usize> = select_pages(&options.range, ids.len())?
        .into_iter()
        .collect();
    info!(
        "target pages: {:?}",
        indices.iter().map(|idx| idx + 1).collect::<Vec<_>>()
    );

    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    for idx in indices {
        output.copy_page(doc, ids[idx], &mut cache)?;
    }
    Ok(output.finish())
}

/// Odd and even pages of a document, counted 1-based
#[derive(Debug)]
pub struct Unzipped {
    /// Pages 1, 3, 5, ... (None when the document is empty)
    pub odd: Option<Document>,
    /// Pages 2, 4, 6, ... (None when the document has fewer than two pages)
    pub even: Option<Document>,
}

/// Separate odd and even pages into two documents
pub fn unzip_pages(doc: &Document) -> Result<Unzipped> {
    Ok(Unzipped {
        odd: copy_matching(doc, |idx| idx % 2 == 0)?,
        even: copy_matching(doc, |idx| idx % 2 == 1)?,
    })
}

fn copy_matching(doc: &Document, keep: impl Fn(usize) -> bool) -> Result<Option<Document>> {
    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    for (idx, id) in page_ids(doc).into_iter().enumerate() {
        if keep(idx) {
            output.copy_page(doc, id, &mut cache)?;
        }
    }

    if output.page_count() == 0 {
        return Ok(None);
    }
    Ok(Some(output.finish()))
}

/// Set the rotation of the selected pages; other pages are copied unchanged.
pub fn rotate_pages(doc: &Document, options: &RotateOptions) -> Result<Document> {
    options.validate()?;

    let ids = page_ids(doc);
    let targets: HashSet<usize> = select_pages(&options.pages, ids.len())?
        .into_iter()
        .collect();
    let rotation = normalize_rotation(options.degrees);

    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    for (idx, id) in ids.into_iter().enumerate() {
        let new_id = output.copy_page(doc, id, &mut cache)?;
        if targets.contains(&idx) {
            output
                .page_mut(new_id)?
                .set("Rotate", Object::Integer(rotation.into()));
        }
    }
    Ok(output.finish())
}
