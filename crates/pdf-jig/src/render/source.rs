//! Reading page geometry from source documents

use crate::constants::{DEFAULT_PAGE_DIMENSIONS, MAX_PAGE_TREE_DEPTH};
use crate::layout::{PageRef, Rect, normalize_rotation};
use crate::types::Result;
use lopdf::{Document, Object, ObjectId};

/// One page of a loaded document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePage {
    pub id: ObjectId,
    pub geometry: PageRef,
}

/// Read the geometry of every page, in page order
pub fn read_pages(doc: &Document) -> Result<Vec<SourcePage>> {
    doc.get_pages()
        .into_values()
        .map(|id| {
            Ok(SourcePage {
                id,
                geometry: read_page_ref(doc, id)?,
            })
        })
        .collect()
}

/// Object ids of every page, in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// Read one page's boxes and rotation, following page tree inheritance.
///
/// TrimBox falls back to CropBox, then MediaBox; a missing MediaBox means US Letter.
pub fn read_page_ref(doc: &Document, page_id: ObjectId) -> Result<PageRef> {
    let media_box = inherited_attribute(doc, page_id, b"MediaBox")
        .and_then(|obj| read_box(doc, obj))
        .unwrap_or_else(|| {
            Rect::new(0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1)
        });
    let crop_box = inherited_attribute(doc, page_id, b"CropBox")
        .and_then(|obj| read_box(doc, obj))
        .unwrap_or(media_box);
    let trim_box = doc
        .get_dictionary(page_id)?
        .get(b"TrimBox")
        .ok()
        .and_then(|obj| read_box(doc, obj))
        .unwrap_or(crop_box);
    let rotation = inherited_attribute(doc, page_id, b"Rotate")
        .and_then(|obj| resolve(doc, obj).as_i64().ok())
        .unwrap_or(0);

    let page = PageRef {
        media_box,
        trim_box,
        rotation: normalize_rotation((rotation % 360) as i32),
    };
    page.validate()?;
    Ok(page)
}

/// Look up a page attribute on the page or its ancestors.
///
/// The returned object may be a reference; it is not resolved so that
/// callers copying it keep shared objects shared.
pub fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = current.get(key) {
            return Some(value);
        }
        let parent = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent).ok()?;
    }
    None
}

/// Follow a reference, leaving direct objects as they are
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    doc.dereference(obj).map(|(_, o)| o).unwrap_or(obj)
}

fn read_box(doc: &Document, obj: &Object) -> Option<Rect> {
    let values = resolve(doc, obj).as_array().ok()?;
    let [x0, y0, x1, y1] = values.as_slice() else {
        return None;
    };
    Some(Rect::from_corners(
        extract_number(resolve(doc, x0))?,
        extract_number(resolve(doc, y0))?,
        extract_number(resolve(doc, x1))?,
        extract_number(resolve(doc, y1))?,
    ))
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// A box as a PDF array `[x0 y0 x1 y1]`
pub fn box_object(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.x),
        Object::Real(rect.y),
        Object::Real(rect.right()),
        Object::Real(rect.top()),
    ])
}
