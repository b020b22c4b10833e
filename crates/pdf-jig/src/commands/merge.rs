//! Combining documents: insert, swap, concatenate

use crate::options::PlacementOptions;
use crate::range::to_zero_based;
use crate::render::{ObjectCache, OutputDocument, page_ids};
use crate::types::*;
use lopdf::{Document, ObjectId};

/// Zero-based position for a 1-based (or from-end negative) page number,
/// clamped to `0..=page_count`.
pub fn insertion_index(start: i64, page_count: usize) -> usize {
    to_zero_based(start, page_count).clamp(0, page_count as i64) as usize
}

/// Insert every page of `insert` before page `start` of `base`.
pub fn insert_pages(
    base: &Document,
    insert: &Document,
    options: &PlacementOptions,
) -> Result<Document> {
    let base_ids = page_ids(base);
    let position = insertion_index(options.start, base_ids.len());

    let mut output = OutputDocument::new();
    let mut base_cache = ObjectCache::new();
    copy_all(&mut output, base, &base_ids[..position], &mut base_cache)?;
    copy_all(&mut output, insert, &page_ids(insert), &mut ObjectCache::new())?;
    copy_all(&mut output, base, &base_ids[position..], &mut base_cache)?;
    Ok(output.finish())
}

/// Replace pages of `base`, starting at page `start`, with the pages of `replacement`.
///
/// Replacement pages past the end of `base` are appended.
pub fn swap_pages(
    base: &Document,
    replacement: &Document,
    options: &PlacementOptions,
) -> Result<Document> {
    let base_ids = page_ids(base);
    let replacement_ids = page_ids(replacement);
    let position = insertion_index(options.start, base_ids.len());
    let resume = (position + replacement_ids.len()).min(base_ids.len());

    let mut output = OutputDocument::new();
    let mut base_cache = ObjectCache::new();
    copy_all(&mut output, base, &base_ids[..position], &mut base_cache)?;
    copy_all(&mut output, replacement, &replacement_ids, &mut ObjectCache::new())?;
    copy_all(&mut output, base, &base_ids[resume..], &mut base_cache)?;
    Ok(output.finish())
}

/// Concatenate documents in order
pub fn concatenate(documents: &[Document]) -> Result<Document> {
    if documents.is_empty() {
        return Err(JigError::Config("No pdf files to concatenate".to_string()));
    }

    let mut output = OutputDocument::new();
    for doc in documents {
        copy_all(&mut output, doc, &page_ids(doc), &mut ObjectCache::new())?;
    }
    Ok(output.finish())
}

fn copy_all(
    output: &mut OutputDocument,
    source: &Document,
    ids: &[ObjectId],
    cache: &mut ObjectCache,
) -> Result<()> {
    for &id in ids {
        output.copy_page(source, id, cache)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_index() {
        assert_eq!(insertion_index(1, 5), 0);
        assert_eq!(insertion_index(3, 5), 2);
        assert_eq!(insertion_index(-1, 5), 4);
        assert_eq!(insertion_index(6, 5), 5);
        assert_eq!(insertion_index(99, 5), 5);
        assert_eq!(insertion_index(0, 5), 0);
        assert_eq!(insertion_index(-9, 5), 0);
    }
}
