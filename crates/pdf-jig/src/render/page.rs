//! Output document assembly
//!
//! [`OutputDocument`] collects pages, either copied from a source document or
//! composed from regions of source pages, and builds the page tree at the end.

use crate::constants::{INHERITABLE_PAGE_KEYS, OUTPUT_PDF_VERSION};
use crate::layout::{Rect, Translation};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::source::inherited_attribute;
use super::xobject::{ObjectCache, copy_object_deep, create_region_xobject};

/// One region of a source page drawn onto a composed page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionDraw {
    pub page_id: ObjectId,
    /// Absolute coordinates on the source page
    pub region: Rect,
    /// Where the region's lower-left corner lands on the output page
    pub translation: Translation,
}

/// A document under construction
pub struct OutputDocument {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDocument {
    pub fn new() -> Self {
        let mut doc = Document::with_version(OUTPUT_PDF_VERSION);
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Copy a source page with everything it references.
    ///
    /// Attributes inherited from the source page tree are written onto the copy.
    pub fn copy_page(
        &mut self,
        source: &Document,
        page_id: ObjectId,
        cache: &mut ObjectCache,
    ) -> Result<ObjectId> {
        let new_id = self.doc.new_object_id();
        cache.insert(page_id, new_id);

        let page_dict = source.get_dictionary(page_id)?;
        let mut copied = Dictionary::new();
        for (key, value) in page_dict.iter() {
            if key != b"Parent" {
                copied.set(key.clone(), copy_object_deep(&mut self.doc, source, value, cache)?);
            }
        }

        for key in INHERITABLE_PAGE_KEYS {
            if copied.has(key) {
                continue;
            }
            if let Some(value) = inherited_attribute(source, page_id, key) {
                copied.set(key, copy_object_deep(&mut self.doc, source, value, cache)?);
            }
        }
        copied.set("Parent", Object::Reference(self.pages_id));

        self.doc.objects.insert(new_id, Object::Dictionary(copied));
        self.kids.push(new_id);
        Ok(new_id)
    }

    /// Add a new page of the given size showing regions of source pages.
    pub fn add_composed_page(
        &mut self,
        source: &Document,
        width: f32,
        height: f32,
        rotation: i32,
        draws: &[RegionDraw],
        cache: &mut ObjectCache,
    ) -> Result<ObjectId> {
        let mut content_ops = Vec::new();
        let mut xobjects = Dictionary::new();

        for (idx, draw) in draws.iter().enumerate() {
            let xobject_name = format!("P{}", idx);
            let xobject_id =
                create_region_xobject(&mut self.doc, source, draw.page_id, &draw.region, cache)?;
            xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

            let [a, b, c, d, e, f] = draw.translation.matrix();
            content_ops.push(format!(
                "q {} {} {} {} {} {} cm /{} Do Q\n",
                a, b, c, d, e, f, xobject_name
            ));
        }

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = content_ops.join("");
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ]),
        );
        if rotation != 0 {
            page_dict.set("Rotate", Object::Integer(rotation.into()));
        }
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.doc.add_object(page_dict);
        self.kids.push(page_id);
        Ok(page_id)
    }

    /// Mutable access to a page added to this document
    pub fn page_mut(&mut self, page_id: ObjectId) -> Result<&mut Dictionary> {
        Ok(self.doc.get_dictionary_mut(page_id)?)
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Write the page tree and catalog and return the finished document
    pub fn finish(mut self) -> Document {
        let count = self.kids.len() as i64;
        let kids = self.kids.into_iter().map(Object::Reference).collect();
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.doc.trailer.set("Root", catalog_id);

        self.doc
    }
}
