//! PDF rendering on top of lopdf
//!
//! This module handles all PDF-specific operations:
//! - Reading page geometry from source documents
//! - Deep copying pages and their resources
//! - Creating XObjects from regions of source pages
//! - Assembling output documents

mod page;
mod source;
mod xobject;

pub use page::*;
pub use source::{SourcePage, box_object, inherited_attribute, page_ids, read_page_ref, read_pages};
pub use xobject::{ObjectCache, copy_object_deep, create_region_xobject};
