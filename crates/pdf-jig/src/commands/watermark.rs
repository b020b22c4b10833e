//! Text watermark along the displayed left edge of each page

use crate::constants::{
    WATERMARK_FONT_NAME, WATERMARK_FONT_SIZE, WATERMARK_GSTATE_NAME, WATERMARK_OPACITY,
    WATERMARK_REPEAT,
};
use crate::layout::PageRef;
use crate::options::WatermarkOptions;
use crate::render::{ObjectCache, OutputDocument, read_pages};
use crate::types::*;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Start point and counter-clockwise angle of the watermark text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPosition {
    pub x: f32,
    pub y: f32,
    pub angle: i32,
}

impl TextPosition {
    /// Text matrix `[cos sin -sin cos x y]`
    pub fn matrix(&self) -> [f32; 6] {
        let (cos, sin) = match self.angle.rem_euclid(360) {
            90 => (0.0, 1.0),
            180 => (-1.0, 0.0),
            270 => (0.0, -1.0),
            _ => (1.0, 0.0),
        };
        [cos, sin, -sin, cos, self.x, self.y]
    }
}

/// Where the text starts so that it runs up the left edge as displayed.
///
/// `em` is the font size; it keeps the glyphs inside the page.
pub fn watermark_position(page: &PageRef, em: f32) -> TextPosition {
    let mbox = page.media_box;
    match page.rotation / 90 {
        1 => TextPosition {
            x: mbox.x + mbox.width,
            y: mbox.y + em,
            angle: 180,
        },
        2 => TextPosition {
            x: mbox.x + mbox.width - em,
            y: mbox.y + mbox.height,
            angle: -90,
        },
        3 => TextPosition {
            x: mbox.x,
            y: mbox.y + mbox.height - em,
            angle: 0,
        },
        _ => TextPosition {
            x: mbox.x + em,
            y: mbox.y,
            angle: 90,
        },
    }
}

/// Draw a numbered label repeatedly along one edge of every page
pub fn watermark_pages(doc: &Document, options: &WatermarkOptions) -> Result<Document> {
    options.validate()?;
    let pages = read_pages(doc)?;

    let mut output = OutputDocument::new();
    let mut cache = ObjectCache::new();
    let font_id = output.document_mut().add_object(helvetica_font());
    let gstate_id = output.document_mut().add_object(translucent_gstate());

    for (idx, page) in pages.iter().enumerate() {
        let new_id = output.copy_page(doc, page.id, &mut cache)?;
        let label = options.label(idx).repeat(WATERMARK_REPEAT);
        let position = watermark_position(&page.geometry, WATERMARK_FONT_SIZE);
        let ops = text_operations(&label, &position);
        overlay_page(output.document_mut(), new_id, ops, font_id, gstate_id)?;
    }
    Ok(output.finish())
}

fn helvetica_font() -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ])
}

fn translucent_gstate() -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"ExtGState".to_vec())),
        ("ca", Object::Real(WATERMARK_OPACITY)),
        ("CA", Object::Real(WATERMARK_OPACITY)),
    ])
}

/// WinAnsi bytes for the standard font.
///
/// Only printable Latin-1 maps to itself; controls and U+007F..U+009F,
/// which WinAnsi assigns to other glyphs, become `?` like everything else.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte @ (0x20..=0x7E | 0xA0..=0xFF)) => byte,
            _ => b'?',
        })
        .collect()
}

fn text_operations(text: &str, position: &TextPosition) -> Vec<Operation> {
    let matrix = position.matrix().into_iter().map(Object::Real).collect();
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "gs",
            vec![Object::Name(WATERMARK_GSTATE_NAME.as_bytes().to_vec())],
        ),
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(WATERMARK_FONT_NAME.as_bytes().to_vec()),
                Object::Real(WATERMARK_FONT_SIZE),
            ],
        ),
        Operation::new("Tm", matrix),
        Operation::new("Tj", vec![Object::string_literal(encode_text(text))]),
        Operation::new("ET", vec![]),
        Operation::new("Q", vec![]),
    ]
}

/// Append the watermark after the page's own content.
///
/// The existing content is wrapped in `q`/`Q` so a graphics state it leaves
/// behind cannot move the watermark.
fn overlay_page(
    doc: &mut Document,
    page_id: ObjectId,
    ops: Vec<Operation>,
    font_id: ObjectId,
    gstate_id: ObjectId,
) -> Result<()> {
    let mut watermark = b"Q\n".to_vec();
    watermark.extend(Content { operations: ops }.encode()?);
    let open_id = doc.add_object(Stream::new(Dictionary::new(), b"q\n".to_vec()));
    let close_id = doc.add_object(Stream::new(Dictionary::new(), watermark));

    let page = doc.get_dictionary(page_id)?;
    let mut contents = vec![Object::Reference(open_id)];
    contents.extend(existing_contents(doc, page.get(b"Contents").ok()));
    contents.push(Object::Reference(close_id));

    let mut resources = inline_dictionary(doc, page.get(b"Resources").ok());
    let mut fonts = inline_dictionary(doc, resources.get(b"Font").ok());
    fonts.set(WATERMARK_FONT_NAME, Object::Reference(font_id));
    let mut gstates = inline_dictionary(doc, resources.get(b"ExtGState").ok());
    gstates.set(WATERMARK_GSTATE_NAME, Object::Reference(gstate_id));
    resources.set("Font", Object::Dictionary(fonts));
    resources.set("ExtGState", Object::Dictionary(gstates));

    let page = doc.get_dictionary_mut(page_id)?;
    page.set("Contents", Object::Array(contents));
    page.set("Resources", Object::Dictionary(resources));
    Ok(())
}

/// Content stream references of a page, flattening a referenced array
fn existing_contents(doc: &Document, contents: Option<&Object>) -> Vec<Object> {
    match contents {
        Some(Object::Reference(id)) => match doc.get_object(*id) {
            Ok(Object::Array(items)) => items.clone(),
            Ok(_) => vec![Object::Reference(*id)],
            Err(_) => Vec::new(),
        },
        Some(Object::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// A private copy of a possibly shared dictionary
fn inline_dictionary(doc: &Document, obj: Option<&Object>) -> Dictionary {
    match obj {
        Some(Object::Dictionary(dict)) => dict.clone(),
        Some(Object::Reference(id)) => doc
            .get_dictionary(*id)
            .cloned()
            .unwrap_or_else(|_| Dictionary::new()),
        _ => Dictionary::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_unrotated_runs_up_left_edge() {
        let page = PageRef::new(600.0, 800.0);
        let pos = watermark_position(&page, 9.0);
        assert_eq!(
            pos,
            TextPosition {
                x: 9.0,
                y: 0.0,
                angle: 90
            }
        );
        assert_eq!(pos.matrix(), [0.0, 1.0, -1.0, 0.0, 9.0, 0.0]);
    }

    #[test]
    fn test_position_per_quadrant() {
        let page = PageRef::new(600.0, 800.0);
        let cases = [
            (90, 600.0, 9.0, 180),
            (180, 591.0, 800.0, -90),
            (270, 0.0, 791.0, 0),
        ];
        for (rotation, x, y, angle) in cases {
            let pos = watermark_position(&page.with_rotation(rotation), 9.0);
            assert_eq!(pos, TextPosition { x, y, angle }, "rotation {}", rotation);
        }
    }

    #[test]
    fn test_position_honors_media_box_origin() {
        let page = PageRef::new(600.0, 800.0).with_origin(10.0, 20.0);
        let pos = watermark_position(&page, 9.0);
        assert_eq!((pos.x, pos.y), (19.0, 20.0));
    }

    #[test]
    fn test_encode_text_replaces_non_latin1() {
        assert_eq!(encode_text("abé"), vec![b'a', b'b', 0xE9]);
        assert_eq!(encode_text("a本"), b"a?".to_vec());
    }

    #[test]
    fn test_encode_text_rejects_winansi_remapped_range() {
        assert_eq!(encode_text("a\u{80}b\u{91}\u{9F}"), b"a?b??".to_vec());
        assert_eq!(encode_text("\u{7F}\u{A0}"), vec![b'?', 0xA0]);
    }
}
