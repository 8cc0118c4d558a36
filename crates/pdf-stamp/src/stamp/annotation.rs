//! Approval stamp text and its rendering into a page
//!
//! A [`StampAnnotation`] is an immutable description of what to draw and
//! where. [`StampAnnotation::apply_to_page`] writes it into a document in a
//! single step:
//! 1. Register a Helvetica font in the page resources
//! 2. Isolate the existing page content with `q`/`Q`
//! 3. Append a content stream drawing the two stamp lines

use super::page::{PageBox, inherited_attribute, resolve};
use super::placement::StampPlacement;
use crate::constants::{
    STAMP_COLOR, STAMP_FONT, STAMP_FONT_RESOURCE, STAMP_FONT_SIZE, STAMP_LINE_HEIGHT_FACTOR,
    TIMESTAMP_FORMAT,
};
use crate::types::PdfError;
use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Format a confirmation time as `YYYY/M/D HH:MM:SS`
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The approval stamp drawn onto a page
#[derive(Debug, Clone, PartialEq)]
pub struct StampAnnotation {
    lines: [String; 2],
    placement: StampPlacement,
    origin: (f32, f32),
    font_size: f32,
    color: (f32, f32, f32),
}

impl StampAnnotation {
    /// Describe the stamp for `approver` confirmed at `at`, placed on `page`
    pub fn new(approver: &str, at: &NaiveDateTime, page: &PageBox) -> Self {
        let placement = StampPlacement::for_page(page);
        Self {
            lines: [
                format!("Confirmed by: {}", approver),
                format!("Confirm time: {}", format_timestamp(at)),
            ],
            placement,
            origin: placement.to_user_space(page),
            font_size: STAMP_FONT_SIZE,
            color: STAMP_COLOR,
        }
    }

    pub fn lines(&self) -> &[String; 2] {
        &self.lines
    }

    /// Anchor in page space (origin top-left)
    pub fn placement(&self) -> StampPlacement {
        self.placement
    }

    /// Anchor in PDF user space, where the first baseline starts
    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Content operations drawing the stamp with the font named `font`
    pub fn content(&self, font: &str) -> Content {
        let (r, g, b) = self.color;
        let (x, y) = self.origin;
        let leading = self.font_size * STAMP_LINE_HEIGHT_FACTOR;

        let mut operations = vec![
            Operation::new("q", vec![]),
            Operation::new("rg", vec![r.into(), g.into(), b.into()]),
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(font.as_bytes().to_vec()), self.font_size.into()],
            ),
            Operation::new("TL", vec![leading.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
        ];
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(line))],
            ));
        }
        operations.push(Operation::new("ET", vec![]));
        operations.push(Operation::new("Q", vec![]));

        Content { operations }
    }

    /// Draw the stamp onto `page_id`, keeping the page's existing content
    pub fn apply_to_page(&self, doc: &mut Document, page_id: ObjectId) -> Result<(), PdfError> {
        let mut resources = page_resources(doc, page_id)?;
        let mut fonts = match resources.get(b"Font").ok().and_then(|obj| resolve(doc, obj)) {
            Some(Object::Dictionary(fonts)) => fonts.clone(),
            _ => Dictionary::new(),
        };

        let font_name = unused_font_name(&fonts);
        let font_id = doc.add_object(stamp_font());
        fonts.set(font_name.as_bytes(), Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));

        let stamp = self.content(&font_name).encode()?;
        let open_id = doc.add_object(Stream::new(Dictionary::new(), b"q\n".to_vec()));
        let close_id = doc.add_object(Stream::new(Dictionary::new(), b"\nQ\n".to_vec()));
        let stamp_id = doc.add_object(Stream::new(Dictionary::new(), stamp));

        let mut contents = vec![Object::Reference(open_id)];
        contents.extend(existing_contents(doc, page_id)?);
        contents.push(Object::Reference(close_id));
        contents.push(Object::Reference(stamp_id));

        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        page.set("Contents", Object::Array(contents));
        page.set("Resources", Object::Dictionary(resources));

        tracing::debug!(
            "Stamp drawn on page {:?} at ({}, {}) with font /{}",
            page_id,
            self.origin.0,
            self.origin.1,
            font_name
        );
        Ok(())
    }
}

/// Resolved copy of the page's (possibly inherited) resource dictionary
fn page_resources(doc: &Document, page_id: ObjectId) -> Result<Dictionary, PdfError> {
    // Fail early when the page itself is not a dictionary.
    doc.get_dictionary(page_id)?;

    Ok(
        match inherited_attribute(doc, page_id, b"Resources").and_then(|obj| resolve(doc, obj)) {
            Some(Object::Dictionary(resources)) => resources.clone(),
            _ => Dictionary::new(),
        },
    )
}

/// The page's content stream references, with an indirect `Contents` array
/// flattened in place
fn existing_contents(doc: &Document, page_id: ObjectId) -> Result<Vec<Object>, PdfError> {
    let page = doc.get_dictionary(page_id)?;
    Ok(match page.get(b"Contents") {
        Ok(Object::Reference(id)) => match doc.get_object(*id) {
            Ok(Object::Array(streams)) => streams.clone(),
            _ => vec![Object::Reference(*id)],
        },
        Ok(Object::Array(streams)) => streams.clone(),
        _ => Vec::new(),
    })
}

/// `FStamp`, or `FStamp1`, `FStamp2`, ... if already taken
fn unused_font_name(fonts: &Dictionary) -> String {
    let mut name = STAMP_FONT_RESOURCE.to_string();
    let mut suffix = 1;
    while fonts.has(name.as_bytes()) {
        name = format!("{}{}", STAMP_FONT_RESOURCE, suffix);
        suffix += 1;
    }
    name
}

fn stamp_font() -> Dictionary {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(STAMP_FONT.as_bytes().to_vec()));
    font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    font_dict
}

/// Encode text for a WinAnsi font; unmappable characters become `?`
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => win_ansi_special(c).unwrap_or(b'?'),
        })
        .collect()
}

/// WinAnsi code points in 0x80..=0x9F that differ from Latin-1
fn win_ansi_special(c: char) -> Option<u8> {
    Some(match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(&at(2024, 3, 5, 9, 7, 3)), "2024/3/5 09:07:03");
        assert_eq!(format_timestamp(&at(2024, 12, 25, 23, 59, 0)), "2024/12/25 23:59:00");
        assert_eq!(format_timestamp(&at(2025, 1, 1, 0, 0, 0)), "2025/1/1 00:00:00");
    }

    #[test]
    fn test_stamp_lines() {
        let stamp = StampAnnotation::new("alice", &at(2024, 3, 5, 14, 30, 0), &PageBox::default());

        assert_eq!(stamp.lines()[0], "Confirmed by: alice");
        assert_eq!(stamp.lines()[1], "Confirm time: 2024/3/5 14:30:00");
    }

    #[test]
    fn test_origin_near_bottom_center() {
        let stamp = StampAnnotation::new("alice", &at(2024, 3, 5, 14, 30, 0), &PageBox::default());

        // 612 x 792: x = 306 - 40, first baseline 25pt above the bottom edge
        assert_eq!(stamp.origin(), (266.0, 25.0));
    }

    #[test]
    fn test_content_operations() {
        let stamp = StampAnnotation::new("alice", &at(2024, 3, 5, 14, 30, 0), &PageBox::default());
        let content = stamp.content("FStamp");
        let ops: Vec<&str> = content
            .operations
            .iter()
            .map(|op| op.operator.as_str())
            .collect();

        assert_eq!(
            ops,
            vec!["q", "rg", "BT", "Tf", "TL", "Td", "Tj", "T*", "Tj", "ET", "Q"]
        );

        let encoded = stamp.content("FStamp").encode().unwrap();
        let text = String::from_utf8_lossy(&encoded);
        assert!(text.contains("(Confirmed by: alice)"));
        assert!(text.contains("(Confirm time: 2024/3/5 14:30:00)"));
        assert!(text.contains("/FStamp"));
    }

    #[test]
    fn test_unused_font_name() {
        let mut fonts = Dictionary::new();
        assert_eq!(unused_font_name(&fonts), "FStamp");

        fonts.set("FStamp", Object::Null);
        fonts.set("FStamp1", Object::Null);
        assert_eq!(unused_font_name(&fonts), "FStamp2");
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("alice"), b"alice".to_vec());
        assert_eq!(encode_win_ansi("José"), vec![b'J', b'o', b's', 0xE9]);
        assert_eq!(encode_win_ansi("€5"), vec![0x80, b'5']);
        assert_eq!(encode_win_ansi("李"), b"?".to_vec());
    }
}
