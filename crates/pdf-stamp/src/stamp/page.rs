//! Page tree lookups
//!
//! Page attributes such as `MediaBox`, `CropBox` and `Resources` may live on
//! the page itself or on any ancestor `Pages` node.

use crate::constants::{DEFAULT_PAGE_HEIGHT_PT, DEFAULT_PAGE_WIDTH_PT};
use crate::types::PdfError;
use lopdf::{Document, Object, ObjectId};

/// Guards against cyclic `Parent` chains in damaged files
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// A page's visible area in PDF user space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBox {
    pub llx: f32,
    pub lly: f32,
    pub urx: f32,
    pub ury: f32,
}

impl PageBox {
    /// Build a box from two opposite corners in any order
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            llx: x0.min(x1),
            lly: y0.min(y1),
            urx: x0.max(x1),
            ury: y0.max(y1),
        }
    }

    pub fn width(&self) -> f32 {
        self.urx - self.llx
    }

    pub fn height(&self) -> f32 {
        self.ury - self.lly
    }

    /// Overlap of two boxes, `None` when they do not overlap
    pub fn intersect(&self, other: &PageBox) -> Option<PageBox> {
        let clipped = PageBox {
            llx: self.llx.max(other.llx),
            lly: self.lly.max(other.lly),
            urx: self.urx.min(other.urx),
            ury: self.ury.min(other.ury),
        };
        (clipped.width() > 0.0 && clipped.height() > 0.0).then_some(clipped)
    }

    fn from_array(doc: &Document, values: &[Object]) -> Option<Self> {
        if values.len() != 4 {
            return None;
        }
        let mut n = [0.0f32; 4];
        for (slot, value) in n.iter_mut().zip(values) {
            *slot = number(resolve(doc, value)?)?;
        }
        Some(Self::new(n[0], n[1], n[2], n[3]))
    }
}

impl Default for PageBox {
    /// US Letter, used when a page declares no usable `MediaBox`
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT)
    }
}

/// Object ID of the first page
pub fn first_page(doc: &Document) -> Result<ObjectId, PdfError> {
    doc.get_pages()
        .values()
        .next()
        .copied()
        .ok_or(PdfError::NoPages)
}

/// The page's visible area: `CropBox` clipped to `MediaBox`, else the
/// `MediaBox` alone, else US Letter. Both boxes may be inherited.
pub fn page_box(doc: &Document, page_id: ObjectId) -> PageBox {
    let media_box = inherited_box(doc, page_id, b"MediaBox").unwrap_or_default();
    inherited_box(doc, page_id, b"CropBox")
        .and_then(|crop_box| crop_box.intersect(&media_box))
        .unwrap_or(media_box)
}

fn inherited_box(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<PageBox> {
    inherited_attribute(doc, page_id, key)
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_array().ok())
        .and_then(|values| PageBox::from_array(doc, values))
        .filter(|page| page.width() > 0.0 && page.height() > 0.0)
}

/// Look `key` up on the page, then on each ancestor in turn
pub(crate) fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut node_id = page_id;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        let node = doc.get_dictionary(node_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value);
        }
        node_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    }
    None
}

/// Follow a single indirect reference
pub(crate) fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
