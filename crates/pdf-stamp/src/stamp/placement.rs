//! Stamp anchor geometry
//!
//! The anchor is computed in page space: origin at the top-left corner of
//! the page box, y growing downward. The stamp sits in the bottom band of
//! the page, slightly left of center, whatever the page size.

use super::page::PageBox;
use crate::constants::{STAMP_BASELINE_DROP, STAMP_BOTTOM_MARGIN, STAMP_X_OFFSET};

/// Where the first stamp baseline starts, in page space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampPlacement {
    pub x: f32,
    pub y: f32,
}

impl StampPlacement {
    /// Anchor for a page: `(width / 2 - 40, height - 50 + 25)`
    pub fn for_page(page: &PageBox) -> Self {
        Self {
            x: page.width() / 2.0 - STAMP_X_OFFSET,
            y: page.height() - STAMP_BOTTOM_MARGIN + STAMP_BASELINE_DROP,
        }
    }

    /// Convert to PDF user space (origin bottom-left, y upward)
    pub fn to_user_space(self, page: &PageBox) -> (f32, f32) {
        (page.llx + self.x, page.ury - self.y)
    }
}
