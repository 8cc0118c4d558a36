//! Approval stamping - drawing approver and confirmation time onto a PDF
//!
//! This module orchestrates the stamping process:
//! 1. Load the source document
//! 2. Locate the first page and its page box
//! 3. Build the stamp annotation and apply it to the page
//! 4. Write the document to `{output_dir}/{stem}_added.pdf`

mod annotation;
mod io;
mod page;
mod placement;

pub use annotation::{StampAnnotation, format_timestamp};
pub use io::{load_pdf, output_file_name, output_path, save_pdf};
pub use page::{PageBox, first_page, page_box};
pub use placement::StampPlacement;

use crate::types::*;
use chrono::NaiveDateTime;
use lopdf::Document;
use std::path::PathBuf;

/// Stamp the first page of an in-memory document
pub fn stamp_document(
    doc: &mut Document,
    approver: &str,
    at: &NaiveDateTime,
) -> Result<StampAnnotation> {
    let page_id = first_page(doc).map_err(StampError::DocumentOpenFailed)?;
    let page = page_box(doc, page_id);

    let annotation = StampAnnotation::new(approver, at, &page);
    annotation
        .apply_to_page(doc, page_id)
        .map_err(StampError::RenderFailed)?;
    Ok(annotation)
}

/// Stamp `request.input_path` and write the result into `request.output_dir`.
///
/// Expects the paths to have been validated; returns the written path.
pub async fn stamp_pdf(request: &StampRequest, at: NaiveDateTime) -> Result<PathBuf> {
    let mut doc = load_pdf(&request.input_path).await?;
    let annotation = stamp_document(&mut doc, &request.approver, &at)?;

    let out_path = output_path(&request.input_path, &request.output_dir);
    save_pdf(doc, &out_path).await?;

    tracing::debug!(
        "Stamped {} for {} at {:?}",
        request.input_path.display(),
        request.approver,
        annotation.origin()
    );
    Ok(out_path)
}
