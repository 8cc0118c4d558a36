//! Document I/O and output naming for stamping

use crate::constants::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a PDF document, mapping every failure to [`StampError::DocumentOpenFailed`]
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| StampError::DocumentOpenFailed(e.into()))?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes))
        .await?
        .map_err(|e| StampError::DocumentOpenFailed(e.into()))?;
    Ok(doc)
}

/// Serialize and write the stamped document, replacing any existing file
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PdfError>(writer)
    })
    .await?
    .map_err(StampError::SaveFailed)?;
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| StampError::SaveFailed(e.into()))?;
    Ok(())
}

/// `{stem}_added.pdf`; only the final extension of the input is dropped
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}{}.{}", stem, OUTPUT_SUFFIX, OUTPUT_EXTENSION)
}

/// Where the stamped copy of `input` is written inside `output_dir`
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(output_file_name(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(Path::new("report.pdf")), "report_added.pdf");
        assert_eq!(output_file_name(Path::new("a.b.pdf")), "a.b_added.pdf");
        assert_eq!(output_file_name(Path::new("/tmp/in/doc.pdf")), "doc_added.pdf");
        assert_eq!(output_file_name(Path::new("scan")), "scan_added.pdf");
        assert_eq!(output_file_name(Path::new("UPPER.PDF")), "UPPER_added.pdf");
    }

    #[test]
    fn test_output_path_is_deterministic() {
        let first = output_path(Path::new("/data/in/doc.pdf"), Path::new("/data/out"));
        let second = output_path(Path::new("/data/in/doc.pdf"), Path::new("/data/out"));

        assert_eq!(first, PathBuf::from("/data/out/doc_added.pdf"));
        assert_eq!(first, second);
    }
}
