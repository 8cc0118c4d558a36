//! Filesystem checks run before any document is touched

use crate::types::{Result, StampError, StampRequest};
use std::path::Path;

/// Check the input exists and make sure the output directory is there.
///
/// The output directory is created (with parents) when missing, so the
/// later write cannot fail for lack of a directory.
pub async fn validate_paths(request: &StampRequest) -> Result<()> {
    ensure_input_exists(&request.input_path).await?;
    ensure_output_dir(&request.output_dir).await
}

/// Fail with [`StampError::InputNotFound`] unless `path` is an existing file
pub async fn ensure_input_exists(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(StampError::InputNotFound(path.to_owned())),
    }
}

/// Create `dir` and its parents if it does not exist yet
pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    if let Ok(meta) = tokio::fs::metadata(dir).await {
        if meta.is_dir() {
            return Ok(());
        }
    }

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| StampError::DirectoryCreateFailed {
            path: dir.to_owned(),
            source,
        })?;
    tracing::info!("Created output directory {}", dir.display());
    Ok(())
}
