use crate::constants::{APPROVER_FIELD, OUT_PATH_FIELD, PDF_PATH_FIELD};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Low-level cause of a document failure
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("document has no pages")]
    NoPages,
}

#[derive(Error, Debug)]
pub enum StampError {
    #[error("Missing parameters: {0}")]
    MissingParameters(ResolvedParams),
    #[error("Error: Input PDF file at {} not found.", .0.display())]
    InputNotFound(PathBuf),
    #[error("Error creating output directory: {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error opening PDF document: {0}")]
    DocumentOpenFailed(#[source] PdfError),
    #[error("Error rendering approval stamp: {0}")]
    RenderFailed(#[source] PdfError),
    #[error("Error saving stamped PDF: {0}")]
    SaveFailed(#[source] PdfError),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl StampError {
    /// HTTP-style status code reported for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            StampError::MissingParameters(_) | StampError::InputNotFound(_) => 400,
            StampError::DirectoryCreateFailed { .. }
            | StampError::DocumentOpenFailed(_)
            | StampError::RenderFailed(_)
            | StampError::SaveFailed(_)
            | StampError::Unexpected(_) => 500,
        }
    }

    /// Whether the caller sent a request that can never succeed as-is
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<tokio::task::JoinError> for StampError {
    fn from(err: tokio::task::JoinError) -> Self {
        StampError::Unexpected(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StampError>;

/// A fully resolved stamping request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StampRequest {
    /// Name written after "Confirmed by:"
    pub approver: String,
    /// PDF to stamp
    pub input_path: PathBuf,
    /// Directory receiving the stamped copy
    pub output_dir: PathBuf,
}

/// Outcome of parameter resolution; any field may still be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedParams {
    pub approver: Option<String>,
    pub pdf_path: Option<String>,
    pub out_path: Option<String>,
}

impl ResolvedParams {
    /// Names of the fields that did not resolve to a non-empty value
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (APPROVER_FIELD, &self.approver),
            (PDF_PATH_FIELD, &self.pdf_path),
            (OUT_PATH_FIELD, &self.out_path),
        ]
        .into_iter()
        .filter(|(_, value)| non_empty(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// Promote to a [`StampRequest`], or fail with [`StampError::MissingParameters`]
    pub fn into_request(self) -> Result<StampRequest> {
        let (Some(approver), Some(pdf_path), Some(out_path)) = (
            non_empty(&self.approver),
            non_empty(&self.pdf_path),
            non_empty(&self.out_path),
        ) else {
            return Err(StampError::MissingParameters(self));
        };

        Ok(StampRequest {
            approver: approver.to_owned(),
            input_path: PathBuf::from(pdf_path),
            output_dir: PathBuf::from(out_path),
        })
    }
}

impl fmt::Display for ResolvedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}: {}, {}: {}",
            APPROVER_FIELD,
            self.approver.as_deref().unwrap_or_default(),
            PDF_PATH_FIELD,
            self.pdf_path.as_deref().unwrap_or_default(),
            OUT_PATH_FIELD,
            self.out_path.as_deref().unwrap_or_default(),
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
