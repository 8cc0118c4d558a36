//! Mapping of pipeline outcomes to status codes and messages

use crate::types::Result;
use std::path::PathBuf;

pub const STATUS_OK: u16 = 200;

/// Status code and plain-text message returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub status: u16,
    pub message: String,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Map a pipeline outcome to its report, logging failures
pub fn report(outcome: &Result<PathBuf>) -> Report {
    match outcome {
        Ok(path) => Report {
            status: STATUS_OK,
            message: format!("PDF file processed and saved to {}", path.display()),
        },
        Err(err) => {
            if err.is_client_error() {
                tracing::warn!("{}", err);
            } else {
                tracing::error!("{}", err);
            }
            Report {
                status: err.status_code(),
                message: err.to_string(),
            }
        }
    }
}
