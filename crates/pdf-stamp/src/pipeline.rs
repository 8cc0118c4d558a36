//! Request pipeline: resolve → validate → stamp → report

use crate::clock::{Clock, SystemClock};
use crate::report::{Report, report};
use crate::resolve::{ParamSource, resolve_request};
use crate::stamp::stamp_pdf;
use crate::types::{Result, StampRequest};
use crate::validate::validate_paths;
use std::path::PathBuf;
use std::sync::Arc;

/// Stateless stamping handler; cheap to clone and share between requests
#[derive(Clone)]
pub struct Stamper {
    clock: Arc<dyn Clock>,
}

impl Default for Stamper {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl Stamper {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Validate paths, then stamp; returns the written output path
    pub async fn stamp(&self, request: &StampRequest) -> Result<PathBuf> {
        validate_paths(request).await?;
        stamp_pdf(request, self.clock.now()).await
    }

    /// Run a full request from its parameter sources, in priority order
    pub async fn handle(&self, sources: &[&dyn ParamSource]) -> Report {
        tracing::info!("Processing approval stamp request");

        let outcome = match resolve_request(sources) {
            Ok(request) => self.stamp(&request).await,
            Err(err) => Err(err),
        };

        let report = report(&outcome);
        if report.is_success() {
            tracing::info!("{}", report.message);
        }
        report
    }
}
