use crate::config::ServiceConfig;
use pdf_stamp::Stamper;
use std::sync::Arc;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Stateless stamping pipeline
    pub stamper: Stamper,

    /// Configuration
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(stamper: Stamper, config: ServiceConfig) -> Self {
        Self {
            stamper,
            config: Arc::new(config),
        }
    }
}
