//! Request parameter resolution
//!
//! A request can carry its fields in several places (query string, JSON
//! body). Sources are consulted in the order given and the first non-empty
//! value wins.

use crate::constants::{APPROVER_FIELD, OUT_PATH_FIELD, PDF_PATH_FIELD};
use crate::types::{ResolvedParams, Result, StampRequest};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A place a request parameter can be looked up in
pub trait ParamSource: Sync {
    /// Raw value of `name`, if the source has one
    fn param(&self, name: &str) -> Option<&str>;
}

impl ParamSource for HashMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Top-level fields of a JSON object body.
///
/// Anything that is not a JSON object parses to an empty source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBody(Map<String, Value>);

impl JsonBody {
    pub fn parse(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::default();
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(fields)) => Self(fields),
            Ok(_) => {
                tracing::debug!("Request body is not a JSON object; ignoring it");
                Self::default()
            }
            Err(e) => {
                tracing::debug!("Request body is not valid JSON ({}); ignoring it", e);
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ParamSource for JsonBody {
    // Only string values count; numbers, objects etc. are treated as absent.
    fn param(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

/// First non-empty value of `name` across `sources`, in order
pub fn resolve_param(sources: &[&dyn ParamSource], name: &str) -> Option<String> {
    sources
        .iter()
        .filter_map(|source| source.param(name))
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Resolve all three request fields, keeping whatever was found
pub fn resolve_params(sources: &[&dyn ParamSource]) -> ResolvedParams {
    ResolvedParams {
        approver: resolve_param(sources, APPROVER_FIELD),
        pdf_path: resolve_param(sources, PDF_PATH_FIELD),
        out_path: resolve_param(sources, OUT_PATH_FIELD),
    }
}

/// Resolve a complete [`StampRequest`] or fail with the partial values
pub fn resolve_request(sources: &[&dyn ParamSource]) -> Result<StampRequest> {
    resolve_params(sources).into_request()
}
