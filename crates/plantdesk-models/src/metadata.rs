//! Opaque per-record metadata.
//!
//! Dashboards attach free-form details (inspection references, funding
//! codes, ...) to records. The service stores and returns the JSON object
//! verbatim and never interprets its contents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidationError;

/// Upper bound on top-level metadata keys per record.
pub const MAX_METADATA_KEYS: usize = 50;

/// A JSON object; arrays, strings and other scalars are rejected on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

pub(crate) fn validate_metadata(metadata: &Metadata) -> Result<(), ValidationError> {
    if metadata.len() > MAX_METADATA_KEYS {
        let mut err = ValidationError::new("metadata_too_large");
        err.message = Some(
            format!("metadata must have at most {} keys", MAX_METADATA_KEYS).into(),
        );
        return Err(err);
    }
    Ok(())
}
