//! Record model.

use std::collections::BTreeMap;

use serde::Serialize;

/// Composite store key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub namespace: String,
    pub identifier: String,
}

impl RecordKey {
    pub fn new(namespace: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
        }
    }
}

/// Record creation request, holding the plaintext secret
#[derive(Debug, Clone, Default)]
pub struct NewRecord {
    pub identifier: String,
    pub secret: String,
    pub attributes: BTreeMap<String, String>,
}

impl NewRecord {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Serialized name of [`Record::identifier`]. Attributes may not use it.
pub const IDENTIFIER_FIELD: &str = "username";

/// Stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(skip_serializing)]
    pub namespace: String,

    /// Unique within the namespace
    #[serde(rename = "username")]
    pub identifier: String,

    /// Argon2id PHC string (never plaintext, never serialized)
    #[serde(skip_serializing)]
    pub secret_hash: String,

    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Record {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
