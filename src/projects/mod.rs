//! # Project Store
//!
//! Group-scoped key/value store for student project data. Values are JSON
//! documents kept as text; the store does not interpret them.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Key/value storage for project data
pub trait ProjectStore: Send + Sync {
    /// Stored value for `group_name`/`key_name`, if any
    fn get_value(&self, group_name: &str, key_name: &str) -> Option<String>;

    /// Store a value, replacing any previous one
    fn set_value(&self, group_name: &str, key_name: &str, value: String);
}

/// Volatile project store
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    values: Mutex<HashMap<(String, String), String>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage_key(group_name: &str, key_name: &str) -> (String, String) {
        (group_name.to_string(), key_name.to_string())
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn get_value(&self, group_name: &str, key_name: &str) -> Option<String> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.get(&Self::storage_key(group_name, key_name)).cloned()
    }

    fn set_value(&self, group_name: &str, key_name: &str, value: String) {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(Self::storage_key(group_name, key_name), value);
    }
}
