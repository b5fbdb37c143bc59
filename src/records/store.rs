//! # Keyed Record Store
//!
//! In-memory store of user records. All map access goes through a single
//! mutex; hashing happens before the lock is taken.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::crypto::{HashParams, SecretHasher};
use super::errors::{RecordError, RecordResult};
use super::profile::{ProfileGenerator, RandomProfile};
use super::record::{NewRecord, Record, RecordKey};

/// Attribute that must be present and non-blank on every record
pub const DEFAULT_CONTACT_FIELD: &str = "mobileEmail";

/// Record store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStoreConfig {
    /// Name of the required contact attribute
    #[serde(default = "default_contact_field")]
    pub contact_field: String,

    /// Argon2id cost parameters for secrets
    #[serde(default)]
    pub hash: HashParams,
}

fn default_contact_field() -> String {
    DEFAULT_CONTACT_FIELD.to_string()
}

impl Default for RecordStoreConfig {
    fn default() -> Self {
        Self {
            contact_field: default_contact_field(),
            hash: HashParams::default(),
        }
    }
}

/// Concurrent `(namespace, identifier) -> Record` store
#[derive(Debug)]
pub struct KeyedRecordStore {
    contact_field: String,
    hasher: SecretHasher,
    profiles: ProfileGenerator,
    records: Mutex<BTreeMap<RecordKey, Record>>,
}

impl KeyedRecordStore {
    /// Create an empty store
    pub fn new(config: RecordStoreConfig, profiles: ProfileGenerator) -> RecordResult<Self> {
        Ok(Self {
            contact_field: config.contact_field,
            hasher: SecretHasher::new(config.hash)?,
            profiles,
            records: Mutex::new(BTreeMap::new()),
        })
    }

    /// Name of the required contact attribute
    pub fn contact_field(&self) -> &str {
        &self.contact_field
    }

    /// Total number of records across all namespaces
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Insert a record once.
    ///
    /// Fails with `MissingFields` if the identifier, contact attribute or
    /// secret is blank, and with `AlreadyExists` if the key is taken. The
    /// first successful insert for a key wins; nothing is ever overwritten.
    pub fn add(&self, namespace: &str, record: NewRecord) -> RecordResult<()> {
        let NewRecord {
            identifier,
            secret,
            attributes,
        } = record;

        let contact = attributes
            .get(&self.contact_field)
            .map(String::as_str)
            .unwrap_or("");

        if is_blank(&identifier) || is_blank(contact) || is_blank(&secret) {
            return Err(RecordError::MissingFields);
        }

        let secret_hash = self.hasher.hash(&secret)?;
        let key = RecordKey::new(namespace, identifier.clone());

        let mut records = self.lock();
        if records.contains_key(&key) {
            return Err(RecordError::AlreadyExists);
        }

        records.insert(
            key,
            Record {
                namespace: namespace.to_string(),
                identifier,
                secret_hash,
                attributes,
            },
        );

        Ok(())
    }

    /// All records in a namespace, ordered by identifier
    pub fn list(&self, namespace: &str) -> Vec<Record> {
        self.lock()
            .values()
            .filter(|r| r.namespace == namespace)
            .cloned()
            .collect()
    }

    /// Check a secret for a key.
    ///
    /// Returns `false` both for a wrong secret and for an unknown key.
    pub fn verify_secret(&self, namespace: &str, identifier: &str, attempt: &str) -> bool {
        let key = RecordKey::new(namespace, identifier);
        let stored = self.lock().get(&key).map(|r| r.secret_hash.clone());

        match stored {
            Some(hash) => self.hasher.verify(attempt, &hash),
            None => self.hasher.verify_absent(attempt),
        }
    }

    /// Draw a random demo profile. Does not touch stored records.
    pub fn random_profile(&self) -> RandomProfile {
        self.profiles.generate()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<RecordKey, Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
