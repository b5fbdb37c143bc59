//! # Keyed Record Store
//!
//! Per-namespace user directory keyed by `(namespace, identifier)`.
//!
//! ## Invariants
//! - A key is inserted at most once; the existence check and the insert
//!   happen under one lock hold
//! - Secrets are only stored as salted Argon2id hashes
//! - Secret verification does not reveal whether the identifier exists
//! - Random profiles are drawn from pools owned by the store instance

pub mod crypto;
pub mod errors;
pub mod profile;
pub mod record;
pub mod store;

pub use crypto::{HashParams, SecretHasher};
pub use errors::{RecordError, RecordResult};
pub use profile::{ProfileCandidate, ProfileGenerator, RandomProfile};
pub use record::{NewRecord, Record, RecordKey, IDENTIFIER_FIELD};
pub use store::{KeyedRecordStore, RecordStoreConfig, DEFAULT_CONTACT_FIELD};
