//! # Record Store Errors

use thiserror::Error;

/// Result type for record store operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors returned by [`KeyedRecordStore`](super::KeyedRecordStore)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field was blank after trimming
    #[error("missing required user fields")]
    MissingFields,

    /// A record with the same namespace and identifier exists
    #[error("user already exists")]
    AlreadyExists,

    /// The password hashing primitive failed
    #[error("Internal error: secret hashing failed")]
    HashingFailed,

    /// Argon2 rejected the configured cost parameters
    #[error("Invalid hash parameters: {0}")]
    InvalidHashParams(String),
}

impl RecordError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RecordError::MissingFields => 400,
            RecordError::AlreadyExists => 409,
            RecordError::HashingFailed => 500,
            RecordError::InvalidHashParams(_) => 500,
        }
    }
}
