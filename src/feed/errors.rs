//! # Feed Errors

use thiserror::Error;

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors returned by [`BoundedFeed`](super::BoundedFeed)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Post text was empty or whitespace only
    #[error("Post text must not be empty")]
    EmptyInput,
}

impl FeedError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            FeedError::EmptyInput => 400,
        }
    }
}
