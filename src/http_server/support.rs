//! Handler helpers shared across route modules.

use serde::de::DeserializeOwned;

use super::errors::{ApiError, ApiResult};

/// Decode a JSON body, mapping failures to `400` with a fixed message
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8], what: &str) -> ApiResult<T> {
    serde_json::from_slice(body)
        .map_err(|_| ApiError::InvalidBody(format!("invalid {} format", what)))
}

/// Run CPU-heavy work (password hashing) off the async workers
pub(crate) async fn run_blocking<F, T>(work: F) -> ApiResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::Internal(format!("worker task failed: {}", e)))
}
