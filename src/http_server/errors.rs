//! # HTTP API Errors
//!
//! Every handler failure becomes an `ApiError`, rendered as
//! `{"error": ..., "code": ...}` with the matching status. The request
//! logging middleware writes the log line, picking the message up from
//! the response's [`ErrorMessage`] extension.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::feed::FeedError;
use crate::records::RecordError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Post text outside the accepted length range
    #[error("Tweet length must be 1-{max} characters.")]
    PostLength { max: usize },

    /// Unknown identifier or wrong secret; deliberately indistinguishable
    #[error("Invalid username and/or password.")]
    InvalidCredentials,

    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Record(#[from] RecordError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Worker task failed before producing a result
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PostLength { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Feed(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            ApiError::Record(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

/// Error text attached to a response's extensions for the access log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = ErrorMessage(self.to_string());

        let mut response = (status, Json(ErrorResponse::from(self))).into_response();
        response.extensions_mut().insert(message);
        response
    }
}
