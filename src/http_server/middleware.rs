//! Request logging middleware
//!
//! Tags every response with an `x-request-id` and writes one log line per
//! request: INFO for success, WARN for client errors, ERROR for server errors.
//! Error responses add their message to that same line.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::observability::{Logger, Severity};

use super::errors::ErrorMessage;
use super::state::AppState;

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    state.metrics.increment_requests_served();

    let status = response.status();
    let severity = if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    };

    let elapsed_us = started.elapsed().as_micros().to_string();
    let mut fields = vec![
        ("elapsed_us", elapsed_us.as_str()),
        ("method", method.as_str()),
        ("request_id", request_id.as_str()),
        ("status", status.as_str()),
        ("uri", uri.as_str()),
    ];
    if let Some(ErrorMessage(message)) = response.extensions().get::<ErrorMessage>() {
        fields.push(("error", message.as_str()));
    }

    Logger::log(severity, "HTTP_RESPONSE_SENT", &fields);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
