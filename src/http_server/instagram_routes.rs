//! Instagram-style user directory routes
//!
//! Users live in per-class namespaces taken from the `{cseName}` segment.
//! Password hashing runs on the blocking pool.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::observability::Logger;
use crate::records::{NewRecord, RandomProfile, Record};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;
use super::support::{parse_json, run_blocking};

/// Attribute holding the display name
pub const FULL_NAME_FIELD: &str = "fullName";

/// User as posted by clients
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramUser {
    #[serde(default)]
    pub mobile_email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Credentials for a session check
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// User as returned by the list route; never carries the secret
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    pub mobile_email: String,
    pub full_name: String,
}

impl UserResponse {
    fn from_record(record: &Record, contact_field: &str) -> Self {
        Self {
            username: record.identifier.clone(),
            mobile_email: record.attribute(contact_field).unwrap_or_default().to_string(),
            full_name: record.attribute(FULL_NAME_FIELD).unwrap_or_default().to_string(),
        }
    }
}

pub fn instagram_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users/random", get(random_profile_handler))
        .route(
            "/users/{cse_name}",
            get(list_users_handler).post(add_user_handler),
        )
        .route("/sessions/{cse_name}", post(session_handler))
        .with_state(state)
}

async fn add_user_handler(
    State(state): State<Arc<AppState>>,
    Path(cse_name): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let user: InstagramUser = parse_json(&body, "user")?;

    let record = NewRecord::new(user.username, user.password)
        .with_attribute(state.records.contact_field(), user.mobile_email)
        .with_attribute(FULL_NAME_FIELD, user.full_name);

    let worker = Arc::clone(&state);
    let namespace = cse_name.clone();
    let result = run_blocking(move || worker.records.add(&namespace, record)).await?;

    match result {
        Ok(()) => {
            state.metrics.increment_records_added();
            Logger::info("USER_ADDED", &[("namespace", cse_name.as_str())]);
            Ok((StatusCode::CREATED, Json(json!({}))))
        }
        Err(e) => {
            state.metrics.increment_records_rejected();
            Err(e.into())
        }
    }
}

async fn list_users_handler(
    State(state): State<Arc<AppState>>,
    Path(cse_name): Path<String>,
) -> Json<Vec<UserResponse>> {
    let contact_field = state.records.contact_field();
    let users = state
        .records
        .list(&cse_name)
        .iter()
        .map(|r| UserResponse::from_record(r, contact_field))
        .collect();

    Json(users)
}

async fn session_handler(
    State(state): State<Arc<AppState>>,
    Path(cse_name): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let request: SessionRequest = parse_json(&body, "user")?;

    let worker = Arc::clone(&state);
    let valid = run_blocking(move || {
        worker
            .records
            .verify_secret(&cse_name, &request.username, &request.password)
    })
    .await?;

    state.metrics.record_verification(valid);
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(json!({})))
}

async fn random_profile_handler(State(state): State<Arc<AppState>>) -> Json<RandomProfile> {
    state.metrics.increment_profiles_generated();
    Json(state.records.random_profile())
}
