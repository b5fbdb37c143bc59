//! Project Store HTTP Routes
//!
//! Values are arbitrary JSON documents, stored and returned verbatim.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;

pub fn project_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/{group_name}/{key_name}",
            get(get_value_handler).post(set_value_handler),
        )
        .with_state(state)
}

async fn get_value_handler(
    State(state): State<Arc<AppState>>,
    Path((group_name, key_name)): Path<(String, String)>,
) -> impl IntoResponse {
    state.metrics.increment_project_reads();

    let body = state
        .projects
        .get_value(&group_name, &key_name)
        .unwrap_or_else(|| "null".to_string());

    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn set_value_handler(
    State(state): State<Arc<AppState>>,
    Path((group_name, key_name)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    serde_json::from_slice::<Value>(&body)
        .map_err(|_| ApiError::InvalidBody("invalid JSON".to_string()))?;

    let value = String::from_utf8(body.to_vec())
        .map_err(|_| ApiError::InvalidBody("invalid JSON".to_string()))?;

    state.projects.set_value(&group_name, &key_name, value);
    state.metrics.increment_project_writes();

    Ok(Json(json!({})))
}
