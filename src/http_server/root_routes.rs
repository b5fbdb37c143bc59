//! API index and observability routes.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::state::AppState;

/// API name reported by the index route
pub const API_NAME: &str = "DEMOHUB";

const API_URIS: [&str; 10] = [
    "/v1/tweets",
    "/v1/randTweet",
    "/v1/form",
    "/v1/instagram/users/{cseName}",
    "/v1/instagram/users/random",
    "/v1/instagram/sessions/{cseName}",
    "/v1/projects/{groupName}/{keyName}",
    "/health",
    "/metrics",
    "/",
];

/// Index document listing the served endpoints
#[derive(Debug, Serialize)]
pub struct ApiVersion {
    pub api: String,
    pub version: String,
    pub urls: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn root_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn index_handler() -> Json<ApiVersion> {
    Json(ApiVersion {
        api: API_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        urls: API_URIS.iter().map(|u| u.to_string()).collect(),
    })
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.metrics.to_json())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_index_lists_feed_routes() {
        let Json(index) = index_handler().await;

        assert_eq!(index.api, API_NAME);
        assert!(index.urls.iter().any(|u| u == "/v1/tweets"));
    }
}
