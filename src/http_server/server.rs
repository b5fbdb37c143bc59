//! # HTTP Server
//!
//! Combines all route groups into one Axum router and serves it.

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::observability::Logger;
use crate::records::RecordResult;

use super::config::HttpServerConfig;
use super::feed_routes::feed_routes;
use super::form_routes::form_routes;
use super::instagram_routes::instagram_routes;
use super::middleware::log_requests;
use super::project_routes::project_routes;
use super::root_routes::root_routes;
use super::state::AppState;

/// HTTP server for the demo services
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
    router: Router,
}

impl HttpServer {
    /// Create a server with fresh services built from `config`
    pub fn new(config: &ServiceConfig) -> RecordResult<Self> {
        let state = Arc::new(AppState::from_config(config)?);
        Ok(Self::with_state(config.http.clone(), state))
    }

    /// Create a server over existing services
    pub fn with_state(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let v1 = Router::new()
            .merge(feed_routes(Arc::clone(&state)))
            .merge(form_routes())
            .nest("/instagram", instagram_routes(Arc::clone(&state)))
            .nest("/projects", project_routes(Arc::clone(&state)));

        Router::new()
            .merge(root_routes(Arc::clone(&state)))
            .nest("/v1", v1)
            .layer(from_fn_with_state(state, log_requests))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared services behind the router
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        Logger::info(
            "HTTP_SERVER_LISTENING",
            &[
                ("addr", addr.as_str()),
                ("version", env!("CARGO_PKG_VERSION")),
            ],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
