//! # demohub HTTP Server
//!
//! Maps the in-memory services onto JSON over HTTP.
//!
//! # Endpoints
//!
//! - `/`, `/health`, `/metrics` - API index and observability
//! - `/v1/tweets`, `/v1/randTweet` - Tweet feed
//! - `/v1/instagram/*` - User directory, sessions, random profiles
//! - `/v1/projects/{groupName}/{keyName}` - Project key/value store
//! - `/v1/form` - Form echo page

pub mod config;
pub mod errors;
pub mod feed_routes;
pub mod form_routes;
pub mod instagram_routes;
pub mod middleware;
pub mod project_routes;
pub mod root_routes;
pub mod server;
pub mod state;
mod support;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
