//! demohub - in-memory demo services behind a small REST API
//!
//! - [`feed`]: capacity-bounded tweet feed with monotonic ids
//! - [`records`]: per-namespace user directory with Argon2id secrets
//! - [`projects`]: group-scoped key/value store
//! - [`http_server`]: Axum routes mapping the services onto JSON

pub mod cli;
pub mod config;
pub mod feed;
pub mod http_server;
pub mod observability;
pub mod projects;
pub mod records;
