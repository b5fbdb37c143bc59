//! Observability for demohub
//!
//! - Structured JSON logging, one line per event, deterministic key order
//! - Monotonic counters, reset only on process start
//!
//! The feed, record and project stores never log; the HTTP layer records
//! what happened to each request.
//!
//! ```ignore
//! use demohub::observability::{Logger, MetricsRegistry};
//!
//! Logger::info("POST_ADDED", &[("id", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_posts_added();
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
