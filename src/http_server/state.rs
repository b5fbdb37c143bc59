//! Shared handler state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::feed::BoundedFeed;
use crate::observability::MetricsRegistry;
use crate::projects::{InMemoryProjectStore, ProjectStore};
use crate::records::{KeyedRecordStore, ProfileGenerator, RecordResult};

/// Services shared by every route
pub struct AppState {
    pub feed: BoundedFeed,
    pub records: KeyedRecordStore,
    pub projects: Arc<dyn ProjectStore>,
    pub metrics: MetricsRegistry,
    pub max_post_length: usize,
}

impl AppState {
    /// Build fresh, empty services from configuration
    pub fn from_config(config: &ServiceConfig) -> RecordResult<Self> {
        Ok(Self {
            feed: BoundedFeed::new(config.feed_capacity),
            records: KeyedRecordStore::new(config.records.clone(), ProfileGenerator::default())?,
            projects: Arc::new(InMemoryProjectStore::new()),
            metrics: MetricsRegistry::new(),
            max_post_length: config.max_post_length,
        })
    }
}
