//! Metrics registry
//!
//! Counters only, monotonic, reset on process start. Relaxed atomics: a
//! snapshot is exact per counter but not a consistent cut across counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the HTTP surface
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests_served: AtomicU64,
    posts_added: AtomicU64,
    posts_rejected: AtomicU64,
    records_added: AtomicU64,
    records_rejected: AtomicU64,
    verifications_succeeded: AtomicU64,
    verifications_failed: AtomicU64,
    profiles_generated: AtomicU64,
    project_reads: AtomicU64,
    project_writes: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests_served(&self) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
    }

    // Feed

    pub fn increment_posts_added(&self) {
        self.posts_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_posts_rejected(&self) {
        self.posts_rejected.fetch_add(1, Ordering::Relaxed);
    }

    // Records

    pub fn increment_records_added(&self) {
        self.records_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_records_rejected(&self) {
        self.records_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one secret verification by outcome
    pub fn record_verification(&self, succeeded: bool) {
        if succeeded {
            self.verifications_succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.verifications_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn increment_profiles_generated(&self) {
        self.profiles_generated.fetch_add(1, Ordering::Relaxed);
    }

    // Projects

    pub fn increment_project_reads(&self) {
        self.project_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_project_writes(&self) {
        self.project_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_served: self.requests_served.load(Ordering::Relaxed),
            posts_added: self.posts_added.load(Ordering::Relaxed),
            posts_rejected: self.posts_rejected.load(Ordering::Relaxed),
            records_added: self.records_added.load(Ordering::Relaxed),
            records_rejected: self.records_rejected.load(Ordering::Relaxed),
            verifications_succeeded: self.verifications_succeeded.load(Ordering::Relaxed),
            verifications_failed: self.verifications_failed.load(Ordering::Relaxed),
            profiles_generated: self.profiles_generated.load(Ordering::Relaxed),
            project_reads: self.project_reads.load(Ordering::Relaxed),
            project_writes: self.project_writes.load(Ordering::Relaxed),
        }
    }

    /// Current snapshot as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_served: u64,
    pub posts_added: u64,
    pub posts_rejected: u64,
    pub records_added: u64,
    pub records_rejected: u64,
    pub verifications_succeeded: u64,
    pub verifications_failed: u64,
    pub profiles_generated: u64,
    pub project_reads: u64,
    pub project_writes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();

        assert_eq!(snapshot.requests_served, 0);
        assert_eq!(snapshot.posts_added, 0);
        assert_eq!(snapshot.verifications_failed, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_posts_added();
        registry.increment_posts_added();
        registry.increment_posts_rejected();
        registry.increment_records_added();
        registry.increment_records_rejected();
        registry.record_verification(true);
        registry.record_verification(false);
        registry.record_verification(false);
        registry.increment_profiles_generated();
        registry.increment_project_reads();
        registry.increment_project_writes();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.posts_added, 2);
        assert_eq!(snapshot.posts_rejected, 1);
        assert_eq!(snapshot.records_added, 1);
        assert_eq!(snapshot.records_rejected, 1);
        assert_eq!(snapshot.verifications_succeeded, 1);
        assert_eq!(snapshot.verifications_failed, 2);
        assert_eq!(snapshot.profiles_generated, 1);
        assert_eq!(snapshot.project_reads, 1);
        assert_eq!(snapshot.project_writes, 1);
    }

    #[test]
    fn test_to_json() {
        let registry = MetricsRegistry::new();
        registry.increment_requests_served();

        let json = registry.to_json();
        assert_eq!(json["requests_served"], 1);
        assert_eq!(json["posts_added"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..100 {
                        reg.increment_requests_served();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().requests_served, 1000);
    }
}
