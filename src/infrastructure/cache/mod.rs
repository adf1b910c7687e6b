//! Session-scoped project store
//!
//! Records the last observed project details and probe results per project
//! path. The store is owned by whichever caller holds the session and passed
//! into the services that need it; it is a record of the last result, not a
//! read-through cache, so services always refetch and write through.

use std::time::Duration;

use moka::future::Cache;

use crate::config::CacheConfig;
use crate::domain::project::{normalized_path, ProjectDetails};
use crate::domain::typing::{TypeCandidate, TypeEstimate};

/// Last-result store for one workspace session, keyed by normalized
/// project path (estimates additionally by candidate type).
pub struct ProjectStore {
    details: Cache<String, ProjectDetails>,
    candidates: Cache<String, Vec<TypeCandidate>>,
    estimates: Cache<String, TypeEstimate>,
}

impl ProjectStore {
    pub fn new(config: &CacheConfig) -> Self {
        fn build<K, V>(config: &CacheConfig) -> Cache<K, V>
        where
            K: std::hash::Hash + Eq + Send + Sync + 'static,
            V: Clone + Send + Sync + 'static,
        {
            Cache::builder()
                .max_capacity(config.max_entries)
                .time_to_live(Duration::from_secs(config.ttl_seconds))
                .build()
        }

        Self {
            details: build(config),
            candidates: build(config),
            estimates: build(config),
        }
    }

    fn estimate_key(path: &str, type_id: &str) -> String {
        format!("{}::{}", normalized_path(path), type_id)
    }

    pub async fn record_details(&self, path: &str, details: &ProjectDetails) {
        self.details
            .insert(normalized_path(path).to_string(), details.clone())
            .await;
    }

    pub async fn details(&self, path: &str) -> Option<ProjectDetails> {
        self.details.get(normalized_path(path)).await
    }

    pub async fn forget_details(&self, path: &str) {
        self.details.invalidate(normalized_path(path)).await;
    }

    pub async fn record_candidates(&self, path: &str, candidates: &[TypeCandidate]) {
        self.candidates
            .insert(normalized_path(path).to_string(), candidates.to_vec())
            .await;
    }

    /// Candidates reported by the most recent content scan for this path.
    pub async fn last_candidates(&self, path: &str) -> Option<Vec<TypeCandidate>> {
        self.candidates.get(normalized_path(path)).await
    }

    pub async fn record_estimate(&self, path: &str, type_id: &str, estimate: &TypeEstimate) {
        self.estimates
            .insert(Self::estimate_key(path, type_id), estimate.clone())
            .await;
    }

    /// Estimate reported by the most recent probe for this (path, type) pair.
    pub async fn last_estimate(&self, path: &str, type_id: &str) -> Option<TypeEstimate> {
        self.estimates.get(&Self::estimate_key(path, type_id)).await
    }
}
