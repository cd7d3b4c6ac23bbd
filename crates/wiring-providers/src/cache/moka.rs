//! Moka in-memory document cache
//!
//! ## Example
//!
//! ```ignore
//! use wiring_providers::cache::MokaDocumentCache;
//! use std::time::Duration;
//!
//! let cache = MokaDocumentCache::with_config(1000, Duration::from_secs(300));
//! ```

use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use wiring_domain::error::Result;
use wiring_domain::ports::DocumentCache;
use wiring_domain::value_objects::Document;
use wiring_infrastructure::config::CacheConfig;
use wiring_infrastructure::di::{Constructor, Injectable};

/// Moka-based document cache
///
/// Clones share the same underlying storage.
#[derive(Clone)]
pub struct MokaDocumentCache {
    cache: Cache<String, Document>,
    max_entries: u64,
}

impl Default for MokaDocumentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaDocumentCache {
    /// Create a cache with the default capacity and TTL
    pub fn new() -> Self {
        Self::from_config(&CacheConfig::default())
    }

    /// Create a cache from the `cache` configuration section
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.max_entries, config.ttl())
    }

    /// Create a cache holding at most `max_entries` documents for `time_to_live`
    pub fn with_config(max_entries: u64, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(time_to_live)
            .build();

        Self { cache, max_entries }
    }

    /// Maximum number of cached documents
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Number of cached documents
    pub async fn entry_count(&self) -> u64 {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait]
impl DocumentCache for MokaDocumentCache {
    async fn get(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.cache.get(id).await)
    }

    async fn set(&self, id: &str, document: Document) -> Result<()> {
        self.cache.insert(id.to_string(), document).await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaDocumentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaDocumentCache")
            .field("max_entries", &self.max_entries)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl Injectable for MokaDocumentCache {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::nullary(Self::new)]
    }
}

wiring_infrastructure::implements!(dyn DocumentCache => MokaDocumentCache);
