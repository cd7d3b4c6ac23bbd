//! Cache configuration types

use crate::constants::{CACHE_DEFAULT_MAX_ENTRIES, CACHE_DEFAULT_TTL_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Document cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Wrap the document store with the caching decorator
    pub enabled: bool,

    /// Maximum number of cached documents
    pub max_entries: u64,

    /// Time to live of a cached document in seconds
    pub ttl_secs: u64,
}

impl CacheConfig {
    /// TTL as a duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
            ttl_secs: CACHE_DEFAULT_TTL_SECS,
        }
    }
}
