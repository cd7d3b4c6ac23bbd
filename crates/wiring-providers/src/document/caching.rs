//! Read-through caching decorator

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{trace, warn};
use wiring_domain::error::Result;
use wiring_domain::ports::{DocumentCache, DocumentDb};
use wiring_domain::value_objects::Document;

/// Serves lookups from a cache, falling back to the wrapped store
///
/// On a hit the wrapped store is never called. On a miss the wrapped store is
/// called once and a found document is written back to the cache; absent
/// documents are not cached. Cache failures are logged and treated as misses
/// so the cache can never make a lookup fail.
pub struct CachingDocumentDb {
    cache: Arc<dyn DocumentCache>,
    inner: Arc<dyn DocumentDb>,
}

impl CachingDocumentDb {
    /// Wrap `inner` with `cache`
    pub fn new(cache: Arc<dyn DocumentCache>, inner: Arc<dyn DocumentDb>) -> Self {
        Self { cache, inner }
    }

    /// The cache consulted first
    pub fn cache(&self) -> &Arc<dyn DocumentCache> {
        &self.cache
    }

    /// The wrapped store
    pub fn inner(&self) -> &Arc<dyn DocumentDb> {
        &self.inner
    }
}

#[async_trait]
impl DocumentDb for CachingDocumentDb {
    async fn get_by_id(&self, id: &str) -> Result<Option<Document>> {
        match self.cache.get(id).await {
            Ok(Some(document)) => {
                trace!(id, cache = self.cache.provider_name(), "Cache hit");
                return Ok(Some(document));
            }
            Ok(None) => trace!(id, cache = self.cache.provider_name(), "Cache miss"),
            Err(e) => warn!(id, error = %e, "Cache read failed, falling back to store"),
        }

        let result = self.inner.get_by_id(id).await?;

        if let Some(document) = &result
            && let Err(e) = self.cache.set(id, document.clone()).await
        {
            warn!(id, error = %e, "Cache write failed");
        }

        Ok(result)
    }

    fn provider_name(&self) -> &str {
        "caching"
    }
}

impl std::fmt::Debug for CachingDocumentDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingDocumentDb")
            .field("cache", &self.cache.provider_name())
            .field("inner", &self.inner.provider_name())
            .finish()
    }
}
