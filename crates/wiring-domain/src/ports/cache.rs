//! Document cache port
//!
//! Storage used by the caching decorator to serve repeated lookups.

use crate::error::Result;
use crate::value_objects::Document;
use async_trait::async_trait;

/// Key/value store for documents
#[async_trait]
pub trait DocumentCache: Send + Sync {
    /// Cached document for `id`, if any
    async fn get(&self, id: &str) -> Result<Option<Document>>;

    /// Store `document` under `id`, replacing any previous entry
    async fn set(&self, id: &str, document: Document) -> Result<()>;

    /// Short name used in logs
    fn provider_name(&self) -> &str;
}
