//! Document lookup port

use crate::error::Result;
use crate::value_objects::Document;
use async_trait::async_trait;

/// Document lookup port
///
/// Implementations are either backing stores or decorators that wrap another
/// `DocumentDb` and add behaviour (caching, auditing) around the delegate call.
#[async_trait]
pub trait DocumentDb: Send + Sync {
    /// Fetch a document by id, `Ok(None)` when the store has no such document
    async fn get_by_id(&self, id: &str) -> Result<Option<Document>>;

    /// Short name used in logs
    fn provider_name(&self) -> &str;
}
