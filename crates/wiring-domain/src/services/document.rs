//! Document service
//!
//! Read-side entry point over a [`DocumentDb`](crate::ports::DocumentDb),
//! validating ids before they reach the store.

use crate::error::{Error, Result};
use crate::ports::DocumentDb;
use crate::value_objects::Document;
use std::sync::Arc;

/// Entry point for document reads
///
/// Knows nothing about caching or auditing; those are layered onto the
/// injected [`DocumentDb`].
#[derive(Clone)]
pub struct DocumentService {
    db: Arc<dyn DocumentDb>,
}

impl DocumentService {
    /// Create a service over the given store
    pub fn new(db: Arc<dyn DocumentDb>) -> Self {
        Self { db }
    }

    /// Fetch a document, `Ok(None)` when the store has none
    pub async fn get_document(&self, id: &str) -> Result<Option<Document>> {
        if id.trim().is_empty() {
            return Err(Error::invalid_argument("document id cannot be empty"));
        }
        self.db.get_by_id(id).await
    }

    /// Fetch a document, failing with `NotFound` when the store has none
    pub async fn require_document(&self, id: &str) -> Result<Document> {
        self.get_document(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("document {id}")))
    }

    /// The store this service reads from
    pub fn db(&self) -> &Arc<dyn DocumentDb> {
        &self.db
    }
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService")
            .field("db", &self.db.provider_name())
            .finish()
    }
}
