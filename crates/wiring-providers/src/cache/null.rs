//! Null document cache
//!
//! Every read misses and every write is dropped. Useful for testing and for
//! disabling caching without changing the decorator stack.

use async_trait::async_trait;
use wiring_domain::error::Result;
use wiring_domain::ports::DocumentCache;
use wiring_domain::value_objects::Document;
use wiring_infrastructure::di::{Constructor, Injectable};

/// Cache that never stores anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDocumentCache;

impl NullDocumentCache {
    /// Create a new null cache
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentCache for NullDocumentCache {
    async fn get(&self, _id: &str) -> Result<Option<Document>> {
        Ok(None)
    }

    async fn set(&self, _id: &str, _document: Document) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

impl Injectable for NullDocumentCache {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::nullary(Self::new)]
    }
}

wiring_infrastructure::implements!(dyn DocumentCache => NullDocumentCache);
