//! Auditing decorator

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use wiring_domain::error::Result;
use wiring_domain::ports::{AuditLog, DocumentDb};
use wiring_domain::value_objects::Document;

/// Records every lookup in an [`AuditLog`] before delegating
///
/// The line is written before the wrapped store is called, so failed lookups
/// are audited as well.
pub struct AuditingDocumentDb {
    inner: Arc<dyn DocumentDb>,
    log: Arc<dyn AuditLog>,
}

impl AuditingDocumentDb {
    /// Wrap `inner`, auditing to `log`
    pub fn new(inner: Arc<dyn DocumentDb>, log: Arc<dyn AuditLog>) -> Self {
        Self { inner, log }
    }

    /// The wrapped store
    pub fn inner(&self) -> &Arc<dyn DocumentDb> {
        &self.inner
    }
}

/// Audit line for a lookup of `id`
pub fn audit_message(id: &str) -> String {
    format!(
        "Document {id} accessed at {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

#[async_trait]
impl DocumentDb for AuditingDocumentDb {
    async fn get_by_id(&self, id: &str) -> Result<Option<Document>> {
        self.log.write_log(&audit_message(id));
        self.inner.get_by_id(id).await
    }

    fn provider_name(&self) -> &str {
        "auditing"
    }
}

impl std::fmt::Debug for AuditingDocumentDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditingDocumentDb")
            .field("inner", &self.inner.provider_name())
            .finish_non_exhaustive()
    }
}
