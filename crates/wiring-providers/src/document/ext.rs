//! Fluent decorator composition

use super::{AuditingDocumentDb, CachingDocumentDb};
use crate::audit::TracingAuditLog;
use std::sync::Arc;
use wiring_domain::ports::{AuditLog, DocumentCache, DocumentDb};

/// Stack decorators onto a shared document store
///
/// Each call returns the new outermost layer, so calls chain:
/// `db.with_caching(cache).with_auditing(log)`.
pub trait DocumentDbExt {
    /// Serve repeated lookups from `cache`
    fn with_caching(self, cache: Arc<dyn DocumentCache>) -> Arc<dyn DocumentDb>;

    /// Write an audit line to `log` for every lookup
    fn with_auditing(self, log: Arc<dyn AuditLog>) -> Arc<dyn DocumentDb>;

    /// Serve repeated lookups from a fresh in-memory cache
    #[cfg(feature = "cache-moka")]
    fn with_default_caching(self) -> Arc<dyn DocumentDb>;

    /// Audit every lookup through `tracing`
    fn with_default_auditing(self) -> Arc<dyn DocumentDb>;
}

impl DocumentDbExt for Arc<dyn DocumentDb> {
    fn with_caching(self, cache: Arc<dyn DocumentCache>) -> Arc<dyn DocumentDb> {
        Arc::new(CachingDocumentDb::new(cache, self))
    }

    fn with_auditing(self, log: Arc<dyn AuditLog>) -> Arc<dyn DocumentDb> {
        Arc::new(AuditingDocumentDb::new(self, log))
    }

    #[cfg(feature = "cache-moka")]
    fn with_default_caching(self) -> Arc<dyn DocumentDb> {
        self.with_caching(Arc::new(crate::cache::MokaDocumentCache::new()))
    }

    fn with_default_auditing(self) -> Arc<dyn DocumentDb> {
        self.with_auditing(Arc::new(TracingAuditLog))
    }
}
