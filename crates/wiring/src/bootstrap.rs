//! Composition root
//!
//! Binds every port to its provider and assembles the document service.
//!
//! ```text
//! AppConfig ─► build_container ─► Container
//!                                    │ resolve dyn DocumentDb
//!                                    ├─► with_caching(resolve dyn DocumentCache)
//!                                    ├─► with_auditing(resolve dyn AuditLog)
//!                                    ▼
//!                              DocumentService
//! ```
//!
//! Decorators wrap the contract they implement, so they are applied here
//! around the resolved store instead of being registered: binding
//! `CachingDocumentDb` to `dyn DocumentDb` would make it depend on itself.

use std::sync::Arc;
use tracing::info;
use wiring_domain::error::Result;
use wiring_domain::ports::{AuditLog, DocumentCache, DocumentDb};
use wiring_domain::services::DocumentService;
use wiring_infrastructure::config::AppConfig;
use wiring_infrastructure::di::{Constructor, Container};
use wiring_providers::audit::TracingAuditLog;
use wiring_providers::cache::MokaDocumentCache;
use wiring_providers::document::{DocumentDbExt, SimulatedSqlDocumentDb};

/// Which decorators wrap the document store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decorators {
    /// Serve repeated lookups from the document cache
    pub caching: bool,
    /// Write an audit line per lookup
    pub auditing: bool,
}

impl Decorators {
    /// Decorators enabled by the configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            caching: config.cache.enabled,
            auditing: config.documents.audit,
        }
    }

    /// True when the store is used undecorated
    pub fn is_empty(self) -> bool {
        !self.caching && !self.auditing
    }
}

/// Build a container with every port bound to its configured provider
pub fn build_container(config: &AppConfig) -> Container {
    let mut container = Container::with_config(config.resolver.clone());

    let documents = config.documents.clone();
    let cache = config.cache.clone();
    container
        .register_with::<dyn DocumentDb, SimulatedSqlDocumentDb>(vec![Constructor::nullary(
            move || SimulatedSqlDocumentDb::from_config(&documents),
        )])
        .register_with::<dyn DocumentCache, MokaDocumentCache>(vec![Constructor::nullary(
            move || MokaDocumentCache::from_config(&cache),
        )])
        .register::<dyn AuditLog, TracingAuditLog>();

    info!(
        bindings = container.registry().len(),
        max_depth = container.config().max_depth,
        "Container built"
    );
    container
}

/// Assemble a document service, wrapping the store with `decorators`
///
/// Caching is applied first, so auditing also records lookups served from
/// the cache. The cache lives as long as the returned service.
pub fn build_document_service(
    container: &Container,
    decorators: Decorators,
) -> Result<Arc<DocumentService>> {
    if decorators.is_empty() {
        return container.create::<DocumentService>();
    }

    let mut db = container.resolve::<dyn DocumentDb>()?;
    if decorators.caching {
        db = db.with_caching(container.resolve::<dyn DocumentCache>()?);
    }
    if decorators.auditing {
        db = db.with_auditing(container.resolve::<dyn AuditLog>()?);
    }

    info!(
        caching = decorators.caching,
        auditing = decorators.auditing,
        store = db.provider_name(),
        "Document service assembled"
    );
    Ok(Arc::new(DocumentService::new(db)))
}
