//! # Wiring - Provider Implementations
//!
//! Implementations of the ports defined in `wiring-domain`, each declaring
//! its constructors so the container in `wiring-infrastructure` can build it.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Document store | `DocumentDb` | SimulatedSql, Caching (decorator), Auditing (decorator) |
//! | Cache | `DocumentCache` | Moka, Null |
//! | Audit | `AuditLog` | Tracing, Memory |
//!
//! ## Usage
//!
//! ```ignore
//! use wiring_providers::document::{DocumentDbExt, SimulatedSqlDocumentDb};
//! use wiring_providers::cache::MokaDocumentCache;
//! use wiring_providers::audit::TracingAuditLog;
//!
//! let db: Arc<dyn DocumentDb> = Arc::new(SimulatedSqlDocumentDb::default());
//! let db = db
//!     .with_caching(Arc::new(MokaDocumentCache::new()))
//!     .with_auditing(Arc::new(TracingAuditLog));
//! ```

pub use wiring_domain::error::{Error, Result};
pub use wiring_domain::ports::{AuditLog, DocumentCache, DocumentDb};

/// Audit log implementations
///
/// Implements the `AuditLog` trait.
pub mod audit;

/// Document cache implementations
///
/// Implements the `DocumentCache` trait for the caching decorator.
pub mod cache;

/// Document store implementations and decorators
///
/// Implements the `DocumentDb` trait, either as a backing store or as a
/// wrapper around another `DocumentDb`.
pub mod document;
