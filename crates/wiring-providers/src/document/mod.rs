//! Document Store Implementations
//!
//! | Provider | Kind | Description |
//! |----------|------|-------------|
//! | [`SimulatedSqlDocumentDb`] | Store | Slow synthetic store standing in for SQL |
//! | [`CachingDocumentDb`] | Decorator | Serves repeated lookups from a [`DocumentCache`](wiring_domain::ports::DocumentCache) |
//! | [`AuditingDocumentDb`] | Decorator | Writes one audit line per lookup |
//!
//! Decorators are stacked with [`DocumentDbExt`]:
//!
//! ```ignore
//! let db = base.with_caching(cache).with_auditing(log);
//! ```
//!
//! The outermost decorator runs first, so the example above audits every
//! lookup, including the ones served from the cache.

pub mod auditing;
pub mod caching;
pub mod ext;
pub mod sql;

pub use auditing::AuditingDocumentDb;
pub use caching::CachingDocumentDb;
pub use ext::DocumentDbExt;
pub use sql::SimulatedSqlDocumentDb;
