//! Domain Port Interfaces
//!
//! Boundary contracts implemented by `wiring-providers` and bound to
//! implementations through the container in `wiring-infrastructure`.
//!
//! - [`DocumentDb`] - document lookup, the contract the decorators wrap
//! - [`DocumentCache`] - key/value store used by the caching decorator
//! - [`AuditLog`] - sink used by the auditing decorator

mod audit;
mod cache;
mod document;

pub use audit::AuditLog;
pub use cache::DocumentCache;
pub use document::DocumentDb;
