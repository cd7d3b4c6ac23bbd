//! Document Cache Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullDocumentCache`] | Testing | Never stores anything |
//! | [`MokaDocumentCache`] | Local | Bounded in-memory cache with TTL |
//!
//! Caches are plain owned values: whoever wires the graph creates one and
//! hands it to the caching decorator. There is no process-wide cache.

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

#[cfg(feature = "cache-moka")]
pub use moka::MokaDocumentCache;
pub use null::NullDocumentCache;
