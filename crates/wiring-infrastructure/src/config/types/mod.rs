//! Configuration types module

pub mod app;
pub mod cache;
pub mod documents;
pub mod logging;
pub mod resolver;

// Re-export main types
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use documents::DocumentsConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
