//! Main application configuration

use super::{CacheConfig, DocumentsConfig, LoggingConfig, ResolverConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dependency resolution settings
    pub resolver: ResolverConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Document cache settings
    pub cache: CacheConfig,
    /// Document store settings
    pub documents: DocumentsConfig,
}
