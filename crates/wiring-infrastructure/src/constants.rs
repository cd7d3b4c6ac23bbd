//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wiring.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wiring";

/// Environment variable prefix for configuration (`WIRING__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "WIRING";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// RESOLVER CONSTANTS
// ============================================================================

/// Maximum number of nested resolution frames per `create` call
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 64;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default number of cached documents
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default cache TTL in seconds (1 hour)
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3600;

// ============================================================================
// DOCUMENT STORE CONSTANTS
// ============================================================================

/// Simulated latency of the backing document store in milliseconds
pub const DOCUMENT_DEFAULT_LATENCY_MS: u64 = 1000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "WIRING_LOG";

/// Tracing target of audit lines
pub const AUDIT_LOG_TARGET: &str = "audit";
