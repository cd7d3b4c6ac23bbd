//! Resolver configuration types

use crate::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use serde::{Deserialize, Serialize};

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum nesting of a single resolution before it is aborted
    pub max_depth: usize,
}

impl ResolverConfig {
    /// Configuration with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}
