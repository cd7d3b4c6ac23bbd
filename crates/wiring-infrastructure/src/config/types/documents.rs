//! Document store configuration types

use crate::constants::DOCUMENT_DEFAULT_LATENCY_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Simulated latency of the backing store in milliseconds
    pub latency_ms: u64,

    /// Wrap the document store with the auditing decorator
    pub audit: bool,
}

impl DocumentsConfig {
    /// Latency as a duration
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            latency_ms: DOCUMENT_DEFAULT_LATENCY_MS,
            audit: false,
        }
    }
}
