//! Simulated SQL document store
//!
//! Stands in for a real database: every lookup waits for the configured
//! latency and then produces a document for whatever id was asked for.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;
use wiring_domain::error::Result;
use wiring_domain::ports::DocumentDb;
use wiring_domain::value_objects::Document;
use wiring_infrastructure::config::DocumentsConfig;
use wiring_infrastructure::di::{Constructor, Injectable};

/// Slow document store that never misses
#[derive(Debug)]
pub struct SimulatedSqlDocumentDb {
    latency: Duration,
    calls: AtomicU64,
}

impl Default for SimulatedSqlDocumentDb {
    fn default() -> Self {
        Self::from_config(&DocumentsConfig::default())
    }
}

impl SimulatedSqlDocumentDb {
    /// Create a store answering after `latency`
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            calls: AtomicU64::new(0),
        }
    }

    /// Create a store using the configured latency
    pub fn from_config(config: &DocumentsConfig) -> Self {
        Self::new(config.latency())
    }

    /// Simulated latency of each lookup
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Number of lookups served so far
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DocumentDb for SimulatedSqlDocumentDb {
    async fn get_by_id(&self, id: &str) -> Result<Option<Document>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.latency).await;

        debug!(id, latency = ?self.latency, "Simulated SQL lookup");
        Ok(Some(Document::new(
            id,
            format!("Document {id}"),
            format!("Row {id} of the documents table"),
        )))
    }

    fn provider_name(&self) -> &str {
        "sql"
    }
}

impl Injectable for SimulatedSqlDocumentDb {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::nullary(Self::default)]
    }
}

wiring_infrastructure::implements!(dyn DocumentDb => SimulatedSqlDocumentDb);
