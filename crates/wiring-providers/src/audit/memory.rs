//! In-memory audit log

use std::sync::{Mutex, MutexGuard, PoisonError};
use wiring_domain::ports::AuditLog;
use wiring_infrastructure::di::{Constructor, Injectable};

/// Keeps every audit line in memory, oldest first
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines
    pub fn entries(&self) -> Vec<String> {
        self.lines().clone()
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.lines().len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Drop every recorded line
    pub fn clear(&self) {
        self.lines().clear();
    }

    // A panicking writer cannot leave a half-pushed line behind
    fn lines(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuditLog for MemoryAuditLog {
    fn write_log(&self, message: &str) {
        self.lines().push(message.to_string());
    }
}

impl Injectable for MemoryAuditLog {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::nullary(Self::new)]
    }
}

wiring_infrastructure::implements!(dyn AuditLog => MemoryAuditLog);
