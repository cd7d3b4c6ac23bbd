//! Audit trail port

/// Audit trail sink
pub trait AuditLog: Send + Sync {
    /// Record one audit line
    fn write_log(&self, message: &str);
}
