//! Audit log backed by `tracing`

use tracing::info;
use wiring_domain::ports::AuditLog;
use wiring_infrastructure::constants::AUDIT_LOG_TARGET;
use wiring_infrastructure::di::{Constructor, Injectable};

/// Writes audit lines as `info` events on the `audit` target
///
/// Route them separately with a filter such as `WIRING_LOG=audit=info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn write_log(&self, message: &str) {
        info!(target: AUDIT_LOG_TARGET, "{message}");
    }
}

impl Injectable for TracingAuditLog {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::nullary(|| Self)]
    }
}

wiring_infrastructure::implements!(dyn AuditLog => TracingAuditLog);
