//! Audit Log Implementations
//!
//! - [`TracingAuditLog`] - emits each line as an `info` event on the `audit` target
//! - [`MemoryAuditLog`] - keeps lines in memory, for tests and inspection

pub mod memory;
pub mod tracing_log;

pub use memory::MemoryAuditLog;
pub use tracing_log::TracingAuditLog;
