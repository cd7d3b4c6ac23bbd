//! Configuration
//!
//! Layered configuration built with Figment: defaults, then a TOML file,
//! then `WIRING__` prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
