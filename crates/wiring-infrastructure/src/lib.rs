//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns, including the dependency-injection
//! container that wires the rest of the workspace together.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Type registry, recursive resolver and container facade |
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`utils`] | Timing helpers |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use di::{Constructor, Container, Implements, Injectable};
pub use error_ext::ErrorContext;
pub use utils::TimedOperation;
