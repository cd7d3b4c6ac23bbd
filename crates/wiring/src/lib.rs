//! # Wiring
//!
//! A minimal dependency-injection container, demonstrated on a document
//! lookup service whose store can be decorated with caching and auditing.
//!
//! ## Example
//!
//! ```ignore
//! use wiring::bootstrap::{build_container, build_document_service, Decorators};
//! use wiring::infrastructure::config::AppConfig;
//!
//! let config = AppConfig::default();
//! let container = build_container(&config);
//! let service = build_document_service(&container, Decorators::from_config(&config))?;
//! let document = service.get_document("42").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error taxonomy, the `Document` entity, ports and `DocumentService`
//! - `infrastructure` - the container, configuration and logging
//! - `providers` - port implementations and decorators
//! - `bootstrap` - the composition root binding providers to ports
//! - `cli` - the `wiring` command line

pub mod bootstrap;
pub mod cli;

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wiring_domain::*;
}

/// Infrastructure layer - DI container, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wiring_infrastructure::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use wiring_providers::*;
}

pub use cli::{Cli, Command, run};
