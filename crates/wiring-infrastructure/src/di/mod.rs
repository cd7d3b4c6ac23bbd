//! Dependency Injection
//!
//! A minimal container that builds object graphs from explicit constructor
//! declarations.
//!
//! ## Architecture
//!
//! ```text
//! Container (facade, owns the registry)
//! ├── TypeRegistry   contract → implementation bindings
//! └── Resolver       recursive construction with a per-call resolution stack
//! ```
//!
//! ## Key Principles
//!
//! - **Explicit constructors**: implementations declare their parameter
//!   lists through [`Injectable`]; nothing is discovered at runtime
//! - **Trait-based contracts**: contracts are trait objects, resolved as
//!   `Arc<dyn Trait>`
//! - **Transient instances**: every resolution builds a new graph
//! - **Fail fast**: missing bindings and cycles are reported as errors,
//!   never as stack overflows

pub mod constructor;
pub mod container;
pub mod key;
pub mod registry;
pub mod resolver;
mod services;

pub use constructor::{
    ArgumentError, Arguments, Constructor, ConstructorBuilder, Dependency, DependencyKind,
    ErasedConstructor, Implements, Injectable, Instance,
};
pub use container::Container;
pub use key::TypeKey;
pub use registry::{Binding, TypeRegistry};
pub use resolver::{select_constructor, ResolutionStack, Resolver};
