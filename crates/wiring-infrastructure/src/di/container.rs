//! Container facade
//!
//! Type-parameterised API over the [`TypeRegistry`] and [`Resolver`] pair.
//!
//! ## Usage
//!
//! ```ignore
//! let mut container = Container::new();
//! container
//!     .register::<dyn DocumentDb, SimulatedSqlDocumentDb>()
//!     .register::<dyn AuditLog, TracingAuditLog>();
//!
//! let service: Arc<DocumentService> = container.create()?;
//! let db: Arc<dyn DocumentDb> = container.resolve()?;
//! ```
//!
//! Registration takes `&mut self` and resolution `&self`: once setup is over
//! the container can be shared behind an `Arc` and resolved from any thread.
//! Every call builds a fresh graph; nothing is cached between calls.

use super::constructor::{Constructor, Dependency, Implements, Injectable};
use super::key::TypeKey;
use super::registry::{Binding, TypeRegistry};
use super::resolver::Resolver;
use crate::config::ResolverConfig;
use std::sync::Arc;
use tracing::warn;
use wiring_domain::error::{Error, Result};

/// Dependency-injection container
#[derive(Debug, Clone, Default)]
pub struct Container {
    registry: TypeRegistry,
    config: ResolverConfig,
}

impl Container {
    /// Create an empty container with the default resolver settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container with explicit resolver settings
    ///
    /// A `max_depth` of 0 would reject every request, so it is raised to 1.
    pub fn with_config(mut config: ResolverConfig) -> Self {
        if config.max_depth == 0 {
            warn!("resolver.max_depth of 0 raised to 1");
            config.max_depth = 1;
        }
        Self {
            registry: TypeRegistry::new(),
            config,
        }
    }

    /// Bind implementation `I` to contract `C`, replacing any earlier binding
    ///
    /// Whether `I` can actually be instantiated is only checked when the
    /// contract is resolved.
    pub fn register<C, I>(&mut self) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Implements<C>,
    {
        self.registry.register(Binding::new::<C, I>());
        self
    }

    /// Bind `I` to `C` with explicitly supplied constructors
    pub fn register_with<C, I>(&mut self, constructors: Vec<Constructor<I>>) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Implements<C>,
    {
        self.registry
            .register(Binding::with_constructors::<C, I>(constructors));
        self
    }

    /// Build a fresh instance of the concrete type `T`
    pub fn create<T: Injectable>(&self) -> Result<Arc<T>> {
        self.resolve_dependency(Dependency::concrete::<T>())
    }

    /// Build a fresh instance of whatever implementation is bound to `C`
    pub fn resolve<C: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<C>> {
        self.resolve_dependency(Dependency::contract::<C>())
    }

    /// Whether an implementation is bound to `C`
    pub fn is_registered<C: ?Sized + 'static>(&self) -> bool {
        self.registry.is_registered(TypeKey::of::<C>())
    }

    /// The underlying registry
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Resolver settings
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn resolve_dependency<T>(&self, dependency: Dependency) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let instance = Resolver::new(&self.registry, &self.config)
            .resolve(dependency)
            .inspect_err(|e| {
                warn!(
                    requested = dependency.key().name(),
                    error = %e,
                    "Resolution failed"
                );
            })?;

        instance
            .downcast::<Arc<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| {
                Error::infrastructure(format!(
                    "resolved instance of {} has an unexpected type",
                    dependency.key()
                ))
            })
    }
}
