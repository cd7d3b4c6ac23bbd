//! Recursive dependency resolution
//!
//! ## Algorithm
//!
//! ```text
//! resolve(dependency)
//!   │
//!   ├─ push frame ──────────────► already on stack?  → CircularDependencyDetected
//!   │                             stack too deep?    → ResolutionDepthExceeded
//!   ├─ concrete?  target = dependency
//!   │  contract?  target = registry.lookup()         → UnregisteredContract
//!   ├─ pick constructor (most params, first declared) → NoAccessibleConstructor
//!   ├─ resolve every parameter, in order
//!   ├─ invoke factory                                → InstantiationFailure
//!   └─ pop frame
//! ```
//!
//! The stack lives for one resolution call only, so a resolver can be shared
//! by concurrent callers.

use super::constructor::{Arguments, Dependency, DependencyKind, ErasedConstructor, Instance};
use super::key::TypeKey;
use super::registry::TypeRegistry;
use crate::config::ResolverConfig;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use tracing::trace;
use wiring_domain::error::{Error, Result};

/// Pick the constructor with the most parameters, the first declared on ties
pub fn select_constructor(constructors: &[ErasedConstructor]) -> Option<&ErasedConstructor> {
    constructors
        .iter()
        .enumerate()
        .min_by_key(|(index, constructor)| (Reverse(constructor.arity()), *index))
        .map(|(_, constructor)| constructor)
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    requested: TypeKey,
    target: Option<TypeKey>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) if target != self.requested => {
                write!(f, "{} [{}]", self.requested, target)
            }
            _ => write!(f, "{}", self.requested),
        }
    }
}

/// Types currently being resolved, outermost first
///
/// Error paths name each requested type followed by the implementation bound
/// to it, e.g. `dyn Ping [PingImpl] -> dyn Pong [PongImpl] -> dyn Ping`.
#[derive(Debug)]
pub struct ResolutionStack {
    frames: Vec<Frame>,
    active: HashSet<TypeKey>,
    max_depth: usize,
}

impl ResolutionStack {
    /// Create an empty stack bounded by `max_depth` frames
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            active: HashSet::new(),
            max_depth,
        }
    }

    /// Enter `key`, failing if it is already being resolved or the stack is full
    pub fn push(&mut self, key: TypeKey) -> Result<()> {
        if self.active.contains(&key) {
            return Err(Error::circular_dependency(self.path_to(key)));
        }
        if self.frames.len() >= self.max_depth {
            return Err(Error::depth_exceeded(self.max_depth, self.path_to(key)));
        }
        self.active.insert(key);
        self.frames.push(Frame {
            requested: key,
            target: None,
        });
        Ok(())
    }

    /// Record the implementation chosen for the innermost frame
    pub fn bind_target(&mut self, target: TypeKey) {
        if let Some(frame) = self.frames.last_mut() {
            frame.target = Some(target);
        }
    }

    /// Leave the innermost frame
    pub fn pop(&mut self) -> Option<TypeKey> {
        let frame = self.frames.pop()?;
        self.active.remove(&frame.requested);
        Some(frame.requested)
    }

    /// Current number of frames
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether `key` is being resolved
    pub fn contains(&self, key: TypeKey) -> bool {
        self.active.contains(&key)
    }

    fn path_to(&self, key: TypeKey) -> String {
        self.frames
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(key.name().to_string()))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Builds object graphs from a [`TypeRegistry`]
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r TypeRegistry,
    max_depth: usize,
}

impl<'r> Resolver<'r> {
    /// Create a resolver over `registry`
    ///
    /// A `max_depth` of 0 is treated as 1 so the root itself can be resolved.
    pub fn new(registry: &'r TypeRegistry, config: &ResolverConfig) -> Self {
        Self {
            registry,
            max_depth: config.max_depth.max(1),
        }
    }

    /// Produce a freshly constructed instance of `dependency`
    ///
    /// The returned [`Instance`] holds an `Arc` of the requested type.
    pub fn resolve(&self, dependency: Dependency) -> Result<Instance> {
        let mut stack = ResolutionStack::new(self.max_depth);
        self.resolve_frame(dependency, &mut stack)
    }

    fn resolve_frame(
        &self,
        dependency: Dependency,
        stack: &mut ResolutionStack,
    ) -> Result<Instance> {
        stack.push(dependency.key())?;
        let result = self.instantiate(dependency, stack);
        stack.pop();
        result
    }

    fn instantiate(
        &self,
        dependency: Dependency,
        stack: &mut ResolutionStack,
    ) -> Result<Instance> {
        let (target, constructors): (TypeKey, Cow<'_, [ErasedConstructor]>) =
            match dependency.kind() {
                DependencyKind::Concrete(constructors) => {
                    (dependency.key(), Cow::Owned(constructors()))
                }
                DependencyKind::Contract => {
                    let binding = self.registry.lookup(dependency.key())?;
                    (
                        binding.implementation(),
                        Cow::Borrowed(binding.constructors()),
                    )
                }
            };
        stack.bind_target(target);

        trace!(
            requested = dependency.key().name(),
            target = target.name(),
            depth = stack.depth(),
            "Resolving"
        );

        let constructor = select_constructor(&constructors)
            .ok_or_else(|| Error::no_accessible_constructor(target.name()))?;

        let mut values = Vec::with_capacity(constructor.arity());
        for param in constructor.params() {
            let value = self.resolve_frame(*param, stack)?;
            values.push((param.key(), value));
        }

        constructor
            .invoke(&mut Arguments::new(values))
            .map_err(|source| Error::instantiation(target.name(), source))
    }
}
