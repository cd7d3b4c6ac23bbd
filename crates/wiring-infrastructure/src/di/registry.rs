//! Contract to implementation bindings

use super::constructor::{Constructor, ErasedConstructor, Implements};
use super::key::TypeKey;
use std::collections::HashMap;
use tracing::debug;
use wiring_domain::error::{Error, Result};

/// The implementation currently bound to a contract
#[derive(Debug, Clone)]
pub struct Binding {
    contract: TypeKey,
    implementation: TypeKey,
    constructors: Vec<ErasedConstructor>,
}

impl Binding {
    /// Bind `I` to `C` using the constructors `I` declares
    pub fn new<C, I>() -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Implements<C>,
    {
        Self::with_constructors::<C, I>(I::constructors())
    }

    /// Bind `I` to `C` using explicitly supplied constructors
    ///
    /// Lets callers capture configuration values in the factories, which the
    /// static [`Injectable::constructors`](super::Injectable::constructors)
    /// cannot do.
    pub fn with_constructors<C, I>(constructors: Vec<Constructor<I>>) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        I: Implements<C>,
    {
        Self {
            contract: TypeKey::of::<C>(),
            implementation: TypeKey::of::<I>(),
            constructors: constructors
                .into_iter()
                .map(|constructor| constructor.erase_as::<C>(<I as Implements<C>>::upcast))
                .collect(),
        }
    }

    /// The bound contract
    pub fn contract(&self) -> TypeKey {
        self.contract
    }

    /// The implementation instantiated for the contract
    pub fn implementation(&self) -> TypeKey {
        self.implementation
    }

    /// Constructors of the implementation, producing the contract view
    pub fn constructors(&self) -> &[ErasedConstructor] {
        &self.constructors
    }
}

/// Registry of contract bindings
///
/// Holds at most one binding per contract; registering a contract again
/// replaces the previous binding. Built during setup and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    bindings: HashMap<TypeKey, Binding>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a binding, replacing any binding of the same contract
    pub fn register(&mut self, binding: Binding) -> &mut Self {
        let contract = binding.contract;
        let implementation = binding.implementation;
        if let Some(previous) = self.bindings.insert(contract, binding) {
            debug!(
                contract = contract.name(),
                previous = previous.implementation.name(),
                implementation = implementation.name(),
                "Contract re-registered"
            );
        } else {
            debug!(
                contract = contract.name(),
                implementation = implementation.name(),
                "Contract registered"
            );
        }
        self
    }

    /// The binding of `contract`
    pub fn lookup(&self, contract: TypeKey) -> Result<&Binding> {
        self.bindings
            .get(&contract)
            .ok_or_else(|| Error::unregistered_contract(contract.name()))
    }

    /// Whether anything is bound to `contract`
    pub fn is_registered(&self, contract: TypeKey) -> bool {
        self.bindings.contains_key(&contract)
    }

    /// Number of bound contracts
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// `(contract, implementation)` name pairs sorted by contract name
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs: Vec<_> = self
            .bindings
            .values()
            .map(|binding| (binding.contract.name(), binding.implementation.name()))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}
