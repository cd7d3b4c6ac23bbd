//! Constructor declarations
//!
//! Rust has no runtime constructor reflection, so every implementation
//! declares its constructors explicitly through [`Injectable`]. A
//! [`Constructor`] pairs the ordered list of dependency types with a factory
//! closure that receives the resolved values in that same order.
//!
//! ```ignore
//! struct Greeter {
//!     names: Arc<dyn NameSource>,
//! }
//!
//! impl Injectable for Greeter {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![Constructor::builder()
//!             .contract::<dyn NameSource>()
//!             .build(|args| Ok(Greeter { names: args.next::<dyn NameSource>()? }))]
//!     }
//! }
//! ```

use super::key::TypeKey;
use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use wiring_domain::error::BoxError;

/// A type-erased resolved value
///
/// Always holds an `Arc<T>`, where `T` is the requested type: the concrete
/// type for implementations, the trait object for contracts.
pub type Instance = Box<dyn Any + Send + Sync>;

type Factory<T> = Arc<dyn Fn(&mut Arguments) -> Result<T, BoxError> + Send + Sync>;

type ErasedFactory = Arc<dyn Fn(&mut Arguments) -> Result<Instance, BoxError> + Send + Sync>;

/// A concrete type the container can instantiate
pub trait Injectable: Send + Sync + Sized + 'static {
    /// Every constructor this type exposes, in declaration order
    ///
    /// The resolver picks the one with the most parameters, the first
    /// declared on ties. An empty list makes the type uninstantiable and
    /// fails resolution with `NoAccessibleConstructor`.
    fn constructors() -> Vec<Constructor<Self>>;
}

/// Declares that an implementation satisfies contract `C`
///
/// Usually generated with [`implements!`](crate::implements).
pub trait Implements<C: ?Sized + Send + Sync + 'static>: Injectable {
    /// View an instance through its contract
    fn upcast(self: Arc<Self>) -> Arc<C>;
}

/// Implement [`Implements`] for one or more implementations of a contract
///
/// ```ignore
/// implements!(dyn DocumentDb => SimulatedSqlDocumentDb, CachingDocumentDb);
/// ```
#[macro_export]
macro_rules! implements {
    ($contract:ty => $($implementation:ty),+ $(,)?) => {
        $(
            impl $crate::di::Implements<$contract> for $implementation {
                fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$contract> {
                    self
                }
            }
        )+
    };
}

/// How a dependency is turned into an instance
#[derive(Clone, Copy)]
pub enum DependencyKind {
    /// Directly instantiable; carries the type's own constructors
    Concrete(fn() -> Vec<ErasedConstructor>),
    /// Abstract; the implementation comes from the registry
    Contract,
}

/// One entry of a constructor signature
#[derive(Clone, Copy)]
pub struct Dependency {
    key: TypeKey,
    kind: DependencyKind,
}

impl Dependency {
    /// A concrete dependency, built without consulting the registry
    pub fn concrete<T: Injectable>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            kind: DependencyKind::Concrete(erased_constructors::<T>),
        }
    }

    /// A contract dependency, resolved through its registered implementation
    pub fn contract<C: ?Sized + Send + Sync + 'static>() -> Self {
        Self {
            key: TypeKey::of::<C>(),
            kind: DependencyKind::Contract,
        }
    }

    /// Key of the requested type
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Whether the dependency is concrete or a contract
    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// True for contracts
    pub fn is_contract(&self) -> bool {
        matches!(self.kind, DependencyKind::Contract)
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_contract() {
            "contract"
        } else {
            "concrete"
        };
        write!(f, "{}({})", kind, self.key)
    }
}

/// A typed constructor of `T`
pub struct Constructor<T> {
    params: Vec<Dependency>,
    factory: Factory<T>,
}

impl<T: Send + Sync + 'static> Constructor<T> {
    /// Start declaring a constructor's parameters
    pub fn builder() -> ConstructorBuilder<T> {
        ConstructorBuilder {
            params: Vec::new(),
            target: PhantomData,
        }
    }

    /// A constructor without parameters
    pub fn nullary<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::builder().build(move |_| Ok(factory()))
    }

    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Parameter types in declaration order
    pub fn params(&self) -> &[Dependency] {
        &self.params
    }

    /// Erase the value type, exposing instances as `Arc<T>`
    pub fn into_erased(self) -> ErasedConstructor {
        self.erase_as::<T>(identity)
    }

    /// Erase the value type, exposing instances as `Arc<C>`
    pub(crate) fn erase_as<C>(self, upcast: fn(Arc<T>) -> Arc<C>) -> ErasedConstructor
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let factory = self.factory;
        ErasedConstructor {
            params: self.params,
            factory: Arc::new(move |args: &mut Arguments| {
                let value = factory(args)?;
                Ok(Box::new(upcast(Arc::new(value))) as Instance)
            }),
        }
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("target", &type_name::<T>())
            .field("params", &self.params)
            .finish()
    }
}

/// Collects the parameter list of a [`Constructor`]
pub struct ConstructorBuilder<T> {
    params: Vec<Dependency>,
    target: PhantomData<fn() -> T>,
}

impl<T> ConstructorBuilder<T> {
    /// Append a contract parameter
    pub fn contract<C: ?Sized + Send + Sync + 'static>(mut self) -> Self {
        self.params.push(Dependency::contract::<C>());
        self
    }

    /// Append a concrete parameter
    pub fn concrete<D: Injectable>(mut self) -> Self {
        self.params.push(Dependency::concrete::<D>());
        self
    }

    /// Finish with the factory receiving the resolved arguments
    pub fn build<F>(self, factory: F) -> Constructor<T>
    where
        F: Fn(&mut Arguments) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Constructor {
            params: self.params,
            factory: Arc::new(factory),
        }
    }
}

impl<T> fmt::Debug for ConstructorBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorBuilder")
            .field("target", &type_name::<T>())
            .field("params", &self.params)
            .finish()
    }
}

/// A constructor whose output has been erased to an [`Instance`]
#[derive(Clone)]
pub struct ErasedConstructor {
    params: Vec<Dependency>,
    factory: ErasedFactory,
}

impl ErasedConstructor {
    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Parameter types in declaration order
    pub fn params(&self) -> &[Dependency] {
        &self.params
    }

    /// Run the factory over already resolved arguments
    pub fn invoke(&self, args: &mut Arguments) -> Result<Instance, BoxError> {
        (self.factory)(args)
    }
}

impl fmt::Debug for ErasedConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedConstructor")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Constructors of a concrete type, exposed as the type itself
pub(crate) fn erased_constructors<T: Injectable>() -> Vec<ErasedConstructor> {
    T::constructors()
        .into_iter()
        .map(Constructor::into_erased)
        .collect()
}

fn identity<T: ?Sized>(value: Arc<T>) -> Arc<T> {
    value
}

/// Failure to hand a resolved argument to a factory
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    /// The factory asked for more arguments than the signature declares
    #[error("argument {position} ({expected}) was not declared by the constructor")]
    Missing {
        /// Zero-based argument position
        position: usize,
        /// Type the factory asked for
        expected: &'static str,
    },

    /// The factory asked for a different type than the one declared
    #[error("argument {position} is {actual}, not {expected}")]
    TypeMismatch {
        /// Zero-based argument position
        position: usize,
        /// Type the factory asked for
        expected: &'static str,
        /// Type declared at that position
        actual: &'static str,
    },
}

/// Resolved arguments handed to a factory, consumed in declaration order
pub struct Arguments {
    values: std::vec::IntoIter<(TypeKey, Instance)>,
    position: usize,
}

impl Arguments {
    pub(crate) fn new(values: Vec<(TypeKey, Instance)>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    /// Take the next argument as `Arc<T>`
    ///
    /// `T` must be exactly the type declared at this position: the trait
    /// object for contract parameters, the concrete type otherwise.
    pub fn next<T: ?Sized + Send + Sync + 'static>(&mut self) -> Result<Arc<T>, ArgumentError> {
        let position = self.position;
        self.position += 1;

        let (key, value) = self.values.next().ok_or(ArgumentError::Missing {
            position,
            expected: type_name::<T>(),
        })?;

        value
            .downcast::<Arc<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| ArgumentError::TypeMismatch {
                position,
                expected: type_name::<T>(),
                actual: key.name(),
            })
    }

    /// Arguments not consumed yet
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("position", &self.position)
            .field("remaining", &self.remaining())
            .finish()
    }
}
