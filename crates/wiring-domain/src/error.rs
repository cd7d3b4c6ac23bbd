//! Error handling types

use thiserror::Error;

/// Boxed error type accepted as the source of wrapped failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the wiring workspace
///
/// The first group of variants is the resolution taxonomy raised by the
/// dependency-injection container. Every one of them aborts the whole
/// `create` call and is a deterministic function of the registrations, so
/// none of them is worth retrying.
#[derive(Error, Debug)]
pub enum Error {
    /// A contract was requested but nothing is bound to it
    #[error("Unregistered contract: {contract}")]
    UnregisteredContract {
        /// Type name of the requested contract
        contract: String,
    },

    /// The target implementation declares no constructor
    #[error("No accessible constructor for {implementation}")]
    NoAccessibleConstructor {
        /// Type name of the implementation
        implementation: String,
    },

    /// A type transitively requires itself
    #[error("Circular dependency detected: {path}")]
    CircularDependencyDetected {
        /// Resolution path, outermost first, ending with the repeated type
        path: String,
    },

    /// The construction step of an implementation failed
    #[error("Failed to instantiate {implementation}")]
    InstantiationFailure {
        /// Type name of the implementation
        implementation: String,
        /// The failure raised by the constructor
        #[source]
        source: BoxError,
    },

    /// The dependency graph is deeper than the configured limit
    #[error("Resolution depth {max_depth} exceeded: {path}")]
    ResolutionDepthExceeded {
        /// Configured maximum depth
        max_depth: usize,
        /// Resolution path at the point the limit was hit
        path: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unregistered contract error
    pub fn unregistered_contract<S: Into<String>>(contract: S) -> Self {
        Self::UnregisteredContract {
            contract: contract.into(),
        }
    }

    /// Create a no accessible constructor error
    pub fn no_accessible_constructor<S: Into<String>>(implementation: S) -> Self {
        Self::NoAccessibleConstructor {
            implementation: implementation.into(),
        }
    }

    /// Create a circular dependency error from the resolution path
    pub fn circular_dependency<S: Into<String>>(path: S) -> Self {
        Self::CircularDependencyDetected { path: path.into() }
    }

    /// Wrap a constructor failure
    pub fn instantiation<S: Into<String>>(implementation: S, source: BoxError) -> Self {
        Self::InstantiationFailure {
            implementation: implementation.into(),
            source,
        }
    }

    /// Create a depth exceeded error
    pub fn depth_exceeded<S: Into<String>>(max_depth: usize, path: S) -> Self {
        Self::ResolutionDepthExceeded {
            max_depth,
            path: path.into(),
        }
    }

    /// Whether this error belongs to the resolution taxonomy
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnregisteredContract { .. }
                | Self::NoAccessibleConstructor { .. }
                | Self::CircularDependencyDetected { .. }
                | Self::InstantiationFailure { .. }
                | Self::ResolutionDepthExceeded { .. }
        )
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
