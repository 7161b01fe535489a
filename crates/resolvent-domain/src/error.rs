//! Error handling types

use thiserror::Error;

use crate::value_objects::ServiceIdentity;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Resolvent
///
/// The resolution contract distinguishes three failure classes: argument
/// contract violations (checked before any collaborator is touched), absence
/// of a registration (terminal only for the fail-fast entry points), and
/// activation failures (always terminal, surfaced verbatim).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a resolution entry point
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// No registration matches the requested service identity
    #[error("No registration found for {identity}")]
    NotRegistered {
        /// The identity that was requested
        identity: ServiceIdentity,
    },

    /// A registration was found but its instance is not of the requested type
    #[error("Component registered for {identity} is not of type {expected}")]
    TypeMismatch {
        /// The identity that was requested
        identity: ServiceIdentity,
        /// The type the caller asked for
        expected: &'static str,
    },

    /// Component activation error
    #[error("Activation error: {message}")]
    Activation {
        /// Description of the activation error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not registered error
    pub fn not_registered(identity: ServiceIdentity) -> Self {
        Self::NotRegistered { identity }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(identity: ServiceIdentity, expected: &'static str) -> Self {
        Self::TypeMismatch { identity, expected }
    }

    /// Create an activation error
    pub fn activation<S: Into<String>>(message: S) -> Self {
        Self::Activation {
            message: message.into(),
            source: None,
        }
    }

    /// Create an activation error with source
    pub fn activation_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Activation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True if this error reports a missing registration
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered { .. })
    }
}
