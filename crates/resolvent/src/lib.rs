//! # Resolvent
//!
//! A service-resolution facade over a component registry: a uniform,
//! fail-fast-or-optional API for obtaining component instances, where a
//! requested component may be identified by its declared type, by a logical
//! name, or by a unique key.
//!
//! This crate provides the main public API for Resolvent. It re-exports the
//! layer crates and the types most callers need.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use resolvent::{FactoryActivator, InMemoryComponentRegistry, ResolutionContext};
//!
//! trait Greeting: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct Greeter;
//! impl Greeting for Greeter {
//!     fn greet(&self) -> String {
//!         "Hello!".to_string()
//!     }
//! }
//!
//! let registry = Arc::new(InMemoryComponentRegistry::new());
//! registry.register_trait_instance::<dyn Greeting>(Arc::new(Greeter));
//!
//! let context = ResolutionContext::new(registry, Arc::new(FactoryActivator::new()));
//! let greeting = context.resolve_trait::<dyn Greeting>().unwrap();
//! assert_eq!(greeting.greet(), "Hello!");
//! ```
//!
//! ## Architecture
//!
//! The codebase follows the same layering as its crates:
//!
//! - `domain` - service identities, parameters, registrations, ports, errors
//! - `resolution` - the `ResolutionContext` facade and its entry points
//! - `providers` - in-memory registry, factory activator, null registry

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use resolvent_domain::*;
}

/// Resolution layer - the facade and its entry points
///
/// Re-exports from the application crate for convenience
pub mod resolution {
    pub use resolvent_application::*;
}

/// Provider layer - port implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use resolvent_providers::*;
}

// Flat re-exports of the types most callers touch
pub use resolvent_application::ResolutionContext;
pub use resolvent_domain::error::{Error, Result};
pub use resolvent_domain::ports::{ComponentActivator, ComponentRegistry};
pub use resolvent_domain::value_objects::{
    ComponentInstance, Parameter, ParameterSet, Registration, ServiceIdentity, TypeKey,
};
pub use resolvent_providers::{
    FactoryActivator, InMemoryComponentRegistry, NullComponentRegistry, RegistrationBuilder,
};
