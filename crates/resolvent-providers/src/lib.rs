//! Provider Layer - Resolvent
//!
//! Reference implementations of the resolution ports: an in-memory component
//! registry, a factory-backed activator, and a null registry for tests and
//! wiring defaults.
//!
//! The facade in `resolvent-application` works against the port traits only;
//! host applications are free to replace any of these with their own
//! implementations.

/// Factory-backed component activator
pub mod activator;
/// In-memory registry and registration builder
pub mod memory;
/// Null registry for tests and defaults
pub mod null;

// Re-export provider implementations for convenience
pub use activator::FactoryActivator;
pub use memory::{InMemoryComponentRegistry, RegistrationBuilder};
pub use null::NullComponentRegistry;
