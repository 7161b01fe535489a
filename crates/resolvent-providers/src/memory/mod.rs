//! In-memory registry implementation
//!
//! Registration storage backed by a concurrent map, plus a builder for
//! registering one component under several identities.

/// Multi-identity registration builder
pub mod builder;
/// Concurrent in-memory registry
pub mod registry;

pub use builder::RegistrationBuilder;
pub use registry::InMemoryComponentRegistry;
