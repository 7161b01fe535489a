//! Concurrent in-memory component registry

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use resolvent_domain::error::Result;
use resolvent_domain::ports::ComponentRegistry;
use resolvent_domain::value_objects::{ParameterSet, Registration, ServiceIdentity};

use super::builder::{erase_factory, erase_instance, erase_trait_instance};

/// Registration store backed by a concurrent map.
///
/// Safe for concurrent registration and lookup without external locking.
/// Registering an identity that is already present replaces the previous
/// registration (last registration wins); the override is logged at debug
/// level.
///
/// # Example
///
/// ```
/// use resolvent_providers::InMemoryComponentRegistry;
/// use resolvent_domain::ports::ComponentRegistry;
/// use resolvent_domain::value_objects::ServiceIdentity;
///
/// let registry = InMemoryComponentRegistry::new();
/// registry.register_instance(42u32);
/// assert!(registry.is_registered(&ServiceIdentity::of::<u32>()));
/// ```
#[derive(Default)]
pub struct InMemoryComponentRegistry {
    registrations: DashMap<ServiceIdentity, Arc<Registration>>,
}

impl InMemoryComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a registration under its identity, returning the registration id.
    ///
    /// Last registration wins when the identity is already present.
    pub fn register(&self, registration: Registration) -> Uuid {
        let id = registration.id();
        let identity = registration.identity().clone();
        if let Some(previous) = self.registrations.insert(identity.clone(), Arc::new(registration))
        {
            debug!(%identity, previous = %previous.id(), replacement = %id, "replacing registration");
        } else {
            debug!(%identity, registration = %id, "registered component");
        }
        id
    }

    /// Register a fallible factory under the type identity of `T`
    pub fn register_factory<T, F>(&self, factory: F) -> Uuid
    where
        T: Send + Sync + 'static,
        F: Fn(&ParameterSet) -> Result<T> + Send + Sync + 'static,
    {
        self.register(Registration::new(
            ServiceIdentity::of::<T>(),
            erase_factory(factory),
        ))
    }

    /// Register a shared instance under the type identity of `T`.
    ///
    /// Every activation hands out the same `Arc`-shared value.
    pub fn register_instance<T: Send + Sync + 'static>(&self, value: T) -> Uuid {
        self.register(Registration::new(
            ServiceIdentity::of::<T>(),
            erase_instance(value),
        ))
    }

    /// Register a trait-object instance under the trait's type identity
    pub fn register_trait_instance<T: ?Sized + Send + Sync + 'static>(
        &self,
        instance: Arc<T>,
    ) -> Uuid {
        self.register(Registration::new(
            ServiceIdentity::of::<T>(),
            erase_trait_instance(instance),
        ))
    }

    /// Register a fallible factory under a logical name
    pub fn register_named_factory<T, F, S>(&self, name: S, factory: F) -> Uuid
    where
        T: Send + Sync + 'static,
        F: Fn(&ParameterSet) -> Result<T> + Send + Sync + 'static,
        S: Into<String>,
    {
        self.register(Registration::new(
            ServiceIdentity::named(name),
            erase_factory(factory),
        ))
    }

    /// Register a shared instance under a logical name
    pub fn register_named_instance<T: Send + Sync + 'static, S: Into<String>>(
        &self,
        name: S,
        value: T,
    ) -> Uuid {
        self.register(Registration::new(
            ServiceIdentity::named(name),
            erase_instance(value),
        ))
    }

    /// Register a trait-object instance under a logical name
    pub fn register_named_trait_instance<T: ?Sized + Send + Sync + 'static, S: Into<String>>(
        &self,
        name: S,
        instance: Arc<T>,
    ) -> Uuid {
        self.register(Registration::new(
            ServiceIdentity::named(name),
            erase_trait_instance(instance),
        ))
    }

    /// Register a fallible factory under a unique key
    pub fn register_keyed_factory<T, F>(&self, key: Uuid, factory: F) -> Uuid
    where
        T: Send + Sync + 'static,
        F: Fn(&ParameterSet) -> Result<T> + Send + Sync + 'static,
    {
        self.register(Registration::new(
            ServiceIdentity::keyed(key),
            erase_factory(factory),
        ))
    }

    /// Register a shared instance under a unique key
    pub fn register_keyed_instance<T: Send + Sync + 'static>(&self, key: Uuid, value: T) -> Uuid {
        self.register(Registration::new(
            ServiceIdentity::keyed(key),
            erase_instance(value),
        ))
    }

    /// Register a trait-object instance under a unique key
    pub fn register_keyed_trait_instance<T: ?Sized + Send + Sync + 'static>(
        &self,
        key: Uuid,
        instance: Arc<T>,
    ) -> Uuid {
        self.register(Registration::new(
            ServiceIdentity::keyed(key),
            erase_trait_instance(instance),
        ))
    }

    /// Number of stored registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the registry holds no registrations
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl ComponentRegistry for InMemoryComponentRegistry {
    fn try_get_registration(&self, identity: &ServiceIdentity) -> Option<Arc<Registration>> {
        self.registrations.get(identity).map(|entry| entry.value().clone())
    }

    fn is_registered(&self, identity: &ServiceIdentity) -> bool {
        self.registrations.contains_key(identity)
    }
}
