//! Multi-identity registration builder
//!
//! One component is often reachable under several identities (its service
//! type plus a logical name, say). The builder shapes a single erased factory
//! and stamps out one [`Registration`] per declared identity, all sharing it.

use std::sync::Arc;

use uuid::Uuid;

use resolvent_domain::error::Result;
use resolvent_domain::value_objects::{
    ComponentFactory, ComponentInstance, ParameterSet, Registration, ServiceIdentity,
};

use super::registry::InMemoryComponentRegistry;

/// Erase a fallible typed factory into a [`ComponentFactory`]
pub(crate) fn erase_factory<T, F>(factory: F) -> ComponentFactory
where
    T: Send + Sync + 'static,
    F: Fn(&ParameterSet) -> Result<T> + Send + Sync + 'static,
{
    Arc::new(move |parameters| Ok(Arc::new(factory(parameters)?) as ComponentInstance))
}

/// Erase a shared instance into a [`ComponentFactory`] handing out clones
pub(crate) fn erase_instance<T: Send + Sync + 'static>(value: T) -> ComponentFactory {
    let shared: Arc<T> = Arc::new(value);
    Arc::new(move |_parameters| Ok(shared.clone() as ComponentInstance))
}

/// Erase a trait-object instance, double-wrapped so the unsized type survives
/// the `Any` boundary
pub(crate) fn erase_trait_instance<T: ?Sized + Send + Sync + 'static>(
    instance: Arc<T>,
) -> ComponentFactory {
    let shared: Arc<Arc<T>> = Arc::new(instance);
    Arc::new(move |_parameters| Ok(shared.clone() as ComponentInstance))
}

/// Builder registering one component under several identities.
///
/// The builder does not check that the declared identities match what the
/// factory produces; a mismatch surfaces as a type-mismatch error at
/// resolution time, exactly as a hand-rolled wrong registration would.
///
/// # Example
///
/// ```
/// use resolvent_providers::{InMemoryComponentRegistry, RegistrationBuilder};
///
/// let registry = InMemoryComponentRegistry::new();
/// let ids = RegistrationBuilder::for_instance("Good evening".to_string())
///     .as_type::<String>()
///     .named("formal")
///     .register_into(&registry);
/// assert_eq!(ids.len(), 2);
/// ```
pub struct RegistrationBuilder {
    factory: ComponentFactory,
    identities: Vec<ServiceIdentity>,
}

impl RegistrationBuilder {
    /// Start from a fallible typed factory
    pub fn for_factory<T, F>(factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&ParameterSet) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            factory: erase_factory(factory),
            identities: Vec::new(),
        }
    }

    /// Start from a shared instance
    pub fn for_instance<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            factory: erase_instance(value),
            identities: Vec::new(),
        }
    }

    /// Start from a trait-object instance
    pub fn for_trait_instance<T: ?Sized + Send + Sync + 'static>(instance: Arc<T>) -> Self {
        Self {
            factory: erase_trait_instance(instance),
            identities: Vec::new(),
        }
    }

    /// Also reachable under the type identity of `U`
    pub fn as_type<U: ?Sized + 'static>(mut self) -> Self {
        self.identities.push(ServiceIdentity::of::<U>());
        self
    }

    /// Also reachable under a logical name
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.identities.push(ServiceIdentity::named(name));
        self
    }

    /// Also reachable under a unique key
    pub fn keyed(mut self, key: Uuid) -> Self {
        self.identities.push(ServiceIdentity::keyed(key));
        self
    }

    /// Produce one registration per declared identity, sharing the factory
    pub fn build(self) -> Vec<Registration> {
        let Self { factory, identities } = self;
        identities
            .into_iter()
            .map(|identity| Registration::new(identity, factory.clone()))
            .collect()
    }

    /// Build and store into `registry`, returning the registration ids
    pub fn register_into(self, registry: &InMemoryComponentRegistry) -> Vec<Uuid> {
        self.build()
            .into_iter()
            .map(|registration| registry.register(registration))
            .collect()
    }
}
