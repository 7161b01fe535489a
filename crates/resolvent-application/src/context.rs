//! Resolution facade
//!
//! [`ResolutionContext`] is the single entry surface for resolving
//! components. Every convenience spelling reduces to one canonical path:
//!
//! ```text
//! resolve::<T>() / resolve_named::<T>("x") / resolve_by_name("x") / ...
//!                    │
//!                    ▼  normalize to (ServiceIdentity, ParameterSet)
//! ┌───────────────────────────────────────────┐
//! │ resolve_core(identity, parameters)        │
//! │   validate arguments                      │
//! │   registry.try_get_registration(identity) │──▶ Absent
//! │   activator.activate(registration, params)│──▶ Found(instance)
//! └───────────────────────────────────────────┘
//!                    │
//!                    ▼  convert per entry point
//! fail-fast (NotRegistered) · flagged (Option) · optional (Option)
//! ```
//!
//! The context is stateless beyond its two collaborator handles: no locks, no
//! retries, no caching. Thread safety is whatever the registry and activator
//! guarantee; each call's identity and parameter set are call-local values.

use std::sync::Arc;

use tracing::{debug, trace};
use uuid::Uuid;

use resolvent_domain::error::{Error, Result};
use resolvent_domain::ports::{ComponentActivator, ComponentRegistry};
use resolvent_domain::value_objects::{
    ComponentInstance, Parameter, ParameterSet, ServiceIdentity, TypeKey,
};

use crate::outcome::Resolution;

/// The resolution facade over a registry and an activator.
///
/// Cloning is cheap (two `Arc` handles) and clones share the same
/// collaborators.
#[derive(Clone)]
pub struct ResolutionContext {
    registry: Arc<dyn ComponentRegistry>,
    activator: Arc<dyn ComponentActivator>,
}

impl ResolutionContext {
    /// Create a context over the given registry and activator
    pub fn new(registry: Arc<dyn ComponentRegistry>, activator: Arc<dyn ComponentActivator>) -> Self {
        Self { registry, activator }
    }

    /// The registry collaborator
    pub fn registry(&self) -> &Arc<dyn ComponentRegistry> {
        &self.registry
    }

    /// The activator collaborator
    pub fn activator(&self) -> &Arc<dyn ComponentActivator> {
        &self.activator
    }

    /// Canonical resolution path shared by every entry point.
    ///
    /// Argument validation happens before the registry is consulted; a
    /// precondition failure leaves both collaborators untouched.
    fn resolve_core(
        &self,
        identity: &ServiceIdentity,
        parameters: &ParameterSet,
    ) -> Result<Resolution> {
        ensure_identity(identity)?;
        ensure_parameters(parameters)?;

        let Some(registration) = self.registry.try_get_registration(identity) else {
            debug!(%identity, "no registration found");
            return Ok(Resolution::Absent);
        };

        trace!(%identity, registration = %registration.id(), "activating component");
        let instance = self.activator.activate(&registration, parameters)?;
        Ok(Resolution::Found(instance))
    }

    // ========================================================================
    // Identity-driven entry points (canonical forms)
    // ========================================================================

    /// Resolve the component for `identity`, failing fast on absence.
    ///
    /// Returns [`Error::NotRegistered`] when no registration matches.
    /// Activation failures propagate unchanged.
    pub fn resolve_service(
        &self,
        identity: &ServiceIdentity,
        parameters: &ParameterSet,
    ) -> Result<ComponentInstance> {
        self.resolve_core(identity, parameters)?.found_or(identity)
    }

    /// Resolve the component for `identity`, reporting absence as `Ok(None)`.
    ///
    /// Only absence is converted into the flag; activation failures still
    /// propagate as errors.
    pub fn try_resolve_service(
        &self,
        identity: &ServiceIdentity,
        parameters: &ParameterSet,
    ) -> Result<Option<ComponentInstance>> {
        Ok(self.resolve_core(identity, parameters)?.into_option())
    }

    /// Optional resolution for `identity`, built strictly on
    /// [`try_resolve_service`](Self::try_resolve_service).
    ///
    /// Deliberately asymmetric: absence maps to `None`, but an activation
    /// failure after a registration was found still surfaces as an error.
    pub fn resolve_optional_service(
        &self,
        identity: &ServiceIdentity,
        parameters: &ParameterSet,
    ) -> Result<Option<ComponentInstance>> {
        self.try_resolve_service(identity, parameters)
    }

    /// Whether a registration exists for `identity`.
    ///
    /// A pure predicate: no activation happens and repeated calls do not
    /// affect subsequent resolution outcomes.
    pub fn is_registered_service(&self, identity: &ServiceIdentity) -> Result<bool> {
        ensure_identity(identity)?;
        Ok(self.registry.is_registered(identity))
    }

    /// Resolve by a runtime type key
    pub fn resolve_by_type(
        &self,
        key: TypeKey,
        parameters: &ParameterSet,
    ) -> Result<ComponentInstance> {
        self.resolve_service(&ServiceIdentity::typed(key), parameters)
    }

    /// Resolve by a bare service name
    pub fn resolve_by_name(
        &self,
        name: &str,
        parameters: &ParameterSet,
    ) -> Result<ComponentInstance> {
        self.resolve_service(&ServiceIdentity::named(name), parameters)
    }

    // ========================================================================
    // Fail-fast adapters (typed)
    // ========================================================================

    /// Resolve a component by its declared type
    pub fn resolve<T: Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.resolve_with::<T>(&ParameterSet::empty())
    }

    /// Resolve a component by its declared type with activation parameters
    pub fn resolve_with<T: Send + Sync + 'static>(
        &self,
        parameters: &ParameterSet,
    ) -> Result<Arc<T>> {
        let identity = ServiceIdentity::of::<T>();
        let instance = self.resolve_service(&identity, parameters)?;
        downcast_concrete(&identity, instance)
    }

    /// Resolve a component registered under a logical name
    pub fn resolve_named<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        self.resolve_named_with::<T>(name, &ParameterSet::empty())
    }

    /// Resolve a named component with activation parameters
    pub fn resolve_named_with<T: Send + Sync + 'static>(
        &self,
        name: &str,
        parameters: &ParameterSet,
    ) -> Result<Arc<T>> {
        let identity = ServiceIdentity::named(name);
        let instance = self.resolve_service(&identity, parameters)?;
        downcast_concrete(&identity, instance)
    }

    /// Resolve a component registered under a unique key
    pub fn resolve_keyed<T: Send + Sync + 'static>(&self, key: Uuid) -> Result<Arc<T>> {
        self.resolve_keyed_with::<T>(key, &ParameterSet::empty())
    }

    /// Resolve a keyed component with activation parameters
    pub fn resolve_keyed_with<T: Send + Sync + 'static>(
        &self,
        key: Uuid,
        parameters: &ParameterSet,
    ) -> Result<Arc<T>> {
        let identity = ServiceIdentity::keyed(key);
        let instance = self.resolve_service(&identity, parameters)?;
        downcast_concrete(&identity, instance)
    }

    // ========================================================================
    // Fail-fast adapters (trait objects)
    // ========================================================================

    /// Resolve a component by its service trait.
    ///
    /// Trait-object services are stored double-wrapped (`Arc<Arc<dyn T>>`);
    /// this adapter unwraps to the `Arc<dyn T>` the caller wants.
    pub fn resolve_trait<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.resolve_trait_with::<T>(&ParameterSet::empty())
    }

    /// Resolve a trait service with activation parameters
    pub fn resolve_trait_with<T: ?Sized + Send + Sync + 'static>(
        &self,
        parameters: &ParameterSet,
    ) -> Result<Arc<T>> {
        let identity = ServiceIdentity::of::<T>();
        let instance = self.resolve_service(&identity, parameters)?;
        downcast_shared(&identity, instance)
    }

    /// Resolve a trait service registered under a logical name
    pub fn resolve_named_trait<T: ?Sized + Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> Result<Arc<T>> {
        let identity = ServiceIdentity::named(name);
        let instance = self.resolve_service(&identity, &ParameterSet::empty())?;
        downcast_shared(&identity, instance)
    }

    /// Resolve a trait service registered under a unique key
    pub fn resolve_keyed_trait<T: ?Sized + Send + Sync + 'static>(
        &self,
        key: Uuid,
    ) -> Result<Arc<T>> {
        let identity = ServiceIdentity::keyed(key);
        let instance = self.resolve_service(&identity, &ParameterSet::empty())?;
        downcast_shared(&identity, instance)
    }

    // ========================================================================
    // Flagged adapters
    // ========================================================================

    /// Try to resolve by declared type; absence is `Ok(None)`
    pub fn try_resolve<T: Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        self.try_resolve_with::<T>(&ParameterSet::empty())
    }

    /// Try to resolve by declared type with activation parameters
    pub fn try_resolve_with<T: Send + Sync + 'static>(
        &self,
        parameters: &ParameterSet,
    ) -> Result<Option<Arc<T>>> {
        let identity = ServiceIdentity::of::<T>();
        match self.try_resolve_service(&identity, parameters)? {
            Some(instance) => Ok(Some(downcast_concrete(&identity, instance)?)),
            None => Ok(None),
        }
    }

    /// Try to resolve a named component
    pub fn try_resolve_named<T: Send + Sync + 'static>(&self, name: &str) -> Result<Option<Arc<T>>> {
        self.try_resolve_named_with::<T>(name, &ParameterSet::empty())
    }

    /// Try to resolve a named component with activation parameters
    pub fn try_resolve_named_with<T: Send + Sync + 'static>(
        &self,
        name: &str,
        parameters: &ParameterSet,
    ) -> Result<Option<Arc<T>>> {
        let identity = ServiceIdentity::named(name);
        match self.try_resolve_service(&identity, parameters)? {
            Some(instance) => Ok(Some(downcast_concrete(&identity, instance)?)),
            None => Ok(None),
        }
    }

    /// Try to resolve a keyed component
    pub fn try_resolve_keyed<T: Send + Sync + 'static>(&self, key: Uuid) -> Result<Option<Arc<T>>> {
        self.try_resolve_keyed_with::<T>(key, &ParameterSet::empty())
    }

    /// Try to resolve a keyed component with activation parameters
    pub fn try_resolve_keyed_with<T: Send + Sync + 'static>(
        &self,
        key: Uuid,
        parameters: &ParameterSet,
    ) -> Result<Option<Arc<T>>> {
        let identity = ServiceIdentity::keyed(key);
        match self.try_resolve_service(&identity, parameters)? {
            Some(instance) => Ok(Some(downcast_concrete(&identity, instance)?)),
            None => Ok(None),
        }
    }

    /// Try to resolve by service trait
    pub fn try_resolve_trait<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        self.try_resolve_trait_with::<T>(&ParameterSet::empty())
    }

    /// Try to resolve by service trait with activation parameters
    pub fn try_resolve_trait_with<T: ?Sized + Send + Sync + 'static>(
        &self,
        parameters: &ParameterSet,
    ) -> Result<Option<Arc<T>>> {
        let identity = ServiceIdentity::of::<T>();
        match self.try_resolve_service(&identity, parameters)? {
            Some(instance) => Ok(Some(downcast_shared(&identity, instance)?)),
            None => Ok(None),
        }
    }

    // ========================================================================
    // Optional adapters (built strictly on the flagged family)
    // ========================================================================

    /// Optionally resolve by declared type.
    ///
    /// Swallows only absence; activation failures propagate. Whether optional
    /// resolution should also absorb activation errors is a deliberate
    /// non-feature of this contract.
    pub fn resolve_optional<T: Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        self.try_resolve::<T>()
    }

    /// Optionally resolve by declared type with activation parameters
    pub fn resolve_optional_with<T: Send + Sync + 'static>(
        &self,
        parameters: &ParameterSet,
    ) -> Result<Option<Arc<T>>> {
        self.try_resolve_with::<T>(parameters)
    }

    /// Optionally resolve a named component
    pub fn resolve_optional_named<T: Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> Result<Option<Arc<T>>> {
        self.try_resolve_named::<T>(name)
    }

    /// Optionally resolve a named component with activation parameters
    pub fn resolve_optional_named_with<T: Send + Sync + 'static>(
        &self,
        name: &str,
        parameters: &ParameterSet,
    ) -> Result<Option<Arc<T>>> {
        self.try_resolve_named_with::<T>(name, parameters)
    }

    /// Optionally resolve by service trait
    pub fn resolve_optional_trait<T: ?Sized + Send + Sync + 'static>(
        &self,
    ) -> Result<Option<Arc<T>>> {
        self.try_resolve_trait::<T>()
    }

    // ========================================================================
    // Existence queries
    // ========================================================================

    /// Whether the service type `T` is registered
    pub fn is_registered<T: ?Sized + 'static>(&self) -> Result<bool> {
        self.is_registered_service(&ServiceIdentity::of::<T>())
    }

    /// Whether a component is registered under `name`
    pub fn is_registered_named(&self, name: &str) -> Result<bool> {
        self.is_registered_service(&ServiceIdentity::named(name))
    }

    /// Whether a component is registered under `key`
    pub fn is_registered_keyed(&self, key: Uuid) -> Result<bool> {
        self.is_registered_service(&ServiceIdentity::keyed(key))
    }
}

/// Argument gate: identities must pass their validity contract.
fn ensure_identity(identity: &ServiceIdentity) -> Result<()> {
    if identity.is_valid() {
        Ok(())
    } else {
        Err(Error::invalid_argument("service name must not be empty"))
    }
}

/// Argument gate: named parameters must carry a non-empty key.
fn ensure_parameters(parameters: &ParameterSet) -> Result<()> {
    for parameter in parameters {
        if let Parameter::Named { name, .. } = parameter {
            if name.is_empty() {
                return Err(Error::invalid_argument(
                    "named parameter key must not be empty",
                ));
            }
        }
    }
    Ok(())
}

/// Downcast an erased instance to a concrete `Arc<T>`.
fn downcast_concrete<T: Send + Sync + 'static>(
    identity: &ServiceIdentity,
    instance: ComponentInstance,
) -> Result<Arc<T>> {
    instance
        .downcast::<T>()
        .map_err(|_| Error::type_mismatch(identity.clone(), std::any::type_name::<T>()))
}

/// Unwrap a double-wrapped trait service to `Arc<T>`.
fn downcast_shared<T: ?Sized + Send + Sync + 'static>(
    identity: &ServiceIdentity,
    instance: ComponentInstance,
) -> Result<Arc<T>> {
    instance
        .downcast::<Arc<T>>()
        .map(|outer| (*outer).clone())
        .map_err(|_| Error::type_mismatch(identity.clone(), std::any::type_name::<T>()))
}
