//! Registration handle and component instance aliases
//!
//! A [`Registration`] is the capability token a registry hands back for a
//! known identity. The resolution facade never inspects it; only an activator
//! consumes it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;

use super::identity::ServiceIdentity;
use super::parameters::ParameterSet;

/// Type-erased, shareable component instance
pub type ComponentInstance = Arc<dyn Any + Send + Sync>;

/// Factory producing a component instance from activation parameters
pub type ComponentFactory = Arc<dyn Fn(&ParameterSet) -> Result<ComponentInstance> + Send + Sync>;

/// Opaque proof that a service identity is satisfiable.
///
/// Carries what the activator needs to build instances: the identity the
/// registration was stored under and the component factory. Each registration
/// gets a unique id at construction, usable for diagnostics and override
/// tracking.
#[derive(Clone)]
pub struct Registration {
    id: Uuid,
    identity: ServiceIdentity,
    factory: ComponentFactory,
}

impl Registration {
    /// Create a registration for `identity` backed by `factory`
    pub fn new(identity: ServiceIdentity, factory: ComponentFactory) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity,
            factory,
        }
    }

    /// Unique id of this registration
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The identity this registration satisfies
    pub fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }

    /// The component factory
    pub fn factory(&self) -> &ComponentFactory {
        &self.factory
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
