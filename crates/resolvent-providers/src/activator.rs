//! Factory-backed component activator

use tracing::trace;

use resolvent_domain::error::Result;
use resolvent_domain::ports::ComponentActivator;
use resolvent_domain::value_objects::{ComponentInstance, ParameterSet, Registration};

/// Activator that runs the registration's own factory.
///
/// The factory's result is returned verbatim: a factory error is the
/// activation error the caller sees, with nothing wrapped around it. There is
/// no retry; a failed activation is reported exactly once per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct FactoryActivator;

impl FactoryActivator {
    /// Create a factory activator
    pub fn new() -> Self {
        Self
    }
}

impl ComponentActivator for FactoryActivator {
    fn activate(
        &self,
        registration: &Registration,
        parameters: &ParameterSet,
    ) -> Result<ComponentInstance> {
        trace!(
            registration = %registration.id(),
            identity = %registration.identity(),
            parameters = parameters.len(),
            "running component factory"
        );
        (registration.factory())(parameters)
    }
}
