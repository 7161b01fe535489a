//! Component activator port

use crate::error::Result;
use crate::value_objects::{ComponentInstance, ParameterSet, Registration};

/// Instance production contract.
///
/// Given a registration the registry handed out and the caller's parameter
/// sequence, produce an instance. Activation owns sub-dependency resolution,
/// parameter matching, and whatever failure modes those imply; its errors are
/// opaque to the resolution facade and surface to callers verbatim.
pub trait ComponentActivator: Send + Sync {
    /// Produce an instance from `registration` using `parameters`
    fn activate(
        &self,
        registration: &Registration,
        parameters: &ParameterSet,
    ) -> Result<ComponentInstance>;
}
