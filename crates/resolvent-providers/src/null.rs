//! Null component registry for testing and wiring defaults
//!
//! Knows no registrations and never will. Useful as a default collaborator
//! in tests and in hosts that wire a real registry later.

use std::sync::Arc;

use resolvent_domain::ports::ComponentRegistry;
use resolvent_domain::value_objects::{Registration, ServiceIdentity};

/// Registry that is always empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullComponentRegistry;

impl NullComponentRegistry {
    /// Create a null registry
    pub fn new() -> Self {
        Self
    }
}

impl ComponentRegistry for NullComponentRegistry {
    fn try_get_registration(&self, _identity: &ServiceIdentity) -> Option<Arc<Registration>> {
        None
    }
}
