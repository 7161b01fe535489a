//! Internal resolution outcome
//!
//! One lookup, three reporting conventions. The canonical resolution path
//! produces a [`Resolution`] and each public entry point converts it into its
//! own shape, so absence handling is written exactly once.

use resolvent_domain::error::{Error, Result};
use resolvent_domain::value_objects::{ComponentInstance, ServiceIdentity};

/// Outcome of one canonical resolution call.
pub(crate) enum Resolution {
    /// A registration was found and activated
    Found(ComponentInstance),
    /// No registration matches the identity
    Absent,
}

impl Resolution {
    /// Fail-fast conversion: absence becomes [`Error::NotRegistered`]
    pub(crate) fn found_or(self, identity: &ServiceIdentity) -> Result<ComponentInstance> {
        match self {
            Self::Found(instance) => Ok(instance),
            Self::Absent => Err(Error::not_registered(identity.clone())),
        }
    }

    /// Flagged conversion: absence becomes `None`
    pub(crate) fn into_option(self) -> Option<ComponentInstance> {
        match self {
            Self::Found(instance) => Some(instance),
            Self::Absent => None,
        }
    }
}
