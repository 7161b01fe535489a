//! Component registry port

use std::sync::Arc;

use crate::value_objects::{Registration, ServiceIdentity};

/// Registration storage and lookup contract.
///
/// The facade asks a registry exactly two questions: "do you know this
/// identity" and "hand me its registration". Both must be pure, repeatable
/// queries with no side effects observable to the caller, and must answer
/// from the same store at the same point in time.
///
/// # Default Implementations
///
/// `is_registered` defaults to probing `try_get_registration`, which keeps
/// the two queries consistent by construction. Implementations overriding it
/// for cheaper existence checks must answer from the same underlying store.
pub trait ComponentRegistry: Send + Sync {
    /// Look up the registration for `identity`, if any
    fn try_get_registration(&self, identity: &ServiceIdentity) -> Option<Arc<Registration>>;

    /// Whether a registration exists for `identity`
    fn is_registered(&self, identity: &ServiceIdentity) -> bool {
        self.try_get_registration(identity).is_some()
    }
}
