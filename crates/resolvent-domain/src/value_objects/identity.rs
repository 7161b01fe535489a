//! Service identity value objects
//!
//! A [`ServiceIdentity`] describes *what* is being asked for, independent of
//! how it was spelled at the call site. The registry uses identity equality
//! as its lookup contract, so both types here derive (or hand-implement)
//! `Eq` and `Hash` with care: a [`TypeKey`] compares by `TypeId` alone.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

/// Runtime type descriptor recovered from a static type.
///
/// Rust reifies types through [`TypeId`], so "resolve by compile-time type
/// `T`" and "resolve by runtime type value" converge on this one token. The
/// `?Sized` bound lets trait object types (`dyn Greeting`) be addressed the
/// same way as concrete ones.
///
/// Equality and hashing use the [`TypeId`] only; the type name is carried for
/// diagnostics and error messages.
#[derive(Clone, Copy, Debug)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Build the type key for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying type id
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// How a requested component is addressed.
///
/// A closed union of the three addressing schemes the resolution facade
/// accepts. Identities are pure values: two instances with the same variant
/// and key are interchangeable, and the registry must honor this equality for
/// lookup.
///
/// | Variant | Key | Equality |
/// |---------|-----|----------|
/// | `Typed` | a [`TypeKey`] | same `TypeId` |
/// | `Named` | a string | same string, case-sensitive |
/// | `Keyed` | a [`Uuid`] | same key |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ServiceIdentity {
    /// Addressed by the component's service type
    Typed(TypeKey),
    /// Addressed by a logical, case-sensitive name
    Named(String),
    /// Addressed by a unique key
    Keyed(Uuid),
}

impl ServiceIdentity {
    /// Identity of the service type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Typed(TypeKey::of::<T>())
    }

    /// Identity from a runtime type key
    pub fn typed(key: TypeKey) -> Self {
        Self::Typed(key)
    }

    /// Identity from a logical name
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::Named(name.into())
    }

    /// Identity from a unique key
    pub fn keyed(key: Uuid) -> Self {
        Self::Keyed(key)
    }

    /// Whether this identity passes the facade's argument precondition gate.
    ///
    /// A `Named` identity must carry a non-empty name. Typed and keyed
    /// identities are valid by construction.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Named(name) => !name.is_empty(),
            Self::Typed(_) | Self::Keyed(_) => true,
        }
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed(key) => write!(f, "type {key}"),
            Self::Named(name) => write!(f, "name \"{name}\""),
            Self::Keyed(key) => write!(f, "key {key}"),
        }
    }
}
