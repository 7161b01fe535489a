//! Activation parameter value objects
//!
//! Parameters are override values handed to activation. The facade treats
//! them as opaque cargo: it validates the sequence and passes it through
//! unchanged. Insertion order is significant because activators may apply
//! positional matching.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::identity::TypeKey;

/// Type-erased parameter payload
pub type ParameterValue = Arc<dyn Any + Send + Sync>;

/// A single activation override value.
///
/// Mirrors the three matching schemes activators understand: by position in
/// the constructor argument list, by argument name, or by argument type.
#[derive(Clone)]
pub enum Parameter {
    /// Matched against a constructor argument position
    Positional {
        /// Zero-based argument position
        index: usize,
        /// The override value
        value: ParameterValue,
    },
    /// Matched against a constructor argument name
    Named {
        /// The argument name, case-sensitive
        name: String,
        /// The override value
        value: ParameterValue,
    },
    /// Matched against a constructor argument type
    Typed {
        /// The argument type
        type_key: TypeKey,
        /// The override value
        value: ParameterValue,
    },
}

impl Parameter {
    /// Create a positional parameter
    pub fn positional<T: Send + Sync + 'static>(index: usize, value: T) -> Self {
        Self::Positional {
            index,
            value: Arc::new(value),
        }
    }

    /// Create a named parameter
    pub fn named<S: Into<String>, T: Send + Sync + 'static>(name: S, value: T) -> Self {
        Self::Named {
            name: name.into(),
            value: Arc::new(value),
        }
    }

    /// Create a typed parameter keyed by the value's own type
    pub fn typed<T: Send + Sync + 'static>(value: T) -> Self {
        Self::Typed {
            type_key: TypeKey::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// The erased payload
    pub fn value(&self) -> &ParameterValue {
        match self {
            Self::Positional { value, .. } | Self::Named { value, .. } | Self::Typed { value, .. } => {
                value
            }
        }
    }

    /// Downcast the payload to `T`, if it holds one
    pub fn value_as<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.value().clone().downcast::<T>().ok()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional { index, .. } => {
                f.debug_struct("Positional").field("index", index).finish_non_exhaustive()
            }
            Self::Named { name, .. } => {
                f.debug_struct("Named").field("name", name).finish_non_exhaustive()
            }
            Self::Typed { type_key, .. } => {
                f.debug_struct("Typed").field("type_key", type_key).finish_non_exhaustive()
            }
        }
    }
}

/// Ordered, possibly-empty sequence of activation parameters.
///
/// The empty set is the default and is a real value: entry points that omit
/// parameters supply `ParameterSet::empty()`, never an absence marker.
#[derive(Clone, Debug, Default)]
pub struct ParameterSet {
    values: Vec<Parameter>,
}

impl ParameterSet {
    /// The empty parameter set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a parameter, builder-style
    pub fn with(mut self, parameter: Parameter) -> Self {
        self.values.push(parameter);
        self
    }

    /// Append a parameter in place
    pub fn push(&mut self, parameter: Parameter) {
        self.values.push(parameter);
    }

    /// Iterate the parameters in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.values.iter()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no parameters
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Find the first named parameter with the given name
    pub fn named(&self, name: &str) -> Option<&Parameter> {
        self.values
            .iter()
            .find(|p| matches!(p, Parameter::Named { name: n, .. } if n == name))
    }

    /// Find the parameter at the given constructor position
    pub fn positional(&self, index: usize) -> Option<&Parameter> {
        self.values
            .iter()
            .find(|p| matches!(p, Parameter::Positional { index: i, .. } if *i == index))
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
