//! Declared-value-type tags.
//!
//! Every property descriptor declares the type its values must have.
//! The source-value converter dispatches on these tags when turning
//! attribute text into typed values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declared type of a property's value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type. Never treated as a collection.
    String,
    /// Object type, named after the registered markup type.
    Object(String),
    /// Any type (accepts any value; conversion requires a custom converter).
    Any,
}

impl Type {
    /// Creates an object type with the given markup type name.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(name.into())
    }

    /// Returns true if this is one of the primitive scalar types.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Float | Self::String)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Object(name) => write!(f, "object<{name}>"),
            Self::Any => write!(f, "any"),
        }
    }
}
