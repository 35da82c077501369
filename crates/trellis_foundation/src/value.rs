//! Runtime value type.
//!
//! `Value` is the currency between the source-value converter, the object
//! builder, and property setter adapters. Scalars are carried directly;
//! built child instances are carried as [`ObjectHandle`]s.

use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::object::ObjectHandle;
use crate::types::Type;
use crate::Result;

/// A runtime value produced by conversion or by building a child node.
#[derive(Clone, Debug)]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// A built host instance.
    Object(ObjectHandle),
}

impl Value {
    /// Creates a string value.
    #[must_use]
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Returns the type of this value.
    ///
    /// Objects report `Type::Any` because the markup type of a handle is
    /// not recoverable from the handle alone.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Nil | Self::Object(_) => Type::Any,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an object handle.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            Self::Object(handle) => Some(handle),
            _ => None,
        }
    }

    /// Extracts a boolean or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns a type-mismatch error for any other variant.
    pub fn into_bool(self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Err(Error::type_mismatch(Type::Bool, other.value_type())),
        }
    }

    /// Extracts an integer or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns a type-mismatch error for any other variant.
    pub fn into_int(self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(n),
            other => Err(Error::type_mismatch(Type::Int, other.value_type())),
        }
    }

    /// Extracts a float or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns a type-mismatch error for any other variant.
    pub fn into_float(self) -> Result<f64> {
        match self {
            Self::Float(n) => Ok(n),
            other => Err(Error::type_mismatch(Type::Float, other.value_type())),
        }
    }

    /// Extracts a string or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns a type-mismatch error for any other variant.
    pub fn into_string(self) -> Result<Arc<str>> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(Error::type_mismatch(Type::String, other.value_type())),
        }
    }

    /// Extracts an object handle or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns a type-mismatch error for any other variant.
    pub fn into_object(self) -> Result<ObjectHandle> {
        match self {
            Self::Object(handle) => Ok(handle),
            other => Err(Error::type_mismatch(Type::Any, other.value_type())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            // Objects compare by instance identity, not structure.
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Object(handle) => write!(f, "{handle:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<ObjectHandle> for Value {
    fn from(handle: ObjectHandle) -> Self {
        Self::Object(handle)
    }
}
