//! Source-value conversion.
//!
//! Attribute text reaches the builder as raw strings; the converter turns
//! each literal into a typed [`Value`] against the property's declared
//! type. Primitive targets are built in; enum-like and object targets are
//! served by custom converters registered per target type.

use std::collections::HashMap;
use std::sync::Arc;

use trellis_foundation::{Error, Result, Type, Value};

/// A custom conversion from literal text to a typed value.
pub type ConvertFn = dyn Fn(&str) -> Result<Value> + Send + Sync;

/// Converts literal source text into typed values.
///
/// Read-only after construction; shareable across concurrent loads.
#[derive(Default)]
pub struct SourceValueConverter {
    custom: HashMap<Type, Arc<ConvertFn>>,
}

impl SourceValueConverter {
    /// Creates a converter with only the built-in primitive conversions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom converter for a target type.
    ///
    /// A custom converter takes precedence over the built-in conversion
    /// for the same target.
    pub fn register<F>(&mut self, target: Type, convert: F)
    where
        F: Fn(&str) -> Result<Value> + Send + Sync + 'static,
    {
        self.custom.insert(target, Arc::new(convert));
    }

    /// Converts `literal` to a value of the declared `target` type.
    ///
    /// # Errors
    /// Fails with a conversion error when the literal cannot become the
    /// target type, or when an object/any target has no custom converter.
    pub fn convert(&self, target: &Type, literal: &str) -> Result<Value> {
        if let Some(custom) = self.custom.get(target) {
            return custom(literal);
        }

        match target {
            Type::Bool => parse_bool(literal)
                .map(Value::Bool)
                .ok_or_else(|| Error::conversion(target.clone(), literal)),
            Type::Int => literal
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Error::conversion(target.clone(), literal)),
            Type::Float => literal
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Error::conversion(target.clone(), literal)),
            Type::String => Ok(Value::string(literal)),
            Type::Object(_) | Type::Any => Err(Error::conversion(target.clone(), literal)),
        }
    }
}

/// Parses a boolean literal, case-insensitively.
fn parse_bool(literal: &str) -> Option<bool> {
    let trimmed = literal.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl std::fmt::Debug for SourceValueConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceValueConverter")
            .field("custom", &self.custom.len())
            .finish()
    }
}
