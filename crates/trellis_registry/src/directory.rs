//! Namespace-qualified type lookup.

use std::collections::HashMap;
use std::sync::Arc;

use trellis_foundation::{Error, Result};

use crate::descriptor::TypeDescriptor;

/// Maps a (namespace, local name) markup identifier to a registered type.
///
/// The directory is populated up front and read-only afterwards, so one
/// directory can serve any number of concurrent loads.
#[derive(Debug, Default)]
pub struct TypeDirectory {
    types: HashMap<(String, String), Arc<TypeDescriptor>>,
}

impl TypeDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type under its namespace and local name.
    ///
    /// Re-registering the same identifier replaces the earlier entry.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        let key = (
            descriptor.namespace().to_string(),
            descriptor.name().to_string(),
        );
        self.types.insert(key, Arc::new(descriptor));
    }

    /// Resolves a markup identifier to its registered type.
    ///
    /// # Errors
    /// Fails with an unresolved-type error when nothing is registered
    /// under the identifier.
    pub fn resolve(&self, namespace: &str, local_name: &str) -> Result<Arc<TypeDescriptor>> {
        self.types
            .get(&(namespace.to_string(), local_name.to_string()))
            .cloned()
            .ok_or_else(|| Error::unresolved_type(namespace, local_name))
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
