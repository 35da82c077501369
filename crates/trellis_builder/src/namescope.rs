//! Per-build name registration.

use trellis_foundation::{Error, ObjectHandle, Result};

/// Mapping from markup-declared names to the instances they name.
///
/// One namescope exists per `load` call and is never shared across
/// builds. Backed by a persistent map so the end-of-build snapshot is a
/// cheap structural-sharing clone.
#[derive(Debug, Default, Clone)]
pub struct Namescope {
    names: im::HashMap<String, ObjectHandle>,
}

impl Namescope {
    /// Creates an empty namescope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named instance.
    ///
    /// # Errors
    /// Fails with a duplicate-name error if the name is already
    /// registered in this build.
    pub fn register(&mut self, name: &str, instance: &ObjectHandle) -> Result<()> {
        if self.names.contains_key(name) {
            return Err(Error::duplicate_name(name));
        }
        self.names.insert(name.to_string(), instance.clone());
        Ok(())
    }

    /// Looks up an instance by its declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ObjectHandle> {
        self.names.get(name)
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Takes a snapshot of the current name-to-instance mapping.
    #[must_use]
    pub fn snapshot(&self) -> im::HashMap<String, ObjectHandle> {
        self.names.clone()
    }
}
