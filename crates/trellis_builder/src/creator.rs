//! Instance allocation.

use trellis_foundation::{Error, ObjectHandle, Result};
use trellis_registry::TypeDescriptor;

/// Allocates instances for resolved types.
///
/// A trait seam so hosts can interpose pooling or parameterized
/// construction; the default implementation calls the constructor
/// registered on the type descriptor.
pub trait CreateInstance {
    /// Allocates a fresh instance of the given type.
    ///
    /// The returned instance must already hold empty, non-null
    /// collections for every appendable property; the builder appends
    /// into them and never allocates a collection itself.
    ///
    /// # Errors
    /// Fails with an instantiation error if the type has no usable
    /// construction path.
    fn create(&self, instance_type: &TypeDescriptor) -> Result<ObjectHandle>;
}

/// Default creator: calls the descriptor's registered constructor.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstanceCreator;

impl CreateInstance for InstanceCreator {
    fn create(&self, instance_type: &TypeDescriptor) -> Result<ObjectHandle> {
        let construct = instance_type.constructor().ok_or_else(|| {
            Error::instantiation(instance_type.name(), "no constructor registered")
        })?;
        Ok(construct())
    }
}
