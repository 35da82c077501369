//! Shared handles to host instances.
//!
//! The builder allocates host objects behind [`ObjectHandle`]s so the
//! finished graph can contain cycles and cross-references (a child
//! holding its ancestor, two siblings sharing a named instance). Handles
//! are reference-counted and never deep-copied.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::Result;

/// A shared, dynamically-typed handle to one host instance.
///
/// Cloning is cheap (reference count bump). Typed access goes through
/// [`ObjectHandle::with`] and [`ObjectHandle::with_mut`], which fail with
/// a downcast error when the handle does not hold the requested type.
#[derive(Clone)]
pub struct ObjectHandle(Rc<RefCell<dyn Any>>);

impl ObjectHandle {
    /// Creates a handle owning the given host value.
    #[must_use]
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Returns true if both handles refer to the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if the handle holds a value of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.0.borrow().is::<T>()
    }

    /// Runs `f` against a shared borrow of the held value.
    ///
    /// # Errors
    /// Returns a downcast error if the handle does not hold a `T`.
    ///
    /// # Panics
    /// Panics if the instance is already mutably borrowed, which cannot
    /// happen during a well-formed build (the walk holds at most one
    /// borrow at a time).
    pub fn with<T: Any, R>(&self, f: impl FnOnce(&T) -> R) -> Result<R> {
        let guard = self.0.borrow();
        let value = guard
            .downcast_ref::<T>()
            .ok_or_else(|| Error::downcast(std::any::type_name::<T>()))?;
        Ok(f(value))
    }

    /// Runs `f` against a mutable borrow of the held value.
    ///
    /// # Errors
    /// Returns a downcast error if the handle does not hold a `T`.
    ///
    /// # Panics
    /// Panics if the instance is already borrowed; see [`ObjectHandle::with`].
    pub fn with_mut<T: Any, R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let mut guard = self.0.borrow_mut();
        let value = guard
            .downcast_mut::<T>()
            .ok_or_else(|| Error::downcast(std::any::type_name::<T>()))?;
        Ok(f(value))
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHandle({:p})", Rc::as_ptr(&self.0))
    }
}
