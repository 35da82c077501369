//! Per-build context.

use trellis_foundation::{ObjectHandle, Result};

use crate::namescope::Namescope;

/// Host hook signaled around each instance's property population.
///
/// Both hooks default to no-ops; hosts that care (for example to defer
/// validation until an instance is fully populated) implement the trait
/// and hand it to the [`Loader`](crate::Loader).
pub trait InstanceLifecycle {
    /// Called after an instance is created, before its assignments run.
    fn on_begin_init(&self, _instance: &ObjectHandle) {}

    /// Called after all of an instance's assignments have been applied.
    fn on_end_init(&self, _instance: &ObjectHandle) {}
}

/// The default lifecycle hook: does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLifecycle;

impl InstanceLifecycle for NoopLifecycle {}

static NOOP: NoopLifecycle = NoopLifecycle;

/// Aggregates the per-build collaborators the object builder consults:
/// the namescope registrar and the lifecycle hook.
///
/// One fresh context exists per `load` call.
pub struct BuildContext<'a> {
    namescope: Namescope,
    lifecycle: &'a dyn InstanceLifecycle,
}

impl<'a> BuildContext<'a> {
    /// Creates a context with a fresh namescope and no-op lifecycle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namescope: Namescope::new(),
            lifecycle: &NOOP,
        }
    }

    /// Creates a context with the given lifecycle hook.
    #[must_use]
    pub fn with_lifecycle(lifecycle: &'a dyn InstanceLifecycle) -> Self {
        Self {
            namescope: Namescope::new(),
            lifecycle,
        }
    }

    /// Registers a named instance in this build's namescope.
    ///
    /// # Errors
    /// Fails with a duplicate-name error on a name collision.
    pub fn register_name(&mut self, name: &str, instance: &ObjectHandle) -> Result<()> {
        self.namescope.register(name, instance)
    }

    /// Returns the namescope.
    #[must_use]
    pub fn namescope(&self) -> &Namescope {
        &self.namescope
    }

    /// Returns the lifecycle hook.
    #[must_use]
    pub fn lifecycle(&self) -> &dyn InstanceLifecycle {
        self.lifecycle
    }
}

impl Default for BuildContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
