//! Object building for the Trellis loader.
//!
//! This crate walks a construction tree and produces the live object
//! graph:
//! - [`ObjectBuilder`] - Depth-first walk applying every assignment
//! - [`InstanceCreator`] - Allocation through registered constructors
//! - [`BuildContext`] / [`Namescope`] - Per-load name registration
//! - [`Loader`] - The `load` entry point tying parse and build together

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
mod context;
mod creator;
mod loader;
mod namescope;

pub use builder::ObjectBuilder;
pub use context::{BuildContext, InstanceLifecycle, NoopLifecycle};
pub use creator::{CreateInstance, InstanceCreator};
pub use loader::{ConstructionResult, Loader};
pub use namescope::Namescope;
