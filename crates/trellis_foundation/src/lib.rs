//! Core types for the Trellis object-graph loader.
//!
//! This crate provides:
//! - [`Value`] - The runtime value passed between converters and setters
//! - [`ObjectHandle`] - Shared, dynamically-typed handle to a host instance
//! - [`Type`] - Declared-value-type tags for properties and conversion
//! - [`Error`] - Rich error types with source context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod object;
mod types;
mod value;

pub use error::{AssignmentFault, Error, ErrorContext, ErrorKind};
pub use object::ObjectHandle;
pub use types::Type;
pub use value::Value;

/// Result type used throughout Trellis.
pub type Result<T> = std::result::Result<T, Error>;
