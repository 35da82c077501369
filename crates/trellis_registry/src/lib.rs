//! Type and property registration for the Trellis object-graph loader.
//!
//! This crate provides:
//! - [`TypeDescriptor`] / [`PropertyDescriptor`] - Hand-written adapters
//!   that replace runtime reflection
//! - [`TypeDirectory`] - Namespace-qualified markup-name to type lookup
//! - [`SourceValueConverter`] - Literal text to typed value conversion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod convert;
mod descriptor;
mod directory;

pub use convert::SourceValueConverter;
pub use descriptor::{PropertyDescriptor, PropertyKind, TypeDescriptor};
pub use directory::TypeDirectory;
