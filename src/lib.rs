//! Trellis - Markup-to-object-graph loader
//!
//! This crate re-exports all layers of the Trellis system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: trellis_builder    - Object builder, build context, loader
//! Layer 2: trellis_markup     - Lexer, parser, construction tree
//! Layer 1: trellis_registry   - Type directory, descriptors, conversion
//! Layer 0: trellis_foundation - Core types (Value, ObjectHandle, Error)
//! ```

pub use trellis_builder as builder;
pub use trellis_foundation as foundation;
pub use trellis_markup as markup;
pub use trellis_registry as registry;
