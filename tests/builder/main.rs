//! Integration tests for the builder layer.
//!
//! Tests for the object builder, namescope, and loader.


mod building;
mod names;
