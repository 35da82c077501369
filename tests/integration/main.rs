//! End-to-end integration tests: markup text in, object graph out.

#[path = "../builder/fixtures.rs"]
mod fixtures;

mod errors;
mod scenarios;
