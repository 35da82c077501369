//! Markup parsing for the Trellis object-graph loader.
//!
//! This crate turns markup text into a type-resolved construction tree
//! in four passes:
//! - [`Lexer`] - Modal tokenization of the element/attribute grammar
//! - [`Parser`] - Tokens into a raw element tree with balanced tags
//! - [`annotate`] - Namespace-prefix resolution ahead of any type lookup
//! - Tree building - Elements into [`ConstructionNode`]s with resolved
//!   types and pending property assignments (including inline-extension
//!   expansion inside attribute values)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod element;
mod inline;
mod lexer;
mod node;
mod parser;
mod prefix;
mod span;
mod token;
mod tree;

pub use element::{Attribute, Content, Element, QName};
pub use lexer::Lexer;
pub use node::{ConstructionNode, ConstructionTree, PropertyAssignment};
pub use parser::Parser;
pub use prefix::{annotate, PrefixScope};
pub use span::Span;
pub use token::{Token, TokenKind};

use trellis_foundation::Result;
use trellis_registry::TypeDirectory;

/// Parses markup text into a type-resolved construction tree.
///
/// Runs the full front half of the pipeline: lexing, element parsing,
/// prefix annotation, and construction-tree building against the given
/// directory.
///
/// # Errors
/// Fails with a syntax error on malformed markup, an unresolved-type
/// error when an element name is not registered, or an
/// unresolved-property error when an attribute or property element names
/// nothing on its owning type.
pub fn parse(source: &str, directory: &TypeDirectory) -> Result<ConstructionTree> {
    let root = Parser::new(source).parse()?;
    let root = annotate(root, source)?;
    tree::build_tree(&root, source, directory)
}
