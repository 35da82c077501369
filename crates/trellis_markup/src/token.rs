//! Token types for the markup grammar.
//!
//! Tokens are the output of the lexer and input to the element parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The type and value of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `<` opening a start tag.
    OpenTag,
    /// `</` opening a close tag.
    CloseTag,
    /// `>` ending a tag.
    TagEnd,
    /// `/>` ending an empty-element tag.
    EmptyTagEnd,
    /// `=` between an attribute name and its value.
    Equals,
    /// An element or attribute name, raw (prefix and dots included).
    Name(String),
    /// A quoted attribute value, entities decoded.
    Literal(String),
    /// A text run between tags, entities decoded.
    Text(String),
    /// End of input.
    Eof,
    /// A lexical error with a description.
    Error(String),
}

impl TokenKind {
    /// Returns true if this token ends a tag (either form).
    #[must_use]
    pub const fn ends_tag(&self) -> bool {
        matches!(self, Self::TagEnd | Self::EmptyTagEnd)
    }
}
