//! Element parser for the markup grammar.
//!
//! The parser converts a token stream into a raw element tree, enforcing
//! balanced and matching open/close tags. Whitespace-only text runs
//! between elements are dropped; everything else is kept in document
//! order.

use trellis_foundation::{Error, Result};

use crate::element::{Attribute, Content, Element, QName};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for markup source text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
        }
    }

    /// Parses the document's single root element.
    ///
    /// # Errors
    /// Fails with a syntax error on malformed markup, an unbalanced
    /// tree, or content outside the root element.
    pub fn parse(&mut self) -> Result<Element> {
        self.skip_blank_text();
        if self.current.kind != TokenKind::OpenTag {
            return Err(self.syntax_error("expected an element", self.current.span));
        }
        let root = self.parse_element()?;
        self.skip_blank_text();
        match &self.current.kind {
            TokenKind::Eof => Ok(root),
            TokenKind::Error(message) => {
                Err(self.syntax_error(message.clone(), self.current.span))
            }
            _ => Err(self.syntax_error("unexpected content after root element", self.current.span)),
        }
    }

    /// Parses one element; the current token must be `OpenTag`.
    fn parse_element(&mut self) -> Result<Element> {
        self.advance(); // consume '<'
        let (name_raw, name_span) = self.expect_name()?;
        let mut element = Element::new(QName::parse(&name_raw), name_span);

        // Attributes until the tag ends.
        loop {
            match &self.current.kind {
                TokenKind::Name(_) => {
                    let (attr_raw, attr_span) = self.expect_name()?;
                    self.expect(&TokenKind::Equals, "expected '=' after attribute name")?;
                    let value = self.expect_literal()?;
                    element.attributes.push(Attribute {
                        name: QName::parse(&attr_raw),
                        value,
                        span: attr_span,
                    });
                }
                TokenKind::EmptyTagEnd => {
                    self.advance();
                    return Ok(element);
                }
                TokenKind::TagEnd => {
                    self.advance();
                    break;
                }
                TokenKind::Error(message) => {
                    return Err(self.syntax_error(message.clone(), self.current.span));
                }
                _ => {
                    return Err(self.syntax_error(
                        format!("unexpected token in tag <{name_raw}>"),
                        self.current.span,
                    ));
                }
            }
        }

        // Children until the matching close tag.
        loop {
            match &self.current.kind {
                TokenKind::Text(text) => {
                    if !text.trim().is_empty() {
                        element
                            .children
                            .push(Content::Text(text.clone(), self.current.span));
                    }
                    self.advance();
                }
                TokenKind::OpenTag => {
                    let child = self.parse_element()?;
                    element.children.push(Content::Element(child));
                }
                TokenKind::CloseTag => {
                    self.advance();
                    let (close_raw, close_span) = self.expect_name()?;
                    if close_raw != name_raw {
                        return Err(self.syntax_error(
                            format!("mismatched closing tag: expected </{name_raw}>, found </{close_raw}>"),
                            close_span,
                        ));
                    }
                    self.expect(&TokenKind::TagEnd, "expected '>' after closing tag name")?;
                    return Ok(element);
                }
                TokenKind::Eof => {
                    return Err(self.syntax_error(
                        format!("unexpected end of input inside <{name_raw}>"),
                        self.current.span,
                    ));
                }
                TokenKind::Error(message) => {
                    return Err(self.syntax_error(message.clone(), self.current.span));
                }
                _ => {
                    return Err(
                        self.syntax_error("unexpected token in element content", self.current.span)
                    );
                }
            }
        }
    }

    /// Consumes and returns a name token.
    fn expect_name(&mut self) -> Result<(String, Span)> {
        match &self.current.kind {
            TokenKind::Name(name) => {
                let name = name.clone();
                let span = self.current.span;
                self.advance();
                Ok((name, span))
            }
            TokenKind::Error(message) => {
                Err(self.syntax_error(message.clone(), self.current.span))
            }
            _ => Err(self.syntax_error("expected a name", self.current.span)),
        }
    }

    /// Consumes and returns a quoted attribute value.
    fn expect_literal(&mut self) -> Result<String> {
        match &self.current.kind {
            TokenKind::Literal(value) => {
                let value = value.clone();
                self.advance();
                Ok(value)
            }
            TokenKind::Error(message) => {
                Err(self.syntax_error(message.clone(), self.current.span))
            }
            _ => Err(self.syntax_error("expected a quoted attribute value", self.current.span)),
        }
    }

    /// Consumes the expected token or fails with the given message.
    fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<()> {
        if &self.current.kind == kind {
            self.advance();
            Ok(())
        } else if let TokenKind::Error(lex_message) = &self.current.kind {
            Err(self.syntax_error(lex_message.clone(), self.current.span))
        } else {
            Err(self.syntax_error(message, self.current.span))
        }
    }

    /// Skips whitespace-only text runs between elements.
    fn skip_blank_text(&mut self) {
        while let TokenKind::Text(text) = &self.current.kind {
            if !text.trim().is_empty() {
                break;
            }
            self.advance();
        }
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Builds a syntax error at the given span.
    fn syntax_error(&self, message: impl Into<String>, span: Span) -> Error {
        Error::syntax(
            message,
            span.line,
            span.column,
            span.line_text(self.source),
        )
    }
}
