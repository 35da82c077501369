//! Lexer for the markup grammar.
//!
//! The lexer is modal: outside tags it produces text runs, inside tags
//! (between `<` and `>`) it produces names, `=`, and quoted values.
//! Comments (`<!-- -->`) are skipped, and character entities are decoded
//! in both text runs and attribute values.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for markup source text.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// True between a `<` and the matching `>` / `/>`.
    in_tag: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            in_tag: false,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.in_tag {
                self.skip_whitespace();
            }

            let start = self.position;
            let start_line = self.line;
            let start_column = self.column;
            let span_to_here = |lexer: &Self| {
                Span::new(start, lexer.position, start_line, start_column)
            };

            if self.rest.is_empty() {
                return Token::new(TokenKind::Eof, span_to_here(self));
            }

            if self.in_tag {
                let kind = self.scan_in_tag();
                return Token::new(kind, span_to_here(self));
            }

            if self.rest.starts_with("<!--") {
                if let Err(message) = self.skip_comment() {
                    return Token::new(TokenKind::Error(message), span_to_here(self));
                }
                continue;
            }

            let kind = if self.rest.starts_with("</") {
                self.advance();
                self.advance();
                self.in_tag = true;
                TokenKind::CloseTag
            } else if self.rest.starts_with('<') {
                self.advance();
                self.in_tag = true;
                TokenKind::OpenTag
            } else {
                self.scan_text()
            };
            return Token::new(kind, span_to_here(self));
        }
    }

    /// Tokenizes all source and returns a vector of tokens, ending with Eof.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Scans one token inside a tag.
    fn scan_in_tag(&mut self) -> TokenKind {
        // Callers guarantee rest is non-empty.
        let Some(c) = self.peek_char() else {
            return TokenKind::Eof;
        };
        match c {
            '>' => {
                self.advance();
                self.in_tag = false;
                TokenKind::TagEnd
            }
            '/' => {
                self.advance();
                if self.peek_char() == Some('>') {
                    self.advance();
                    self.in_tag = false;
                    TokenKind::EmptyTagEnd
                } else {
                    TokenKind::Error("expected '>' after '/'".into())
                }
            }
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            '"' | '\'' => self.scan_literal(c),
            c if is_name_start(c) => TokenKind::Name(self.scan_name_text()),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character in tag: {c}"))
            }
        }
    }

    /// Scans a text run up to the next `<` or end of input.
    fn scan_text(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            match c {
                '<' => break,
                '&' => match self.scan_entity() {
                    Ok(decoded) => text.push(decoded),
                    Err(message) => return TokenKind::Error(message),
                },
                _ => {
                    text.push(c);
                    self.advance();
                }
            }
        }
        TokenKind::Text(text)
    }

    /// Scans a quoted attribute value.
    fn scan_literal(&mut self, quote: char) -> TokenKind {
        self.advance(); // consume opening quote
        let mut text = String::new();
        loop {
            match self.peek_char() {
                None => return TokenKind::Error("unterminated attribute value".into()),
                Some(c) if c == quote => {
                    self.advance();
                    return TokenKind::Literal(text);
                }
                Some('&') => match self.scan_entity() {
                    Ok(decoded) => text.push(decoded),
                    Err(message) => return TokenKind::Error(message),
                },
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Scans and decodes one character entity starting at `&`.
    fn scan_entity(&mut self) -> Result<char, String> {
        self.advance(); // consume '&'
        let mut name = String::new();
        loop {
            match self.peek_char() {
                Some(';') => {
                    self.advance();
                    break;
                }
                Some(c) if name.len() < 10 => {
                    name.push(c);
                    self.advance();
                }
                _ => return Err(format!("malformed entity: &{name}")),
            }
        }
        match name.as_str() {
            "lt" => Ok('<'),
            "gt" => Ok('>'),
            "amp" => Ok('&'),
            "quot" => Ok('"'),
            "apos" => Ok('\''),
            _ => {
                let code = name
                    .strip_prefix("#x")
                    .or_else(|| name.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| name.strip_prefix('#').map(|dec| dec.parse::<u32>().ok()));
                code.flatten()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("unknown entity: &{name};"))
            }
        }
    }

    /// Scans a name (element, attribute, or property-element form).
    fn scan_name_text(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek_char() {
            if is_name_char(c) {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        name
    }

    /// Skips a `<!-- -->` comment.
    fn skip_comment(&mut self) -> Result<(), String> {
        // Callers guarantee rest starts with "<!--".
        for _ in 0..4 {
            self.advance();
        }
        while !self.rest.is_empty() {
            if self.rest.starts_with("-->") {
                for _ in 0..3 {
                    self.advance();
                }
                return Ok(());
            }
            self.advance();
        }
        Err("unterminated comment".into())
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }
}

/// Returns true if `c` can start a name.
fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue a name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}
