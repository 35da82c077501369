//! Integration tests for the markup lexer.

use trellis_markup::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn tokenizes_full_document() {
    let source = r#"<Person Name="Alice"><Person.Pets><Dog/></Person.Pets></Person>"#;
    let kinds = kinds(source);
    assert_eq!(kinds.first(), Some(&TokenKind::OpenTag));
    assert_eq!(kinds.last(), Some(&TokenKind::Eof));
    assert!(kinds.contains(&TokenKind::Name("Person.Pets".into())));
    assert!(kinds.contains(&TokenKind::Literal("Alice".into())));
}

#[test]
fn attribute_values_decode_entities() {
    let kinds = kinds(r#"<T A="a &amp; b"/>"#);
    assert!(kinds.contains(&TokenKind::Literal("a & b".into())));
}

#[test]
fn text_and_markup_interleave() {
    let kinds = kinds("<T>before<U/>after</T>");
    assert!(kinds.contains(&TokenKind::Text("before".into())));
    assert!(kinds.contains(&TokenKind::Text("after".into())));
}

#[test]
fn comments_vanish_between_elements() {
    let kinds = kinds("<T><!-- note --><U/></T>");
    assert!(!kinds.iter().any(|k| matches!(k, TokenKind::Text(t) if t.contains("note"))));
}

#[test]
fn lexical_errors_surface_as_error_tokens() {
    let kinds = kinds("<T A=\"unterminated");
    assert!(kinds.iter().any(|k| matches!(k, TokenKind::Error(_))));
}
