//! Integration tests for the element parser and prefix annotator.

use trellis_foundation::ErrorKind;
use trellis_markup::{annotate, Content, Element, Parser};

fn parse(source: &str) -> Element {
    Parser::new(source).parse().unwrap()
}

fn parse_annotated(source: &str) -> Element {
    annotate(parse(source), source).unwrap()
}

#[test]
fn builds_element_tree_in_document_order() {
    let root = parse(
        r#"<Kennel Name="Main">
             <Dog Name="Fido"/>
             <Cat Name="Tom"/>
           </Kennel>"#,
    );
    assert_eq!(root.name.local, "Kennel");
    assert_eq!(root.attributes[0].value, "Main");
    assert_eq!(root.children.len(), 2);
    let Content::Element(first) = &root.children[0] else {
        panic!("expected element");
    };
    assert_eq!(first.name.local, "Dog");
}

#[test]
fn deeply_nested_elements_balance() {
    let root = parse("<A><B><C><D/></C></B></A>");
    let mut depth = 0;
    let mut current = &root;
    while let Some(Content::Element(child)) = current.children.first() {
        depth += 1;
        current = child;
    }
    assert_eq!(depth, 3);
}

#[test]
fn unbalanced_document_is_syntax_error() {
    let err = Parser::new("<A><B></A>").parse().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syntax { .. }));
}

#[test]
fn namespaces_resolve_and_scope() {
    let root = parse_annotated(
        r#"<Kennel xmlns="urn:pets" xmlns:toys="urn:toys">
             <Dog/>
             <toys:Ball/>
           </Kennel>"#,
    );
    assert_eq!(root.namespace, "urn:pets");
    let Content::Element(dog) = &root.children[0] else {
        panic!("expected element");
    };
    let Content::Element(ball) = &root.children[1] else {
        panic!("expected element");
    };
    assert_eq!(dog.namespace, "urn:pets");
    assert_eq!(ball.namespace, "urn:toys");
}

#[test]
fn undeclared_prefix_is_syntax_error() {
    let source = "<toys:Ball/>";
    let err = annotate(Parser::new(source).parse().unwrap(), source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syntax { .. }));
}
