//! The error taxonomy as seen by a host calling `Loader::load`.

use trellis_foundation::{AssignmentFault, ErrorKind};

use crate::fixtures::{loader, NS};

#[test]
fn malformed_markup_is_a_syntax_error_with_position() {
    let err = loader()
        .load(&format!("<Person xmlns=\"{NS}\">\n  <Dog>\n</Person>"))
        .unwrap_err();
    let ErrorKind::Syntax { line, .. } = err.kind else {
        panic!("expected syntax error, got {err:?}");
    };
    assert_eq!(line, 3);
}

#[test]
fn unknown_element_is_unresolved_type() {
    let err = loader()
        .load(&format!(r#"<Wizard xmlns="{NS}"/>"#))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnresolvedType { ref name, .. } if name == "Wizard"
    ));
}

#[test]
fn unknown_prefix_is_a_syntax_error() {
    let err = loader().load(r#"<x:Person xmlns="urn:demo"/>"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syntax { .. }));
}

#[test]
fn unknown_attribute_is_unresolved_property() {
    let err = loader()
        .load(&format!(r#"<Person xmlns="{NS}" Height="12"/>"#))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnresolvedProperty { ref property, .. } if property == "Height"
    ));
}

#[test]
fn empty_property_element_is_invalid_assignment() {
    let err = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}"><Person.Pets></Person.Pets></Person>"#
        ))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidAssignment {
            fault: AssignmentFault::NeitherPresent,
            ..
        }
    ));
}

#[test]
fn unparseable_literal_is_a_conversion_error() {
    let err = loader()
        .load(&format!(r#"<Person xmlns="{NS}" Age="old"/>"#))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Conversion { .. }));
}

#[test]
fn rejected_custom_conversion_surfaces_unchanged() {
    let err = loader()
        .load(&format!(r#"<Dog xmlns="{NS}" Color="plaid"/>"#))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Conversion { ref literal, .. } if literal == "plaid"
    ));
}

#[test]
fn duplicate_names_fail_the_whole_load() {
    let err = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}">
                 <Dog Name="Rex"/>
                 <Dog Name="Rex"/>
               </Person>"#
        ))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateName(ref n) if n == "Rex"));
}

#[test]
fn errors_leave_no_partial_result() {
    // A failing load is a plain Err; there is no half-built graph or
    // half-filled namescope to observe.
    let result = loader().load(&format!(
        r#"<Person xmlns="{NS}" Name="Alice" Age="old"/>"#
    ));
    assert!(result.is_err());
}
