//! Integration tests for object building through the loader.

use trellis_foundation::ErrorKind;

use crate::fixtures::{loader, Color, Dog, Person, Reference, NS};

#[test]
fn attributes_convert_and_assign() {
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}" Name="Alice" Age="30" Retired="true"/>"#
        ))
        .unwrap();
    result
        .root()
        .with(|p: &Person| {
            assert_eq!(p.name, "Alice");
            assert_eq!(p.age, 30);
            assert!(p.retired);
        })
        .unwrap();
}

#[test]
fn collection_children_append_in_document_order() {
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}" Name="Alice">
                 <Person.Pets>
                   <Dog Name="Fido"/>
                   <Dog Name="Rex"/>
                 </Person.Pets>
               </Person>"#
        ))
        .unwrap();
    result
        .root()
        .with(|p: &Person| {
            assert_eq!(p.pets.len(), 2);
            p.pets[0].with(|d: &Dog| assert_eq!(d.name, "Fido")).unwrap();
            p.pets[1].with(|d: &Dog| assert_eq!(d.name, "Rex")).unwrap();
        })
        .unwrap();
}

#[test]
fn content_property_receives_bare_children() {
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}"><Dog Name="Fido"/><Dog Name="Rex"/><Dog Name="Spot"/></Person>"#
        ))
        .unwrap();
    result
        .root()
        .with(|p: &Person| assert_eq!(p.pets.len(), 3))
        .unwrap();
}

#[test]
fn text_content_assigns_to_content_property() {
    let result = loader()
        .load(&format!(r#"<Reference xmlns="{NS}">intro</Reference>"#))
        .unwrap();
    result
        .root()
        .with(|r: &Reference| assert_eq!(r.target, "intro"))
        .unwrap();
}

#[test]
fn scalar_property_takes_first_child_only() {
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}">
                 <Person.Spouse>
                   <Person Name="Bea"/>
                   <Person Name="Cay"/>
                 </Person.Spouse>
               </Person>"#
        ))
        .unwrap();
    result
        .root()
        .with(|p: &Person| {
            let spouse = p.spouse.as_ref().expect("first child assigned");
            spouse.with(|s: &Person| assert_eq!(s.name, "Bea")).unwrap();
        })
        .unwrap();
}

#[test]
fn discarded_scalar_children_are_still_built() {
    // The second spouse candidate is named; its registration is a side
    // effect that must still happen even though it is not assigned.
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}">
                 <Person.Spouse>
                   <Person Name="Bea"/>
                   <Person>
                     <Dog Name="Shadow"/>
                   </Person>
                 </Person.Spouse>
               </Person>"#
        ))
        .unwrap();
    assert!(result.find_name("Shadow").is_some());
}

#[test]
fn empty_property_element_is_invalid_assignment() {
    let err = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}"><Person.Pets></Person.Pets></Person>"#
        ))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidAssignment { .. }));
}

#[test]
fn unparsable_literal_is_conversion_error() {
    let err = loader()
        .load(&format!(r#"<Person xmlns="{NS}" Age="thirty"/>"#))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Conversion { .. }));
}

#[test]
fn custom_converter_serves_enum_like_target() {
    let result = loader()
        .load(&format!(r#"<Dog xmlns="{NS}" Name="Fido" Color="black"/>"#))
        .unwrap();
    result
        .root()
        .with(|d: &Dog| assert_eq!(d.color, Color::Black))
        .unwrap();

    let err = loader()
        .load(&format!(r#"<Dog xmlns="{NS}" Name="Fido" Color="plaid"/>"#))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Conversion { .. }));
}

#[test]
fn missing_constructor_is_instantiation_error() {
    use trellis_builder::Loader;
    use trellis_registry::{TypeDescriptor, TypeDirectory};

    let mut directory = TypeDirectory::new();
    directory.register(TypeDescriptor::new(NS, "Ghost"));
    let err = Loader::new(directory)
        .load(&format!(r#"<Ghost xmlns="{NS}"/>"#))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Instantiation { .. }));
}

#[test]
fn determinism_same_markup_same_shape() {
    let source = format!(
        r#"<Person xmlns="{NS}" Name="Alice" Age="30"><Dog Name="Fido"/></Person>"#
    );
    let loader = loader();
    let first = loader.load(&source).unwrap();
    let second = loader.load(&source).unwrap();

    let shape = |result: &trellis_builder::ConstructionResult| {
        result
            .root()
            .with(|p: &Person| (p.name.clone(), p.age, p.pets.len()))
            .unwrap()
    };
    assert_eq!(shape(&first), shape(&second));
    // Distinct builds produce distinct instances.
    assert!(!first.root().ptr_eq(second.root()));
}
