//! Integration tests for namescope behavior through the loader.

use trellis_foundation::ErrorKind;

use crate::fixtures::{loader, Dog, NS};

#[test]
fn named_instance_is_discoverable_at_any_depth() {
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}">
                 <Person.Spouse>
                   <Person>
                     <Dog Name="Deep"/>
                   </Person>
                 </Person.Spouse>
               </Person>"#
        ))
        .unwrap();
    let dog = result.find_name("Deep").expect("registered at depth");
    dog.with(|d: &Dog| assert_eq!(d.name, "Deep")).unwrap();
}

#[test]
fn namescope_snapshot_matches_declared_names() {
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}"><Dog Name="Fido"/><Dog Name="Rex"/></Person>"#
        ))
        .unwrap();
    assert_eq!(result.namescope().len(), 2);
    assert!(result.find_name("Fido").is_some());
    assert!(result.find_name("Rex").is_some());
    assert!(result.find_name("Spot").is_none());
}

#[test]
fn duplicate_name_fails_whole_build() {
    let err = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}"><Dog Name="Fido"/><Dog Name="Fido"/></Person>"#
        ))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateName(_)));
}

#[test]
fn unnamed_instances_do_not_register() {
    // Person declares no name property, so its Name attribute is just a
    // regular string property.
    let result = loader()
        .load(&format!(r#"<Person xmlns="{NS}" Name="Alice"/>"#))
        .unwrap();
    assert!(result.namescope().is_empty());
}

#[test]
fn each_load_gets_a_fresh_namescope() {
    let loader = loader();
    let source = format!(r#"<Person xmlns="{NS}"><Dog Name="Fido"/></Person>"#);
    let first = loader.load(&source).unwrap();
    let second = loader.load(&source).unwrap();

    assert_eq!(first.namescope().len(), 1);
    assert_eq!(second.namescope().len(), 1);
    assert!(!first
        .find_name("Fido")
        .unwrap()
        .ptr_eq(second.find_name("Fido").unwrap()));
}
