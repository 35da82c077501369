//! End-to-end scenarios over the fixture domain.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_builder::{InstanceLifecycle, Loader};
use trellis_foundation::ObjectHandle;

use crate::fixtures::{directory, loader, Color, Dog, Person, Reference, NS};

#[test]
fn person_with_two_dogs() {
    // Attribute assignment, a property element, and collection append,
    // all in one document.
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}" Name="Alice">
                 <Person.Pets>
                   <Dog/>
                   <Dog/>
                 </Person.Pets>
               </Person>"#
        ))
        .unwrap();

    result
        .root()
        .with(|p: &Person| {
            assert_eq!(p.name, "Alice");
            assert!(!p.retired);
            assert_eq!(p.pets.len(), 2);
            assert!(p.pets.iter().all(|pet| pet.is::<Dog>()));
        })
        .unwrap();
    // Person declares no name property; nothing registered.
    assert!(result.namescope().is_empty());
}

#[test]
fn inline_extension_matches_nested_element_form() {
    let loader = loader();
    let inline = loader
        .load(&format!(
            r#"<Person xmlns="{NS}" Spouse="{{Person Name=Bob, Age=40}}"/>"#
        ))
        .unwrap();
    let nested = loader
        .load(&format!(
            r#"<Person xmlns="{NS}">
                 <Person.Spouse><Person Name="Bob" Age="40"/></Person.Spouse>
               </Person>"#
        ))
        .unwrap();

    let spouse_facts = |root: &ObjectHandle| {
        root.with(|p: &Person| {
            p.spouse
                .as_ref()
                .unwrap()
                .with(|s: &Person| (s.name.clone(), s.age))
                .unwrap()
        })
        .unwrap()
    };
    assert_eq!(spouse_facts(inline.root()), ("Bob".to_string(), 40));
    assert_eq!(spouse_facts(inline.root()), spouse_facts(nested.root()));
}

#[test]
fn inline_positional_argument_fills_content_property() {
    // Reference's content property is Target, so `{Reference fido}` is
    // shorthand for Target="fido". Resolution of the reference itself is
    // the host's business, via the namescope.
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}">
                 <Person.Spouse>
                   <Reference>fido</Reference>
                 </Person.Spouse>
               </Person>"#
        ))
        .unwrap();
    result
        .root()
        .with(|p: &Person| {
            p.spouse
                .as_ref()
                .unwrap()
                .with(|r: &Reference| assert_eq!(r.target, "fido"))
                .unwrap();
        })
        .unwrap();
}

#[test]
fn text_content_assigns_through_converter() {
    let result = loader()
        .load(&format!(
            r#"<Reference xmlns="{NS}">chapter &amp; verse</Reference>"#
        ))
        .unwrap();
    result
        .root()
        .with(|r: &Reference| assert_eq!(r.target, "chapter & verse"))
        .unwrap();
}

#[test]
fn escaped_attribute_value_is_taken_literally() {
    let result = loader()
        .load(&format!(r#"<Person xmlns="{NS}" Name="{{}}{{not an extension}}"/>"#))
        .unwrap();
    result
        .root()
        .with(|p: &Person| assert_eq!(p.name, "{not an extension}"))
        .unwrap();
}

#[test]
fn lifecycle_hooks_wrap_each_instance() {
    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<&'static str>>>,
    }

    impl InstanceLifecycle for Recorder {
        fn on_begin_init(&self, _: &ObjectHandle) {
            self.events.borrow_mut().push("begin");
        }
        fn on_end_init(&self, _: &ObjectHandle) {
            self.events.borrow_mut().push("end");
        }
    }

    let events = Rc::new(RefCell::new(Vec::new()));
    let loader = Loader::new(directory()).with_lifecycle(Box::new(Recorder {
        events: Rc::clone(&events),
    }));

    loader
        .load(&format!(r#"<Person xmlns="{NS}"><Dog/></Person>"#))
        .unwrap();

    // Depth-first: the dog begins and ends inside the person's window.
    assert_eq!(*events.borrow(), vec!["begin", "begin", "end", "end"]);
}

#[test]
fn graph_can_cross_reference_after_load() {
    // The namescope is complete by the time load returns, so the host
    // can resolve reference objects against it.
    let result = loader()
        .load(&format!(
            r#"<Person xmlns="{NS}" Name="Alice">
                 <Person.Pets>
                   <Dog Name="Fido"/>
                 </Person.Pets>
               </Person>"#
        ))
        .unwrap();

    let fido = result.find_name("Fido").unwrap().clone();
    let in_graph = result
        .root()
        .with(|p: &Person| p.pets[0].ptr_eq(&fido))
        .unwrap();
    assert!(in_graph);
    fido.with(|d: &Dog| assert_eq!(d.color, Color::Brown)).unwrap();
}
