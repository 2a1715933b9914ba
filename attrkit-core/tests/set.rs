use attrkit_core::{AttrError, AttrOptions, AttrValue, AttributeSet};

#[test]
fn define_with_defaults_exposes_both_accessors() {
    let mut set = AttributeSet::new();
    set.define("name", AttrOptions::new()).unwrap();

    assert!(set.contains("name"));
    assert!(set.has_getter("name"));
    assert!(set.has_setter("name"));
    assert!(!set.is_query("name"));
}

#[test]
fn suppressed_accessors_are_introspectable() {
    let mut set = AttributeSet::new();
    set.define("id", AttrOptions::new().setter(false)).unwrap();
    set.define("secret", AttrOptions::new().getter(false))
        .unwrap();

    assert!(set.has_getter("id"));
    assert!(!set.has_setter("id"));
    assert!(!set.has_getter("secret"));
    assert!(set.has_setter("secret"));
    assert!(!set.has_getter("missing"));
    assert!(!set.has_setter("missing"));
}

#[test]
fn names_follow_definition_order() {
    let mut set = AttributeSet::new();
    set.define("c", AttrOptions::new()).unwrap();
    set.define("a", AttrOptions::new()).unwrap();
    set.define("b", AttrOptions::new()).unwrap();

    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, ["c", "a", "b"]);
    assert_eq!(set.len(), 3);
}

#[test]
fn redefinition_replaces_flags_and_keeps_slot() {
    let mut set = AttributeSet::new();
    set.define("first", AttrOptions::new()).unwrap();
    set.define("name", AttrOptions::new()).unwrap();
    let slot = set.get("name").unwrap().slot();

    set.define("name", AttrOptions::new().setter(false).query(true))
        .unwrap();

    let def = set.get("name").unwrap();
    assert_eq!(def.slot(), slot);
    assert!(!set.has_setter("name"));
    assert!(set.is_query("name"));
    // still a single entry, order unchanged
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, ["first", "name"]);
}

#[test]
fn redefinition_replaces_transform() {
    let mut set = AttributeSet::new();
    set.define_with("title", AttrOptions::new(), |_, _| {
        AttrValue::String("old".into())
    })
    .unwrap();
    assert!(set.get("title").unwrap().transform().is_some());

    set.define("title", AttrOptions::new()).unwrap();
    assert!(set.get("title").unwrap().transform().is_none());
}

#[test]
fn name_is_trimmed_to_canonical_form() {
    let mut set = AttributeSet::new();
    set.define("  name  ", AttrOptions::new()).unwrap();
    assert!(set.contains("name"));
    assert!(!set.contains("  name  "));
}

#[test]
fn malformed_names_are_rejected() {
    let mut set = AttributeSet::new();
    for bad in ["", "   ", "9lives", "full name", "na-me", "été"] {
        match set.define(bad, AttrOptions::new()) {
            Err(AttrError::InvalidName { name }) => assert_eq!(name, bad),
            Ok(_) => panic!("expected InvalidName for {:?}", bad),
            Err(other) => panic!("expected InvalidName for {:?}, got {:?}", bad, other),
        }
    }
    assert!(set.is_empty());
}

#[test]
fn leading_underscore_is_valid() {
    let mut set = AttributeSet::new();
    set.define("_hidden", AttrOptions::new()).unwrap();
    assert!(set.contains("_hidden"));
}
