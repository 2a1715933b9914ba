use attrkit::prelude::*;

fn trim(value: AttrValue, _: &mut SlotsView<'_>) -> AttrValue {
    match value {
        AttrValue::String(s) => AttrValue::String(s.trim().to_string()),
        other => other,
    }
}

fn title_with_name(value: AttrValue, view: &mut SlotsView<'_>) -> AttrValue {
    let title = match value {
        AttrValue::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    match view.get("name") {
        AttrValue::String(name) => AttrValue::String(format!("{title} {name}")),
        _ => AttrValue::String(title),
    }
}

#[derive(Attributes, Default)]
struct Character {
    #[attr]
    name: Attr,
    #[attr(query)]
    alive: Attr,
    #[attr(setter = false)]
    id: Attr,
    #[attr(getter = false)]
    secret: Attr,
    #[attr(transform = title_with_name)]
    title: Attr,
    #[slots]
    slots: Slots,
    hp: u32,
}

#[test]
fn generated_accessors_read_and_write() {
    let mut ezio = Character::default();
    assert_eq!(ezio.name(), AttrValue::Null);

    ezio.set_name("Ezio");
    assert_eq!(ezio.name(), AttrValue::String("Ezio".into()));
    assert_eq!(ezio.hp, 0);
}

#[test]
fn query_accessors_use_the_is_spelling() {
    let mut ezio = Character::default();
    assert!(!ezio.is_alive());

    ezio.set_alive("yes");
    assert!(ezio.is_alive());

    ezio.set_alive(false);
    assert!(!ezio.is_alive());
}

#[test]
fn suppressed_setter_still_reads_through_the_trait() {
    let ezio = Character::default();
    // no set_id() is generated; the generic entry point refuses the write
    assert_eq!(ezio.id(), AttrValue::Null);
    let mut ezio = ezio;
    assert!(matches!(
        ezio.write("id", 1),
        Err(AttrError::UnknownAttribute { .. })
    ));
}

#[test]
fn suppressed_getter_still_writes_through_the_trait() {
    let mut ezio = Character::default();
    // no secret() is generated; the slot is still writable
    ezio.set_secret("codex");
    assert!(matches!(
        ezio.read("secret"),
        Err(AttrError::UnknownAttribute { .. })
    ));
    assert_eq!(
        ezio.slots().get(Character::attribute_set().get("secret").unwrap().slot()),
        Some(&AttrValue::String("codex".into()))
    );
}

#[test]
fn transforms_run_with_sibling_access() {
    let mut ezio = Character::default();
    ezio.set_name("Ezio");
    ezio.set_title("  Mentore  ");
    assert_eq!(ezio.title(), AttrValue::String("Mentore Ezio".into()));
}

#[test]
fn table_follows_declaration_order() {
    let names: Vec<&str> = Character::attribute_set().names().collect();
    assert_eq!(names, ["name", "alive", "id", "secret", "title"]);
}

#[test]
fn mass_assignment_wrapper_is_generated() {
    let mut ezio = Character::default();
    ezio.update_attributes(serde_json::json!({
        "name": "Ezio",
        "alive": 1,
    }))
    .unwrap();

    assert_eq!(ezio.name(), AttrValue::String("Ezio".into()));
    assert!(ezio.is_alive());
}

#[test]
fn mass_assignment_stops_at_unknown_keys() {
    let mut ezio = Character::default();
    let result = ezio.update_attributes([
        ("name", AttrValue::from("Ezio")),
        ("mentor", AttrValue::from("Mario")),
        ("alive", AttrValue::from(true)),
    ]);

    assert!(matches!(
        result.err(),
        Some(AttrError::UnknownAttribute { name }) if name == "mentor"
    ));
    assert_eq!(ezio.name(), AttrValue::String("Ezio".into()));
    assert!(!ezio.is_alive());
}

mod renamed {
    use super::*;

    #[derive(Attributes, Default)]
    #[attributes(update = "apply")]
    struct Profile {
        #[attr(transform = trim)]
        handle: Attr,
        #[slots]
        slots: Slots,
    }

    #[test]
    fn update_wrapper_can_be_renamed() {
        let mut profile = Profile::default();
        profile.apply([("handle", "  ezio  ")]).unwrap();
        assert_eq!(profile.handle(), AttrValue::String("ezio".into()));
    }
}

mod omitted {
    use super::*;

    #[derive(Attributes, Default)]
    #[attributes(update = false)]
    struct Quiet {
        #[attr]
        note: Attr,
        #[slots]
        slots: Slots,
    }

    #[test]
    fn omitted_wrapper_leaves_the_trait_method() {
        let mut quiet = Quiet::default();
        // no inherent wrapper is generated; the trait entry point remains
        Attributes::update_attributes(&mut quiet, [("note", "kept")]).unwrap();
        assert_eq!(quiet.note(), AttrValue::String("kept".into()));
    }
}

mod exported {
    use super::*;

    #[derive(Attributes, Default)]
    #[attributes(define = "attribute_table")]
    struct Exported {
        #[attr(query)]
        ready: Attr,
        #[slots]
        slots: Slots,
    }

    #[test]
    fn table_export_returns_an_extendable_copy() {
        let mut table = Exported::attribute_table();
        assert!(table.is_query("ready"));

        // extending the copy does not touch the type's own table
        table
            .define("extra", AttrOptions::new())
            .unwrap();
        assert!(table.contains("extra"));
        assert!(!Exported::attribute_set().contains("extra"));
    }
}
