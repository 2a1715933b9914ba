use attrkit::prelude::*;

#[derive(Attributes, Default)]
#[attributes(update = "apply", define = "attribute_table")]
struct Settings {
    #[attr]
    theme: Attr,
    #[attr(query)]
    compact: Attr,
    #[slots]
    slots: Slots,
}

fn main() {
    let mut settings = Settings::default();
    settings
        .apply([("theme", AttrValue::from("dark")), ("compact", true.into())])
        .unwrap();

    assert_eq!(settings.theme(), AttrValue::from("dark"));
    assert!(settings.is_compact());
    assert_eq!(Settings::attribute_table().len(), 2);
}
