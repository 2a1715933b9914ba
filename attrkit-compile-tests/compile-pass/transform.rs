use attrkit::prelude::*;

fn trim(value: AttrValue, _: &mut SlotsView<'_>) -> AttrValue {
    match value {
        AttrValue::String(s) => AttrValue::String(s.trim().to_string()),
        other => other,
    }
}

#[derive(Attributes, Default)]
struct Profile {
    #[attr(transform = trim)]
    handle: Attr,
    #[slots]
    slots: Slots,
}

fn main() {
    let mut profile = Profile::default();
    profile.set_handle("  ezio  ");
    assert_eq!(profile.handle(), AttrValue::from("ezio"));
}
