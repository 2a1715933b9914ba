use attrkit::prelude::*;

#[derive(Attributes, Default)]
#[attributes(update = false)]
struct Quiet {
    #[attr]
    note: Attr,
    #[slots]
    slots: Slots,
}

fn main() {
    let mut quiet = Quiet::default();
    // no inherent wrapper; the trait entry point is still there
    Attributes::update_attributes(&mut quiet, [("note", "kept")]).unwrap();
    assert_eq!(quiet.note(), AttrValue::from("kept"));
}
