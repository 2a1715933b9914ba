use attrkit::prelude::*;

#[derive(Attributes, Default)]
struct Record {
    #[attr(setter = false)]
    id: Attr,
    #[attr(getter = false)]
    token: Attr,
    #[slots]
    slots: Slots,
}

fn main() {
    let mut record = Record::default();
    // only the non-suppressed accessors exist
    assert_eq!(record.id(), AttrValue::Null);
    record.set_token("opaque");
}
