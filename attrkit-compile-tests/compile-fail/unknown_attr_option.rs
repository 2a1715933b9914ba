use attrkit::prelude::*;

#[derive(Attributes, Default)]
struct Character {
    #[attr(frobnicate)]
    name: Attr,
    #[slots]
    slots: Slots,
}

fn main() {}
