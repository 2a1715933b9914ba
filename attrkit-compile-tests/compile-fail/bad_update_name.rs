use attrkit::prelude::*;

#[derive(Attributes, Default)]
#[attributes(update = 42)]
struct Character {
    #[slots]
    slots: Slots,
}

fn main() {}
