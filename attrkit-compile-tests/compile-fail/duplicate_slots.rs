use attrkit::prelude::*;

#[derive(Attributes, Default)]
struct Character {
    #[slots]
    slots: Slots,
    #[slots] extra: Slots,
}

fn main() {}
