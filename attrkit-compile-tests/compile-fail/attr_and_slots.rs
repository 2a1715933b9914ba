use attrkit::prelude::*;

#[derive(Attributes, Default)]
struct Character {
    #[attr]
    #[slots]
    both: Slots,
}

fn main() {}
