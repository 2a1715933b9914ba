use attrkit::prelude::*;

#[derive(Attributes)]
pub enum Character {
    Alive,
    Dead,
}

fn main() {}
