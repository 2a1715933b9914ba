use attrkit::prelude::*;

#[derive(Attributes, Default)]
struct Character {
    #[attr]
    name: Attr,
    #[slots]
    slots: Slots,
}

fn main() {
    let mut character = Character::default();
    assert_eq!(character.name(), AttrValue::Null);

    character.set_name("Ezio");
    assert_eq!(character.name(), AttrValue::from("Ezio"));
}
