use attrkit::prelude::*;

#[derive(Attributes, Default)]
struct Flags {
    #[attr(query)]
    ready: Attr,
    #[attr(query, setter = false)]
    sealed: Attr,
    #[slots]
    slots: Slots,
}

fn main() {
    let mut flags = Flags::default();
    assert!(!flags.is_ready());
    assert!(!flags.is_sealed());

    flags.set_ready("anything truthy");
    assert!(flags.is_ready());
}
