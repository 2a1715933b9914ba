use crate::set::AttributeSet;
use crate::value::AttrValue;

/// Per-instance attribute storage, addressed by the slot index assigned at
/// definition time.
///
/// Slots are created lazily: a slot is absent until first written and reads
/// as [`AttrValue::Null`] until set. Slot lifetime equals instance lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots {
    values: Vec<Option<AttrValue>>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw read. `None` while the slot has never been written.
    pub fn get(&self, slot: usize) -> Option<&AttrValue> {
        self.values.get(slot).and_then(|value| value.as_ref())
    }

    /// Read with the absent-reads-as-null rule applied.
    pub fn value(&self, slot: usize) -> AttrValue {
        self.get(slot).cloned().unwrap_or(AttrValue::Null)
    }

    /// Store a value, growing the store if the slot does not exist yet.
    pub fn put(&mut self, slot: usize, value: AttrValue) {
        if self.values.len() <= slot {
            self.values.resize(slot + 1, None);
        }
        self.values[slot] = Some(value);
    }

    /// Whether the slot has been written at least once.
    pub fn is_set(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }
}

/// Name-keyed view over one instance's slots, resolved through the type's
/// [`AttributeSet`].
///
/// This is what setter transforms receive: it lets them read and write
/// sibling attributes. The view addresses storage directly and bypasses
/// accessor flags, which govern accessors rather than slots.
pub struct SlotsView<'a> {
    set: &'a AttributeSet,
    slots: &'a mut Slots,
}

impl<'a> SlotsView<'a> {
    pub fn new(set: &'a AttributeSet, slots: &'a mut Slots) -> Self {
        Self { set, slots }
    }

    /// Value of the named attribute's slot. `Null` when the slot is unset
    /// or the name is not defined on the type.
    pub fn get(&self, name: &str) -> AttrValue {
        match self.set.get(name) {
            Some(def) => self.slots.value(def.slot()),
            None => AttrValue::Null,
        }
    }

    /// Write the named attribute's slot directly. Returns `false` when the
    /// name is not defined on the type.
    pub fn put(&mut self, name: &str, value: impl Into<AttrValue>) -> bool {
        match self.set.get(name) {
            Some(def) => {
                self.slots.put(def.slot(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.set.contains(name)
    }
}
