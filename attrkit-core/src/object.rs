use crate::error::AttrError;
use crate::set::AttributeSet;
use crate::slots::{Slots, SlotsView};
use crate::update::IntoAttrMap;
use crate::value::AttrValue;

/// Capability trait attaching declarative attribute accessors to a type.
///
/// Implementors supply the per-type [`AttributeSet`] and expose their
/// [`Slots`] storage; the generic entry points [`read`](Attributes::read),
/// [`query`](Attributes::query), [`write`](Attributes::write), and
/// [`update_attributes`](Attributes::update_attributes) are provided on top.
///
/// Use `#[derive(Attributes)]` to generate the implementation together with
/// concrete, named accessor methods, or implement the trait manually:
///
/// ```
/// use std::sync::OnceLock;
/// use attrkit_core::{AttrOptions, AttributeSet, Attributes, Slots};
///
/// #[derive(Default)]
/// struct Character {
///     slots: Slots,
/// }
///
/// impl Attributes for Character {
///     fn attribute_set() -> &'static AttributeSet {
///         static SET: OnceLock<AttributeSet> = OnceLock::new();
///         SET.get_or_init(|| {
///             let mut set = AttributeSet::new();
///             set.define("name", AttrOptions::new())
///                 .expect("valid attribute name");
///             set
///         })
///     }
///
///     fn slots(&self) -> &Slots {
///         &self.slots
///     }
///
///     fn slots_mut(&mut self) -> &mut Slots {
///         &mut self.slots
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no attribute accessors",
    label = "this type does not implement `Attributes`",
    note = "add `#[derive(Attributes)]` to your type or implement the `Attributes` trait manually"
)]
pub trait Attributes {
    /// The type's attribute table, built once at type-construction time.
    fn attribute_set() -> &'static AttributeSet
    where
        Self: Sized;

    fn slots(&self) -> &Slots;

    fn slots_mut(&mut self) -> &mut Slots;

    /// Raw read of a readable attribute. An unset slot reads as
    /// [`AttrValue::Null`]; no coercion is applied.
    ///
    /// Fails with [`AttrError::UnknownAttribute`] when the name is not
    /// defined or its getter is suppressed.
    fn read(&self, name: &str) -> Result<AttrValue, AttrError>
    where
        Self: Sized,
    {
        let set = Self::attribute_set();
        let def = set
            .get(name)
            .filter(|def| def.options().getter)
            .ok_or_else(|| AttrError::UnknownAttribute {
                name: name.to_string(),
            })?;
        Ok(self.slots().value(def.slot()))
    }

    /// Boolean read: the slot's value coerced with
    /// [`AttrValue::is_truthy`]. Same accessor rules as [`read`](Attributes::read).
    fn query(&self, name: &str) -> Result<bool, AttrError>
    where
        Self: Sized,
    {
        self.read(name).map(|value| value.is_truthy())
    }

    /// Write through the setter pipeline: transform (if any, with a
    /// [`SlotsView`] of this instance), boolean coercion (for query
    /// attributes), then store.
    ///
    /// Fails with [`AttrError::UnknownAttribute`] when the name is not
    /// defined or its setter is suppressed.
    fn write(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<(), AttrError>
    where
        Self: Sized,
    {
        let set = Self::attribute_set();
        let def = set
            .get(name)
            .filter(|def| def.options().setter)
            .ok_or_else(|| AttrError::UnknownAttribute {
                name: name.to_string(),
            })?;
        let raw = value.into();
        let candidate = match def.transform() {
            Some(transform) => {
                let mut view = SlotsView::new(set, self.slots_mut());
                transform(raw, &mut view)
            }
            None => raw,
        };
        let stored = if def.options().query {
            AttrValue::Bool(candidate.is_truthy())
        } else {
            candidate
        };
        self.slots_mut().put(def.slot(), stored);
        Ok(())
    }

    /// Apply a batch of name/value pairs through the setter pipeline, in
    /// the mapping's iteration order, and return `self` for chaining.
    ///
    /// Not transactional: a key without a setter fails with
    /// [`AttrError::UnknownAttribute`], stops processing, and leaves the
    /// writes already applied in place.
    fn update_attributes<M: IntoAttrMap>(&mut self, mapping: M) -> Result<&mut Self, AttrError>
    where
        Self: Sized,
    {
        for (name, value) in mapping.into_attr_map()? {
            tracing::trace!(attribute = %name, "mass assignment write");
            self.write(&name, value)?;
        }
        Ok(self)
    }
}
