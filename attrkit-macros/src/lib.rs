extern crate proc_macro;
use proc_macro::TokenStream;

pub(crate) mod attributes_derive;
pub(crate) mod crate_path;
pub(crate) mod derive_parsing;

/// Derive macro for declarative attribute accessors.
///
/// Declares attributes with `#[attr]` marker fields, stores their values in
/// a single `#[slots]` field, and emits concrete accessor methods ahead of
/// time from the declared flags.
///
/// # Struct-level attribute
///
/// `#[attributes(...)]` configures the synthesized entry points:
///
/// | Parameter | Default               | Description |
/// |-----------|-----------------------|-------------|
/// | `update`  | `"update_attributes"` | Name of the mass-assignment wrapper. A string renames it, `false` omits it. |
/// | `define`  | off                   | Name of an associated fn returning a copy of the type's attribute table. A string enables it under that name, `true` enables it as `define_attributes`. |
///
/// # Field attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[attr]` | Declares an attribute with a getter and a setter. |
/// | `#[attr(query)]` | Boolean attribute: getter is `is_<name>()`, stored values are truthiness-coerced. |
/// | `#[attr(getter = false)]` | Suppress the read accessor. |
/// | `#[attr(setter = false)]` | Suppress the write accessor. |
/// | `#[attr(transform = path)]` | Run `path` (a `fn(AttrValue, &mut SlotsView) -> AttrValue`) on every write before storing. |
/// | `#[slots]` | The backing `Slots` storage field. Required, exactly once. |
///
/// # Example
///
/// ```ignore
/// use attrkit::prelude::*;
///
/// fn trim(value: AttrValue, _: &mut SlotsView<'_>) -> AttrValue {
///     match value {
///         AttrValue::String(s) => AttrValue::String(s.trim().to_string()),
///         other => other,
///     }
/// }
///
/// #[derive(Attributes, Default)]
/// #[attributes(update = "apply")]
/// pub struct Character {
///     #[attr]                    name: Attr,
///     #[attr(query)]             alive: Attr,
///     #[attr(setter = false)]    id: Attr,
///     #[attr(transform = trim)]  title: Attr,
///     #[slots]                   slots: Slots,
/// }
///
/// let mut ezio = Character::default();
/// ezio.set_name("Ezio");
/// ezio.set_title("  Mentore  ");
/// assert_eq!(ezio.title(), AttrValue::from("Mentore"));
/// ezio.apply([("alive", true)])?;
/// assert!(ezio.is_alive());
/// ```
///
/// # What is generated
///
/// - `impl Attributes` — the attribute table (a `OnceLock` built in field
///   declaration order) and the slots plumbing.
/// - Per `#[attr]` field, honoring its flags: `fn <name>(&self) -> AttrValue`,
///   `fn is_<name>(&self) -> bool` for query attributes, and
///   `fn set_<name>(&mut self, impl Into<AttrValue>)`. A suppressed accessor
///   is simply not emitted.
/// - The mass-assignment wrapper and, when enabled, the table-export fn.
#[proc_macro_derive(Attributes, attributes(attributes, attr, slots))]
pub fn derive_attributes(input: TokenStream) -> TokenStream {
    attributes_derive::expand(input)
}
