//! Core runtime for attrkit — declarative attribute accessors backed by a
//! per-type attribute table and per-instance slot storage.
//!
//! An [`AttributeSet`] records, per type, which attributes exist and which
//! accessors each one exposes (getter, setter, boolean query), plus an
//! optional setter transform. Instances hold their values in [`Slots`],
//! created lazily on first write. The [`Attributes`] trait ties the two
//! together and provides the generic entry points `read`/`query`/`write`
//! and the [`update_attributes`](Attributes::update_attributes) mass
//! assignment helper.
//!
//! The `attrkit-macros` crate generates all of this, plus concrete named
//! accessor methods, from a `#[derive(Attributes)]` on the embedding type.

pub mod error;
pub mod object;
pub mod prelude;
pub mod set;
pub mod slots;
pub mod update;
pub mod value;

pub use error::AttrError;
pub use object::Attributes;
pub use set::{AttrDef, AttrOptions, AttributeSet, Transform};
pub use slots::{Slots, SlotsView};
pub use update::{AttrMap, IntoAttrMap};
pub use value::AttrValue;

/// Marker type for attribute-declaring fields in `#[derive(Attributes)]`.
///
/// Fields of this type declare an attribute without storing anything;
/// values live in the struct's [`Slots`] field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attr;
