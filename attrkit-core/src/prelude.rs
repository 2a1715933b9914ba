//! attrkit prelude — import everything you need with a single `use`.
//!
//! ```ignore
//! use attrkit_core::prelude::*;
//!
//! let mut set = AttributeSet::new();
//! set.define("name", AttrOptions::new())?;
//! set.define("alive", AttrOptions::new().query(true))?;
//! ```

pub use crate::error::AttrError;
pub use crate::object::Attributes;
pub use crate::set::{AttrDef, AttrOptions, AttributeSet, Transform};
pub use crate::slots::{Slots, SlotsView};
pub use crate::update::{AttrMap, IntoAttrMap};
pub use crate::value::AttrValue;
pub use crate::Attr;
