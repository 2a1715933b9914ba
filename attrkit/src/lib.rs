//! attrkit — declarative attribute accessors for plain Rust types.
//!
//! Attributes are declared once per type, stored in lazily created
//! per-instance slots, and read/written through generated accessors or the
//! generic [`Attributes`] entry points. Mass assignment applies a whole
//! mapping through the same setter pipeline. Import everything you need
//! with:
//!
//! ```ignore
//! use attrkit::prelude::*;
//!
//! #[derive(Attributes, Default)]
//! pub struct Character {
//!     #[attr]        name: Attr,
//!     #[attr(query)] alive: Attr,
//!     #[slots]       slots: Slots,
//! }
//!
//! let mut ezio = Character::default();
//! ezio.update_attributes([("name", "Ezio"), ("alive", "yes")])?;
//! assert!(ezio.is_alive());
//! ```

// Re-export sub-crates as public modules so they're accessible as
// `attrkit::attrkit_core` and `attrkit::attrkit_macros`.
//
// The proc macros use `proc-macro-crate` to detect whether the user depends
// on `attrkit` (facade) or `attrkit-core` directly, and generate the correct
// paths.
pub extern crate attrkit_core;
pub extern crate attrkit_macros;

// Re-export everything from attrkit-core at the top level for convenience.
pub use attrkit_core::*;

/// Derive macro — generates the attribute table, the [`Attributes`] impl,
/// and concrete accessor methods. See [`attrkit_macros::Attributes`].
pub use attrkit_macros::Attributes;

/// attrkit prelude — import everything you need with a single `use`.
pub mod prelude {
    pub use crate::attrkit_core::prelude::*;
    pub use crate::attrkit_macros::Attributes;
}
