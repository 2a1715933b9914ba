use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::AttrError;
use crate::slots::SlotsView;
use crate::value::AttrValue;

/// Setter transform. Receives the raw incoming value and a mutable view of
/// the owning instance's slots, and returns the value to store.
pub type Transform = Arc<dyn Fn(AttrValue, &mut SlotsView<'_>) -> AttrValue + Send + Sync>;

/// Accessor flags for a single attribute.
///
/// Defaults match the definition contract: getter and setter on, query off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrOptions {
    /// Generate a read accessor.
    pub getter: bool,
    /// Generate a write accessor.
    pub setter: bool,
    /// Boolean-coerce on write and read through the query accessor.
    pub query: bool,
}

impl Default for AttrOptions {
    fn default() -> Self {
        Self {
            getter: true,
            setter: true,
            query: false,
        }
    }
}

impl AttrOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn getter(mut self, enabled: bool) -> Self {
        self.getter = enabled;
        self
    }

    pub fn setter(mut self, enabled: bool) -> Self {
        self.setter = enabled;
        self
    }

    pub fn query(mut self, enabled: bool) -> Self {
        self.query = enabled;
        self
    }
}

/// One registered attribute: canonical name, accessor flags, optional
/// setter transform, and the slot index assigned at first definition.
#[derive(Clone)]
pub struct AttrDef {
    name: String,
    options: AttrOptions,
    transform: Option<Transform>,
    slot: usize,
}

impl AttrDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> AttrOptions {
        self.options
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    /// Stable index into the instance's slot store.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Debug for AttrDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrDef")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("transform", &self.transform.is_some())
            .field("slot", &self.slot)
            .finish()
    }
}

/// Per-type attribute table: an ordered registry of [`AttrDef`]s.
///
/// Built once at type-construction time (the derive freezes it behind a
/// `OnceLock`). Each canonical name maps to exactly one slot index for the
/// lifetime of the set; redefining a name replaces its flags and transform
/// but keeps the slot.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    defs: Vec<AttrDef>,
    index: HashMap<String, usize>,
}

impl AttributeSet {
    /// Create a new, empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attribute with the given accessor flags.
    ///
    /// `name` is canonicalized (surrounding whitespace trimmed) and must
    /// then be a valid identifier, or the call fails with
    /// [`AttrError::InvalidName`]. Redefining an existing name replaces the
    /// prior definition.
    pub fn define(&mut self, name: &str, options: AttrOptions) -> Result<&mut Self, AttrError> {
        self.insert(canonical_name(name)?, options, None);
        Ok(self)
    }

    /// Register an attribute whose setter runs `transform` before storing.
    pub fn define_with<F>(
        &mut self,
        name: &str,
        options: AttrOptions,
        transform: F,
    ) -> Result<&mut Self, AttrError>
    where
        F: Fn(AttrValue, &mut SlotsView<'_>) -> AttrValue + Send + Sync + 'static,
    {
        self.insert(canonical_name(name)?, options, Some(Arc::new(transform)));
        Ok(self)
    }

    fn insert(&mut self, name: String, options: AttrOptions, transform: Option<Transform>) {
        match self.index.get(&name) {
            Some(&at) => {
                tracing::debug!(
                    attribute = %name,
                    old = ?self.defs[at].options,
                    new = ?options,
                    "replacing attribute definition"
                );
                let slot = self.defs[at].slot;
                self.defs[at] = AttrDef {
                    name,
                    options,
                    transform,
                    slot,
                };
            }
            None => {
                let slot = self.defs.len();
                self.index.insert(name.clone(), slot);
                self.defs.push(AttrDef {
                    name,
                    options,
                    transform,
                    slot,
                });
            }
        }
    }

    /// Look up a definition by canonical name.
    pub fn get(&self, name: &str) -> Option<&AttrDef> {
        self.index.get(name).map(|&at| &self.defs[at])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether the named attribute exposes a read accessor. `false` for
    /// undefined names and for definitions with the getter suppressed.
    pub fn has_getter(&self, name: &str) -> bool {
        self.get(name).is_some_and(|def| def.options.getter)
    }

    /// Whether the named attribute exposes a write accessor.
    pub fn has_setter(&self, name: &str) -> bool {
        self.get(name).is_some_and(|def| def.options.setter)
    }

    pub fn is_query(&self, name: &str) -> bool {
        self.get(name).is_some_and(|def| def.options.query)
    }

    /// Attribute names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.defs.iter().map(|def| def.name.as_str())
    }

    /// Definitions in definition order.
    pub fn defs(&self) -> impl Iterator<Item = &AttrDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Canonicalize an attribute name: trim surrounding whitespace and require
/// an ASCII identifier.
fn canonical_name(name: &str) -> Result<String, AttrError> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(trimmed.to_string())
    } else {
        Err(AttrError::InvalidName {
            name: name.to_string(),
        })
    }
}
