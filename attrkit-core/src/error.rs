use std::fmt;

/// Error type for attribute definition and assignment operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrError {
    /// The attribute name cannot be coerced to a valid identifier.
    InvalidName { name: String },
    /// The input to a mass assignment could not be converted to a
    /// name/value mapping.
    NotAMapping { found: &'static str },
    /// The named attribute has no matching accessor on the instance:
    /// either it was never defined, or the accessor was suppressed.
    UnknownAttribute { name: String },
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrError::InvalidName { name } => {
                write!(
                    f,
                    "Invalid attribute name '{}': names must start with a letter or '_' \
                     and contain only ASCII letters, digits, and '_'",
                    name
                )
            }
            AttrError::NotAMapping { found } => {
                write!(
                    f,
                    "Mass assignment expects a name/value mapping, got {}. \
                     Pass a map, a JSON object, or a list of (name, value) pairs",
                    found
                )
            }
            AttrError::UnknownAttribute { name } => {
                write!(
                    f,
                    "Unknown attribute '{}': no matching accessor is defined on this type. \
                     Define it with AttributeSet::define or a #[attr] field",
                    name
                )
            }
        }
    }
}

impl std::error::Error for AttrError {}
