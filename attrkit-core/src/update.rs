use std::collections::{BTreeMap, HashMap};

use crate::error::AttrError;
use crate::value::AttrValue;

/// Ordered name/value pairs, the canonical mass-assignment input.
pub type AttrMap = Vec<(String, AttrValue)>;

/// Best-effort conversion of map-like inputs into ordered name/value pairs
/// for [`Attributes::update_attributes`](crate::Attributes::update_attributes).
///
/// Inputs with a natural order (pair lists, JSON objects, [`AttrValue::Map`])
/// keep it; `HashMap`/`BTreeMap` are applied in their own iteration order.
/// Inputs that are not mappings fail with [`AttrError::NotAMapping`].
pub trait IntoAttrMap {
    fn into_attr_map(self) -> Result<AttrMap, AttrError>;
}

impl<K: Into<String>, V: Into<AttrValue>> IntoAttrMap for Vec<(K, V)> {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        Ok(self
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect())
    }
}

impl<K: Into<String>, V: Into<AttrValue>, const N: usize> IntoAttrMap for [(K, V); N] {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        Ok(self
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect())
    }
}

impl<K: Clone + Into<String>, V: Clone + Into<AttrValue>> IntoAttrMap for &[(K, V)] {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        Ok(self
            .iter()
            .cloned()
            .map(|(name, value)| (name.into(), value.into()))
            .collect())
    }
}

impl<K: Into<String>, V: Into<AttrValue>> IntoAttrMap for HashMap<K, V> {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        Ok(self
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect())
    }
}

impl<K: Into<String> + Ord, V: Into<AttrValue>> IntoAttrMap for BTreeMap<K, V> {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        Ok(self
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect())
    }
}

impl IntoAttrMap for AttrValue {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        match self {
            AttrValue::Map(pairs) => Ok(pairs),
            other => Err(AttrError::NotAMapping {
                found: other.kind(),
            }),
        }
    }
}

impl IntoAttrMap for serde_json::Map<String, serde_json::Value> {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        Ok(self
            .into_iter()
            .map(|(name, value)| (name, AttrValue::from_json(&value)))
            .collect())
    }
}

impl IntoAttrMap for serde_json::Value {
    fn into_attr_map(self) -> Result<AttrMap, AttrError> {
        match self {
            serde_json::Value::Object(map) => map.into_attr_map(),
            other => Err(AttrError::NotAMapping {
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a map",
    }
}
