//! The extraction mapping: key-value snapshots of introspected metadata
//!
//! This module provides:
//! - `FieldValue`: a small value enum for mapping entries
//! - `FieldMap`: an ordered map from field names to values, consumed by
//!   message templates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for extraction-mapping fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A transient key-value snapshot of introspected metadata
///
/// Built by the extractors, consumed by the message templates; its lifetime
/// is the single formatting call. Keys are kept ordered so rendered field
/// listings are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMap {
    fields: BTreeMap<String, FieldValue>,
}

impl FieldMap {
    /// Create a new empty mapping
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the mapping
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the mapping (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Check if the mapping has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields in the mapping
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert the whole mapping to a JSON object
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json_value()))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_map_creation() {
        let map = FieldMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_field_map_with_fields() {
        let map = FieldMap::new()
            .with_field("name", "add")
            .with_field("line", 42)
            .with_field("equal", true);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("name"), Some(&FieldValue::String("add".into())));
        assert_eq!(map.get("line"), Some(&FieldValue::Int(42)));
    }

    #[test]
    fn test_field_map_format_is_ordered() {
        let map = FieldMap::new()
            .with_field("zeta", 1)
            .with_field("alpha", 2);

        assert_eq!(map.format_fields(), "alpha=2 zeta=1");
    }

    #[test]
    fn test_option_becomes_null() {
        let map = FieldMap::new().with_field("doc", None::<&str>);
        assert_eq!(map.get("doc"), Some(&FieldValue::Null));
        assert_eq!(map.format_fields(), "doc=null");
    }

    #[test]
    fn test_to_json_value() {
        let map = FieldMap::new()
            .with_field("name", "add")
            .with_field("line", 7)
            .with_field("equal", false);

        let json = map.to_json_value();
        assert_eq!(json["name"], "add");
        assert_eq!(json["line"], 7);
        assert_eq!(json["equal"], false);
    }

    #[test]
    fn test_float_to_json() {
        assert_eq!(FieldValue::Float(1.5).to_json_value(), serde_json::json!(1.5));
        assert_eq!(
            FieldValue::Float(f64::NAN).to_json_value(),
            serde_json::Value::Null
        );
    }
}
