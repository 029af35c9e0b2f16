//! Dynamically-typed property values.
//!
//! Event properties are heterogeneous: a key may carry a number, a string,
//! a boolean, a nested mapping, or a sequence. This module models that value
//! space as a closed enum rather than an open dynamic type, so every value a
//! payload can carry is statically known and serializes as plain JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Map of property keys to values, as carried by a payload.
///
/// Key collisions during merging are resolved last-writer-wins; the one
/// exception is the `$set_once` sub-object, which is first-write-wins per
/// field (see [`crate::builder::PayloadBuilder`]).
pub type Properties = HashMap<String, Value>;

/// A single property value.
///
/// Serialized untagged, so values round-trip as ordinary JSON scalars,
/// arrays, and objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit absence (`null` on the wire)
    Null,
    /// Boolean
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// String
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Nested string-keyed mapping
    Object(Properties),
}

impl Value {
    /// Borrow the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the value as a nested mapping, if it is one.
    pub fn as_object(&self) -> Option<&Properties> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow the value as a nested mapping, if it is one.
    pub fn as_object_mut(&mut self) -> Option<&mut Properties> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Properties> for Value {
    fn from(v: Properties) -> Self {
        Value::Object(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_serialize_untagged() {
        assert_eq!(
            serde_json::to_value(Value::from("hello")).unwrap(),
            serde_json::json!("hello")
        );
        assert_eq!(
            serde_json::to_value(Value::from(3i64)).unwrap(),
            serde_json::json!(3)
        );
        assert_eq!(
            serde_json::to_value(Value::from(true)).unwrap(),
            serde_json::json!(true)
        );
        assert_eq!(
            serde_json::to_value(Value::Null).unwrap(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_nested_object_round_trip() {
        let mut inner = Properties::new();
        inner.insert("version".to_string(), Value::from("1.0"));
        let mut outer = Properties::new();
        outer.insert("app".to_string(), Value::Object(inner));
        outer.insert("counts".to_string(), Value::Array(vec![Value::from(1i64)]));

        let json = serde_json::to_string(&Value::Object(outer.clone())).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Object(outer));
    }

    #[test]
    fn test_integer_preferred_over_float() {
        let v: Value = serde_json::from_str("42").unwrap();
        assert_eq!(v, Value::Int(42));

        let v: Value = serde_json::from_str("42.5").unwrap();
        assert_eq!(v, Value::Float(42.5));
    }

    #[test]
    fn test_object_accessors() {
        let mut map = Properties::new();
        map.insert("k".to_string(), Value::from("v"));
        let mut value = Value::Object(map);

        assert!(value.as_object().is_some());
        value
            .as_object_mut()
            .unwrap()
            .insert("k2".to_string(), Value::from(false));
        assert_eq!(value.as_object().unwrap().len(), 2);
        assert!(value.as_str().is_none());
    }
}
