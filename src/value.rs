use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeKind;

/// A coerced, typed scalar.
///
/// This is what a successful clear hands back, and what whitelist entries are
/// written as. Equality is structural and type-exact: `Int(5)` equals neither
/// `Float(5.0)` nor `String("5")`.
///
/// Serializes untagged, so `Value::Int(5)` becomes the JSON number `5`.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{TypeKind, Value};
///
/// let value = Value::from("hello");
/// assert_eq!(value.kind(), TypeKind::String);
/// assert_ne!(Value::Int(5), Value::from("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    String(String),
}

impl Value {
    /// Returns the kind this value belongs to.
    pub fn kind(&self) -> TypeKind {
        match self {
            Value::Int(_) => TypeKind::Integer,
            Value::Float(_) => TypeKind::Float,
            Value::Bool(_) => TypeKind::Boolean,
            Value::String(_) => TypeKind::String,
        }
    }

    /// Returns the integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the flag, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
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

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_type_exact() {
        assert_eq!(Value::Int(5), Value::Int(5));
        assert_ne!(Value::Int(5), Value::Float(5.0));
        assert_ne!(Value::Int(1), Value::Bool(true));
        assert_ne!(Value::Int(5), Value::from("5"));
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_float(), None);
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from("x").as_bool(), None);
    }

    #[test]
    fn deserializes_untagged() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[5, 5.5, true, "five"]"#).expect("valid json");
        assert_eq!(
            values,
            vec![
                Value::Int(5),
                Value::Float(5.5),
                Value::Bool(true),
                Value::from("five"),
            ]
        );
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&Value::from("a")).expect("serializes");
        assert_eq!(json, r#""a""#);
        let json = serde_json::to_string(&Value::Int(7)).expect("serializes");
        assert_eq!(json, "7");
    }

    #[test]
    fn display_is_plain() {
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::from("a b").to_string(), "a b");
    }
}
