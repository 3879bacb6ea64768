use std::fmt;
use std::str::FromStr;

use crate::{ConfigError, Value};

/// The primitive type a raw field value is coerced into.
///
/// The kind decides which coercion rules apply, which default bounds are used
/// and whether the string sanitization pipeline runs at all.
///
/// Kinds parse from and display as the short labels `int`, `float`, `bool`
/// and `string`, so form definitions can name them in configuration files.
///
/// # Examples
///
/// ```
/// use field_sanitizer::TypeKind;
///
/// let kind: TypeKind = "float".parse().expect("known label");
/// assert_eq!(kind, TypeKind::Float);
/// assert_eq!(kind.to_string(), "float");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit floating point number.
    Float,
    /// Boolean flag.
    Boolean,
    /// Sanitized text.
    String,
}

impl TypeKind {
    /// All kinds, in declaration order.
    pub const ALL: [TypeKind; 4] = [
        TypeKind::Integer,
        TypeKind::Float,
        TypeKind::Boolean,
        TypeKind::String,
    ];

    /// Returns the short label of this kind.
    pub fn label(self) -> &'static str {
        match self {
            TypeKind::Integer => "int",
            TypeKind::Float => "float",
            TypeKind::Boolean => "bool",
            TypeKind::String => "string",
        }
    }

    /// Returns the zero value of this kind.
    ///
    /// Callers use it to pre-fill a field that was not submitted. The clear
    /// operation itself never falls back to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_sanitizer::{TypeKind, Value};
    ///
    /// assert_eq!(TypeKind::Integer.default_value(), Value::Int(0));
    /// assert_eq!(TypeKind::String.default_value(), Value::String(String::new()));
    /// ```
    pub fn default_value(self) -> Value {
        match self {
            TypeKind::Integer => Value::Int(0),
            TypeKind::Float => Value::Float(0.0),
            TypeKind::Boolean => Value::Bool(false),
            TypeKind::String => Value::String(String::new()),
        }
    }
}

/// Returns the zero value for `kind`.
///
/// Free-function form of [`TypeKind::default_value`].
pub fn default_value(kind: TypeKind) -> Value {
    kind.default_value()
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TypeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ConfigError::UnknownType(s.to_string()))
    }
}
