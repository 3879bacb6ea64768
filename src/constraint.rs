//! Bound and whitelist checks run on every coerced value.

use crate::{SanitizationConfig, Value, Violation};

/// Checks `value` against the bounds and whitelist in `config`.
///
/// Strings are measured in characters (Unicode scalar values), numbers by
/// value, and booleans by `0`/`1`. The three checks run independently, so up
/// to three violations are returned, in the order min, max, whitelist.
///
/// A NaN bound rejects every value.
///
/// Whitelist membership is type-exact: `Value::Int(5)` is not a member of
/// `[Value::String("5")]` nor of `[Value::Float(5.0)]`.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{validate, ClearOptions, TypeKind, Value, Violation};
///
/// let config = ClearOptions::new()
///     .max(3.0)
///     .white_list(["ab"])
///     .resolve(TypeKind::String, false);
///
/// assert!(validate(&Value::from("ab"), &config).is_empty());
/// assert_eq!(
///     validate(&Value::from("abcd"), &config),
///     vec![Violation::MaxBound, Violation::Whitelist],
/// );
/// ```
pub fn validate(value: &Value, config: &SanitizationConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let measure = measure(value);

    if config.min.is_some_and(|min| min.is_nan() || measure < min) {
        violations.push(Violation::MinBound);
    }
    if config.max.is_some_and(|max| max.is_nan() || measure > max) {
        violations.push(Violation::MaxBound);
    }
    if !config.white_list.is_empty() && !config.white_list.contains(value) {
        violations.push(Violation::Whitelist);
    }

    violations
}

/// The number bounds are compared against.
fn measure(value: &Value) -> f64 {
    match value {
        Value::Int(v) => *v as f64,
        Value::Float(v) => *v,
        Value::Bool(v) => f64::from(u8::from(*v)),
        Value::String(s) => s.chars().count() as f64,
    }
}
