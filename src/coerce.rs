//! Conversion of raw values into one of the four supported kinds.

use crate::{RawValue, TypeKind, Value, Violation};

/// Characters trimmed from both ends of coerced text.
pub(crate) const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Raw strings accepted as `true`. Matching is exact and case-sensitive.
const TRUE_LITERALS: &[&str] = &["true", "1", "on"];

/// Coerces `raw` into a value of `kind`.
///
/// # Errors
///
/// Returns [`Violation::ValueCoercion`] when the raw value's shape cannot
/// represent `kind`: arrays, objects and `null` always fail, and numbers
/// require numeric-looking text. Float text whose value overflows to
/// infinity fails as well.
pub fn coerce(kind: TypeKind, raw: &RawValue) -> Result<Value, Violation> {
    match kind {
        TypeKind::Integer => coerce_integer(raw),
        TypeKind::Float => coerce_float(raw),
        TypeKind::Boolean => coerce_boolean(raw),
        TypeKind::String => coerce_string(raw),
    }
}

fn coerce_integer(raw: &RawValue) -> Result<Value, Violation> {
    let n = match raw {
        RawValue::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i,
            (None, Some(_)) => i64::MAX,
            // `as` truncates toward zero and saturates
            _ => n.as_f64().map_or(0, |f| f as i64),
        },
        RawValue::String(s) if is_numeric(s) => {
            let text = s.trim_matches(|c: char| c.is_ascii_whitespace());
            match text.parse::<i64>() {
                Ok(i) => i,
                Err(_) => parse_float(text)? as i64,
            }
        }
        _ => return Err(Violation::ValueCoercion),
    };
    Ok(Value::Int(n))
}

fn coerce_float(raw: &RawValue) -> Result<Value, Violation> {
    let text = match raw {
        RawValue::Number(n) => n.to_string(),
        RawValue::String(s) => s.clone(),
        _ => return Err(Violation::ValueCoercion),
    };
    // Decimal comma: "3,14" reads as 3.14.
    let text = text.trim_matches(TRIMMED).replace(',', ".");
    if !is_numeric(&text) {
        return Err(Violation::ValueCoercion);
    }
    let f = parse_float(text.trim_matches(|c: char| c.is_ascii_whitespace()))?;
    // "1e400" is numeric text but has no finite value.
    if !f.is_finite() {
        return Err(Violation::ValueCoercion);
    }
    Ok(Value::Float(f))
}

fn coerce_boolean(raw: &RawValue) -> Result<Value, Violation> {
    let flag = match raw {
        RawValue::Bool(b) => *b,
        RawValue::Number(n) => n.as_i64() == Some(1),
        RawValue::String(s) => TRUE_LITERALS.contains(&s.as_str()),
        _ => return Err(Violation::ValueCoercion),
    };
    Ok(Value::Bool(flag))
}

fn coerce_string(raw: &RawValue) -> Result<Value, Violation> {
    let text = match raw {
        RawValue::String(s) => s.trim_matches(TRIMMED).to_string(),
        RawValue::Number(n) => number_text(n),
        _ => return Err(Violation::ValueCoercion),
    };
    Ok(Value::String(text))
}

/// Integral floats print without a fraction, so `1.0` reads as `"1"`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn parse_float(text: &str) -> Result<f64, Violation> {
    text.parse::<f64>().map_err(|_| Violation::ValueCoercion)
}

/// Returns `true` if `text` is a base-10 number.
///
/// Accepted: optional surrounding ASCII whitespace, an optional sign, digits
/// with an optional fraction (or a fraction alone, as in `.5`), and an
/// optional exponent. Hex, `inf` and `nan` are not numeric.
pub fn is_numeric(text: &str) -> bool {
    let bytes = text
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
