use std::fmt;

/// An untyped raw value as it arrives from a form field or query parameter.
///
/// JSON's value model covers every shape a field can take on the wire:
/// strings and numbers are the common case, booleans arrive from JSON bodies,
/// and arrays, objects and `null` are the shapes coercion must reject.
pub type RawValue = serde_json::Value;

/// A wrapper for an untrusted raw value that must be cleared before use.
///
/// `Tainted<T>` marks data taken from a request. The value cannot be read back
/// out from outside the crate: the only way forward is through a
/// [`Sanitizer`](crate::Sanitizer), which either yields a
/// [`Verified`](crate::Verified) value or a list of violations.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{Tainted, RawValue};
///
/// let field = Tainted::new(RawValue::from("  <b>42</b>  "));
/// let from_query = Tainted::from_text("on");
///
/// // Debug output names the wrapper but the value stays inaccessible:
/// println!("{:?}", field);
/// let _ = from_query;
/// ```
#[derive(Clone)]
pub struct Tainted<T> {
    // Must stay private: external code goes through a Sanitizer.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Borrows the inner value for sanitization.
    ///
    /// Crate-private; only the clear pipeline reads tainted data.
    pub(crate) fn as_inner(&self) -> &T {
        &self.inner
    }
}

impl Tainted<RawValue> {
    /// Wraps a raw text field, the shape every query parameter arrives in.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(RawValue::String(text.into()))
    }

    /// Returns the runtime shape of the raw value.
    ///
    /// Used when logging rejections, so events describe what arrived without
    /// carrying its content.
    pub(crate) fn shape(&self) -> &'static str {
        match &self.inner {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Number(_) => "number",
            RawValue::String(_) => "string",
            RawValue::Array(_) => "array",
            RawValue::Object(_) => "object",
        }
    }
}

impl<T> From<T> for Tainted<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}
