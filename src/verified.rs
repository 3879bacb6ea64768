use crate::{TypeKind, Value};

/// A value that went through the full clear pipeline without violations.
///
/// `Verified<T>` is the success half of a clear. It cannot be constructed
/// outside the crate, so holding one proves the value was coerced, sanitized
/// and checked against its constraints.
///
/// # Access
///
/// - [`AsRef::as_ref`]: borrow the verified value
/// - [`into_inner`](Self::into_inner): consume and extract it
///
/// # Examples
///
/// External callers cannot create `Verified<T>` directly:
///
/// ```compile_fail
/// use field_sanitizer::Verified;
///
/// let verified = Verified::new("data".to_string());
/// ```
///
/// They obtain one by clearing a tainted value:
///
/// ```
/// use field_sanitizer::{clear, ClearOptions, Tainted, TypeKind, Value};
///
/// let verified = clear(TypeKind::Integer, Tainted::from_text("42"), &ClearOptions::new(), false)
///     .expect("numeric input");
/// assert_eq!(verified.as_ref(), &Value::Int(42));
/// assert_eq!(verified.into_inner(), Value::Int(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps a value the caller has already checked.
    ///
    /// Crate-private: only the clear pipeline may vouch for a value.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl Verified<Value> {
    /// Returns the kind of the verified value.
    pub fn kind(&self) -> TypeKind {
        self.inner.kind()
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
