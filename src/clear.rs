//! The clear operation: coercion, string cleaning and constraint checks.

use crate::coerce::coerce;
use crate::logging::ClearLog;
use crate::{
    validate, ClearOptions, RawValue, SanitizationConfig, Sanitizer, StringSanitizer, Tainted,
    TypeKind, Value, Verified, Violations,
};

/// Outcome of a clear: the verified value, or every reason it was rejected.
pub type ClearResult = Result<Verified<Value>, Violations>;

/// Coerces, cleans and checks one raw field value.
///
/// 1. `options` are merged over the defaults for `kind`; `soft_mode` turns
///    the hardening defaults (tag stripping, entity handling, whitespace
///    collapsing) off.
/// 2. The raw value is coerced to `kind`. If that fails, the result is
///    exactly `[ValueCoercion]` and nothing else runs.
/// 3. String values go through the [`StringSanitizer`] pipeline.
/// 4. Bounds and whitelist are checked.
///
/// All violations from steps 3 and 4 are reported together. On failure the
/// partially cleaned value is discarded.
///
/// Never panics, whatever the input.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{clear, ClearOptions, Tainted, TypeKind, Value, Violation};
///
/// let price = clear(TypeKind::Float, Tainted::from_text("3,14"), &ClearOptions::new(), false)
///     .expect("decimal comma is accepted");
/// assert_eq!(price.into_inner(), Value::Float(3.14));
///
/// let empty = clear(TypeKind::String, Tainted::from_text("   "), &ClearOptions::new(), false)
///     .unwrap_err();
/// assert_eq!(empty.as_slice(), &[Violation::MinBound]);
/// ```
pub fn clear(
    kind: TypeKind,
    raw: Tainted<RawValue>,
    options: &ClearOptions,
    soft_mode: bool,
) -> ClearResult {
    Field::new(kind, options, soft_mode).sanitize(raw)
}

/// A reusable clear rule for one form field.
///
/// Resolving options once and reusing the `Field` avoids re-merging
/// defaults for every submitted value. A field may carry a name, which is
/// attached to its log events.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{ClearOptions, Field, Sanitizer, Tainted, TypeKind, Value};
///
/// let newsletter = Field::new(TypeKind::Boolean, &ClearOptions::new(), false)
///     .named("newsletter");
///
/// let verified = newsletter.sanitize(Tainted::from_text("on")).expect("boolean-like");
/// assert_eq!(verified.into_inner(), Value::Bool(true));
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    name: Option<String>,
    kind: TypeKind,
    config: SanitizationConfig,
}

impl Field {
    /// Creates a field rule from caller options.
    pub fn new(kind: TypeKind, options: &ClearOptions, soft_mode: bool) -> Self {
        Self::with_config(kind, options.resolve(kind, soft_mode))
    }

    /// Creates a field rule from already resolved settings.
    pub fn with_config(kind: TypeKind, config: SanitizationConfig) -> Self {
        Self {
            name: None,
            kind,
            config,
        }
    }

    /// Names the field for logging.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the field name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the kind values are coerced to.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns the resolved settings.
    pub fn config(&self) -> &SanitizationConfig {
        &self.config
    }
}

impl Sanitizer<RawValue> for Field {
    type Output = Value;

    fn sanitize(&self, input: Tainted<RawValue>) -> ClearResult {
        let log = ClearLog::new(self.name(), self.kind);

        let value = match coerce(self.kind, input.as_inner()) {
            Ok(value) => value,
            Err(violation) => {
                log.coercion_rejected(input.shape());
                return Err(Violations::single(violation));
            }
        };

        let mut violations = Vec::new();
        let value = match value {
            Value::String(text) => {
                let cleaned =
                    StringSanitizer::new(&self.config).clean(&text, &mut violations);
                log.string_cleaned(text.chars().count(), cleaned.chars().count());
                Value::String(cleaned)
            }
            other => other,
        };

        violations.extend(validate(&value, &self.config));

        match Violations::from_vec(violations) {
            Some(violations) => {
                log.rejected(violations.as_slice());
                Err(violations)
            }
            None => {
                log.accepted();
                Ok(Verified::new_unchecked(value))
            }
        }
    }
}
