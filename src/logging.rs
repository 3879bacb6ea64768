use crate::{TypeKind, Violation};

/// Placeholder field name for anonymous clears.
const UNNAMED: &str = "-";

/// Structured logging for one clear.
///
/// Every event carries the field name and requested kind under the
/// `field_sanitizer` target. Events never include the raw or cleaned value:
/// only its runtime shape, its length and the violation codes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClearLog<'a> {
    field: &'a str,
    kind: TypeKind,
}

impl<'a> ClearLog<'a> {
    pub(crate) fn new(field: Option<&'a str>, kind: TypeKind) -> Self {
        Self {
            field: field.unwrap_or(UNNAMED),
            kind,
        }
    }

    /// The raw value's shape could not be coerced.
    pub(crate) fn coercion_rejected(&self, shape: &'static str) {
        tracing::debug!(
            target: "field_sanitizer",
            field = %self.field,
            kind = %self.kind,
            shape,
            violation = Violation::ValueCoercion.code(),
            "coercion rejected"
        );
    }

    /// The string pipeline changed the text.
    pub(crate) fn string_cleaned(&self, before_chars: usize, after_chars: usize) {
        tracing::trace!(
            target: "field_sanitizer",
            field = %self.field,
            before_chars,
            after_chars,
            "string cleaned"
        );
    }

    /// The clear finished with violations.
    pub(crate) fn rejected(&self, violations: &[Violation]) {
        let codes: Vec<&str> = violations.iter().map(|v| v.code()).collect();
        tracing::debug!(
            target: "field_sanitizer",
            field = %self.field,
            kind = %self.kind,
            violations = ?codes,
            "value rejected"
        );
    }

    /// The clear finished without violations.
    pub(crate) fn accepted(&self) {
        tracing::trace!(
            target: "field_sanitizer",
            field = %self.field,
            kind = %self.kind,
            "value accepted"
        );
    }
}
