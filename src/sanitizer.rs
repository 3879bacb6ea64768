//! The string cleaning pipeline and the [`Sanitizer`] seam.

mod charset;
mod entities;
mod tags;
mod whitespace;

use crate::coerce::TRIMMED;
use crate::{SanitizationConfig, Tainted, Verified, Violation, Violations};

/// Trait for turning tainted values into verified values.
///
/// `Sanitizer<T>` is the single way out of a [`Tainted<T>`]: an
/// implementation either vouches for the value by returning it as
/// [`Verified`], or reports every reason it could not.
///
/// # Invariants
///
/// Implementations MUST:
/// - Only produce `Verified` after every check passed
/// - Never panic on any input
/// - Not leak the rejected input through the returned violations
///
/// # Examples
///
/// ```
/// use field_sanitizer::{ClearOptions, Field, Sanitizer, Tainted, TypeKind, Violation};
///
/// let age = Field::new(TypeKind::Integer, &ClearOptions::new().min(0.0).max(150.0), false);
///
/// let verified = age.sanitize(Tainted::from_text("42")).expect("in range");
/// assert_eq!(verified.as_ref().as_int(), Some(42));
///
/// let violations = age.sanitize(Tainted::from_text("-1")).unwrap_err();
/// assert_eq!(violations.first(), Violation::MinBound);
/// ```
pub trait Sanitizer<T> {
    /// The verified output type.
    type Output;

    /// Sanitizes a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of [`Violations`] if the input is rejected.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<Self::Output>, Violations>;
}

/// The ordered cleaning pipeline applied to String values.
///
/// Steps, each reading the previous step's output:
///
/// 1. charset normalization (always)
/// 2. entity decoding, only when entity encoding is enabled, so that tag
///    stripping sees literal markup
/// 3. tag stripping
/// 4. whitespace collapsing
/// 5. trimming whitespace the earlier steps left at either end
/// 6. allowed-symbol check, stopping at the first offending character
/// 7. pattern check (unanchored search)
/// 8. entity encoding, including any `&` that already reads as a reference
///
/// The checks in steps 6 and 7 see readable text, not encoded text. Each
/// check reports at most one violation and neither stops the pipeline.
///
/// Cleaning a cleaned string with the same settings returns it unchanged:
/// decoding undoes exactly what the final encoding did, and the tag and
/// whitespace steps leave their own output alone.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{ClearOptions, StringSanitizer, TypeKind};
///
/// let config = ClearOptions::new().resolve(TypeKind::String, false);
/// let mut violations = Vec::new();
/// let cleaned = StringSanitizer::new(&config)
///     .clean("<b>Tom</b>  &amp;\t'Jerry'", &mut violations);
///
/// assert_eq!(cleaned, "Tom &amp; &#039;Jerry&#039;");
/// assert!(violations.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StringSanitizer<'a> {
    config: &'a SanitizationConfig,
}

impl<'a> StringSanitizer<'a> {
    /// Creates a pipeline reading the given settings.
    pub fn new(config: &'a SanitizationConfig) -> Self {
        Self { config }
    }

    /// Runs the pipeline over `text`, appending any violations found.
    pub fn clean(&self, text: &str, violations: &mut Vec<Violation>) -> String {
        let config = self.config;

        let mut value = charset::normalize(text, config.charset);

        if config.html_entities {
            value = entities::decode(&value);
        }
        if config.strip_tags {
            value = tags::strip(&value);
        }
        if config.collapse_whitespace {
            value = whitespace::collapse(&value);
        }
        if value.starts_with(TRIMMED) || value.ends_with(TRIMMED) {
            value = value.trim_matches(TRIMMED).to_string();
        }

        if let Some(symbol) = self.first_disallowed(&value) {
            tracing::trace!(
                target: "field_sanitizer",
                codepoint = symbol as u32,
                "disallowed symbol"
            );
            violations.push(Violation::AllowedSymbols);
        }

        if let Some(pattern) = &config.pattern {
            if !pattern.is_match(&value) {
                violations.push(Violation::Pattern);
            }
        }

        if config.html_entities {
            value = entities::encode(&value);
        }

        value
    }

    fn first_disallowed(&self, value: &str) -> Option<char> {
        let allowed = &self.config.allowed_symbols;
        if allowed.is_empty() {
            return None;
        }
        value.chars().find(|c| !allowed.contains(c))
    }
}
