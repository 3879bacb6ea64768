use std::fmt;

use serde::{Deserialize, Serialize};

/// A reason a raw value was rejected.
///
/// Each pipeline stage reports at most one violation of its own kind, so a
/// failed clear never lists the same violation twice.
///
/// Violations serialize as their stable [`code`](Self::code), which is what
/// form front-ends key their error messages on.
///
/// # Examples
///
/// ```
/// use field_sanitizer::Violation;
///
/// assert_eq!(Violation::MaxBound.code(), "_max");
/// assert_eq!(Violation::MaxBound.to_string(), "value above maximum");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    /// The raw value has a shape that cannot be converted to the requested kind.
    #[serde(rename = "value")]
    ValueCoercion,
    /// The sanitized string holds a character outside the allowed set.
    #[serde(rename = "_white_symbols")]
    AllowedSymbols,
    /// The sanitized string does not match the configured pattern.
    #[serde(rename = "_pcre")]
    Pattern,
    /// The value (or string length) is below the minimum.
    #[serde(rename = "_min")]
    MinBound,
    /// The value (or string length) is above the maximum.
    #[serde(rename = "_max")]
    MaxBound,
    /// The value is not one of the whitelisted values.
    #[serde(rename = "_white_list")]
    Whitelist,
}

impl Violation {
    /// Returns the stable code of this violation.
    pub fn code(self) -> &'static str {
        match self {
            Self::ValueCoercion => "value",
            Self::AllowedSymbols => "_white_symbols",
            Self::Pattern => "_pcre",
            Self::MinBound => "_min",
            Self::MaxBound => "_max",
            Self::Whitelist => "_white_list",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueCoercion => write!(f, "value cannot be coerced"),
            Self::AllowedSymbols => write!(f, "disallowed symbol"),
            Self::Pattern => write!(f, "pattern mismatch"),
            Self::MinBound => write!(f, "value below minimum"),
            Self::MaxBound => write!(f, "value above maximum"),
            Self::Whitelist => write!(f, "value not in whitelist"),
        }
    }
}

/// The non-empty, ordered list of violations of a failed clear.
///
/// Violations appear in pipeline order: coercion, then sanitization, then
/// bounds and whitelist. The list never contains the rejected value itself.
///
/// There is no public constructor; only the clear pipeline produces
/// `Violations`, which guarantees the list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations {
    list: Vec<Violation>,
}

impl Violations {
    /// Wraps a violation list, or returns `None` when it is empty.
    pub(crate) fn from_vec(list: Vec<Violation>) -> Option<Self> {
        if list.is_empty() {
            None
        } else {
            Some(Self { list })
        }
    }

    /// Wraps a single violation.
    pub(crate) fn single(violation: Violation) -> Self {
        Self {
            list: vec![violation],
        }
    }

    /// Returns the violations as a slice.
    pub fn as_slice(&self) -> &[Violation] {
        &self.list
    }

    /// Returns `true` if `violation` is in the list.
    pub fn contains(&self, violation: Violation) -> bool {
        self.list.contains(&violation)
    }

    /// Returns the number of violations (always at least one).
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the first violation reported.
    pub fn first(&self) -> Violation {
        self.list[0]
    }

    /// Iterates the violations in report order.
    pub fn iter(&self) -> impl Iterator<Item = Violation> + '_ {
        self.list.iter().copied()
    }

    /// Returns the stable codes of all violations, in report order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.iter().map(Violation::code).collect()
    }

    /// Consumes the list and returns the underlying vector.
    pub fn into_vec(self) -> Vec<Violation> {
        self.list
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected: ")?;
        for (i, violation) in self.list.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

/// Errors raised while building a clear configuration.
///
/// These describe mistakes in the caller's own setup (a bad regex, an
/// unknown charset label), never problems with the untrusted value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The pattern failed to compile.
    InvalidPattern(regex::Error),
    /// The charset label names no known encoding.
    UnknownCharset(String),
    /// The type label names no known kind.
    UnknownType(String),
    /// An allowed-symbol entry is not exactly one character.
    InvalidSymbol(String),
    /// A bound is not a finite number.
    InvalidBound(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPattern(e) => write!(f, "invalid pattern: {}", e),
            ConfigError::UnknownCharset(label) => write!(f, "unknown charset '{}'", label),
            ConfigError::UnknownType(label) => write!(f, "unknown type '{}'", label),
            ConfigError::InvalidSymbol(s) => {
                write!(f, "allowed symbol '{}' is not a single character", s)
            }
            ConfigError::InvalidBound(b) => write!(f, "bound {} is not finite", b),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for ConfigError {
    fn from(e: regex::Error) -> Self {
        ConfigError::InvalidPattern(e)
    }
}
