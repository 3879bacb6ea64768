//! Clear configuration: caller-supplied partial options and their resolved form.
//!
//! [`ClearOptions`] holds only what the caller chose to set. Before a clear
//! runs it is merged over the defaults for the requested [`TypeKind`] into a
//! [`SanitizationConfig`], the immutable settings the pipeline reads.
//!
//! | option                | String default | other kinds | soft mode |
//! |-----------------------|----------------|-------------|-----------|
//! | `min`                 | 1              | unbounded   | same      |
//! | `max`                 | 5000           | unbounded   | same      |
//! | `charset`             | UTF-8          | UTF-8       | same      |
//! | `strip_tags`          | on             | on          | off       |
//! | `html_entities`       | on             | on          | off       |
//! | `collapse_whitespace` | on             | on          | off       |
//!
//! The string-only options have no effect on other kinds.

use std::collections::BTreeSet;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use serde::Deserialize;

use crate::{ConfigError, TypeKind, Value};

/// Default minimum length of a String field.
pub const DEFAULT_STRING_MIN: f64 = 1.0;

/// Default maximum length of a String field.
pub const DEFAULT_STRING_MAX: f64 = 5000.0;

/// Fully resolved settings for one clear.
///
/// Built by [`ClearOptions::resolve`]; every field has a concrete value.
#[derive(Debug, Clone)]
pub struct SanitizationConfig {
    /// Exact values the final value must be one of. Empty means unrestricted.
    pub white_list: Vec<Value>,
    /// Lower bound on the value, or on the character count for strings.
    pub min: Option<f64>,
    /// Upper bound on the value, or on the character count for strings.
    pub max: Option<f64>,
    /// Charset strings are normalized into.
    pub charset: &'static Encoding,
    /// Remove markup tags.
    pub strip_tags: bool,
    /// Decode entities before cleaning and encode them after.
    pub html_entities: bool,
    /// Normalize carriage returns, tabs, newlines and spaces.
    pub collapse_whitespace: bool,
    /// Characters a string may consist of. Empty means unrestricted.
    pub allowed_symbols: BTreeSet<char>,
    /// Pattern the cleaned string must match somewhere (unanchored search).
    pub pattern: Option<Regex>,
}

impl SanitizationConfig {
    /// Returns the defaults for `kind`.
    ///
    /// Soft mode turns off tag stripping, entity handling and whitespace
    /// collapsing, for input from an already trusted source.
    pub fn defaults(kind: TypeKind, soft_mode: bool) -> Self {
        let is_string = kind == TypeKind::String;
        Self {
            white_list: Vec::new(),
            min: is_string.then_some(DEFAULT_STRING_MIN),
            max: is_string.then_some(DEFAULT_STRING_MAX),
            charset: UTF_8,
            strip_tags: !soft_mode,
            html_entities: !soft_mode,
            collapse_whitespace: !soft_mode,
            allowed_symbols: BTreeSet::new(),
            pattern: None,
        }
    }
}

/// Bound override supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BoundOverride {
    Limit(f64),
    Unbounded,
}

impl BoundOverride {
    fn apply(this: Option<Self>, default: Option<f64>) -> Option<f64> {
        match this {
            None => default,
            Some(BoundOverride::Limit(v)) => Some(v),
            Some(BoundOverride::Unbounded) => None,
        }
    }
}

/// Caller-supplied options for a clear; anything left unset uses the default
/// for the requested kind.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{ClearOptions, TypeKind};
///
/// let options = ClearOptions::new()
///     .max(32.0)
///     .allowed_symbols("abcdefghijklmnopqrstuvwxyz0123456789_".chars())
///     .pattern("^[a-z]")
///     .expect("valid regex");
///
/// let config = options.resolve(TypeKind::String, false);
/// assert_eq!(config.min, Some(1.0));
/// assert_eq!(config.max, Some(32.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClearOptions {
    white_list: Option<Vec<Value>>,
    min: Option<BoundOverride>,
    max: Option<BoundOverride>,
    charset: Option<&'static Encoding>,
    strip_tags: Option<bool>,
    html_entities: Option<bool>,
    collapse_whitespace: Option<bool>,
    allowed_symbols: Option<BTreeSet<char>>,
    pattern: Option<Option<Regex>>,
}

impl ClearOptions {
    /// Creates options with nothing overridden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the final value to exactly these values.
    pub fn white_list<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.white_list = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the minimum value (or minimum character count for strings).
    ///
    /// A NaN minimum rejects every value; use [`unbounded_min`](Self::unbounded_min)
    /// to remove the bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(BoundOverride::Limit(min));
        self
    }

    /// Removes the minimum, including the String default of 1.
    pub fn unbounded_min(mut self) -> Self {
        self.min = Some(BoundOverride::Unbounded);
        self
    }

    /// Sets the maximum value (or maximum character count for strings).
    ///
    /// A NaN maximum rejects every value; use [`unbounded_max`](Self::unbounded_max)
    /// to remove the bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(BoundOverride::Limit(max));
        self
    }

    /// Removes the maximum, including the String default of 5000.
    pub fn unbounded_max(mut self) -> Self {
        self.max = Some(BoundOverride::Unbounded);
        self
    }

    /// Sets the charset strings are normalized into, by WHATWG label.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCharset`] if no encoding has this label.
    pub fn charset(mut self, label: &str) -> Result<Self, ConfigError> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ConfigError::UnknownCharset(label.to_string()))?;
        self.charset = Some(encoding);
        Ok(self)
    }

    /// Enables or disables tag stripping.
    pub fn strip_tags(mut self, enabled: bool) -> Self {
        self.strip_tags = Some(enabled);
        self
    }

    /// Enables or disables entity decoding and re-encoding.
    pub fn html_entities(mut self, enabled: bool) -> Self {
        self.html_entities = Some(enabled);
        self
    }

    /// Enables or disables whitespace collapsing.
    pub fn collapse_whitespace(mut self, enabled: bool) -> Self {
        self.collapse_whitespace = Some(enabled);
        self
    }

    /// Restricts strings to the given characters.
    pub fn allowed_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.allowed_symbols = Some(symbols.into_iter().collect());
        self
    }

    /// Requires strings to match `pattern` somewhere; anchor with `^` and `$`
    /// for a full match. An empty pattern clears the requirement.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the regex does not compile.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        let compiled = if pattern.is_empty() {
            None
        } else {
            Some(Regex::new(pattern)?)
        };
        self.pattern = Some(compiled);
        Ok(self)
    }

    /// Merges these options over the defaults for `kind`.
    pub fn resolve(&self, kind: TypeKind, soft_mode: bool) -> SanitizationConfig {
        let defaults = SanitizationConfig::defaults(kind, soft_mode);
        SanitizationConfig {
            white_list: self.white_list.clone().unwrap_or(defaults.white_list),
            min: BoundOverride::apply(self.min, defaults.min),
            max: BoundOverride::apply(self.max, defaults.max),
            charset: self.charset.unwrap_or(defaults.charset),
            strip_tags: self.strip_tags.unwrap_or(defaults.strip_tags),
            html_entities: self.html_entities.unwrap_or(defaults.html_entities),
            collapse_whitespace: self
                .collapse_whitespace
                .unwrap_or(defaults.collapse_whitespace),
            allowed_symbols: self
                .allowed_symbols
                .clone()
                .unwrap_or(defaults.allowed_symbols),
            pattern: self.pattern.clone().unwrap_or(defaults.pattern),
        }
    }
}

/// Clear options in their serialized form, keyed the way form definitions
/// store them.
///
/// A key set to `null` for `_min` or `_max` removes that bound. Unknown keys
/// are rejected.
///
/// # Examples
///
/// ```
/// use field_sanitizer::{ClearArgs, ClearOptions, TypeKind};
///
/// let args: ClearArgs = serde_json::from_str(
///     r#"{ "_max": 10, "_white_symbols": ["a", "b"], "_pcre": "^a" }"#,
/// ).expect("valid json");
/// let options = ClearOptions::try_from(args).expect("valid options");
/// assert_eq!(options.resolve(TypeKind::String, false).max, Some(10.0));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClearArgs {
    /// `_white_list`
    #[serde(rename = "_white_list", default)]
    pub white_list: Option<Vec<Value>>,
    /// `_min`; `null` removes the bound.
    #[serde(rename = "_min", default, deserialize_with = "present")]
    pub min: Option<Option<f64>>,
    /// `_max`; `null` removes the bound.
    #[serde(rename = "_max", default, deserialize_with = "present")]
    pub max: Option<Option<f64>>,
    /// `_charset`
    #[serde(rename = "_charset", default)]
    pub charset: Option<String>,
    /// `_strip_tags`
    #[serde(rename = "_strip_tags", default)]
    pub strip_tags: Option<bool>,
    /// `_html_entities`
    #[serde(rename = "_html_entities", default)]
    pub html_entities: Option<bool>,
    /// `_rm_multiple_space`
    #[serde(rename = "_rm_multiple_space", default)]
    pub collapse_whitespace: Option<bool>,
    /// `_white_symbols`; each entry must be one character.
    #[serde(rename = "_white_symbols", default)]
    pub allowed_symbols: Option<Vec<String>>,
    /// `_pcre`
    #[serde(rename = "_pcre", default)]
    pub pattern: Option<String>,
}

// Distinguishes a key set to null from a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn finite(bound: f64) -> Result<f64, ConfigError> {
    if bound.is_finite() {
        Ok(bound)
    } else {
        Err(ConfigError::InvalidBound(bound))
    }
}

impl TryFrom<ClearArgs> for ClearOptions {
    type Error = ConfigError;

    fn try_from(args: ClearArgs) -> Result<Self, Self::Error> {
        let mut options = ClearOptions::new();

        if let Some(values) = args.white_list {
            options = options.white_list(values);
        }
        options = match args.min {
            None => options,
            Some(None) => options.unbounded_min(),
            Some(Some(min)) => options.min(finite(min)?),
        };
        options = match args.max {
            None => options,
            Some(None) => options.unbounded_max(),
            Some(Some(max)) => options.max(finite(max)?),
        };
        if let Some(label) = args.charset {
            options = options.charset(&label)?;
        }
        if let Some(enabled) = args.strip_tags {
            options = options.strip_tags(enabled);
        }
        if let Some(enabled) = args.html_entities {
            options = options.html_entities(enabled);
        }
        if let Some(enabled) = args.collapse_whitespace {
            options = options.collapse_whitespace(enabled);
        }
        if let Some(symbols) = args.allowed_symbols {
            let chars = symbols
                .into_iter()
                .map(|s| {
                    let mut chars = s.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Ok(c),
                        _ => Err(ConfigError::InvalidSymbol(s)),
                    }
                })
                .collect::<Result<Vec<char>, ConfigError>>()?;
            options = options.allowed_symbols(chars);
        }
        if let Some(pattern) = args.pattern {
            options = options.pattern(&pattern)?;
        }

        Ok(options)
    }
}
