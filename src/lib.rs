//! Type coercion and sanitization of untrusted scalar form values.
//!
//! This crate clears one raw field value at a time: it coerces the value to a
//! requested primitive type, runs strings through an ordered cleaning
//! pipeline, checks bounds and whitelist, and returns either the normalized
//! value or every reason it was rejected. It never panics on bad input.
//!
//! # Core Types
//!
//! - [`Tainted<T>`]: Wrapper for raw, untrusted input
//! - [`Verified<T>`]: Proof that a value passed every check
//! - [`TypeKind`]: The four target types (integer, float, boolean, string)
//! - [`ClearOptions`]: Caller overrides, merged over per-kind defaults
//! - [`Violation`]: Closed set of rejection reasons
//! - [`Field`]: A reusable rule implementing [`Sanitizer`]
//!
//! # Pipeline
//!
//! ```text
//! raw ─▶ coerce ─┬─▶ (string) charset ─▶ decode ─▶ strip tags ─▶ collapse
//!                │   ─▶ trim ─▶ allowed symbols ─▶ pattern ─▶ encode ─┐
//!                └────────────────────────────────────────────────────┴─▶ bounds + whitelist
//! ```
//!
//! A coercion failure ends the pipeline with `[ValueCoercion]`; every later
//! violation is collected and reported together.
//!
//! # Examples
//!
//! ```
//! use field_sanitizer::{clear, ClearOptions, Tainted, TypeKind, Value, Violation};
//!
//! // Markup is stripped and special characters are encoded.
//! let comment = clear(
//!     TypeKind::String,
//!     Tainted::from_text("  <b>Fish</b>\t&\tchips  "),
//!     &ClearOptions::new(),
//!     false,
//! )
//! .expect("valid comment");
//! assert_eq!(comment.into_inner(), Value::from("Fish &amp; chips"));
//!
//! // Rejections list every reason.
//! let options = ClearOptions::new().allowed_symbols("0123456789".chars()).max(4.0);
//! let pin = clear(TypeKind::String, Tainted::from_text("12a45"), &options, false);
//! assert_eq!(
//!     pin.unwrap_err().as_slice(),
//!     &[Violation::AllowedSymbols, Violation::MaxBound],
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clear;
mod coerce;
pub mod config;
mod constraint;
mod error;
mod kind;
mod logging;
mod sanitizer;
mod tainted;
mod value;
mod verified;

#[cfg(test)]
mod test_utils;

pub use clear::{clear, ClearResult, Field};
pub use coerce::{coerce, is_numeric};
pub use config::{ClearArgs, ClearOptions, SanitizationConfig};
pub use constraint::validate;
pub use error::{ConfigError, Violation, Violations};
pub use kind::{default_value, TypeKind};
pub use sanitizer::{Sanitizer, StringSanitizer};
pub use tainted::{RawValue, Tainted};
pub use value::Value;
pub use verified::Verified;
