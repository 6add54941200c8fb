//! A lenient, best-effort recursive-descent JSON parser.
//!
//! `jsonlax` turns a JSON-like document into a dynamic [`Value`] tree without
//! ever failing: malformed input degrades to a partial or best-effort result
//! instead of an error. Beyond standard JSON it accepts the bare token
//! `undefined` (a distinct [`Value::Undefined`]), unquoted bare words (kept
//! as strings), and numeric tokens with trailing garbage (coerced from their
//! leading numeric prefix).
//!
//! The entire input must be materialized up front; there is no streaming
//! entry point, and no serialization back to text.
//!
//! # Examples
//!
//! ```rust
//! use jsonlax::{Value, parse};
//!
//! let value = parse(r#"{"key": [null, true, 3.14]}"#).unwrap();
//! assert!(value.is_object());
//!
//! // Leniency: an unterminated string keeps what it has.
//! assert_eq!(parse(r#""abc"#), Some(Value::String("abc".into())));
//! ```
//!
//! For callers that prefer rejection over degradation, [`parse_with_options`]
//! accepts [`ParserOptions`] with a strict flag.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod cursor;
mod error;
mod number;
mod options;
mod value;

#[cfg(test)]
mod tests;

pub use builder::{parse, parse_with_options};
pub use error::ParseError;
pub use options::ParserOptions;
pub use value::{Array, Map, Value};
