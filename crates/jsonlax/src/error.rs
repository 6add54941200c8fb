//! Strict-mode parse errors.
//!
//! The lenient default has no failure modes at all; every degenerate input
//! degrades to a best-effort value. These variants exist only for
//! [`ParserOptions::strict`](crate::ParserOptions::strict), which turns each
//! degradation path into an explicit error.

use alloc::string::String;

use thiserror::Error;

/// An error produced when parsing with [`strict`](crate::ParserOptions::strict)
/// mode enabled.
///
/// No positional information is attached; the parser does not track lines or
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A closing delimiter appeared where a value was expected.
    #[error("unexpected `{0}` where a value was expected")]
    UnexpectedCharacter(char),
    /// A key position inside an object held something other than a quoted
    /// string.
    #[error("expected a quoted object key, found `{0}`")]
    ExpectedObjectKey(char),
    /// The input ended before the `:` separating a key from its value.
    #[error("missing `:` after object key")]
    MissingKeySeparator,
    /// The input ended inside an object, before its `}`.
    #[error("unclosed object")]
    UnclosedObject,
    /// The input ended inside an array, before its `]`.
    #[error("unclosed array")]
    UnclosedArray,
    /// A primitive token that is not a number, `true`, `false`, or `null`.
    ///
    /// Strict mode rejects the lenient extensions here: bare words, the
    /// `undefined` literal, and numeric tokens with trailing garbage.
    #[error("`{0}` is not a valid literal")]
    InvalidLiteral(String),
    /// The input ended where a value was required.
    #[error("unexpected end of input")]
    UnexpectedEof,
}
