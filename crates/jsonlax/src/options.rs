//! Parser configuration.

/// Configuration options for a parse.
///
/// # Default
///
/// All options default to `false`, which selects the lenient, best-effort
/// behavior.
///
/// # Examples
///
/// ```rust
/// use jsonlax::{ParseError, ParserOptions, parse_with_options};
///
/// let options = ParserOptions { strict: true };
/// let err = parse_with_options("[1, 2", options).unwrap_err();
/// assert_eq!(err, ParseError::UnclosedArray);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to reject malformed input instead of degrading.
    ///
    /// By default the parser never fails: unterminated strings, unclosed
    /// containers, unquoted keys, and unrecognized primitive tokens all
    /// degrade to a best-effort result. With `strict` enabled, each of those
    /// paths returns a [`ParseError`](crate::ParseError) instead, and the
    /// non-standard lenient extensions (`undefined`, bare words,
    /// trailing-garbage numbers) are rejected as invalid literals.
    ///
    /// Strict mode does not change what well-formed input produces.
    ///
    /// # Default
    ///
    /// `false`
    pub strict: bool,
}
