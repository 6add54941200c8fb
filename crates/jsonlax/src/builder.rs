//! The recursive-descent value builder.
//!
//! One [`ValueBuilder`] drives one parse over one [`Cursor`]. The grammar is
//! the mutual recursion value → object | array | string | primitive, with a
//! one-character pushback standing in for lookahead: whenever a consumed
//! character turns out to belong to a different production (the first
//! character of an array element, the terminator of a primitive token), it is
//! handed back to the cursor for the next consumption call to re-deliver.
//!
//! By default nothing here can fail. Malformed input degrades to whatever has
//! been accumulated: an unclosed container returns its elements so far, an
//! unterminated string returns everything up to end of input, an unquoted
//! object key is dropped without producing an entry. Strict mode converts
//! each of those paths into a [`ParseError`].

use alloc::string::String;

use crate::{
    cursor::Cursor,
    error::ParseError,
    number::numeric_prefix,
    options::ParserOptions,
    value::{Array, Map, Value},
};

/// Characters skipped when looking for the next significant character.
const WHITESPACE: &[char] = &[' ', '\n', '\t', '\r'];
/// Characters skipped between container elements: whitespace plus the comma.
const ELEMENT_SKIP: &[char] = &[',', ' ', '\n', '\t', '\r'];
/// Characters that end a primitive token. Each belongs to the enclosing
/// container, so it is pushed back rather than consumed.
const TERMINATORS: &[char] = &[',', ']', '}'];
/// The key/value separator, discarded in until-set mode.
const KEY_SEPARATOR: &[char] = &[':'];

/// Parses `text` leniently, returning the best-effort value tree.
///
/// Returns `None` for input that is empty, all whitespace, or begins with a
/// closing delimiter. This entry point cannot fail; malformed input returns a
/// partial or semantically degraded tree instead.
///
/// # Examples
///
/// ```
/// use jsonlax::{Value, parse};
///
/// let v = parse(r#"{"key": [null, true, 3.14]}"#).unwrap();
/// assert!(v.is_object());
///
/// // Unclosed containers keep what they have accumulated.
/// assert_eq!(
///     parse("[1, 2"),
///     Some(Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])),
/// );
/// ```
#[must_use]
pub fn parse(text: &str) -> Option<Value> {
    match parse_with_options(text, ParserOptions::default()) {
        Ok(value) => value,
        // Lenient parses never produce an error.
        Err(_) => None,
    }
}

/// Parses `text` with explicit [`ParserOptions`].
///
/// With the default (lenient) options the result is always `Ok` and matches
/// [`parse`]. With [`strict`](ParserOptions::strict) enabled, the degradation
/// paths described on that option return errors instead.
///
/// # Errors
///
/// Only in strict mode; see [`ParseError`] for the conditions.
pub fn parse_with_options(
    text: &str,
    options: ParserOptions,
) -> Result<Option<Value>, ParseError> {
    ValueBuilder::new(text, options).build_value()
}

/// The recursive grammar over one cursor.
#[derive(Debug)]
pub(crate) struct ValueBuilder<'a> {
    cursor: Cursor<'a>,
    strict: bool,
}

impl<'a> ValueBuilder<'a> {
    pub(crate) fn new(text: &'a str, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(text),
            strict: options.strict,
        }
    }

    /// Builds one value, dispatching on the next significant character.
    ///
    /// `None` means "no value": the input was exhausted, or the first
    /// significant character was a closing delimiter. Containers store
    /// [`Value::Undefined`] when a recursive call produces no value.
    pub(crate) fn build_value(&mut self) -> Result<Option<Value>, ParseError> {
        match self.cursor.next_skipping(WHITESPACE) {
            Some(c @ ('}' | ']')) => {
                if self.strict {
                    return Err(ParseError::UnexpectedCharacter(c));
                }
                Ok(None)
            }
            Some('"') => Ok(Some(Value::String(self.build_string()?))),
            Some('{') => Ok(Some(Value::Object(self.build_object()?))),
            Some('[') => Ok(Some(Value::Array(self.build_array()?))),
            Some(c) => Ok(Some(self.build_primitive(c)?)),
            None => {
                if self.strict {
                    return Err(ParseError::UnexpectedEof);
                }
                Ok(None)
            }
        }
    }

    /// Accumulates string content up to the closing quote, then unescapes.
    ///
    /// The terminator rule looks exactly one character back: a `"` ends the
    /// string unless the previous character was `\`. A string whose source
    /// text ends in `\\"` is therefore misread as an escaped quote; that
    /// mirrors the reference behavior and is left as is. Leniently, running
    /// out of input ends the string silently.
    fn build_string(&mut self) -> Result<String, ParseError> {
        let mut raw = String::new();
        let mut prev = None;
        let mut terminated = false;

        while let Some(c) = self.cursor.next() {
            if c == '"' && prev != Some('\\') {
                terminated = true;
                break;
            }
            raw.push(c);
            prev = Some(c);
        }
        if self.strict && !terminated {
            return Err(ParseError::UnterminatedString);
        }
        Ok(unescape(&raw))
    }

    /// Builds the elements of an array, the opening `[` already consumed.
    fn build_array(&mut self) -> Result<Array, ParseError> {
        let mut out = Array::new();
        let mut next = self.cursor.next_skipping(WHITESPACE);

        loop {
            match next {
                Some(']') => break,
                Some(c) => {
                    // The element's first character was consumed while
                    // looking for `]`; re-offer it to build_value.
                    self.cursor.push_back(c);
                    let value = self.build_value()?;
                    out.push(value.unwrap_or(Value::Undefined));
                    next = self.cursor.next_skipping(ELEMENT_SKIP);
                }
                None => {
                    if self.strict {
                        return Err(ParseError::UnclosedArray);
                    }
                    break;
                }
            }
        }
        Ok(out)
    }

    /// Builds the entries of an object, the opening `{` already consumed.
    ///
    /// Leniently, a key position holding anything other than `"` is dropped
    /// without producing an entry. Duplicate keys overwrite: last write wins.
    fn build_object(&mut self) -> Result<Map, ParseError> {
        let mut out = Map::new();
        let mut next = self.cursor.next_skipping(WHITESPACE);

        loop {
            match next {
                Some('}') => break,
                Some('"') => {
                    let key = self.build_string()?;
                    if self.cursor.next_until(KEY_SEPARATOR).is_none() && self.strict {
                        return Err(ParseError::MissingKeySeparator);
                    }
                    let value = self.build_value()?;
                    out.insert(key, value.unwrap_or(Value::Undefined));
                    next = self.cursor.next_skipping(ELEMENT_SKIP);
                }
                Some(c) => {
                    if self.strict {
                        return Err(ParseError::ExpectedObjectKey(c));
                    }
                    next = self.cursor.next_skipping(WHITESPACE);
                }
                None => {
                    if self.strict {
                        return Err(ParseError::UnclosedObject);
                    }
                    break;
                }
            }
        }
        Ok(out)
    }

    /// Accumulates a primitive token starting at `first`, then coerces it.
    fn build_primitive(&mut self, first: char) -> Result<Value, ParseError> {
        let mut token = String::new();
        token.push(first);

        while let Some(c) = self.cursor.next() {
            if TERMINATORS.contains(&c) {
                self.cursor.push_back(c);
                break;
            }
            token.push(c);
        }
        self.coerce(token)
    }

    /// Coerces a raw token, first match wins: finite number, `true`,
    /// `false`, `null`, `undefined`, bare-word string fallback.
    fn coerce(&self, token: String) -> Result<Value, ParseError> {
        if token.is_empty() {
            return Ok(Value::String(token));
        }
        if self.strict {
            return coerce_strict(token);
        }
        if let Some((n, _)) = numeric_prefix(&token) {
            if n.is_finite() {
                return Ok(Value::Number(n));
            }
        }
        Ok(match token.as_str() {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            "null" => Value::Null,
            "undefined" => Value::Undefined,
            _ => Value::String(token),
        })
    }
}

/// Strict coercion: the whole token must be a finite number or one of the
/// standard keyword literals. Trailing whitespace picked up before the
/// terminator is not part of the token.
fn coerce_strict(token: String) -> Result<Value, ParseError> {
    let literal = token.trim_end_matches([' ', '\n', '\t', '\r']);
    if let Some((n, len)) = numeric_prefix(literal) {
        if len == literal.len() && n.is_finite() {
            return Ok(Value::Number(n));
        }
    }
    match literal {
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        "null" => Ok(Value::Null),
        _ => Err(ParseError::InvalidLiteral(literal.into())),
    }
}

/// Replaces the recognized two-character escape sequences in one
/// left-to-right pass.
///
/// A single pass cannot re-interpret its own output, unlike sequential
/// global substitutions: in `\\n` the leading `\\` collapses to a backslash
/// and the `n` stays a literal `n`. Unrecognized escapes and a trailing lone
/// backslash pass through unchanged.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('b') => {
                chars.next();
                out.push('\u{8}');
            }
            Some('r') => {
                chars.next();
                out.push('\r');
            }
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some('f') => {
                chars.next();
                out.push('\u{c}');
            }
            Some('"') => {
                chars.next();
                out.push('"');
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            _ => out.push('\\'),
        }
    }
    out
}
