//! Dynamic value types.
//!
//! This module defines the [`Value`] enum, the tagged union every parse
//! produces: the six JSON data types plus the non-standard `Undefined`
//! extension.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// The mapping type used for [`Value::Object`].
pub type Map = BTreeMap<String, Value>;
/// The sequence type used for [`Value::Array`].
pub type Array = Vec<Value>;

/// A dynamic value built from JSON-like text.
///
/// `Value` covers the data types of [RFC 8259] plus `Undefined`, which the
/// parser produces for the bare token `undefined`. `Undefined` is a distinct
/// variant, not an alias of `Null`; the two compare unequal.
///
/// # Examples
///
/// ```
/// use jsonlax::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert!(v.is_object());
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
// Enable serde support for tests and when the optional `serde` feature is
// activated by downstream crates.  The `cfg_attr` conditional keeps the core
// crate free of a serde dependency in normal builds.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// The bare token `undefined`, a non-standard extension.
    Undefined,
    /// `true` or `false`.
    Boolean(bool),
    /// Any numeric token, always double-precision.
    Number(f64),
    /// A quoted string, or a bare word that coerced to nothing else.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A mapping from string keys to values.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonlax::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Undefined.is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Undefined`].
    ///
    /// [`Undefined`]: Value::Undefined
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonlax::Value;
    ///
    /// assert!(Value::Undefined.is_undefined());
    /// assert!(!Value::Null.is_undefined());
    /// ```
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonlax::{Map, Value};
    ///
    /// assert!(Value::Object(Map::new()).is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }
}
