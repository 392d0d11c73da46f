//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, and the [`Number`] type that backs its numeric variant.

use indexmap::IndexMap;

/// Object members in insertion order. A repeated key keeps the position of
/// its first occurrence and the value of its last.
pub type Map = IndexMap<String, Value>;
/// Array elements in source order.
pub type Array = Vec<Value>;

/// A decoded JSON number.
///
/// Lexemes without a fraction or exponent that fit in an `i64` decode to
/// [`Number::Integer`]; everything else, including integers outside the `i64`
/// range and negative zero, decodes to [`Number::Float`]. Floats whose
/// magnitude exceeds `f64::MAX` decode to an infinity of the same sign.
///
/// # Examples
///
/// ```
/// use jsonspan::{Number, Value, parse};
///
/// assert_eq!(parse(b"42").unwrap(), Value::Number(Number::Integer(42)));
/// assert_eq!(parse(b"4.2e1").unwrap(), Value::Number(Number::Float(42.0)));
/// assert_eq!(parse(b"1e999").unwrap(), Value::Number(Number::Float(f64::INFINITY)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// An integer lexeme within `i64` range.
    Integer(i64),
    /// Any other number lexeme, rounded to the nearest `f64`.
    Float(f64),
}

impl Number {
    /// Returns the integer value, if this number was decoded as one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Integer(i) => Some(i),
            Self::Float(_) => None,
        }
    }

    /// Returns the value as an `f64`, rounding integers outside the exactly
    /// representable range.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns `true` if this number is [`Number::Integer`].
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// A JSON value as defined by [RFC 8259].
///
/// # Examples
///
/// ```
/// use jsonspan::{Value, parse};
///
/// let v = parse(br#"{"key":"value","list":[1,true,null]}"#).unwrap();
/// assert_eq!(v.get("key").and_then(Value::as_str), Some("value"));
/// assert_eq!(v.get("list").and_then(Value::as_array).map(Vec::len), Some(3));
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Bool(bool),
    /// Any number literal.
    Number(Number),
    /// A string literal with escapes expanded.
    String(String),
    /// `[ ... ]`
    Array(Array),
    /// `{ ... }`
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Integer(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::Float(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
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
        Self::String(v.to_owned())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
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
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
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
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the number if it was decoded as an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns any number as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Returns the string contents, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the members, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` if this value is an object.
    ///
    /// ```
    /// use jsonspan::parse;
    ///
    /// let v = parse(br#"{"a":1,"a":2}"#).unwrap();
    /// assert_eq!(v.get("a").and_then(|a| a.as_i64()), Some(2));
    /// assert!(v.get("b").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|m| m.get(key))
    }

    /// Looks up element `index` if this value is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }
}

// Serialization lets a conformant encoder (e.g. `serde_json`) write a decoded
// tree back out. Non-finite floats are left to the encoder's policy.
#[cfg(any(test, feature = "serde"))]
mod ser {
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    use super::{Number, Value};

    impl Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match *self {
                Number::Integer(i) => serializer.serialize_i64(i),
                Number::Float(f) => serializer.serialize_f64(f),
            }
        }
    }

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Null => serializer.serialize_unit(),
                Value::Bool(b) => serializer.serialize_bool(*b),
                Value::Number(n) => n.serialize(serializer),
                Value::String(s) => serializer.serialize_str(s),
                Value::Array(items) => {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }
                Value::Object(members) => {
                    let mut map = serializer.serialize_map(Some(members.len()))?;
                    for (k, v) in members {
                        map.serialize_entry(k, v)?;
                    }
                    map.end()
                }
            }
        }
    }
}
