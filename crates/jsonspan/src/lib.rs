//! A strict, fast decoder for complete JSON documents ([RFC 8259]).
//!
//! [`parse`] turns a byte buffer holding exactly one JSON value into a
//! [`Value`] tree; [`validate`] performs the same checks without building
//! anything. Both reject every input outside the grammar, reporting the
//! first violation as a [`ParseError`] with an [`ErrorKind`], a byte offset,
//! and a 1-based line/column position.
//!
//! ```
//! use jsonspan::{Number, Value, parse};
//!
//! let v = parse(br#"{"name": "jsonspan", "tags": ["fast", "strict"], "n": 3}"#).unwrap();
//! assert_eq!(v.get("name").and_then(Value::as_str), Some("jsonspan"));
//! assert_eq!(v.get("n"), Some(&Value::Number(Number::Integer(3))));
//! ```
//!
//! Decoding is not incremental: the whole document must be in memory. There
//! is no global state, so concurrent calls on different inputs are
//! independent.
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

mod backend;
mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError};
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options, validate, validate_with_options};
pub use value::{Array, Map, Number, Value};
