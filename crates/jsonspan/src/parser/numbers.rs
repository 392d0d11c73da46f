//! Number lexeme scanning and decoding.
//!
//! Scanning validates `-?(0|[1-9]\d*)(\.\d+)?([eE][+-]?\d+)?` and classifies
//! the lexeme; decoding turns a validated lexeme into a [`Number`].

use core::num::ParseFloatError;

use crate::{
    error::{ErrorKind, Fault},
    value::Number,
};

/// Lexical hint so decoding can take the integer fast path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Float(&'a str),   // has '.' or exponent
}

/// Scans the number starting at `start` and returns the offset one past its
/// last byte together with the classified lexeme.
pub(crate) fn scan(text: &str, start: usize) -> Result<(usize, NumberLexeme<'_>), Fault> {
    let bytes = text.as_bytes();
    let mut pos = start;
    let mut integer = true;

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => {
            pos += 1;
            if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                return Err(Fault::new(ErrorKind::InvalidNumber, pos));
            }
        }
        Some(b'1'..=b'9') => pos = skip_digits(bytes, pos + 1),
        _ => return Err(Fault::new(ErrorKind::InvalidNumber, pos)),
    }

    if bytes.get(pos) == Some(&b'.') {
        integer = false;
        pos = require_digits(bytes, pos + 1)?;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        integer = false;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        pos = require_digits(bytes, pos)?;
    }

    let lexeme = &text[start..pos];
    let lexeme = if integer {
        NumberLexeme::Integer(lexeme)
    } else {
        NumberLexeme::Float(lexeme)
    };
    Ok((pos, lexeme))
}

#[inline]
fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

#[inline]
fn require_digits(bytes: &[u8], pos: usize) -> Result<usize, Fault> {
    let end = skip_digits(bytes, pos);
    if end == pos {
        Err(Fault::new(ErrorKind::InvalidNumber, pos))
    } else {
        Ok(end)
    }
}

/// Decodes a lexeme produced by [`scan`].
///
/// Integers that fit in `i64` stay exact. Everything else goes through the
/// correctly rounded `f64` parser, which saturates to `±inf` on overflow and
/// flushes to `±0.0` on underflow.
pub(crate) fn decode(lexeme: NumberLexeme<'_>) -> Result<Number, ParseFloatError> {
    match lexeme {
        NumberLexeme::Integer(s) => match decode_integer(s) {
            Some(n) => Ok(n),
            None => s.parse().map(Number::Float),
        },
        NumberLexeme::Float(s) => s.parse().map(Number::Float),
    }
}

/// `None` when the magnitude does not fit; the caller falls back to `f64`.
fn decode_integer(s: &str) -> Option<Number> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, s),
    };

    let mut magnitude: u64 = 0;
    for b in digits.bytes() {
        magnitude = magnitude.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }

    if negative {
        // `-0` keeps its sign.
        if magnitude == 0 {
            return Some(Number::Float(-0.0));
        }
        0_i64.checked_sub_unsigned(magnitude).map(Number::Integer)
    } else {
        i64::try_from(magnitude).ok().map(Number::Integer)
    }
}
