//! Recursive-descent decoding of one complete JSON document.
//!
//! The [`Scanner`] turns bytes into tokens; [`Parser`] applies the grammar
//! and hands every scalar and container to a [`ValueCtx`], which decides
//! what gets built. [`parse`] and [`validate`] are the same grammar with
//! different contexts, so they accept exactly the same inputs and report
//! the same first error.
//!
//! Errors are first-error-wins: the parser stops at the first violation and
//! never attempts recovery.

mod escape_buffer;
mod literal_buffer;
pub(crate) mod numbers;
mod scanner;
pub(crate) mod strings;

pub(crate) use numbers::NumberLexeme;
use scanner::{Scanner, Token};
pub(crate) use strings::StringLexeme;

use crate::{
    ParserOptions, Value,
    backend::{RustContext, ValidateContext, ValueCtx},
    error::{ErrorKind, Fault, ParseError},
};

/// Decodes `input` into a [`Value`] using the default [`ParserOptions`].
///
/// The input must hold exactly one JSON value, optionally surrounded by
/// whitespace. It is checked to be well-formed UTF-8 before anything else,
/// so an encoding error is reported even when a grammar error would come
/// earlier in the text.
///
/// # Errors
///
/// Returns the first violation found, with its byte offset and line/column
/// position.
///
/// # Examples
///
/// ```
/// use jsonspan::{ErrorKind, Value, parse};
///
/// let v = parse(b" [1, \"two\", {\"three\": null}] ").unwrap();
/// assert_eq!(v.get_index(1), Some(&Value::from("two")));
///
/// let err = parse(b"[1, 2,]").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ExpectedValue);
/// assert_eq!(err.offset(), 6);
/// ```
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    parse_with_options(input, &ParserOptions::default())
}

/// Like [`parse`], with explicit [`ParserOptions`].
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_options(input: &[u8], options: &ParserOptions) -> Result<Value, ParseError> {
    run(input, options, RustContext)
}

/// Checks that `input` is a single well-formed JSON document without
/// building a [`Value`].
///
/// Accepts exactly the inputs [`parse`] accepts and reports the same error
/// for the ones it rejects.
///
/// # Errors
///
/// See [`parse`].
///
/// # Examples
///
/// ```
/// use jsonspan::{ErrorKind, validate};
///
/// assert!(validate(br#"{"a": [true, false]}"#).is_ok());
/// assert_eq!(validate(br#""\uDE00""#).unwrap_err().kind(), ErrorKind::LoneSurrogate);
/// ```
pub fn validate(input: &[u8]) -> Result<(), ParseError> {
    validate_with_options(input, &ParserOptions::default())
}

/// Like [`validate`], with explicit [`ParserOptions`].
///
/// # Errors
///
/// See [`parse`].
pub fn validate_with_options(input: &[u8], options: &ParserOptions) -> Result<(), ParseError> {
    run(input, options, ValidateContext)
}

fn run<C: ValueCtx>(input: &[u8], options: &ParserOptions, ctx: C) -> Result<C::Value, ParseError> {
    let text = core::str::from_utf8(input)
        .map_err(|e| ParseError::at(input, e.valid_up_to(), ErrorKind::InvalidEncoding))?;
    Parser::new(text, ctx, options.max_depth)
        .document()
        .map_err(|fault| fault.into_error(input))
}

struct Parser<'src, C> {
    scanner: Scanner<'src>,
    ctx: C,
    max_depth: usize,
    depth: usize,
}

impl<'src, C: ValueCtx> Parser<'src, C> {
    fn new(text: &'src str, ctx: C, max_depth: usize) -> Self {
        Self {
            scanner: Scanner::new(text),
            ctx,
            max_depth,
            depth: 0,
        }
    }

    fn document(mut self) -> Result<C::Value, Fault> {
        let (at, token) = self.scanner.next_token()?;
        let value = self.value(at, token)?;
        match self.scanner.trailing() {
            Some(at) => Err(Fault::new(ErrorKind::TrailingData, at)),
            None => Ok(value),
        }
    }

    /// Builds the value that starts with `token`.
    fn value(&mut self, at: usize, token: Token<'src>) -> Result<C::Value, Fault> {
        match token {
            Token::Null => Ok(self.ctx.value_null()),
            Token::Boolean(b) => Ok(self.ctx.value_bool(b)),
            Token::Number(n) => self.ctx.value_num(at, n),
            Token::String(s) => self.ctx.value_str(s),
            Token::Punctuator(b'[') => self.array(at),
            Token::Punctuator(b'{') => self.object(at),
            Token::Punctuator(_) => Err(Fault::new(ErrorKind::ExpectedValue, at)),
            Token::Eof => Err(Fault::new(ErrorKind::UnexpectedEndOfInput, at)),
        }
    }

    /// Accounts for one more open container starting at `at`.
    fn enter(&mut self, at: usize) -> Result<(), Fault> {
        if self.depth >= self.max_depth {
            return Err(Fault::new(ErrorKind::NestingTooDeep, at));
        }
        self.depth += 1;
        Ok(())
    }

    /// `at` is the offset of the opening `[`.
    fn array(&mut self, at: usize) -> Result<C::Value, Fault> {
        self.enter(at)?;
        let mut arr = self.ctx.array_new();

        let (mut at, mut token) = self.scanner.next_token()?;
        if token == Token::Punctuator(b']') {
            self.depth -= 1;
            return Ok(self.ctx.array_finish(arr));
        }

        loop {
            let item = self.value(at, token)?;
            self.ctx.array_push(&mut arr, item);

            let (sep_at, sep) = self.scanner.next_token()?;
            match sep {
                Token::Punctuator(b',') => (at, token) = self.scanner.next_token()?,
                Token::Punctuator(b']') => break,
                Token::Eof => return Err(Fault::new(ErrorKind::UnexpectedEndOfInput, sep_at)),
                _ => return Err(Fault::new(ErrorKind::ExpectedCommaOrEnd, sep_at)),
            }
        }

        self.depth -= 1;
        Ok(self.ctx.array_finish(arr))
    }

    /// `at` is the offset of the opening `{`.
    fn object(&mut self, at: usize) -> Result<C::Value, Fault> {
        self.enter(at)?;
        let mut obj = self.ctx.object_new();

        let (mut at, mut token) = self.scanner.next_token()?;
        if token == Token::Punctuator(b'}') {
            self.depth -= 1;
            return Ok(self.ctx.object_finish(obj));
        }

        loop {
            let key = match token {
                Token::String(s) => self.ctx.object_key(s)?,
                Token::Eof => return Err(Fault::new(ErrorKind::UnexpectedEndOfInput, at)),
                _ => return Err(Fault::new(ErrorKind::ExpectedObjectKey, at)),
            };

            let (colon_at, colon) = self.scanner.next_token()?;
            match colon {
                Token::Punctuator(b':') => {}
                Token::Eof => return Err(Fault::new(ErrorKind::UnexpectedEndOfInput, colon_at)),
                _ => return Err(Fault::new(ErrorKind::ExpectedColon, colon_at)),
            }

            let (value_at, value_token) = self.scanner.next_token()?;
            let value = self.value(value_at, value_token)?;
            self.ctx.object_insert(&mut obj, key, value);

            let (sep_at, sep) = self.scanner.next_token()?;
            match sep {
                Token::Punctuator(b',') => (at, token) = self.scanner.next_token()?,
                Token::Punctuator(b'}') => break,
                Token::Eof => return Err(Fault::new(ErrorKind::UnexpectedEndOfInput, sep_at)),
                _ => return Err(Fault::new(ErrorKind::ExpectedCommaOrEnd, sep_at)),
            }
        }

        self.depth -= 1;
        Ok(self.ctx.object_finish(obj))
    }
}
