//! Scanner: pull-based tokenizer over one complete input buffer.
//!
//! What it does
//! - Skips insignificant whitespace (space, tab, LF, CR) and yields the next
//!   structural token together with the byte offset where it starts.
//! - Punctuators are returned by value; strings and numbers are returned as
//!   spans borrowed from the input, so the scanner itself never allocates.
//! - Validates what can be validated in one forward pass: number grammar,
//!   literal spelling, raw control bytes inside strings, and termination of
//!   strings. Escape sequences are only located here; expanding and checking
//!   them is the string decoder's job.
//!
//! Invariants
//! - The input is valid UTF-8 (checked by the caller), so every span the
//!   scanner hands out starts and ends on a char boundary: each boundary is
//!   either an ASCII delimiter or the end of input.
//! - `pos` only moves forward.

use super::{
    literal_buffer::{ExpectedLiteralBuffer, Step},
    numbers::{self, NumberLexeme},
    strings::StringLexeme,
};
use crate::error::{ErrorKind, Fault};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'src> {
    Eof,
    String(StringLexeme<'src>),
    Number(NumberLexeme<'src>),
    Boolean(bool),
    Null,
    /// Must be one of: `{` `}` `[` `]` `:` `,`
    Punctuator(u8),
}

const fn whitespace_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table
}

/// Bytes a string body can contain without any special handling: everything
/// except `"`, `\`, and the C0 controls.
const fn string_plain_table() -> [bool; 256] {
    let mut table = [true; 256];
    let mut b = 0;
    while b < 0x20 {
        table[b] = false;
        b += 1;
    }
    table[b'"' as usize] = false;
    table[b'\\' as usize] = false;
    table
}

static WHITESPACE: [bool; 256] = whitespace_table();
static STRING_PLAIN: [bool; 256] = string_plain_table();

pub(crate) struct Scanner<'src> {
    text: &'src str,
    bytes: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if !WHITESPACE[b as usize] {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skips whitespace and reports the offset of the first remaining byte,
    /// if any. Used to detect trailing data after the top-level value.
    pub fn trailing(&mut self) -> Option<usize> {
        self.skip_whitespace();
        (self.pos < self.bytes.len()).then_some(self.pos)
    }

    /// Lexes the next token and returns it with its starting offset.
    pub fn next_token(&mut self) -> Result<(usize, Token<'src>), Fault> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(&b) = self.bytes.get(start) else {
            return Ok((start, Token::Eof));
        };

        let token = match b {
            b'{' | b'}' | b'[' | b']' | b':' | b',' => {
                self.pos += 1;
                Token::Punctuator(b)
            }
            b'"' => Token::String(self.scan_string()?),
            b'-' | b'0'..=b'9' => {
                let (end, lexeme) = numbers::scan(self.text, start)?;
                self.pos = end;
                Token::Number(lexeme)
            }
            b't' | b'f' | b'n' => self.scan_literal(b)?,
            _ => return Err(Fault::new(ErrorKind::UnexpectedCharacter, start)),
        };
        Ok((start, token))
    }

    /// Scans a string literal; `pos` is at the opening quote.
    fn scan_string(&mut self) -> Result<StringLexeme<'src>, Fault> {
        let content_start = self.pos + 1;
        let mut pos = content_start;
        let mut escaped = false;

        loop {
            while self.bytes.get(pos).is_some_and(|&b| STRING_PLAIN[b as usize]) {
                pos += 1;
            }
            match self.bytes.get(pos) {
                Some(b'"') => break,
                Some(b'\\') => {
                    escaped = true;
                    // The escaped byte is checked by the decoder; stepping
                    // over it keeps `\"` from closing the string.
                    pos += 2;
                }
                Some(_) => return Err(Fault::new(ErrorKind::InvalidControlCharacter, pos)),
                None => {
                    return Err(Fault::new(ErrorKind::UnexpectedEndOfInput, self.bytes.len()));
                }
            }
        }

        self.pos = pos + 1;
        Ok(StringLexeme {
            raw: &self.text[content_start..pos],
            offset: content_start,
            escaped,
        })
    }

    /// Matches `true`, `false`, or `null`; `pos` is at `first`.
    fn scan_literal(&mut self, first: u8) -> Result<Token<'src>, Fault> {
        let mut literal = ExpectedLiteralBuffer::new(first);
        self.pos += 1;
        loop {
            let Some(&b) = self.bytes.get(self.pos) else {
                return Err(Fault::new(ErrorKind::UnexpectedEndOfInput, self.pos));
            };
            match literal.step(b) {
                Step::NeedMore => self.pos += 1,
                Step::Done(token) => {
                    self.pos += 1;
                    return Ok(token);
                }
                Step::Reject => return Err(Fault::new(ErrorKind::UnexpectedCharacter, self.pos)),
            }
        }
    }
}
