use thiserror::Error;

/// The grammar or encoding rule an input violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A byte that cannot start any token.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// Input ended inside a value, or contained no value at all.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Non-whitespace bytes after the top-level value.
    #[error("trailing data after JSON value")]
    TrailingData,
    /// An unknown escape letter, or a non-hex digit in `\uXXXX`.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A `\u` escape naming half of a surrogate pair without its partner.
    #[error("unpaired UTF-16 surrogate in unicode escape")]
    LoneSurrogate,
    /// A raw byte below `0x20` inside a string literal.
    #[error("unescaped control character in string")]
    InvalidControlCharacter,
    /// The input is not well-formed UTF-8.
    #[error("invalid UTF-8")]
    InvalidEncoding,
    /// More unclosed containers than [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting too deep")]
    NestingTooDeep,
    /// A number lexeme that does not follow the JSON number grammar.
    #[error("invalid number")]
    InvalidNumber,
    /// An object key not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// A container element not followed by `,` or the matching closer.
    #[error("expected ',' or closing bracket")]
    ExpectedCommaOrEnd,
    /// A structural token where a value was required.
    #[error("expected value")]
    ExpectedValue,
    /// An object member that does not start with a string key.
    #[error("expected string object key")]
    ExpectedObjectKey,
}

/// A decoding failure: what went wrong and where.
///
/// `offset` is a byte offset into the input. `line` and `column` are 1-based
/// and derived from it; `column` counts characters, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
    /// 1-based line of the offending input.
    pub line: usize,
    /// 1-based character column of the offending input.
    pub column: usize,
}

impl ParseError {
    /// Builds an error at `offset`, resolving line and column against `input`.
    ///
    /// Position resolution walks the prefix of the input once, so it is only
    /// paid on the failure path.
    pub(crate) fn at(input: &[u8], offset: usize, kind: ErrorKind) -> Self {
        let offset = offset.min(input.len());
        let (line, column) = line_column(&input[..offset]);
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    /// The violated rule.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset of the offending input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// A failure located by byte offset only.
///
/// The scanner and decoders report these; they become a [`ParseError`] once,
/// at the API boundary, where the input is at hand to resolve the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fault {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl Fault {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub(crate) fn into_error(self, input: &[u8]) -> ParseError {
        ParseError::at(input, self.offset, self.kind)
    }
}

/// Counts lines and characters in `prefix`. UTF-8 continuation bytes do not
/// advance the column, so a prefix that ends inside malformed input still
/// yields a sensible position.
fn line_column(prefix: &[u8]) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for &b in prefix {
        match b {
            b'\n' => {
                line += 1;
                column = 1;
            }
            0x80..=0xBF => {}
            _ => column += 1,
        }
    }
    (line, column)
}
