//! String literal decoding.
//!
//! The scanner only locates a string: it finds the closing quote, rejects raw
//! control bytes, and records whether a backslash appeared. Strings without
//! escapes are copied verbatim. Escaped strings go through a small state
//! machine:
//!
//! ```text
//! Normal --'\'--> Escape --["\/bfnrt]--> Normal
//!                 Escape --'u'--> UnicodeEscape --4 hex digits--> Normal
//! ```
//!
//! Any other byte in `Escape` or `UnicodeEscape` is a terminal
//! `InvalidEscape`. A high surrogate must be followed immediately by a
//! `\u` low surrogate; anything else is `LoneSurrogate`, reported at the
//! backslash of the unpaired escape.

use super::escape_buffer::UnicodeEscapeBuffer;
use crate::error::{ErrorKind, Fault};

/// The text between the quotes of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StringLexeme<'src> {
    /// Raw source text, escapes not yet expanded.
    pub raw: &'src str,
    /// Byte offset of `raw` in the input.
    pub offset: usize,
    /// Whether `raw` contains at least one backslash.
    pub escaped: bool,
}

/// Destination for decoded text. Validation decodes into [`Discard`].
pub(crate) trait TextSink {
    fn push_str(&mut self, s: &str);
    fn push_char(&mut self, ch: char);
}

impl TextSink for String {
    #[inline]
    fn push_str(&mut self, s: &str) {
        String::push_str(self, s);
    }

    #[inline]
    fn push_char(&mut self, ch: char) {
        self.push(ch);
    }
}

/// Checks escapes without keeping the output.
pub(crate) struct Discard;

impl TextSink for Discard {
    #[inline]
    fn push_str(&mut self, _: &str) {}

    #[inline]
    fn push_char(&mut self, _: char) {}
}

/// Decodes `lexeme` into an owned string.
pub(crate) fn decode(lexeme: StringLexeme<'_>) -> Result<String, Fault> {
    if !lexeme.escaped {
        return Ok(lexeme.raw.to_owned());
    }
    let mut out = String::with_capacity(lexeme.raw.len());
    unescape_into(lexeme, &mut out)?;
    Ok(out)
}

/// Reports the first escape error in `lexeme`, if any.
pub(crate) fn validate(lexeme: StringLexeme<'_>) -> Result<(), Fault> {
    if lexeme.escaped {
        unescape_into(lexeme, &mut Discard)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Escape,
    UnicodeEscape,
}

fn unescape_into<S: TextSink>(lexeme: StringLexeme<'_>, out: &mut S) -> Result<(), Fault> {
    let raw = lexeme.raw;
    let bytes = raw.as_bytes();
    let at = |i: usize, kind: ErrorKind| Fault::new(kind, lexeme.offset + i);

    let mut state = State::Normal;
    let mut hex = UnicodeEscapeBuffer::new();
    // Index of the backslash that started the current escape.
    let mut escape_start = 0;
    // A high surrogate waiting for its low half, and where its escape began.
    let mut pending_high: Option<(u16, usize)> = None;

    let mut i = 0;
    while i < bytes.len() {
        match state {
            State::Normal => {
                let next = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\\')
                    .map_or(bytes.len(), |p| i + p);
                if next > i {
                    if let Some((_, high_at)) = pending_high {
                        return Err(at(high_at, ErrorKind::LoneSurrogate));
                    }
                    // Both ends sit on ASCII bytes (or the end), so these are
                    // char boundaries.
                    out.push_str(&raw[i..next]);
                }
                if next == bytes.len() {
                    break;
                }
                escape_start = next;
                state = State::Escape;
                i = next + 1;
            }
            State::Escape => {
                let b = bytes[i];
                if b == b'u' {
                    state = State::UnicodeEscape;
                    i += 1;
                    continue;
                }
                if let Some((_, high_at)) = pending_high {
                    return Err(at(high_at, ErrorKind::LoneSurrogate));
                }
                let ch = match b {
                    b'"' => '"',
                    b'\\' => '\\',
                    b'/' => '/',
                    b'b' => '\u{0008}',
                    b'f' => '\u{000C}',
                    b'n' => '\n',
                    b'r' => '\r',
                    b't' => '\t',
                    _ => return Err(at(i, ErrorKind::InvalidEscape)),
                };
                out.push_char(ch);
                state = State::Normal;
                i += 1;
            }
            State::UnicodeEscape => {
                match hex.feed(bytes[i]).map_err(|kind| at(i, kind))? {
                    None => {}
                    Some(unit) => {
                        state = State::Normal;
                        pending_high = combine(pending_high, unit, escape_start, out)
                            .map_err(|offset| at(offset, ErrorKind::LoneSurrogate))?;
                    }
                }
                i += 1;
            }
        }
    }

    match state {
        State::Normal => match pending_high {
            Some((_, high_at)) => Err(at(high_at, ErrorKind::LoneSurrogate)),
            None => Ok(()),
        },
        // The closing quote arrived mid-escape.
        State::Escape | State::UnicodeEscape => Err(at(bytes.len(), ErrorKind::InvalidEscape)),
    }
}

/// Folds one decoded code unit into the output, returning the new pending
/// high surrogate. `Err` carries the index of the unpaired escape.
fn combine<S: TextSink>(
    pending_high: Option<(u16, usize)>,
    unit: u16,
    escape_start: usize,
    out: &mut S,
) -> Result<Option<(u16, usize)>, usize> {
    match (pending_high, unit) {
        (Some((high, high_at)), 0xDC00..=0xDFFF) => {
            let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
            let ch = char::from_u32(code).ok_or(high_at)?;
            out.push_char(ch);
            Ok(None)
        }
        (Some((_, high_at)), _) => Err(high_at),
        (None, 0xD800..=0xDBFF) => Ok(Some((unit, escape_start))),
        (None, 0xDC00..=0xDFFF) => Err(escape_start),
        (None, _) => {
            let ch = char::from_u32(u32::from(unit)).ok_or(escape_start)?;
            out.push_char(ch);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{StringLexeme, decode, validate};
    use crate::error::ErrorKind;

    fn lexeme(raw: &str) -> StringLexeme<'_> {
        StringLexeme {
            raw,
            offset: 1,
            escaped: raw.contains('\\'),
        }
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case(r"a\nb", "a\nb")]
    #[case(r#"\"\\\/\b\f\n\r\t"#, "\"\\/\u{8}\u{c}\n\r\t")]
    #[case(r"\u0041", "A")]
    #[case(r"\u00e9t\u00C9", "étÉ")]
    #[case(r"\uD83D\uDE00", "\u{1F600}")]
    #[case(r"x\uD834\uDD1Ey", "x\u{1D11E}y")]
    #[case("日本\\t語", "日本\t語")]
    fn decodes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(decode(lexeme(raw)).unwrap(), expected);
        assert!(validate(lexeme(raw)).is_ok());
    }

    #[rstest]
    #[case(r"\x", ErrorKind::InvalidEscape, 2)]
    #[case(r"ab\u12G4", ErrorKind::InvalidEscape, 7)]
    #[case(r"\u12", ErrorKind::InvalidEscape, 5)]
    #[case(r"\uD83D", ErrorKind::LoneSurrogate, 1)]
    #[case(r"\uDE00", ErrorKind::LoneSurrogate, 1)]
    #[case(r"a\uD83Dx", ErrorKind::LoneSurrogate, 2)]
    #[case(r"\uD83D\n", ErrorKind::LoneSurrogate, 1)]
    #[case(r"\uD83DA", ErrorKind::LoneSurrogate, 1)]
    #[case(r"\uD83D\uD83D", ErrorKind::LoneSurrogate, 1)]
    fn rejects(#[case] raw: &str, #[case] kind: ErrorKind, #[case] offset: usize) {
        let fault = decode(lexeme(raw)).unwrap_err();
        assert_eq!((fault.kind, fault.offset), (kind, offset));
        assert_eq!(validate(lexeme(raw)).unwrap_err(), fault);
    }
}
