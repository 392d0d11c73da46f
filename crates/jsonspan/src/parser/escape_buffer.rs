//! Decoding of the four hex digits of a `\uXXXX` escape.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates exactly four ASCII
//! hexadecimal digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit as they
//! arrive. After the fourth digit the accumulator resets automatically to
//! begin a new escape. Pairing surrogate code units is left to the caller.

use crate::error::ErrorKind;

#[derive(Debug, Default)]
/// Accumulates up to four hexadecimal digits into one UTF-16 code unit.
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    /// Creates a new, empty `UnicodeEscapeBuffer`.
    pub fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Clears any accumulated digits, returning the buffer to its initial
    /// state.
    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(b: u8) -> Option<u16> {
        match b {
            b'0'..=b'9' => Some(u16::from(b - b'0')),
            b'a'..=b'f' => Some(u16::from(b - b'a' + 10)),
            b'A'..=b'F' => Some(u16::from(b - b'A' + 10)),
            _ => None,
        }
    }

    /// Feeds a single byte into the buffer.
    ///
    /// - Returns `Ok(None)` if fewer than four digits have been provided so
    ///   far.
    /// - Returns `Ok(Some(unit))` once the fourth digit arrives, and resets.
    /// - Returns `Err(ErrorKind::InvalidEscape)` if `b` is not an ASCII hex
    ///   digit. The buffer is reset.
    pub fn feed(&mut self, b: u8) -> Result<Option<u16>, ErrorKind> {
        let Some(d) = Self::hex_val(b) else {
            self.reset();
            return Err(ErrorKind::InvalidEscape);
        };

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.reset();
        Ok(Some(unit))
    }
}
