//! Text in, text out, for any ASCII-compatible code unit.
//!
//! Numbers only ever consist of ASCII, so parsing and formatting are written once
//! against [`TextUnit`] and work the same on UTF-8 bytes, UTF-16 and UTF-32 code
//! units, and `char`s.
//!
//! Accepted input: optional surrounding padding (ASCII whitespace or `_`), then either
//! a `0x`/`0X` prefix followed by hexadecimal digits in either case, or decimal
//! digits. Underscores between digits are ignored, leading zeros are fine.
//! [`Int128`][crate::Int128] additionally takes a leading `-` or `+`. Padding may
//! also sit right after the sign or the prefix, which is where internally aligned
//! output puts its fill, so everything [`FormatSpec`] produces with whitespace or
//! separator fill parses back, and so does zero fill between sign and digits.

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::{ParseError, Uint128};

mod format;
pub(crate) mod parse;

pub use format::{Alignment, FormatSpec, Radix};
pub(crate) use format::Digits;
pub(crate) use parse::Accumulator;

/// Ignored between digits.
pub const SEPARATOR: u8 = b'_';

/// A code unit of some text encoding in which ASCII is encoded as itself.
pub trait TextUnit: Copy {
    fn from_ascii(byte: u8) -> Self;

    /// The unit as ASCII, `None` for anything else.
    fn to_ascii(self) -> Option<u8>;

    /// For error messages; anything that is not a scalar value on its own
    /// (a surrogate, a byte of a multi-byte sequence) is replaced.
    fn to_char_lossy(self) -> char;
}

impl TextUnit for u8 {
    fn from_ascii(byte: u8) -> Self {
        byte
    }

    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then(|| self)
    }

    fn to_char_lossy(self) -> char {
        if self.is_ascii() { self as char } else { char::REPLACEMENT_CHARACTER }
    }
}

impl TextUnit for u16 {
    fn from_ascii(byte: u8) -> Self {
        byte as u16
    }

    fn to_ascii(self) -> Option<u8> {
        (self < 0x80).then(|| self as u8)
    }

    fn to_char_lossy(self) -> char {
        char::from_u32(self as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl TextUnit for u32 {
    fn from_ascii(byte: u8) -> Self {
        byte as u32
    }

    fn to_ascii(self) -> Option<u8> {
        (self < 0x80).then(|| self as u8)
    }

    fn to_char_lossy(self) -> char {
        char::from_u32(self).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl TextUnit for char {
    fn from_ascii(byte: u8) -> Self {
        byte as char
    }

    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then(|| self as u8)
    }

    fn to_char_lossy(self) -> char {
        self
    }
}

pub(crate) fn lossy_text<C: TextUnit>(units: &[C]) -> String {
    units.iter().map(|unit| unit.to_char_lossy()).collect()
}

impl Uint128 {
    /// Parses decimal or `0x`-prefixed hexadecimal text in any [`TextUnit`].
    ///
    /// ```
    /// # use uint128::Uint128;
    /// let wide: Vec<u16> = "0xFFFF_FFFF".encode_utf16().collect();
    /// assert_eq!(Uint128::parse_units(&wide), Ok(Uint128::from(u32::MAX)));
    /// ```
    pub fn parse_units<C: TextUnit>(units: &[C]) -> Result<Self, ParseError> {
        parse::unsigned(units).map_err(|kind| ParseError::new(kind, lossy_text(units)))
    }

    /// Formats into any [`TextUnit`]; the result parses back to `self`
    /// when the radix is decimal, or hexadecimal with the prefix.
    pub fn to_units<C: TextUnit>(&self, spec: &FormatSpec) -> Vec<C> {
        spec.render(false, Digits::new(*self, spec.radix, spec.uppercase).as_bytes())
    }
}

impl FromStr for Uint128 {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, ParseError> {
        Self::parse_units(text.as_bytes())
    }
}
