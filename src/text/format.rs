use alloc::vec::Vec;
use core::fmt;

use crate::backend::{Backend, Selected};
use crate::text::TextUnit;
use crate::Uint128;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn value(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Binary => "0b",
            Self::Octal => "0o",
            Self::Decimal => "",
            Self::Hexadecimal => "0x",
        }
    }

    /// Bits per digit, for the power-of-two radices.
    const fn bits(self) -> Option<u32> {
        match self {
            Self::Binary => Some(1),
            Self::Octal => Some(3),
            Self::Decimal => None,
            Self::Hexadecimal => Some(4),
        }
    }
}

/// Where the fill goes when the text is shorter than the field.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Alignment {
    Left,
    #[default]
    Right,
    Center,
    /// Between sign and prefix on the left, digits on the right; zero padding.
    Internal,
}

/// Formatting parameters for [`Uint128::to_units`] and
/// [`Int128::to_units`][crate::Int128::to_units].
///
/// The `core::fmt` traits cover the same ground for `str` output; this exists
/// for output in other code units.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FormatSpec {
    pub radix: Radix,
    /// Minimum length in code units.
    pub width: usize,
    /// ASCII fill character.
    pub fill: u8,
    /// Uppercase hexadecimal digits (and prefix).
    pub uppercase: bool,
    /// Emit the base prefix (`0x`, `0b`, `0o`).
    pub prefix: bool,
    pub align: Alignment,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            radix: Radix::Decimal,
            width: 0,
            fill: b' ',
            uppercase: false,
            prefix: false,
            align: Alignment::Right,
        }
    }
}

impl FormatSpec {
    pub fn hexadecimal() -> Self {
        Self { radix: Radix::Hexadecimal, ..Self::default() }
    }

    pub fn with_radix(self, radix: Radix) -> Self {
        Self { radix, ..self }
    }

    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    pub fn with_fill(self, fill: u8) -> Self {
        debug_assert!(fill.is_ascii());
        Self { fill, ..self }
    }

    pub fn uppercase(self) -> Self {
        Self { uppercase: true, ..self }
    }

    pub fn with_prefix(self) -> Self {
        Self { prefix: true, ..self }
    }

    pub fn aligned(self, align: Alignment) -> Self {
        Self { align, ..self }
    }

    /// Lays out sign, prefix, digits and fill.
    pub(crate) fn render<C: TextUnit>(&self, negative: bool, digits: &[u8]) -> Vec<C> {
        let sign: &[u8] = if negative { b"-" } else { b"" };
        let prefix: &[u8] = match (self.prefix, self.uppercase, self.radix) {
            (false, _, _) => b"",
            (true, true, Radix::Hexadecimal) => b"0X",
            (true, _, radix) => radix.prefix().as_bytes(),
        };
        let length = sign.len() + prefix.len() + digits.len();
        let padding = self.width.saturating_sub(length);
        let (before, inside, after) = match self.align {
            Alignment::Left => (0, 0, padding),
            Alignment::Right => (padding, 0, 0),
            Alignment::Center => (padding / 2, 0, padding - padding / 2),
            Alignment::Internal => (0, padding, 0),
        };

        let fill = C::from_ascii(self.fill);
        let mut units = Vec::with_capacity(length + padding);
        units.extend(core::iter::repeat(fill).take(before));
        units.extend(sign.iter().chain(prefix).map(|&byte| C::from_ascii(byte)));
        units.extend(core::iter::repeat(fill).take(inside));
        units.extend(digits.iter().map(|&byte| C::from_ascii(byte)));
        units.extend(core::iter::repeat(fill).take(after));
        units
    }
}

/// ASCII digits of a value, most significant first, no prefix.
pub(crate) struct Digits {
    buffer: [u8; 128],
    start: usize,
}

/// 10^19, the largest power of ten in a limb.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

impl Digits {
    pub(crate) fn new(value: Uint128, radix: Radix, uppercase: bool) -> Self {
        let alphabet: &[u8; 16] = if uppercase { b"0123456789ABCDEF" } else { b"0123456789abcdef" };
        let mut digits = Self { buffer: [b'0'; 128], start: 128 };

        if value.is_zero() {
            digits.start -= 1;
            return digits;
        }

        match radix.bits() {
            Some(bits) => {
                let mask = (1u64 << bits) - 1;
                let mut rest = value;
                while !rest.is_zero() {
                    digits.start -= 1;
                    digits.buffer[digits.start] = alphabet[(rest.low() & mask) as usize];
                    rest >>= bits;
                }
            }
            None => {
                // peel off 19 digits at a time, then format each chunk as a u64
                let chunk = Uint128::from(DECIMAL_CHUNK);
                let mut rest = value;
                loop {
                    let result = Selected::div_mod(rest, chunk);
                    let (quotient, mut remainder) = (result.quotient, result.remainder.low());
                    let end = digits.start;
                    while remainder != 0 {
                        digits.start -= 1;
                        digits.buffer[digits.start] = alphabet[(remainder % 10) as usize];
                        remainder /= 10;
                    }
                    if quotient.is_zero() {
                        break;
                    }
                    // inner chunks keep their leading zeros
                    digits.start = end - DECIMAL_CHUNK_DIGITS;
                    rest = quotient;
                }
            }
        }
        digits
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buffer[self.start..]
    }

    pub(crate) fn as_str(&self) -> &str {
        // only ever ASCII digits
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

macro_rules! radix_trait {
    ($($trait:ident: $radix:expr, $uppercase:expr;)*) => {$(
        impl fmt::$trait for Uint128 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let radix: Radix = $radix;
                f.pad_integral(true, radix.prefix(), Digits::new(*self, radix, $uppercase).as_str())
            }
        }
    )*};
}

radix_trait! {
    Display: Radix::Decimal, false;
    LowerHex: Radix::Hexadecimal, false;
    UpperHex: Radix::Hexadecimal, true;
    Binary: Radix::Binary, false;
    Octal: Radix::Octal, false;
}
