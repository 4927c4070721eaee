use crate::text::{TextUnit, SEPARATOR};
use crate::{Int128, ParseErrorKind, Uint128};

type Result<T> = core::result::Result<T, ParseErrorKind>;

/// Value of an ASCII digit in radix 10 or 16.
pub(crate) const fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => return None,
    };
    if (value as u32) < radix { Some(value as u32) } else { None }
}

/// Digit-by-digit accumulation of a value, shared by the runtime parser and the
/// compile-time literal parser, hence `const`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Accumulator {
    value: Uint128,
    radix: u32,
    digits: u32,
    leading_zero: bool,
    strict: bool,
}

impl Accumulator {
    /// Zero padding is accepted, as produced by zero-filled formatting.
    pub(crate) const fn new(radix: u32) -> Self {
        Self { value: Uint128::ZERO, radix, digits: 0, leading_zero: false, strict: false }
    }

    /// Decimal digits after a leading zero are rejected, so `0755` cannot pass
    /// for octal.
    pub(crate) const fn rejecting_leading_zeros(self) -> Self {
        Self { strict: true, ..self }
    }

    pub(crate) const fn push(self, byte: u8) -> Result<Self> {
        let digit = match digit_value(byte, self.radix) {
            Some(digit) => digit,
            None => return Err(ParseErrorKind::InvalidDigit),
        };
        // decimal zeros are fine as long as nothing else follows
        if self.strict && self.radix == 10 && self.leading_zero && digit != 0 {
            return Err(ParseErrorKind::LeadingZero);
        }
        let value = match self.value.checked_mul(Uint128::from_u64(self.radix as u64)) {
            Some(value) => value,
            None => return Err(ParseErrorKind::Overflow),
        };
        let value = match value.checked_add(Uint128::from_u64(digit as u64)) {
            Some(value) => value,
            None => return Err(ParseErrorKind::Overflow),
        };
        Ok(Self {
            value,
            radix: self.radix,
            digits: self.digits.saturating_add(1),
            leading_zero: self.leading_zero || (self.digits == 0 && digit == 0),
            strict: self.strict,
        })
    }

    /// `prefixed`: whether a base prefix preceded the digits.
    pub(crate) const fn finish(self, prefixed: bool) -> Result<Uint128> {
        if self.digits > 0 {
            Ok(self.value)
        } else if prefixed {
            Err(ParseErrorKind::MissingDigits)
        } else {
            Err(ParseErrorKind::Empty)
        }
    }
}

/// Whitespace and separators, which is what fill may consist of.
fn is_padding<C: TextUnit>(unit: &C) -> bool {
    matches!(unit.to_ascii(), Some(byte) if byte.is_ascii_whitespace() || byte == SEPARATOR)
}

fn skip_padding<C: TextUnit>(units: &[C]) -> &[C] {
    let start = units.iter().position(|unit| !is_padding(unit)).unwrap_or(units.len());
    &units[start..]
}

fn trim<C: TextUnit>(units: &[C]) -> &[C] {
    let units = skip_padding(units);
    let end = units.iter().rposition(|unit| !is_padding(unit)).map_or(0, |last| last + 1);
    &units[..end]
}

/// Sign-less digits, already trimmed. Padding may still sit between sign and prefix
/// or between prefix and digits, where internally aligned output puts its fill.
fn magnitude<C: TextUnit>(units: &[C]) -> Result<(Uint128, bool)> {
    let units = skip_padding(units);
    let (hexadecimal, digits) = match units {
        [zero, x, rest @ ..]
            if zero.to_ascii() == Some(b'0') && matches!(x.to_ascii(), Some(b'x' | b'X')) =>
        {
            (true, skip_padding(rest))
        }
        _ => (false, units),
    };

    let mut accumulator = Accumulator::new(if hexadecimal { 16 } else { 10 });
    for unit in digits {
        let byte = unit.to_ascii().ok_or(ParseErrorKind::InvalidDigit)?;
        if byte == SEPARATOR {
            continue;
        }
        accumulator = accumulator.push(byte)?;
    }
    Ok((accumulator.finish(hexadecimal)?, hexadecimal))
}

pub(crate) fn unsigned<C: TextUnit>(units: &[C]) -> Result<Uint128> {
    magnitude(trim(units)).map(|(value, _)| value)
}

/// Decimal is range checked. Unsigned hexadecimal is taken as the two's complement
/// bit pattern, which is how negative values are formatted in hexadecimal; with a
/// sign, hexadecimal is a magnitude like decimal.
pub(crate) fn signed<C: TextUnit>(units: &[C]) -> Result<Int128> {
    let units = trim(units);
    let (sign, rest) = match units.split_first() {
        Some((first, rest)) if first.to_ascii() == Some(b'-') => (Some(true), rest),
        Some((first, rest)) if first.to_ascii() == Some(b'+') => (Some(false), rest),
        _ => (None, units),
    };
    let (magnitude, hexadecimal) = magnitude(rest)?;
    let limit = Uint128::from_parts(1 << 63, 0);
    match sign {
        None if hexadecimal => Ok(Int128::from_bits(magnitude)),
        Some(true) if magnitude <= limit => Ok(Int128::from_bits(magnitude.wrapping_neg())),
        Some(false) | None if magnitude < limit => Ok(Int128::from_bits(magnitude)),
        _ => Err(ParseErrorKind::Overflow),
    }
}
