//! Compile-time literals, the machinery behind [`uint128!`] and [`int128!`].
//!
//! The macros hand the literal's tokens to the `const fn`s here inside a `const`
//! block, so a malformed or out-of-range literal is a build error.

use crate::text::{Accumulator, SEPARATOR};
use crate::{Int128, ParseErrorKind, Uint128};

/// A [`Uint128`] from a decimal or `0x` hexadecimal literal, evaluated at compile time.
///
/// `_` and `'` separate digit groups; the `'` form needs the literal in quotes.
///
/// ```
/// use uint128::{uint128, Uint128};
///
/// const MASK: Uint128 = uint128!(0xffff_ffff_ffff_ffff_0000_0000_0000_0000);
/// assert_eq!(MASK, Uint128::from_parts(u64::MAX, 0));
/// assert_eq!(uint128!("1'000'000"), Uint128::from(1_000_000u32));
/// ```
///
/// ```compile_fail
/// // one past the maximum
/// let _ = uint128::uint128!(340282366920938463463374607431768211456);
/// ```
#[macro_export]
macro_rules! uint128 {
    ($($literal:tt)+) => {
        const { $crate::literal::parse_literal(stringify!($($literal)+)) }
    };
}

/// An [`Int128`] from an optionally negated literal, evaluated at compile time.
///
/// ```
/// use uint128::{int128, Int128};
///
/// assert_eq!(int128!(-170141183460469231731687303715884105728), Int128::MIN);
/// assert_eq!(int128!(-0x10), Int128::from(-16i8));
/// ```
///
/// ```compile_fail
/// let _ = uint128::int128!(170141183460469231731687303715884105728);
/// ```
#[macro_export]
macro_rules! int128 {
    ($($literal:tt)+) => {
        const { $crate::literal::parse_signed_literal(stringify!($($literal)+)) }
    };
}

const fn fail(kind: ParseErrorKind) -> ! {
    match kind {
        ParseErrorKind::Empty => panic!("128-bit literal without digits"),
        ParseErrorKind::InvalidDigit => {
            panic!("invalid digit in 128-bit literal (only decimal and 0x are supported, without suffix)")
        }
        ParseErrorKind::LeadingZero => panic!("leading zero in decimal 128-bit literal"),
        ParseErrorKind::MissingDigits => panic!("no digits after 0x in 128-bit literal"),
        ParseErrorKind::Overflow => panic!("128-bit literal out of range"),
    }
}

/// Bounds of the literal with surrounding quotes removed.
const fn unquoted(bytes: &[u8]) -> (usize, usize) {
    let end = bytes.len();
    if end >= 2 && bytes[0] == b'"' && bytes[end - 1] == b'"' {
        (1, end - 1)
    } else {
        (0, end)
    }
}

const fn digits(bytes: &[u8], mut position: usize, end: usize) -> Result<Uint128, ParseErrorKind> {
    let prefixed = end - position >= 2
        && bytes[position] == b'0'
        && (bytes[position + 1] == b'x' || bytes[position + 1] == b'X');
    if prefixed {
        position += 2;
    }

    let mut accumulator = Accumulator::new(if prefixed { 16 } else { 10 }).rejecting_leading_zeros();
    while position < end {
        let byte = bytes[position];
        position += 1;
        if byte == SEPARATOR || byte == b'\'' {
            continue;
        }
        accumulator = match accumulator.push(byte) {
            Ok(accumulator) => accumulator,
            Err(kind) => return Err(kind),
        };
    }
    accumulator.finish(prefixed)
}

#[doc(hidden)]
pub const fn parse_literal(text: &str) -> Uint128 {
    let bytes = text.as_bytes();
    let (start, end) = unquoted(bytes);
    match digits(bytes, start, end) {
        Ok(value) => value,
        Err(kind) => fail(kind),
    }
}

/// A leading `-`, possibly spaced from the digits as `stringify!` renders it.
#[doc(hidden)]
pub const fn parse_signed_literal(text: &str) -> Int128 {
    let bytes = text.as_bytes();
    let (mut start, end) = unquoted(bytes);
    let negative = start < end && bytes[start] == b'-';
    if negative {
        start += 1;
        while start < end && bytes[start] == b' ' {
            start += 1;
        }
    }

    let magnitude = match digits(bytes, start, end) {
        Ok(magnitude) => magnitude,
        Err(kind) => fail(kind),
    };
    let limit = Int128::MIN.to_bits();
    if negative {
        if magnitude.is_greater_than(limit) {
            fail(ParseErrorKind::Overflow)
        }
        Int128::from_bits(magnitude.wrapping_neg())
    } else {
        if !magnitude.is_less_than(limit) {
            fail(ParseErrorKind::Overflow)
        }
        Int128::from_bits(magnitude)
    }
}
