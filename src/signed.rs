//! Signed 128-bit integers, as two's complement on top of [`Uint128`].
//!
//! An [`Int128`] stores exactly the bits of a [`Uint128`]. Addition, subtraction,
//! multiplication, the bitwise operations and left shifts are literally the unsigned
//! ones. Only comparison, right shift, division, widening conversions and text
//! depend on the sign.

use alloc::vec::Vec;
use core::{cmp::Ordering, convert::TryFrom, fmt, str::FromStr};

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::limb::{Limb, SignedLimb};
use crate::text::{self, Digits, FormatSpec, Radix, TextUnit};
use crate::{Error, FloatError, ParseError, Result, Uint128};

mod ops;

/// Signed 128-bit integer, two's complement.
///
/// Arithmetic wraps modulo $2^{128}$, as for [`Uint128`]; in particular negating (or
/// dividing by −1) [`Int128::MIN`] gives [`Int128::MIN`] again. Division truncates
/// towards zero and the remainder takes the sign of the dividend.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Zeroize, RefCast)]
#[repr(transparent)]
pub struct Int128(Uint128);

const SIGN_BIT: Limb = 1 << 63;

impl Int128 {
    pub const BITS: u32 = 128;
    pub const ZERO: Self = Self(Uint128::ZERO);
    pub const ONE: Self = Self(Uint128::ONE);
    pub const NEG_ONE: Self = Self(Uint128::MAX);
    /// $-2^{127}$
    pub const MIN: Self = Self(Uint128::from_parts(SIGN_BIT, 0));
    /// $2^{127} - 1$
    pub const MAX: Self = Self(Uint128::from_parts(!SIGN_BIT, Limb::MAX));

    #[inline]
    pub const fn from_parts(high: SignedLimb, low: Limb) -> Self {
        Self(Uint128::from_parts(high as Limb, low))
    }

    /// Bits 64..128, including the sign.
    #[inline]
    pub const fn high(self) -> SignedLimb {
        self.0.high() as SignedLimb
    }

    #[inline]
    pub const fn low(self) -> Limb {
        self.0.low()
    }

    /// Reinterprets two's complement bits.
    #[inline]
    pub const fn from_bits(bits: Uint128) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> Uint128 {
        self.0
    }

    /// Reinterprets in place.
    pub fn from_bits_ref(bits: &Uint128) -> &Self {
        Self::ref_cast(bits)
    }

    pub fn from_bits_mut(bits: &mut Uint128) -> &mut Self {
        Self::ref_cast_mut(bits)
    }

    pub fn as_bits(&self) -> &Uint128 {
        &self.0
    }

    #[inline]
    pub const fn from_native(value: i128) -> Self {
        Self(Uint128::from_native(value as u128))
    }

    #[inline]
    pub const fn to_native(self) -> i128 {
        self.0.to_native() as i128
    }

    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self(Uint128::from_le_bytes(bytes))
    }

    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self(Uint128::from_be_bytes(bytes))
    }

    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    /// Truncates to the low 64 bits.
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.0.as_i64()
    }

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.0.as_i32()
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0.as_u64()
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0.as_u32()
    }
}

// sign
impl Int128 {
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0.high() & SIGN_BIT != 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.0.is_zero()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// −1, 0 or 1.
    pub const fn signum(self) -> Self {
        if self.is_negative() {
            Self::NEG_ONE
        } else if self.0.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// The magnitude; $2^{127}$ for [`Int128::MIN`], which is why it is unsigned.
    pub const fn unsigned_abs(self) -> Uint128 {
        if self.is_negative() {
            self.0.wrapping_neg()
        } else {
            self.0
        }
    }

    /// [`Int128::MIN`] stays [`Int128::MIN`].
    pub const fn wrapping_abs(self) -> Self {
        Self(self.unsigned_abs())
    }

    pub const fn checked_abs(self) -> Option<Self> {
        if self.0.equals(Self::MIN.0) {
            None
        } else {
            Some(self.wrapping_abs())
        }
    }

    /// Two's complement negation, `0 - self`; [`Int128::MIN`] stays [`Int128::MIN`].
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    pub const fn overflowing_neg(self) -> (Self, bool) {
        (self.wrapping_neg(), self.0.equals(Self::MIN.0))
    }

    pub const fn checked_neg(self) -> Option<Self> {
        match self.overflowing_neg() {
            (negation, false) => Some(negation),
            (_, true) => None,
        }
    }

    /// Two's complement order is unsigned order with the sign bit flipped.
    const fn biased(self) -> Uint128 {
        Uint128::from_parts(self.0.high() ^ SIGN_BIT, self.0.low())
    }

    pub const fn compare(self, other: Self) -> Ordering {
        self.biased().compare(other.biased())
    }

    #[inline]
    pub const fn is_less_than(self, other: Self) -> bool {
        matches!(self.compare(other), Ordering::Less)
    }

    /// Same as for the bits: equal values hash equal in every mode.
    pub const fn hash_code(self) -> u64 {
        self.0.hash_code()
    }

    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }
}

impl Ord for Int128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl PartialOrd for Int128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! from_signed {
    ($($primitive:ty),*) => {$(
        impl From<$primitive> for Int128 {
            /// Sign-extends.
            #[inline]
            fn from(value: $primitive) -> Self {
                let value = value as i64;
                Self::from_parts(value >> 63, value as u64)
            }
        }

        impl TryFrom<Int128> for $primitive {
            type Error = Error;
            #[allow(unused_comparisons)]
            fn try_from(value: Int128) -> Result<Self> {
                let low = value.low() as i64;
                // in range iff the high limb is the sign extension of the low one
                if value.high() != low >> 63 || low < <$primitive>::MIN as i64 || low > <$primitive>::MAX as i64 {
                    return Err(Error::OutOfRange);
                }
                Ok(low as $primitive)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);

macro_rules! from_unsigned {
    ($($primitive:ty),*) => {$(
        impl From<$primitive> for Int128 {
            #[inline]
            fn from(value: $primitive) -> Self {
                Self::from_parts(0, value as u64)
            }
        }

        impl TryFrom<Int128> for $primitive {
            type Error = Error;
            fn try_from(value: Int128) -> Result<Self> {
                if value.high() != 0 || value.low() > <$primitive>::MAX as u64 {
                    return Err(Error::OutOfRange);
                }
                Ok(value.low() as $primitive)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Int128 {
    fn from(value: bool) -> Self {
        Self::from_parts(0, value as u64)
    }
}

impl From<i128> for Int128 {
    #[inline]
    fn from(value: i128) -> Self {
        Self::from_native(value)
    }
}

impl From<Int128> for i128 {
    #[inline]
    fn from(value: Int128) -> Self {
        value.to_native()
    }
}

impl TryFrom<Uint128> for Int128 {
    type Error = Error;
    fn try_from(value: Uint128) -> Result<Self> {
        if value.high() & SIGN_BIT != 0 {
            return Err(Error::OutOfRange);
        }
        Ok(Self(value))
    }
}

impl TryFrom<Int128> for Uint128 {
    type Error = Error;
    fn try_from(value: Int128) -> Result<Self> {
        if value.is_negative() {
            return Err(Error::OutOfRange);
        }
        Ok(value.0)
    }
}

/// $2^{127}$
const TWO_POW_127_F64: f64 = 170141183460469231731687303715884105728.0;

// floats: the magnitude goes through Uint128, the sign is applied after
impl Int128 {
    pub fn to_f64(self) -> f64 {
        let magnitude = self.unsigned_abs().to_f64();
        if self.is_negative() { -magnitude } else { magnitude }
    }

    pub fn to_f32(self) -> f32 {
        let magnitude = self.unsigned_abs().to_f32();
        if self.is_negative() { -magnitude } else { magnitude }
    }

    /// Truncates towards zero; fails for NaN, infinities and values outside
    /// $[-2^{127}, 2^{127})$.
    pub fn checked_from_f64(value: f64) -> core::result::Result<Self, FloatError> {
        if value.is_nan() {
            return Err(FloatError::NotANumber);
        }
        if value.is_infinite() {
            return Err(FloatError::Infinite);
        }
        if value >= TWO_POW_127_F64 || value < -TWO_POW_127_F64 {
            return Err(FloatError::OutOfRange);
        }
        Ok(unsafe { Self::from_f64_unchecked(value) })
    }

    pub fn checked_from_f32(value: f32) -> core::result::Result<Self, FloatError> {
        Self::checked_from_f64(value as f64)
    }

    /// # Safety
    ///
    /// `value` must be finite and in $[-2^{127}, 2^{127})$. Checked only in debug builds.
    pub unsafe fn from_f64_unchecked(value: f64) -> Self {
        debug_assert!(value.is_finite() && value < TWO_POW_127_F64 && value >= -TWO_POW_127_F64);
        let magnitude = Uint128::from_f64_unchecked(value.abs());
        if value < 0.0 {
            Self(magnitude.wrapping_neg())
        } else {
            Self(magnitude)
        }
    }
}

impl From<Int128> for f64 {
    fn from(value: Int128) -> Self {
        value.to_f64()
    }
}

impl From<Int128> for f32 {
    fn from(value: Int128) -> Self {
        value.to_f32()
    }
}

impl TryFrom<f64> for Int128 {
    type Error = Error;
    fn try_from(value: f64) -> Result<Self> {
        Ok(Self::checked_from_f64(value)?)
    }
}

impl TryFrom<f32> for Int128 {
    type Error = Error;
    fn try_from(value: f32) -> Result<Self> {
        Ok(Self::checked_from_f32(value)?)
    }
}

// text
impl Int128 {
    /// Decimal with an optional sign, or hexadecimal. Unsigned hexadecimal is read as
    /// two's complement bits (how negative values are formatted in hexadecimal),
    /// signed hexadecimal as a magnitude.
    pub fn parse_units<C: TextUnit>(units: &[C]) -> core::result::Result<Self, ParseError> {
        text::parse::signed(units).map_err(|kind| ParseError::new(kind, text::lossy_text(units)))
    }

    /// Decimal output is signed, the other radices show the two's complement bits.
    pub fn to_units<C: TextUnit>(&self, spec: &FormatSpec) -> Vec<C> {
        match spec.radix {
            Radix::Decimal => spec.render(
                self.is_negative(),
                Digits::new(self.unsigned_abs(), Radix::Decimal, false).as_bytes(),
            ),
            _ => self.0.to_units(spec),
        }
    }
}

impl FromStr for Int128 {
    type Err = ParseError;

    fn from_str(text: &str) -> core::result::Result<Self, ParseError> {
        Self::parse_units(text.as_bytes())
    }
}

impl fmt::Display for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = Digits::new(self.unsigned_abs(), Radix::Decimal, false);
        f.pad_integral(!self.is_negative(), "", digits.as_str())
    }
}

impl fmt::Debug for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! bits_trait {
    ($($trait:ident),*) => {$(
        impl fmt::$trait for Int128 {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$trait::fmt(&self.0, f)
            }
        }
    )*};
}

bits_trait!(LowerHex, UpperHex, Binary, Octal);

#[cfg(feature = "ct")]
mod constant_time {
    use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

    use super::Int128;

    impl ConstantTimeEq for Int128 {
        fn ct_eq(&self, other: &Self) -> Choice {
            self.0.ct_eq(&other.0)
        }
    }

    impl ConditionallySelectable for Int128 {
        fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
            Self(crate::Uint128::conditional_select(&a.0, &b.0, choice))
        }
    }

    impl ConstantTimeGreater for Int128 {
        fn ct_gt(&self, other: &Self) -> Choice {
            self.biased().ct_gt(&other.biased())
        }
    }

    impl ConstantTimeLess for Int128 {}
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn i(x: i128) -> Int128 {
        Int128::from(x)
    }

    #[test]
    fn constants() {
        assert_eq!(Int128::MIN.to_native(), i128::MIN);
        assert_eq!(Int128::MAX.to_native(), i128::MAX);
        assert_eq!(Int128::NEG_ONE.to_native(), -1);
        assert_eq!(Int128::from_parts(-1, 0).to_native(), -1i128 << 64);
        assert_eq!(Int128::from_parts(-1, 0).high(), -1);
    }

    #[test]
    fn sign() {
        assert!(i(-5).is_negative());
        assert!(!i(0).is_negative());
        assert!(i(5).is_positive());
        assert!(!i(0).is_positive());
        assert_eq!(i(-5).signum(), Int128::NEG_ONE);
        assert_eq!(i(0).signum(), Int128::ZERO);
        assert_eq!(i(5).signum(), Int128::ONE);
        assert_eq!(i(-5).unsigned_abs(), Uint128::from(5u8));
        assert_eq!(Int128::MIN.unsigned_abs(), Uint128::from(1u128 << 127));
        assert_eq!(Int128::MIN.wrapping_abs(), Int128::MIN);
        assert_eq!(Int128::MIN.checked_abs(), None);
        assert_eq!(i(-5).checked_abs(), Some(i(5)));
    }

    #[test]
    fn negation() {
        assert_eq!(Int128::MIN.wrapping_neg(), Int128::MIN);
        assert_eq!(Int128::MIN.checked_neg(), None);
        assert_eq!(Int128::MIN.overflowing_neg(), (Int128::MIN, true));
        assert_eq!(-Int128::MIN, Int128::MIN);
        assert_eq!(Int128::MAX.checked_neg(), Some(i(-i128::MAX)));
        assert_eq!(-i(7), i(-7));
        assert_eq!(-Int128::ZERO, Int128::ZERO);
    }

    #[test]
    fn ordering() {
        let mut values = [i(3), Int128::MIN, i(-1), Int128::MAX, i(0), i(-3)];
        values.sort();
        assert_eq!(values, [Int128::MIN, i(-3), i(-1), i(0), i(3), Int128::MAX]);
        assert!(i(-1) < i(0));
        assert!(Int128::MIN.is_less_than(Int128::MAX));
    }

    #[test]
    fn reinterpretation() {
        let mut bits = Uint128::MAX;
        assert_eq!(*Int128::from_bits_ref(&bits), Int128::NEG_ONE);
        *Int128::from_bits_mut(&mut bits) = Int128::MIN;
        assert_eq!(bits, Uint128::from(1u128 << 127));
        assert_eq!(Int128::MIN.as_bits(), &bits);
        assert_eq!(Int128::from_bits(bits).to_bits(), bits);
    }

    #[test]
    fn conversions() {
        assert_eq!(Int128::from(-1i8), Int128::NEG_ONE);
        assert_eq!(Int128::from(i64::MIN).to_native(), i64::MIN as i128);
        assert_eq!(Int128::from(u64::MAX).to_native(), u64::MAX as i128);
        assert_eq!(i8::try_from(i(-128)), Ok(-128));
        assert_eq!(i8::try_from(i(-129)), Err(Error::OutOfRange));
        assert_eq!(i64::try_from(i(i64::MIN as i128)), Ok(i64::MIN));
        assert_eq!(i64::try_from(i(i64::MAX as i128 + 1)), Err(Error::OutOfRange));
        assert_eq!(i64::try_from(i(-(1 << 64))), Err(Error::OutOfRange));
        assert_eq!(u8::try_from(i(-1)), Err(Error::OutOfRange));
        assert_eq!(u64::try_from(i(u64::MAX as i128)), Ok(u64::MAX));
        assert_eq!(Uint128::try_from(i(-1)), Err(Error::OutOfRange));
        assert_eq!(Int128::try_from(Uint128::MAX), Err(Error::OutOfRange));
        assert_eq!(Int128::try_from(Uint128::from(5u8)), Ok(i(5)));
        assert_eq!(i(-2).as_i64(), -2);
        assert_eq!(i(-2).as_u32(), u32::MAX - 1);
        assert_eq!(Int128::from_be_bytes(i(-2).to_be_bytes()), i(-2));
        assert_eq!(i(-2).to_le_bytes(), (-2i128).to_le_bytes());
    }

    #[test]
    fn floats() {
        assert_eq!(i(-3).to_f64(), -3.0);
        assert_eq!(Int128::MIN.to_f64(), -TWO_POW_127_F64);
        assert_eq!(Int128::MIN.to_f32(), -TWO_POW_127_F64 as f32);
        assert_eq!(Int128::try_from(-2.75f64), Ok(i(-2)));
        assert_eq!(Int128::try_from(-0.5f32), Ok(i(0)));
        assert_eq!(Int128::try_from(-TWO_POW_127_F64), Ok(Int128::MIN));
        assert_eq!(Int128::try_from(TWO_POW_127_F64), Err(Error::FloatConversion(FloatError::OutOfRange)));
        assert_eq!(Int128::try_from(f64::NAN), Err(Error::FloatConversion(FloatError::NotANumber)));
        assert_eq!(Int128::try_from(f32::NEG_INFINITY), Err(Error::FloatConversion(FloatError::Infinite)));
    }

    #[test]
    fn text() {
        assert_eq!(format!("{}", Int128::MIN), "-170141183460469231731687303715884105728");
        assert_eq!(format!("{:>6}", i(-42)), "   -42");
        assert_eq!(format!("{:+}", i(42)), "+42");
        assert_eq!(format!("{:06}", i(-42)), "-00042");
        assert_eq!(format!("{:x}", i(-1)), "ffffffffffffffffffffffffffffffff");
        assert_eq!(format!("{:?}", i(-7)), "-7");
        assert_eq!("-42".parse::<Int128>(), Ok(i(-42)));
        assert_eq!(format!("{:06}", i(-42)).parse::<Int128>(), Ok(i(-42)));
        assert_eq!(format!("{:_>8}", i(-42)).parse::<Int128>(), Ok(i(-42)));
        assert_eq!(i(-42).to_units::<u16>(&FormatSpec::default()), "-42".encode_utf16().collect::<Vec<_>>());
        assert_eq!(
            i(-42).to_units::<u8>(&FormatSpec::default().with_width(6).with_fill(b'0').aligned(text::Alignment::Internal)),
            b"-00042",
        );
    }

    #[test]
    fn text_round_trips() {
        let specs = [
            FormatSpec::default(),
            FormatSpec::default().with_width(42),
            FormatSpec::hexadecimal().with_prefix(),
            FormatSpec::hexadecimal().with_prefix().uppercase(),
        ];
        for value in [Int128::MIN, Int128::MAX, Int128::ZERO, Int128::NEG_ONE, i(-1 << 64)] {
            for spec in &specs {
                assert_eq!(Int128::parse_units(&value.to_units::<u32>(spec)), Ok(value));
            }
        }
    }

    proptest! {
        #[test]
        fn display_matches_primitive(x in any::<i128>()) {
            prop_assert_eq!(format!("{}", i(x)), format!("{}", x));
            prop_assert_eq!(format!("{:x}", i(x)), format!("{:x}", x));
            prop_assert_eq!(format!("{}", i(x)).parse::<Int128>(), Ok(i(x)));
            prop_assert_eq!(i(x).cmp(&i(0)), x.cmp(&0));
        }

        #[test]
        fn padded_output_parses_back(x in any::<i128>(), width in 0usize..60) {
            for spec in &crate::text::test::padded_specs(width) {
                prop_assert_eq!(Int128::parse_units(&i(x).to_units::<u8>(spec)), Ok(i(x)));
                prop_assert_eq!(Int128::parse_units(&i(x).to_units::<u16>(spec)), Ok(i(x)));
                prop_assert_eq!(Int128::parse_units(&i(x).to_units::<u32>(spec)), Ok(i(x)));
                prop_assert_eq!(Int128::parse_units(&i(x).to_units::<char>(spec)), Ok(i(x)));
            }
        }

        #[test]
        fn float_conversion_matches_casts(x in any::<i128>()) {
            prop_assert_eq!(i(x).to_f64(), x as f64);
        }
    }
}
