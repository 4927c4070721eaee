//! Conversions between [`Uint128`] and the binary floating point types.
//!
//! Integer to float rounds to nearest, ties to even, like `u128 as f64`. Float to
//! integer truncates towards zero and is checked: NaN, infinities, negative values and
//! values of $2^{128}$ or more are errors. [`Uint128::from_f64_unchecked`] skips the
//! checks for callers that already know.
//!
//! With the native backend both directions are the compiler's casts. Otherwise the
//! value is normalized, its top 64 bits converted with a sticky bit standing in for
//! everything below them, and the result scaled by a power of two, which is exact.

use core::convert::TryFrom;

use crate::limb::LIMB_BITS;
use crate::{Error, FloatError, Result, Uint128};

/// $2^{128}$, the first float out of range.
const TWO_POW_128_F64: f64 = 340282366920938463463374607431768211456.0;

/// `2^exponent` for `0 <= exponent < 1024`, built from its bit pattern.
const fn power_of_two_f64(exponent: u32) -> f64 {
    f64::from_bits(((1023 + exponent) as u64) << 52)
}

/// The top 64 bits of a normalized copy of `value`, bit 0 or-ed with all discarded
/// bits, and the number of bits discarded.
///
/// Rounding the returned 64-bit value to a 24 or 53 bit significand rounds the
/// full value correctly: the sticky bit is far below any rounding position and only
/// breaks exact ties.
fn sticky_top_bits(value: Uint128) -> (u64, u32) {
    let width = value.bit_width();
    if width <= LIMB_BITS {
        return (value.low(), 0);
    }
    let discarded = width - LIMB_BITS;
    let top = (value >> discarded).low();
    // at most 64 bits are discarded, all of them from the low limb
    let mask = if discarded >= LIMB_BITS { u64::MAX } else { (1 << discarded) - 1 };
    let lost = value.low() & mask != 0;
    (top | lost as u64, discarded)
}

impl Uint128 {
    /// Nearest `f64`, ties to even.
    pub fn to_f64(self) -> f64 {
        #[cfg(uint128_backend = "native")]
        {
            self.to_native() as f64
        }
        #[cfg(not(uint128_backend = "native"))]
        {
            self.to_f64_by_limbs()
        }
    }

    /// Nearest `f32`, ties to even; values rounding to $2^{128}$ or beyond give infinity.
    pub fn to_f32(self) -> f32 {
        #[cfg(uint128_backend = "native")]
        {
            self.to_native() as f32
        }
        #[cfg(not(uint128_backend = "native"))]
        {
            self.to_f32_by_limbs()
        }
    }

    #[cfg_attr(uint128_backend = "native", allow(dead_code))]
    pub(crate) fn to_f64_by_limbs(self) -> f64 {
        let (top, discarded) = sticky_top_bits(self);
        top as f64 * power_of_two_f64(discarded)
    }

    #[cfg_attr(uint128_backend = "native", allow(dead_code))]
    pub(crate) fn to_f32_by_limbs(self) -> f32 {
        let (top, discarded) = sticky_top_bits(self);
        // the f64 product is exact (at most 24 significant bits, exponent below 128),
        // so only the first rounding, u64 -> f32, happens
        (top as f32 as f64 * power_of_two_f64(discarded)) as f32
    }

    pub fn checked_from_f64(value: f64) -> core::result::Result<Self, FloatError> {
        if value.is_nan() {
            return Err(FloatError::NotANumber);
        }
        if value.is_infinite() {
            return Err(FloatError::Infinite);
        }
        if value < 0.0 {
            return Err(FloatError::Negative);
        }
        if value >= TWO_POW_128_F64 {
            return Err(FloatError::OutOfRange);
        }
        Ok(unsafe { Self::from_f64_unchecked(value) })
    }

    pub fn checked_from_f32(value: f32) -> core::result::Result<Self, FloatError> {
        if value.is_nan() {
            return Err(FloatError::NotANumber);
        }
        if value.is_infinite() {
            return Err(FloatError::Infinite);
        }
        if value < 0.0 {
            return Err(FloatError::Negative);
        }
        // every f32 is exactly an f64, and every finite one is below 2^128
        Ok(unsafe { Self::from_f64_unchecked(value as f64) })
    }

    /// Truncates towards zero.
    ///
    /// # Safety
    ///
    /// `value` must be finite, non-negative (`-0.0` is fine) and below $2^{128}$.
    /// Checked only in debug builds.
    pub unsafe fn from_f64_unchecked(value: f64) -> Self {
        debug_assert!(value.is_finite() && value >= 0.0 && value < TWO_POW_128_F64);
        #[cfg(uint128_backend = "native")]
        {
            Self::from_native(value as u128)
        }
        #[cfg(not(uint128_backend = "native"))]
        {
            Self::from_f64_by_limbs(value)
        }
    }

    /// Decodes the bit pattern of a finite, non-negative `value` below $2^{128}$.
    #[cfg_attr(uint128_backend = "native", allow(dead_code))]
    pub(crate) fn from_f64_by_limbs(value: f64) -> Self {
        let bits = value.to_bits();
        let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
        if biased_exponent < 1023 {
            // below one (zero and subnormals included)
            return Self::ZERO;
        }
        let significand = (bits & ((1 << 52) - 1)) | (1 << 52);
        // value = significand * 2^exponent
        let exponent = biased_exponent - 1075;
        if exponent >= 0 {
            Self::from(significand) << exponent as u32
        } else {
            Self::from(significand >> (-exponent) as u32)
        }
    }
}

impl From<Uint128> for f64 {
    fn from(value: Uint128) -> Self {
        value.to_f64()
    }
}

impl From<Uint128> for f32 {
    fn from(value: Uint128) -> Self {
        value.to_f32()
    }
}

impl TryFrom<f64> for Uint128 {
    type Error = Error;
    fn try_from(value: f64) -> Result<Self> {
        Ok(Self::checked_from_f64(value)?)
    }
}

impl TryFrom<f32> for Uint128 {
    type Error = Error;
    fn try_from(value: f32) -> Result<Self> {
        Ok(Self::checked_from_f32(value)?)
    }
}
