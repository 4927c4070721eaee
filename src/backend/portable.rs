//! Backend without any wide type: every operation is spelled out on 64-bit limbs,
//! multiplication on 32-bit halves.

use crate::limb::{Limb, LIMB_BITS};
use crate::{DivModResult, Uint128};

const HALF_BITS: u32 = LIMB_BITS / 2;
const HALF_MASK: Limb = (1 << HALF_BITS) - 1;

#[inline]
pub const fn add_with_carry(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
    let (sum, first) = a.overflowing_add(b);
    let (sum, second) = sum.overflowing_add(carry as Limb);
    (sum, first | second)
}

#[inline]
pub const fn sub_with_borrow(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
    let (difference, first) = a.overflowing_sub(b);
    let (difference, second) = difference.overflowing_sub(borrow as Limb);
    (difference, first | second)
}

/// Schoolbook product of the four 32x32 -> 64 partial products.
pub const fn widening_mul(a: Limb, b: Limb) -> Uint128 {
    let (a_low, a_high) = (a & HALF_MASK, a >> HALF_BITS);
    let (b_low, b_high) = (b & HALF_MASK, b >> HALF_BITS);

    let low_low = a_low * b_low;
    let low_high = a_low * b_high;
    let high_low = a_high * b_low;
    let high_high = a_high * b_high;

    // below 3 * 2^32, cannot overflow
    let middle = (low_low >> HALF_BITS) + (low_high & HALF_MASK) + (high_low & HALF_MASK);

    let low = (low_low & HALF_MASK) | (middle << HALF_BITS);
    let high = high_high + (low_high >> HALF_BITS) + (high_low >> HALF_BITS) + (middle >> HALF_BITS);
    Uint128::from_parts(high, low)
}

/// Divide a two limb numerator by a one limb divisor, one bit at a time.
///
/// The caller must ensure `high < divisor`, so both results fit in a limb.
pub const fn div_wide(high: Limb, low: Limb, divisor: Limb) -> (Limb, Limb) {
    debug_assert!(high < divisor);
    let mut remainder = high;
    let mut quotient: Limb = 0;
    let mut bit = LIMB_BITS;
    while bit > 0 {
        bit -= 1;
        // remainder < divisor, so the doubled remainder needs at most one extra bit
        let spilled = remainder >> (LIMB_BITS - 1);
        remainder = (remainder << 1) | ((low >> bit) & 1);
        quotient <<= 1;
        if spilled != 0 || remainder >= divisor {
            remainder = remainder.wrapping_sub(divisor);
            quotient |= 1;
        }
    }
    (quotient, remainder)
}

/// Requires `amount < 128`.
pub const fn shl(value: Uint128, amount: u32) -> Uint128 {
    debug_assert!(amount < Uint128::BITS);
    if amount == 0 {
        value
    } else if amount >= LIMB_BITS {
        Uint128::from_parts(value.low() << (amount - LIMB_BITS), 0)
    } else {
        Uint128::from_parts(
            (value.high() << amount) | (value.low() >> (LIMB_BITS - amount)),
            value.low() << amount,
        )
    }
}

/// Requires `amount < 128`.
pub const fn shr(value: Uint128, amount: u32) -> Uint128 {
    debug_assert!(amount < Uint128::BITS);
    if amount == 0 {
        value
    } else if amount >= LIMB_BITS {
        Uint128::from_parts(0, value.high() >> (amount - LIMB_BITS))
    } else {
        Uint128::from_parts(
            value.high() >> amount,
            (value.low() >> amount) | (value.high() << (LIMB_BITS - amount)),
        )
    }
}

limb_composites!(const);
