//! Backend on the compiler's `u128`.

use crate::limb::{self, Limb, LIMB_BITS};
use crate::{DivModResult, Uint128};

#[inline]
const fn wide(x: Uint128) -> u128 {
    x.to_native()
}

#[inline]
pub const fn add_with_carry(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
    let sum = a as u128 + b as u128 + carry as u128;
    (sum as Limb, (sum >> LIMB_BITS) != 0)
}

#[inline]
pub const fn sub_with_borrow(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
    // an underflow leaves the upper limb all ones
    let difference = (a as u128).wrapping_sub(b as u128).wrapping_sub(borrow as u128);
    (difference as Limb, (difference >> LIMB_BITS) != 0)
}

#[inline]
pub const fn widening_mul(a: Limb, b: Limb) -> Uint128 {
    Uint128::from_native(a as u128 * b as u128)
}

/// Divide a two limb numerator by a one limb divisor.
///
/// The caller must ensure `high < divisor`, so both results fit in a limb.
#[inline]
pub const fn div_wide(high: Limb, low: Limb, divisor: Limb) -> (Limb, Limb) {
    debug_assert!(high < divisor);
    let x = limb::join(high, low);
    let divisor = divisor as u128;
    ((x / divisor) as Limb, (x % divisor) as Limb)
}

#[inline]
pub const fn add(a: Uint128, b: Uint128, carry: bool) -> (Uint128, bool) {
    let (sum, first) = wide(a).overflowing_add(wide(b));
    let (sum, second) = sum.overflowing_add(carry as u128);
    (Uint128::from_native(sum), first | second)
}

#[inline]
pub const fn sub(a: Uint128, b: Uint128, borrow: bool) -> (Uint128, bool) {
    let (difference, first) = wide(a).overflowing_sub(wide(b));
    let (difference, second) = difference.overflowing_sub(borrow as u128);
    (Uint128::from_native(difference), first | second)
}

#[inline]
pub const fn mul(a: Uint128, b: Uint128) -> Uint128 {
    Uint128::from_native(wide(a).wrapping_mul(wide(b)))
}

#[inline]
pub const fn overflowing_mul(a: Uint128, b: Uint128) -> (Uint128, bool) {
    let (product, overflow) = wide(a).overflowing_mul(wide(b));
    (Uint128::from_native(product), overflow)
}

/// Caller ensures `divisor` is non-zero.
#[inline]
pub const fn div_mod(dividend: Uint128, divisor: Uint128) -> DivModResult<Uint128> {
    let (dividend, divisor) = (wide(dividend), wide(divisor));
    DivModResult {
        quotient: Uint128::from_native(dividend / divisor),
        remainder: Uint128::from_native(dividend % divisor),
    }
}

#[inline]
pub const fn shl(value: Uint128, amount: u32) -> Uint128 {
    Uint128::from_native(wide(value) << amount)
}

#[inline]
pub const fn shr(value: Uint128, amount: u32) -> Uint128 {
    Uint128::from_native(wide(value) >> amount)
}
