//! Operators and the overflow-aware method families of [`Uint128`].
//!
//! Operators dispatch to the selected backend ([`crate::backend::Selected`]).
//! The `const fn` methods (`checked_*`, `wrapping_*`, `overflowing_*`, `saturating_*`)
//! go through the `const` backend instead; for every input the two agree, which the
//! backend tests check against the native `u128`.

use crate::{CarryResult, Uint128};

/// Limb-level and word-level carry chains.
///
/// Building blocks for wider arithmetic on top of this crate: chain
/// `add_with_carry` over the words of a wider number, low to high.
pub trait CarryingArithmetic: Sized {
    /// `self + summand + carry`, with the carry out.
    fn add_with_carry(self, summand: Self, carry: bool) -> CarryResult<Self>;
    /// `self - subtrahend - borrow`, with the borrow out.
    fn sub_with_borrow(self, subtrahend: Self, borrow: bool) -> CarryResult<Self>;
}

/// Implements `$trait` for all combinations of owned and borrowed operands,
/// and `$assign_trait` for owned and borrowed right hand sides,
/// given `$method(a: $t, b: $t) -> $t`.
macro_rules! binary_operator {
    ($t:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $implementation:path) => {
        impl core::ops::$trait for $t {
            type Output = $t;
            #[inline]
            fn $method(self, other: $t) -> $t {
                $implementation(self, other)
            }
        }

        impl core::ops::$trait<&$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, other: &$t) -> $t {
                $implementation(self, *other)
            }
        }

        impl core::ops::$trait<$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, other: $t) -> $t {
                $implementation(*self, other)
            }
        }

        impl core::ops::$trait<&$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, other: &$t) -> $t {
                $implementation(*self, *other)
            }
        }

        impl core::ops::$assign_trait for $t {
            #[inline]
            fn $assign_method(&mut self, other: $t) {
                *self = $implementation(*self, other);
            }
        }

        impl core::ops::$assign_trait<&$t> for $t {
            #[inline]
            fn $assign_method(&mut self, other: &$t) {
                *self = $implementation(*self, *other);
            }
        }
    };
}
pub(crate) use binary_operator;

mod add;
mod subtract;
mod multiply;
mod divide;
mod shift;
mod bitwise;
mod gcd;

/// Increment and decrement, wrapping like `+= 1` and `-= 1`.
impl Uint128 {
    /// Pre-increment: adds one in place, returns the new value.
    pub fn increment(&mut self) -> Self {
        *self += Self::ONE;
        *self
    }

    /// Pre-decrement: subtracts one in place, returns the new value.
    pub fn decrement(&mut self) -> Self {
        *self -= Self::ONE;
        *self
    }

    /// Post-increment: adds one in place, returns the previous value.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        *self += Self::ONE;
        previous
    }

    /// Post-decrement: subtracts one in place, returns the previous value.
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= Self::ONE;
        previous
    }
}
