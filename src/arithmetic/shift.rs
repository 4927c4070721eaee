//! Shifts by `u32`, `i32`, `usize` or [`Uint128`] amounts.
//!
//! An amount of 128 or more (or a negative one) is a bug: debug builds panic, release
//! builds use the amount modulo 128, exactly like the primitive integers.

use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::backend::{constant, Backend, Selected};
use crate::Uint128;

const MASK: u32 = Uint128::BITS - 1;

impl Uint128 {
    /// `self << (amount % 128)`
    #[inline]
    pub const fn wrapping_shl(self, amount: u32) -> Self {
        constant::shl(self, amount & MASK)
    }

    /// `self >> (amount % 128)`
    #[inline]
    pub const fn wrapping_shr(self, amount: u32) -> Self {
        constant::shr(self, amount & MASK)
    }

    pub const fn checked_shl(self, amount: u32) -> Option<Self> {
        if amount < Self::BITS {
            Some(constant::shl(self, amount))
        } else {
            None
        }
    }

    pub const fn checked_shr(self, amount: u32) -> Option<Self> {
        if amount < Self::BITS {
            Some(constant::shr(self, amount))
        } else {
            None
        }
    }

    /// Shifts by `amount % 128`, flagging amounts of 128 or more.
    pub const fn overflowing_shl(self, amount: u32) -> (Self, bool) {
        (constant::shl(self, amount & MASK), amount >= Self::BITS)
    }

    pub const fn overflowing_shr(self, amount: u32) -> (Self, bool) {
        (constant::shr(self, amount & MASK), amount >= Self::BITS)
    }

    /// # Safety
    ///
    /// `amount` must be below 128.
    #[inline]
    pub unsafe fn unchecked_shl(self, amount: u32) -> Self {
        debug_assert!(amount < Self::BITS, "attempt to shift left with overflow");
        Selected::shl(self, amount & MASK)
    }

    /// # Safety
    ///
    /// `amount` must be below 128.
    #[inline]
    pub unsafe fn unchecked_shr(self, amount: u32) -> Self {
        debug_assert!(amount < Self::BITS, "attempt to shift right with overflow");
        Selected::shr(self, amount & MASK)
    }

    pub const fn rotate_left(self, amount: u32) -> Self {
        let amount = amount & MASK;
        if amount == 0 {
            return self;
        }
        let left = constant::shl(self, amount);
        let right = constant::shr(self, Self::BITS - amount);
        Self::from_parts(left.high() | right.high(), left.low() | right.low())
    }

    pub const fn rotate_right(self, amount: u32) -> Self {
        self.rotate_left(Self::BITS - (amount & MASK))
    }
}

/// The operator semantics: panic in debug builds, mask in release builds.
trait ShiftAmount: Copy {
    fn amount(self, direction: &'static str) -> u32;
}

macro_rules! shift_amount {
    ($($primitive:ty),*) => {$(
        impl ShiftAmount for $primitive {
            #[inline]
            #[allow(unused_comparisons)]
            fn amount(self, direction: &'static str) -> u32 {
                debug_assert!(
                    self >= 0 && (self as u64) < Uint128::BITS as u64,
                    "attempt to shift {} with overflow", direction,
                );
                (self as u32) & MASK
            }
        }
    )*};
}

shift_amount!(u8, u16, u32, u64, usize, i32);

impl ShiftAmount for Uint128 {
    #[inline]
    fn amount(self, direction: &'static str) -> u32 {
        debug_assert!(
            self.high() == 0 && self.low() < Uint128::BITS as u64,
            "attempt to shift {} with overflow", direction,
        );
        (self.low() as u32) & MASK
    }
}

macro_rules! shift_operators {
    ($($amount:ty),*) => {$(
        impl Shl<$amount> for Uint128 {
            type Output = Self;
            #[inline]
            fn shl(self, amount: $amount) -> Self {
                Selected::shl(self, amount.amount("left"))
            }
        }

        impl Shl<$amount> for &Uint128 {
            type Output = Uint128;
            #[inline]
            fn shl(self, amount: $amount) -> Uint128 {
                *self << amount
            }
        }

        impl ShlAssign<$amount> for Uint128 {
            #[inline]
            fn shl_assign(&mut self, amount: $amount) {
                *self = *self << amount;
            }
        }

        impl Shr<$amount> for Uint128 {
            type Output = Self;
            #[inline]
            fn shr(self, amount: $amount) -> Self {
                Selected::shr(self, amount.amount("right"))
            }
        }

        impl Shr<$amount> for &Uint128 {
            type Output = Uint128;
            #[inline]
            fn shr(self, amount: $amount) -> Uint128 {
                *self >> amount
            }
        }

        impl ShrAssign<$amount> for Uint128 {
            #[inline]
            fn shr_assign(&mut self, amount: $amount) {
                *self = *self >> amount;
            }
        }
    )*};
}

shift_operators!(u8, u16, u32, u64, usize, i32, Uint128);
