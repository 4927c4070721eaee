//! Division with remainder.
//!
//! Three entry points, for three attitudes towards a zero divisor:
//! [`Uint128::div_mod`] reports it as an [`Error`], [`Uint128::try_div_mod`] as `None`,
//! and [`Uint128::unsafe_div_mod`] declares it the caller's problem. The `/` and `%`
//! operators panic, like the primitive integers do.

use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::backend::{constant, Backend, Selected};
use crate::{DivModResult, Error, Result, Uint128};

impl Uint128 {
    pub fn div_mod(self, divisor: Self) -> Result<DivModResult<Self>> {
        self.try_div_mod(divisor).ok_or(Error::DivideByZero)
    }

    #[inline]
    pub fn try_div_mod(self, divisor: Self) -> Option<DivModResult<Self>> {
        if divisor.is_zero() {
            return None;
        }
        Some(Selected::div_mod(self, divisor))
    }

    /// # Safety
    ///
    /// `divisor` must be non-zero. Checked only in debug builds; in release builds a
    /// zero divisor gives an unspecified result (or faults, on the intrinsic backend).
    #[inline]
    pub unsafe fn unsafe_div_mod(self, divisor: Self) -> DivModResult<Self> {
        debug_assert!(!divisor.is_zero(), "attempt to divide by zero");
        Selected::div_mod(self, divisor)
    }

    /// Like [`Self::div_mod`], logging every step at debug level.
    ///
    /// Useful to trace why a particular division takes a particular path.
    pub fn instrumented_div_mod(self, divisor: Self) -> Result<DivModResult<Self>> {
        debug!("div_mod: {} / {} in mode {}", self, divisor, crate::probe::MODE);
        if divisor.is_zero() {
            debug!("div_mod: zero divisor");
            return Err(Error::DivideByZero);
        }
        if divisor.high() == 0 {
            debug!("div_mod: one limb divisor {:#x}, wide division", divisor.low());
        } else if divisor.is_greater_than(self) {
            debug!("div_mod: divisor exceeds dividend, quotient zero");
        } else {
            debug!(
                "div_mod: two limb divisor, {} shift-subtract rounds",
                divisor.leading_zeros() - self.leading_zeros() + 1,
            );
        }
        let result = Selected::div_mod(self, divisor);
        debug!("div_mod: quotient {} remainder {}", result.quotient, result.remainder);
        Ok(result)
    }

    pub const fn checked_div(self, divisor: Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        Some(constant::div_mod(self, divisor).quotient)
    }

    pub const fn checked_rem(self, divisor: Self) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        Some(constant::div_mod(self, divisor).remainder)
    }

    /// `const` division with remainder, `None` for a zero divisor.
    pub const fn checked_div_mod(self, divisor: Self) -> Option<DivModResult<Self>> {
        if divisor.is_zero() {
            return None;
        }
        Some(constant::div_mod(self, divisor))
    }
}

fn quotient(dividend: Uint128, divisor: Uint128) -> Uint128 {
    match dividend.try_div_mod(divisor) {
        Some(result) => result.quotient,
        None => panic!("attempt to divide by zero"),
    }
}

fn remainder(dividend: Uint128, divisor: Uint128) -> Uint128 {
    match dividend.try_div_mod(divisor) {
        Some(result) => result.remainder,
        None => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

impl Div for Uint128 {
    type Output = Self;

    fn div(self, divisor: Self) -> Self {
        quotient(self, divisor)
    }
}

impl Div<&Uint128> for Uint128 {
    type Output = Self;

    fn div(self, divisor: &Self) -> Self {
        quotient(self, *divisor)
    }
}

impl Div for &Uint128 {
    type Output = Uint128;

    fn div(self, divisor: Self) -> Uint128 {
        quotient(*self, *divisor)
    }
}

impl DivAssign for Uint128 {
    fn div_assign(&mut self, divisor: Self) {
        *self = quotient(*self, divisor);
    }
}

impl Rem for Uint128 {
    type Output = Self;

    fn rem(self, divisor: Self) -> Self {
        remainder(self, divisor)
    }
}

impl Rem<&Uint128> for Uint128 {
    type Output = Self;

    fn rem(self, divisor: &Self) -> Self {
        remainder(self, *divisor)
    }
}

impl Rem for &Uint128 {
    type Output = Uint128;

    fn rem(self, divisor: Self) -> Uint128 {
        remainder(*self, *divisor)
    }
}

impl RemAssign for Uint128 {
    fn rem_assign(&mut self, divisor: Self) {
        *self = remainder(*self, divisor);
    }
}
