use core::ops::{Div, DivAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign};

use super::Int128;
use crate::arithmetic::binary_operator;
use crate::{DivModResult, Error, Result, Uint128};

// Same bits as the unsigned operations.

fn sum(a: Int128, b: Int128) -> Int128 {
    Int128(a.0 + b.0)
}

fn difference(a: Int128, b: Int128) -> Int128 {
    Int128(a.0 - b.0)
}

fn product(a: Int128, b: Int128) -> Int128 {
    Int128(a.0 * b.0)
}

fn and(a: Int128, b: Int128) -> Int128 {
    Int128(a.0 & b.0)
}

fn or(a: Int128, b: Int128) -> Int128 {
    Int128(a.0 | b.0)
}

fn xor(a: Int128, b: Int128) -> Int128 {
    Int128(a.0 ^ b.0)
}

binary_operator!(Int128, Add, add, AddAssign, add_assign, sum);
binary_operator!(Int128, Sub, sub, SubAssign, sub_assign, difference);
binary_operator!(Int128, Mul, mul, MulAssign, mul_assign, product);
binary_operator!(Int128, BitAnd, bitand, BitAndAssign, bitand_assign, and);
binary_operator!(Int128, BitOr, bitor, BitOrAssign, bitor_assign, or);
binary_operator!(Int128, BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

impl Neg for Int128 {
    type Output = Self;

    /// Wraps: `-Int128::MIN == Int128::MIN`.
    #[inline]
    fn neg(self) -> Self {
        Int128(Uint128::ZERO - self.0)
    }
}

impl Neg for &Int128 {
    type Output = Int128;

    #[inline]
    fn neg(self) -> Int128 {
        -*self
    }
}

impl Not for Int128 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Int128(!self.0)
    }
}

/// Overflow-aware families. Overflow in two's complement addition: both operands have
/// the same sign and the result does not.
impl Int128 {
    pub const fn overflowing_add(self, summand: Self) -> (Self, bool) {
        let result = Self(self.0.wrapping_add(summand.0));
        let overflow = self.is_negative() == summand.is_negative()
            && result.is_negative() != self.is_negative();
        (result, overflow)
    }

    pub const fn overflowing_sub(self, subtrahend: Self) -> (Self, bool) {
        let result = Self(self.0.wrapping_sub(subtrahend.0));
        let overflow = self.is_negative() != subtrahend.is_negative()
            && result.is_negative() != self.is_negative();
        (result, overflow)
    }

    /// Multiplies magnitudes, then checks the magnitude fits the sign of the result.
    pub const fn overflowing_mul(self, factor: Self) -> (Self, bool) {
        let result = Self(self.0.wrapping_mul(factor.0));
        let (magnitude, overflow) = self.unsigned_abs().overflowing_mul(factor.unsigned_abs());
        let negative = self.is_negative() != factor.is_negative();
        let limit = Int128::MIN.0;
        let fits = if negative {
            !magnitude.is_greater_than(limit)
        } else {
            magnitude.is_less_than(limit)
        };
        (result, overflow || !fits)
    }

    #[inline]
    pub const fn wrapping_add(self, summand: Self) -> Self {
        Self(self.0.wrapping_add(summand.0))
    }

    #[inline]
    pub const fn wrapping_sub(self, subtrahend: Self) -> Self {
        Self(self.0.wrapping_sub(subtrahend.0))
    }

    #[inline]
    pub const fn wrapping_mul(self, factor: Self) -> Self {
        Self(self.0.wrapping_mul(factor.0))
    }

    pub const fn checked_add(self, summand: Self) -> Option<Self> {
        match self.overflowing_add(summand) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub const fn checked_sub(self, subtrahend: Self) -> Option<Self> {
        match self.overflowing_sub(subtrahend) {
            (difference, false) => Some(difference),
            (_, true) => None,
        }
    }

    pub const fn checked_mul(self, factor: Self) -> Option<Self> {
        match self.overflowing_mul(factor) {
            (product, false) => Some(product),
            (_, true) => None,
        }
    }

    /// Clamps towards the side the overflow went to.
    pub const fn saturating_add(self, summand: Self) -> Self {
        match self.overflowing_add(summand) {
            (sum, false) => sum,
            (_, true) if summand.is_negative() => Self::MIN,
            (_, true) => Self::MAX,
        }
    }

    pub const fn saturating_sub(self, subtrahend: Self) -> Self {
        match self.overflowing_sub(subtrahend) {
            (difference, false) => difference,
            (_, true) if subtrahend.is_negative() => Self::MAX,
            (_, true) => Self::MIN,
        }
    }

    pub const fn saturating_mul(self, factor: Self) -> Self {
        match self.overflowing_mul(factor) {
            (product, false) => product,
            (_, true) if self.is_negative() != factor.is_negative() => Self::MIN,
            (_, true) => Self::MAX,
        }
    }
}

/// Increment and decrement, wrapping like `+= 1` and `-= 1`.
impl Int128 {
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

// Shifts. Left is the unsigned shift; right replicates the sign bit.
impl Int128 {
    /// Arithmetic shift by `amount % 128`.
    pub const fn wrapping_shr(self, amount: u32) -> Self {
        if self.is_negative() {
            // the complement of a negative value is non-negative
            Self(self.0.complement().wrapping_shr(amount).complement())
        } else {
            Self(self.0.wrapping_shr(amount))
        }
    }

    #[inline]
    pub const fn wrapping_shl(self, amount: u32) -> Self {
        Self(self.0.wrapping_shl(amount))
    }

    pub const fn checked_shl(self, amount: u32) -> Option<Self> {
        if amount < Self::BITS { Some(self.wrapping_shl(amount)) } else { None }
    }

    pub const fn checked_shr(self, amount: u32) -> Option<Self> {
        if amount < Self::BITS { Some(self.wrapping_shr(amount)) } else { None }
    }
}

macro_rules! shift_operators {
    ($($amount:ty),*) => {$(
        impl Shl<$amount> for Int128 {
            type Output = Self;
            #[inline]
            fn shl(self, amount: $amount) -> Self {
                Int128(self.0 << amount)
            }
        }

        impl ShlAssign<$amount> for Int128 {
            #[inline]
            fn shl_assign(&mut self, amount: $amount) {
                *self = *self << amount;
            }
        }

        impl Shr<$amount> for Int128 {
            type Output = Self;
            #[inline]
            fn shr(self, amount: $amount) -> Self {
                // the unsigned shift checks the amount; complementing around it makes it arithmetic
                if self.is_negative() {
                    Int128(!(!self.0 >> amount))
                } else {
                    Int128(self.0 >> amount)
                }
            }
        }

        impl ShrAssign<$amount> for Int128 {
            #[inline]
            fn shr_assign(&mut self, amount: $amount) {
                *self = *self >> amount;
            }
        }
    )*};
}

shift_operators!(u8, u16, u32, u64, usize, i32);

// Division: magnitudes through the unsigned engine, then the signs.
impl Int128 {
    /// Quotient negative iff the signs differ, remainder with the sign of the dividend.
    const fn with_signs(self, divisor: Self, magnitudes: DivModResult<Uint128>) -> DivModResult<Self> {
        let quotient = if self.is_negative() != divisor.is_negative() {
            magnitudes.quotient.wrapping_neg()
        } else {
            magnitudes.quotient
        };
        let remainder = if self.is_negative() {
            magnitudes.remainder.wrapping_neg()
        } else {
            magnitudes.remainder
        };
        DivModResult { quotient: Self(quotient), remainder: Self(remainder) }
    }

    /// Truncating division with remainder; `Int128::MIN / -1` wraps to `Int128::MIN`.
    pub fn div_mod(self, divisor: Self) -> Result<DivModResult<Self>> {
        self.try_div_mod(divisor).ok_or(Error::DivideByZero)
    }

    pub fn try_div_mod(self, divisor: Self) -> Option<DivModResult<Self>> {
        let magnitudes = self.unsigned_abs().try_div_mod(divisor.unsigned_abs())?;
        Some(self.with_signs(divisor, magnitudes))
    }

    /// # Safety
    ///
    /// `divisor` must be non-zero, see [`Uint128::unsafe_div_mod`].
    pub unsafe fn unsafe_div_mod(self, divisor: Self) -> DivModResult<Self> {
        let magnitudes = self.unsigned_abs().unsafe_div_mod(divisor.unsigned_abs());
        self.with_signs(divisor, magnitudes)
    }

    /// `const` division with remainder, `None` for a zero divisor.
    pub const fn checked_div_mod(self, divisor: Self) -> Option<DivModResult<Self>> {
        match self.unsigned_abs().checked_div_mod(divisor.unsigned_abs()) {
            Some(magnitudes) => Some(self.with_signs(divisor, magnitudes)),
            None => None,
        }
    }

    /// `None` for a zero divisor and for `Int128::MIN / -1`, like the primitive.
    pub const fn checked_div(self, divisor: Self) -> Option<Self> {
        if self.0.equals(Self::MIN.0) && divisor.0.equals(Self::NEG_ONE.0) {
            return None;
        }
        match self.checked_div_mod(divisor) {
            Some(result) => Some(result.quotient),
            None => None,
        }
    }

    /// `None` exactly when [`Self::checked_div`] is.
    pub const fn checked_rem(self, divisor: Self) -> Option<Self> {
        if self.0.equals(Self::MIN.0) && divisor.0.equals(Self::NEG_ONE.0) {
            return None;
        }
        match self.checked_div_mod(divisor) {
            Some(result) => Some(result.remainder),
            None => None,
        }
    }

    /// Rounds towards negative infinity instead of zero, remainder never negative.
    pub fn div_euclid(self, divisor: Self) -> Result<Self> {
        let DivModResult { quotient, remainder } = self.div_mod(divisor)?;
        if remainder.is_negative() {
            Ok(if divisor.is_negative() { quotient + Self::ONE } else { quotient - Self::ONE })
        } else {
            Ok(quotient)
        }
    }

    pub fn rem_euclid(self, divisor: Self) -> Result<Self> {
        let remainder = self.div_mod(divisor)?.remainder;
        if remainder.is_negative() {
            Ok(remainder + Self(divisor.unsigned_abs()))
        } else {
            Ok(remainder)
        }
    }
}

fn quotient(dividend: Int128, divisor: Int128) -> Int128 {
    match dividend.try_div_mod(divisor) {
        Some(result) => result.quotient,
        None => panic!("attempt to divide by zero"),
    }
}

fn remainder(dividend: Int128, divisor: Int128) -> Int128 {
    match dividend.try_div_mod(divisor) {
        Some(result) => result.remainder,
        None => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

impl Div for Int128 {
    type Output = Self;

    fn div(self, divisor: Self) -> Self {
        quotient(self, divisor)
    }
}

impl Div for &Int128 {
    type Output = Int128;

    fn div(self, divisor: Self) -> Int128 {
        quotient(*self, *divisor)
    }
}

impl DivAssign for Int128 {
    fn div_assign(&mut self, divisor: Self) {
        *self = quotient(*self, divisor);
    }
}

impl Rem for Int128 {
    type Output = Self;

    fn rem(self, divisor: Self) -> Self {
        remainder(self, divisor)
    }
}

impl Rem for &Int128 {
    type Output = Int128;

    fn rem(self, divisor: Self) -> Int128 {
        remainder(*self, *divisor)
    }
}

impl RemAssign for Int128 {
    fn rem_assign(&mut self, divisor: Self) {
        *self = remainder(*self, divisor);
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::{DivModResult, Error, Int128};

    fn i(x: i128) -> Int128 {
        Int128::from(x)
    }

    #[test]
    fn wrapping_operators() {
        assert_eq!(i(-3) + i(5), i(2));
        assert_eq!(i(3) - i(5), i(-2));
        assert_eq!(i(-3) * i(5), i(-15));
        assert_eq!(i(-3) * i(-5), i(15));
        assert_eq!(Int128::MAX + Int128::ONE, Int128::MIN);
        assert_eq!(Int128::MIN - Int128::ONE, Int128::MAX);
        assert_eq!(&i(6) & &i(-4), i(6 & -4));
        assert_eq!(i(6) | i(-4), i(6 | -4));
        assert_eq!(i(6) ^ i(-4), i(6 ^ -4));
        assert_eq!(!i(0), Int128::NEG_ONE);

        let mut x = i(10);
        x += i(-20);
        x *= i(3);
        x -= &i(1);
        assert_eq!(x, i(-31));
    }

    #[test]
    fn overflow_families() {
        assert_eq!(Int128::MAX.overflowing_add(Int128::ONE), (Int128::MIN, true));
        assert_eq!(Int128::MAX.checked_add(Int128::ONE), None);
        assert_eq!(Int128::MAX.saturating_add(Int128::ONE), Int128::MAX);
        assert_eq!(Int128::MIN.saturating_add(Int128::NEG_ONE), Int128::MIN);
        assert_eq!(Int128::MIN.checked_sub(Int128::ONE), None);
        assert_eq!(Int128::MIN.saturating_sub(Int128::ONE), Int128::MIN);
        assert_eq!(Int128::MAX.saturating_sub(Int128::NEG_ONE), Int128::MAX);
        assert_eq!(i(-5).checked_sub(i(-5)), Some(i(0)));
        assert_eq!(Int128::MIN.checked_mul(Int128::ONE), Some(Int128::MIN));
        assert_eq!(Int128::MIN.checked_mul(Int128::NEG_ONE), None);
        assert_eq!(i(1 << 64).checked_mul(i(-(1 << 63))), Some(Int128::MIN));
        assert_eq!(i(1 << 64).checked_mul(i(1 << 63)), None);
        assert_eq!(i(1 << 64).saturating_mul(i(1 << 63)), Int128::MAX);
        assert_eq!(i(-(1 << 64)).saturating_mul(i(1 << 64)), Int128::MIN);
        assert_eq!(i(7).wrapping_mul(i(-6)), i(-42));
    }

    #[test]
    fn increment_and_decrement() {
        let mut x = Int128::MAX;
        assert_eq!(x.post_increment(), Int128::MAX);
        assert_eq!(x, Int128::MIN);
        assert_eq!(x.decrement(), Int128::MAX);
        assert_eq!(x.increment(), Int128::MIN);
        assert_eq!(x.post_decrement(), Int128::MIN);
        assert_eq!(x, Int128::MAX);

        let mut y = i(-1);
        assert_eq!(y.increment(), i(0));
        assert_eq!(y.decrement(), i(-1));
    }

    #[test]
    fn arithmetic_shift() {
        assert_eq!(i(-8) >> 1u32, i(-4));
        assert_eq!(i(-1) >> 127u32, i(-1));
        assert_eq!(Int128::MIN >> 127u32, i(-1));
        assert_eq!(i(8) >> 3u32, i(1));
        assert_eq!(i(-3) << 2u32, i(-12));
        assert_eq!(i(-7).wrapping_shr(1), i(-4));
        assert_eq!(i(-7).wrapping_shr(129), i(-4));
        assert_eq!(i(-7).checked_shr(128), None);
        assert_eq!(Int128::ONE.checked_shl(127), Some(Int128::MIN));

        let mut x = i(-1024);
        x >>= 3u32;
        x <<= 1u32;
        assert_eq!(x, i(-256));
    }

    #[test]
    fn division_truncates_towards_zero() {
        for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, -3), (i128::MIN, 3), (i128::MAX, -1)] {
            let expected = DivModResult { quotient: i(a / b), remainder: i(a % b) };
            assert_eq!(i(a).div_mod(i(b)), Ok(expected));
            assert_eq!(i(a).checked_div_mod(i(b)), Some(expected));
            assert_eq!(unsafe { i(a).unsafe_div_mod(i(b)) }, expected);
            assert_eq!(i(a) / i(b), i(a / b));
            assert_eq!(i(a) % i(b), i(a % b));
            assert_eq!(i(a).div_euclid(i(b)), Ok(i(a.div_euclid(b))));
            assert_eq!(i(a).rem_euclid(i(b)), Ok(i(a.rem_euclid(b))));
        }
    }

    #[test]
    fn division_edge_cases() {
        assert_eq!(i(1).div_mod(Int128::ZERO), Err(Error::DivideByZero));
        assert_eq!(i(1).try_div_mod(Int128::ZERO), None);
        assert_eq!(i(1).checked_div(Int128::ZERO), None);
        assert_eq!(Int128::MIN.checked_div(Int128::NEG_ONE), None);
        assert_eq!(Int128::MIN / Int128::NEG_ONE, Int128::MIN);
        assert_eq!(Int128::MIN % Int128::NEG_ONE, Int128::ZERO);
        assert_eq!(i(-7).checked_rem(i(2)), Some(i(-1)));
        assert_eq!(Int128::MIN.checked_rem(Int128::NEG_ONE), None);
        assert_eq!(Int128::MIN.checked_rem(Int128::NEG_ONE), i128::MIN.checked_rem(-1).map(i));
        assert_eq!(Int128::MIN.checked_rem(Int128::ONE), Some(Int128::ZERO));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn divide_by_zero_panics() {
        let _ = i(-1) / Int128::ZERO;
    }

    proptest! {
        #[test]
        fn agrees_with_i128(a in any::<i128>(), b in any::<i128>(), amount in 0u32..128) {
            prop_assert_eq!(i(a) + i(b), i(a.wrapping_add(b)));
            prop_assert_eq!(i(a) - i(b), i(a.wrapping_sub(b)));
            prop_assert_eq!(i(a) * i(b), i(a.wrapping_mul(b)));
            prop_assert_eq!(i(a).checked_add(i(b)), a.checked_add(b).map(i));
            prop_assert_eq!(i(a).checked_sub(i(b)), a.checked_sub(b).map(i));
            prop_assert_eq!(i(a).checked_mul(i(b)), a.checked_mul(b).map(i));
            prop_assert_eq!(i(a).saturating_add(i(b)), i(a.saturating_add(b)));
            prop_assert_eq!(i(a).saturating_sub(i(b)), i(a.saturating_sub(b)));
            prop_assert_eq!(i(a).saturating_mul(i(b)), i(a.saturating_mul(b)));
            prop_assert_eq!(i(a) >> amount, i(a >> amount));
            prop_assert_eq!(i(a) << amount, i(a << amount));
            prop_assert_eq!(-i(a), i(a.wrapping_neg()));
            prop_assert_eq!(i(a).cmp(&i(b)), a.cmp(&b));
            if b != 0 {
                prop_assert_eq!(i(a).checked_div(i(b)), a.checked_div(b).map(i));
                prop_assert_eq!(i(a).checked_rem(i(b)), a.checked_rem(b).map(i));
            }
        }
    }
}
