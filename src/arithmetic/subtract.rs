use crate::backend::{constant, Backend, Selected};
use crate::limb::Limb;
use crate::Uint128;

#[inline]
fn difference(a: Uint128, b: Uint128) -> Uint128 {
    Selected::sub(a, b, false).0
}

// Subtraction in Uint128 / 2^128
binary_operator!(Uint128, Sub, sub, SubAssign, sub_assign, difference);

impl core::ops::Sub<Limb> for Uint128 {
    type Output = Uint128;
    #[inline]
    fn sub(self, subtrahend: Limb) -> Uint128 {
        difference(self, Uint128::from_u64(subtrahend))
    }
}

impl core::ops::SubAssign<Limb> for Uint128 {
    #[inline]
    fn sub_assign(&mut self, subtrahend: Limb) {
        *self = *self - subtrahend;
    }
}

impl Uint128 {
    /// `self - subtrahend - borrow`, with the borrow out of bit 127.
    #[inline]
    pub const fn borrowing_sub(self, subtrahend: Self, borrow: bool) -> (Self, bool) {
        constant::sub(self, subtrahend, borrow)
    }

    #[inline]
    pub const fn overflowing_sub(self, subtrahend: Self) -> (Self, bool) {
        constant::sub(self, subtrahend, false)
    }

    #[inline]
    pub const fn wrapping_sub(self, subtrahend: Self) -> Self {
        constant::sub(self, subtrahend, false).0
    }

    pub const fn checked_sub(self, subtrahend: Self) -> Option<Self> {
        match constant::sub(self, subtrahend, false) {
            (difference, false) => Some(difference),
            (_, true) => None,
        }
    }

    pub const fn saturating_sub(self, subtrahend: Self) -> Self {
        match constant::sub(self, subtrahend, false) {
            (difference, false) => difference,
            (_, true) => Self::ZERO,
        }
    }

    /// Two's complement, `2^128 - self` (and zero for zero).
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    /// `|self - other|`
    pub const fn abs_diff(self, other: Self) -> Self {
        if self.is_less_than(other) {
            other.wrapping_sub(self)
        } else {
            self.wrapping_sub(other)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::arithmetic::test::assert_op;
    use crate::Uint128;

    #[test]
    fn sub() {
        assert_op!(Uint128::from_parts(1, 0), -, Uint128::ONE, Uint128::from(u64::MAX));
        assert_op!(Uint128::ZERO, -, Uint128::ONE, Uint128::MAX);
        assert_op!(Uint128::MAX, -, Uint128::MAX, Uint128::ZERO);
        assert_op!(
            Uint128::from(256368684943268248658307433575740207117u128), -,
            Uint128::from(16109687965047641490155963133754044755u128),
            Uint128::from(240258996978220607168151470441986162362u128)
        );

        let mut x = Uint128::from(10u8);
        x -= Uint128::from(3u8);
        x -= &Uint128::from(3u8);
        assert_eq!(x, Uint128::from(4u8));
        x -= 5u64;
        assert_eq!(x, Uint128::MAX);
        assert_eq!(Uint128::from_parts(1, 0) - 1u64, Uint128::from(u64::MAX));
    }

    #[test]
    fn overflow_families() {
        let zero = Uint128::ZERO;
        let one = Uint128::ONE;
        assert_eq!(zero.overflowing_sub(one), (Uint128::MAX, true));
        assert_eq!(zero.wrapping_sub(one), Uint128::MAX);
        assert_eq!(zero.checked_sub(one), None);
        assert_eq!(zero.saturating_sub(one), zero);
        assert_eq!(one.checked_sub(one), Some(zero));
        assert_eq!(one.borrowing_sub(zero, true), (zero, false));
        assert_eq!(zero.borrowing_sub(zero, true), (Uint128::MAX, true));
    }

    #[test]
    fn negation() {
        assert_eq!(Uint128::ZERO.wrapping_neg(), Uint128::ZERO);
        assert_eq!(Uint128::ONE.wrapping_neg(), Uint128::MAX);
        assert_eq!(Uint128::from_parts(1 << 63, 0).wrapping_neg(), Uint128::from_parts(1 << 63, 0));
        let x = Uint128::from(5u8);
        let y = Uint128::from(12u8);
        assert_eq!(x.abs_diff(y), Uint128::from(7u8));
        assert_eq!(y.abs_diff(x), Uint128::from(7u8));
    }
}
