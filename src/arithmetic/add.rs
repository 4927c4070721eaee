use crate::arithmetic::CarryingArithmetic;
use crate::backend::{constant, Backend, Selected};
use crate::limb::Limb;
use crate::{CarryResult, Uint128};

#[inline]
fn sum(a: Uint128, b: Uint128) -> Uint128 {
    Selected::add(a, b, false).0
}

// Addition in Uint128 / 2^128
binary_operator!(Uint128, Add, add, AddAssign, add_assign, sum);

impl core::ops::Add<Limb> for Uint128 {
    type Output = Uint128;
    #[inline]
    fn add(self, summand: Limb) -> Uint128 {
        sum(self, Uint128::from_u64(summand))
    }
}

impl core::ops::AddAssign<Limb> for Uint128 {
    #[inline]
    fn add_assign(&mut self, summand: Limb) {
        *self = *self + summand;
    }
}

impl Uint128 {
    /// `self + summand + carry`, with the carry out of bit 127.
    #[inline]
    pub const fn carrying_add(self, summand: Self, carry: bool) -> (Self, bool) {
        constant::add(self, summand, carry)
    }

    #[inline]
    pub const fn overflowing_add(self, summand: Self) -> (Self, bool) {
        constant::add(self, summand, false)
    }

    #[inline]
    pub const fn wrapping_add(self, summand: Self) -> Self {
        constant::add(self, summand, false).0
    }

    pub const fn checked_add(self, summand: Self) -> Option<Self> {
        match constant::add(self, summand, false) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub const fn saturating_add(self, summand: Self) -> Self {
        match constant::add(self, summand, false) {
            (sum, false) => sum,
            (_, true) => Self::MAX,
        }
    }
}

impl CarryingArithmetic for Limb {
    #[inline]
    fn add_with_carry(self, summand: Self, carry: bool) -> CarryResult<Self> {
        Selected::add_with_carry(self, summand, carry).into()
    }

    #[inline]
    fn sub_with_borrow(self, subtrahend: Self, borrow: bool) -> CarryResult<Self> {
        Selected::sub_with_borrow(self, subtrahend, borrow).into()
    }
}

impl CarryingArithmetic for Uint128 {
    #[inline]
    fn add_with_carry(self, summand: Self, carry: bool) -> CarryResult<Self> {
        Selected::add(self, summand, carry).into()
    }

    #[inline]
    fn sub_with_borrow(self, subtrahend: Self, borrow: bool) -> CarryResult<Self> {
        Selected::sub(self, subtrahend, borrow).into()
    }
}

#[cfg(test)]
mod test {
    use crate::arithmetic::test::assert_op;
    use crate::{CarryResult, CarryingArithmetic, Uint128};

    #[test]
    fn add() {
        let x = Uint128::from(u64::MAX);
        assert_op!(x, +, Uint128::ONE, Uint128::from_parts(1, 0));
        assert_op!(Uint128::MAX, +, Uint128::ONE, Uint128::ZERO);
        assert_op!(Uint128::MAX, +, Uint128::MAX, Uint128::MAX - Uint128::ONE);
        assert_op!(
            Uint128::from(0xc0ded00dfacecafebabeb00bfea2dad0u128), +, Uint128::from(0x1234u32),
            Uint128::from(0xc0ded00dfacecafebabeb00bfea2ed04u128)
        );

        let mut y = x;
        y += Uint128::ONE;
        y += &Uint128::ONE;
        assert_eq!(y, Uint128::from_parts(1, 1));
        y += u64::MAX;
        assert_eq!(y, Uint128::from_parts(2, 0));
        assert_eq!(Uint128::MAX + 2u64, Uint128::ONE);
    }

    #[test]
    fn overflow_families() {
        let max = Uint128::MAX;
        let one = Uint128::ONE;
        assert_eq!(max.overflowing_add(one), (Uint128::ZERO, true));
        assert_eq!(max.wrapping_add(one), Uint128::ZERO);
        assert_eq!(max.checked_add(one), None);
        assert_eq!(max.saturating_add(one), max);
        assert_eq!(one.checked_add(one), Some(Uint128::from(2u8)));
        assert_eq!(one.saturating_add(one), Uint128::from(2u8));
        assert_eq!(max.carrying_add(Uint128::ZERO, true), (Uint128::ZERO, true));
        assert_eq!(one.carrying_add(one, true), (Uint128::from(3u8), false));
    }

    #[test]
    fn carry_chains() {
        // two limbs of a 128-bit number added by hand, against the engine
        let (a, b) = (0xffff_ffff_ffff_fff0_0000_0000_0000_00ffu128, 0x10_ffff_ffff_ffff_ff01u128);
        let low = (a as u64).add_with_carry(b as u64, false);
        let high = ((a >> 64) as u64).add_with_carry((b >> 64) as u64, low.carry);
        let wide = Uint128::from(a).add_with_carry(Uint128::from(b), false);
        assert_eq!(wide, CarryResult { result: Uint128::from_parts(high.result, low.result), carry: high.carry });
        assert!(wide.carry);

        assert_eq!(0u64.sub_with_borrow(0, true), CarryResult { result: u64::MAX, carry: true });
        assert_eq!(
            Uint128::ZERO.sub_with_borrow(Uint128::ZERO, true),
            CarryResult { result: Uint128::MAX, carry: true },
        );
    }
}
