use core::ops::Not;

use crate::Uint128;

impl Uint128 {
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        Self::from_parts(self.high() & other.high(), self.low() & other.low())
    }

    #[inline]
    pub const fn or(self, other: Self) -> Self {
        Self::from_parts(self.high() | other.high(), self.low() | other.low())
    }

    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        Self::from_parts(self.high() ^ other.high(), self.low() ^ other.low())
    }

    #[inline]
    pub const fn complement(self) -> Self {
        Self::from_parts(!self.high(), !self.low())
    }
}

binary_operator!(Uint128, BitAnd, bitand, BitAndAssign, bitand_assign, Uint128::and);
binary_operator!(Uint128, BitOr, bitor, BitOrAssign, bitor_assign, Uint128::or);
binary_operator!(Uint128, BitXor, bitxor, BitXorAssign, bitxor_assign, Uint128::xor);

impl Not for Uint128 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl Not for &Uint128 {
    type Output = Uint128;

    #[inline]
    fn not(self) -> Uint128 {
        self.complement()
    }
}

#[cfg(test)]
mod test {
    use crate::arithmetic::test::assert_op;
    use crate::Uint128;

    const A: Uint128 = Uint128::from_parts(0xc0de_d00d_face_cafe, 0xbabe_b00b_fea2_dad0);
    const B: Uint128 = Uint128::from_parts(0x0f0f_0f0f_0f0f_0f0f, 0xffff_0000_ffff_0000);

    #[test]
    fn bitwise() {
        let (a, b) = (A.to_native(), B.to_native());
        assert_op!(A, &, B, Uint128::from(a & b));
        assert_op!(A, |, B, Uint128::from(a | b));
        assert_op!(A, ^, B, Uint128::from(a ^ b));
        assert_eq!(!A, Uint128::from(!a));
        assert_eq!(!&A, Uint128::from(!a));
        assert_eq!(!Uint128::ZERO, Uint128::MAX);

        let mut x = A;
        x &= B;
        x |= Uint128::ONE;
        x ^= &B;
        assert_eq!(x, Uint128::from(((a & b) | 1) ^ b));
    }
}
