use crate::backend::{constant, Backend, Selected};
use crate::limb::Limb;
use crate::Uint128;

#[inline]
fn product(a: Uint128, b: Uint128) -> Uint128 {
    Selected::mul(a, b)
}

// Multiplication in Uint128 / 2^128
binary_operator!(Uint128, Mul, mul, MulAssign, mul_assign, product);

impl Uint128 {
    /// The full product of two limbs.
    #[inline]
    pub const fn widening_mul(a: Limb, b: Limb) -> Self {
        constant::widening_mul(a, b)
    }

    #[inline]
    pub const fn overflowing_mul(self, factor: Self) -> (Self, bool) {
        constant::overflowing_mul(self, factor)
    }

    #[inline]
    pub const fn wrapping_mul(self, factor: Self) -> Self {
        constant::mul(self, factor)
    }

    pub const fn checked_mul(self, factor: Self) -> Option<Self> {
        match constant::overflowing_mul(self, factor) {
            (product, false) => Some(product),
            (_, true) => None,
        }
    }

    pub const fn saturating_mul(self, factor: Self) -> Self {
        match constant::overflowing_mul(self, factor) {
            (product, false) => product,
            (_, true) => Self::MAX,
        }
    }

    /// Square and multiply, modulo $2^{128}$.
    pub const fn wrapping_pow(self, mut exponent: u32) -> Self {
        let mut base = self;
        let mut power = Self::ONE;
        while exponent > 0 {
            if exponent & 1 == 1 {
                power = constant::mul(power, base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = constant::mul(base, base);
            }
        }
        power
    }

    pub const fn checked_pow(self, mut exponent: u32) -> Option<Self> {
        let mut base = self;
        let mut power = Self::ONE;
        while exponent > 0 {
            if exponent & 1 == 1 {
                power = match constant::overflowing_mul(power, base) {
                    (product, false) => product,
                    (_, true) => return None,
                };
            }
            exponent >>= 1;
            if exponent > 0 {
                base = match constant::overflowing_mul(base, base) {
                    (square, false) => square,
                    (_, true) => return None,
                };
            }
        }
        Some(power)
    }
}
