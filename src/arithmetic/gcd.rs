//! Greatest common divisor and least common multiple, usable in `const` context.

use crate::Uint128;

impl Uint128 {
    /// Greatest common divisor, by binary (Stein's) reduction.
    ///
    /// `gcd(x, 0) == x`, so `gcd(0, 0) == 0`.
    pub const fn gcd(self, other: Self) -> Self {
        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }

        let shift = {
            let (a, b) = (self.trailing_zeros(), other.trailing_zeros());
            if a < b { a } else { b }
        };
        let mut a = self.wrapping_shr(self.trailing_zeros());
        let mut b = other;
        // a is odd from here on
        loop {
            b = b.wrapping_shr(b.trailing_zeros());
            if a.is_greater_than(b) {
                let t = a;
                a = b;
                b = t;
            }
            b = b.wrapping_sub(a);
            if b.is_zero() {
                return a.wrapping_shl(shift);
            }
        }
    }

    /// Least common multiple, `None` if it exceeds [`Self::MAX`].
    ///
    /// `lcm(x, 0) == 0`.
    pub const fn checked_lcm(self, other: Self) -> Option<Self> {
        if self.is_zero() || other.is_zero() {
            return Some(Self::ZERO);
        }
        match self.checked_div(self.gcd(other)) {
            Some(reduced) => reduced.checked_mul(other),
            None => None,
        }
    }

    /// Least common multiple, wrapping on overflow.
    pub const fn lcm(self, other: Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::ZERO;
        }
        match self.checked_div(self.gcd(other)) {
            Some(reduced) => reduced.wrapping_mul(other),
            None => Self::ZERO,
        }
    }
}
