//! Arithmetic backends.
//!
//! Each backend is a module of free functions with one shape:
//! limb primitives (`add_with_carry`, `sub_with_borrow`, `widening_mul`, `div_wide`)
//! and the 128-bit operations built from them. The native and portable modules are
//! `const fn` throughout; the intrinsic one is not, so compile-time evaluation under
//! the intrinsic build goes through the portable module instead.
//!
//! [`Backend`] wraps every module behind one trait, so callers and tests can name a
//! backend as a type. [`Selected`] is the one picked by `build.rs`.

use crate::limb::Limb;
use crate::probe::CalculationMode;
use crate::{DivModResult, Uint128};

/// Expands the two-limb 128-bit operations in terms of the limb primitives in scope.
///
/// `$qualifier` is `const` for backends whose primitives are `const fn`.
macro_rules! limb_composites {
    ($($qualifier:tt)?) => {
        pub $($qualifier)? fn add(a: Uint128, b: Uint128, carry: bool) -> (Uint128, bool) {
            let (low, carry) = add_with_carry(a.low(), b.low(), carry);
            let (high, carry) = add_with_carry(a.high(), b.high(), carry);
            (Uint128::from_parts(high, low), carry)
        }

        pub $($qualifier)? fn sub(a: Uint128, b: Uint128, borrow: bool) -> (Uint128, bool) {
            let (low, borrow) = sub_with_borrow(a.low(), b.low(), borrow);
            let (high, borrow) = sub_with_borrow(a.high(), b.high(), borrow);
            (Uint128::from_parts(high, low), borrow)
        }

        /// Truncating product. Only `low * low` needs the widening multiply, the cross
        /// terms only contribute their low halves, `high * high` is dropped.
        pub $($qualifier)? fn mul(a: Uint128, b: Uint128) -> Uint128 {
            let product = widening_mul(a.low(), b.low());
            let high = product
                .high()
                .wrapping_add(a.high().wrapping_mul(b.low()))
                .wrapping_add(a.low().wrapping_mul(b.high()));
            Uint128::from_parts(high, product.low())
        }

        pub $($qualifier)? fn overflowing_mul(a: Uint128, b: Uint128) -> (Uint128, bool) {
            let product = widening_mul(a.low(), b.low());
            let (cross_a, overflow_a) = a.high().overflowing_mul(b.low());
            let (cross_b, overflow_b) = a.low().overflowing_mul(b.high());
            let (high, overflow_c) = product.high().overflowing_add(cross_a);
            let (high, overflow_d) = high.overflowing_add(cross_b);
            let overflow = (a.high() != 0 && b.high() != 0)
                | overflow_a
                | overflow_b
                | overflow_c
                | overflow_d;
            (Uint128::from_parts(high, product.low()), overflow)
        }

        /// Caller ensures `divisor` is non-zero.
        pub $($qualifier)? fn div_mod(dividend: Uint128, divisor: Uint128) -> DivModResult<Uint128> {
            if divisor.high() == 0 {
                // 128 / 64: the high quotient limb is a plain limb division, the low
                // one a wide division whose high half (the remainder) is below the divisor.
                let d = divisor.low();
                let (high, rest) = (dividend.high() / d, dividend.high() % d);
                let (low, remainder) = div_wide(rest, dividend.low(), d);
                return DivModResult {
                    quotient: Uint128::from_parts(high, low),
                    remainder: Uint128::from_parts(0, remainder),
                };
            }

            if divisor.is_greater_than(dividend) {
                return DivModResult { quotient: Uint128::ZERO, remainder: dividend };
            }

            // restoring shift-subtract division; divisor.high() != 0 bounds the loop to 64 rounds
            let shift = divisor.leading_zeros() - dividend.leading_zeros();
            let mut denominator = shl(divisor, shift);
            let mut quotient = Uint128::ZERO;
            let mut remainder = dividend;
            let mut round = 0;
            while round <= shift {
                quotient = shl(quotient, 1);
                if !denominator.is_greater_than(remainder) {
                    remainder = sub(remainder, denominator, false).0;
                    quotient = Uint128::from_parts(quotient.high(), quotient.low() | 1);
                }
                denominator = shr(denominator, 1);
                round += 1;
            }
            DivModResult { quotient, remainder }
        }
    };
}

pub mod native;
pub mod portable;
#[cfg(target_arch = "x86_64")]
pub mod intrinsic;

/// The `const fn` backend used in compile-time evaluation.
#[cfg(uint128_backend = "native")]
pub(crate) use native as constant;
#[cfg(not(uint128_backend = "native"))]
pub(crate) use portable as constant;

/// One backend as a type.
pub trait Backend {
    const MODE: CalculationMode;

    /// `a + b + carry`, and whether that overflowed a limb.
    fn add_with_carry(a: Limb, b: Limb, carry: bool) -> (Limb, bool);
    /// `a - b - borrow`, and whether that underflowed a limb.
    fn sub_with_borrow(a: Limb, b: Limb, borrow: bool) -> (Limb, bool);
    /// The full 128-bit product of two limbs.
    fn widening_mul(a: Limb, b: Limb) -> Uint128;
    /// `(high:low) / divisor` as `(quotient, remainder)`. Requires `high < divisor`.
    fn div_wide(high: Limb, low: Limb, divisor: Limb) -> (Limb, Limb);

    fn add(a: Uint128, b: Uint128, carry: bool) -> (Uint128, bool);
    fn sub(a: Uint128, b: Uint128, borrow: bool) -> (Uint128, bool);
    fn mul(a: Uint128, b: Uint128) -> Uint128;
    fn overflowing_mul(a: Uint128, b: Uint128) -> (Uint128, bool);
    /// Requires a non-zero divisor.
    fn div_mod(dividend: Uint128, divisor: Uint128) -> DivModResult<Uint128>;
    /// Requires `amount < 128`.
    fn shl(value: Uint128, amount: u32) -> Uint128;
    /// Requires `amount < 128`.
    fn shr(value: Uint128, amount: u32) -> Uint128;
}

macro_rules! backend {
    ($name:ident, $module:ident, $mode:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $name;

        impl Backend for $name {
            const MODE: CalculationMode = $mode;

            #[inline]
            fn add_with_carry(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
                $module::add_with_carry(a, b, carry)
            }
            #[inline]
            fn sub_with_borrow(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
                $module::sub_with_borrow(a, b, borrow)
            }
            #[inline]
            fn widening_mul(a: Limb, b: Limb) -> Uint128 {
                $module::widening_mul(a, b)
            }
            #[inline]
            fn div_wide(high: Limb, low: Limb, divisor: Limb) -> (Limb, Limb) {
                $module::div_wide(high, low, divisor)
            }
            #[inline]
            fn add(a: Uint128, b: Uint128, carry: bool) -> (Uint128, bool) {
                $module::add(a, b, carry)
            }
            #[inline]
            fn sub(a: Uint128, b: Uint128, borrow: bool) -> (Uint128, bool) {
                $module::sub(a, b, borrow)
            }
            #[inline]
            fn mul(a: Uint128, b: Uint128) -> Uint128 {
                $module::mul(a, b)
            }
            #[inline]
            fn overflowing_mul(a: Uint128, b: Uint128) -> (Uint128, bool) {
                $module::overflowing_mul(a, b)
            }
            #[inline]
            fn div_mod(dividend: Uint128, divisor: Uint128) -> DivModResult<Uint128> {
                $module::div_mod(dividend, divisor)
            }
            #[inline]
            fn shl(value: Uint128, amount: u32) -> Uint128 {
                $module::shl(value, amount)
            }
            #[inline]
            fn shr(value: Uint128, amount: u32) -> Uint128 {
                $module::shr(value, amount)
            }
        }
    };
}

backend!(Native, native, CalculationMode::NativeWideWord,
    "The compiler's `u128` (two machine words on 64-bit targets, library calls elsewhere).");
backend!(Portable, portable, CalculationMode::PortableFallback,
    "Two limbs, schoolbook multiplication and shift-subtract division, no wide type at all.");
#[cfg(target_arch = "x86_64")]
backend!(Intrinsic, intrinsic, CalculationMode::PlatformIntrinsic64,
    "Two limbs, x86-64 `adc`/`sbb` intrinsics and the `mul`/`div` instructions.");

#[cfg(uint128_backend = "native")]
pub type Selected = Native;
#[cfg(uint128_backend = "portable")]
pub type Selected = Portable;
#[cfg(uint128_backend = "intrinsic")]
pub type Selected = Intrinsic;

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    const M: Limb = Limb::MAX;

    fn u(x: u128) -> Uint128 {
        Uint128::from(x)
    }

    /// Runs `$check::<B>()` for every backend compiled for this target.
    macro_rules! for_each_backend {
        ($check:ident $(, $arg:expr)*) => {{
            $check::<Native>($($arg),*);
            $check::<Portable>($($arg),*);
            #[cfg(target_arch = "x86_64")]
            $check::<Intrinsic>($($arg),*);
        }};
    }

    #[test]
    fn selected_matches_probe() {
        assert_eq!(<Selected as Backend>::MODE, crate::probe::MODE);
    }

    fn limb_primitives<B: Backend>() {
        assert_eq!(B::add_with_carry(M, 1, false), (0, true));
        assert_eq!(B::add_with_carry(M, 0, true), (0, true));
        assert_eq!(B::add_with_carry(M, M, true), (M, true));
        assert_eq!(B::add_with_carry(2, 3, false), (5, false));
        assert_eq!(B::sub_with_borrow(0, 1, false), (M, true));
        assert_eq!(B::sub_with_borrow(0, 0, true), (M, true));
        assert_eq!(B::sub_with_borrow(5, 3, true), (1, false));
        assert_eq!(B::widening_mul(M, M - 1), u(M as u128 * (M - 1) as u128));
        assert_eq!(B::widening_mul(M, M), Uint128::from_parts(M - 1, 1));
        assert_eq!(B::div_wide(1, 0, 2), (1 << 63, 0));
        assert_eq!(B::div_wide(M - 1, M, M), (M, M - 1));
    }

    #[test]
    fn limb_primitives_agree() {
        for_each_backend!(limb_primitives);
    }

    fn reference_values<B: Backend>() {
        let max = Uint128::MAX;
        assert_eq!(B::add(max, u(1), false), (Uint128::ZERO, true));
        assert_eq!(B::sub(Uint128::ZERO, u(1), false), (max, true));
        assert_eq!(B::shl(u(1), 127), Uint128::from_parts(1 << 63, 0));
        assert_eq!(B::shr(B::shl(u(1), 127), 127), u(1));
        assert_eq!(B::shl(max, 0), max);

        let a = u(256368684943268248658307433575740207117);
        let b = u(16109687965047641490155963133754044755);
        let result = B::div_mod(a, b);
        assert_eq!(result.quotient, u(15));
        assert_eq!(result.remainder, u(256368684943268248658307433575740207117 - 15 * 16109687965047641490155963133754044755));

        // divisor > dividend, zero dividend, divisor == dividend
        assert_eq!(B::div_mod(b, a), DivModResult { quotient: Uint128::ZERO, remainder: b });
        assert_eq!(B::div_mod(Uint128::ZERO, a), DivModResult { quotient: Uint128::ZERO, remainder: Uint128::ZERO });
        assert_eq!(B::div_mod(a, a), DivModResult { quotient: u(1), remainder: Uint128::ZERO });
        assert_eq!(B::div_mod(max, u(1)), DivModResult { quotient: max, remainder: Uint128::ZERO });

        assert_eq!(B::mul(max, max), u(1));
        assert_eq!(B::overflowing_mul(max, max), (u(1), true));
        assert_eq!(B::overflowing_mul(u(1 << 64), u(1 << 63)), (Uint128::from_parts(1 << 63, 0), false));
        assert_eq!(B::overflowing_mul(u(1 << 64), u(1 << 64)), (Uint128::ZERO, true));
    }

    #[test]
    fn reference_values_agree() {
        for_each_backend!(reference_values);
    }

    fn against_oracle<B: Backend>(a: u128, b: u128, amount: u32) {
        let (x, y) = (u(a), u(b));
        let (sum, carry) = a.overflowing_add(b);
        assert_eq!(B::add(x, y, false), (u(sum), carry));
        let (difference, borrow) = a.overflowing_sub(b);
        assert_eq!(B::sub(x, y, false), (u(difference), borrow));
        let (product, overflow) = a.overflowing_mul(b);
        assert_eq!(B::mul(x, y), u(product));
        assert_eq!(B::overflowing_mul(x, y), (u(product), overflow));
        assert_eq!(B::shl(x, amount), u(a << amount));
        assert_eq!(B::shr(x, amount), u(a >> amount));
        if b != 0 {
            assert_eq!(B::div_mod(x, y), DivModResult { quotient: u(a / b), remainder: u(a % b) });
        }
        // also through the 128 / 64 path
        let small = (b as Limb) | 1;
        assert_eq!(
            B::div_mod(x, u(small as u128)),
            DivModResult { quotient: u(a / small as u128), remainder: u(a % small as u128) },
        );
    }

    const CASES: u32 = if cfg!(feature = "extended-testing") { 100_000 } else { 256 };

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(CASES))]

        #[test]
        fn backends_agree_with_oracle(a in any::<u128>(), b in any::<u128>(), amount in 0u32..128) {
            for_each_backend!(against_oracle, a, b, amount);
        }

        #[test]
        fn backends_agree_on_narrow_operands(a in any::<u64>(), b in any::<u64>(), amount in 0u32..128) {
            for_each_backend!(against_oracle, a as u128, b as u128, amount);
            for_each_backend!(against_oracle, (a as u128) << 64, b as u128, amount);
        }
    }
}
