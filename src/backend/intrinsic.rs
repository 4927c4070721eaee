//! Backend on x86-64 instructions: `adc`/`sbb` through the `core::arch` intrinsics,
//! `mul` and `div` through inline assembly (there are no stable intrinsics for them).
//!
//! None of this is `const`; compile-time evaluation uses the portable backend.

use core::arch::asm;
use core::arch::x86_64::{_addcarry_u64, _subborrow_u64};

use crate::limb::Limb;
use crate::{DivModResult, Uint128};

pub use super::portable::{shl, shr};

#[inline]
#[allow(unused_unsafe)]
pub fn add_with_carry(a: Limb, b: Limb, carry: bool) -> (Limb, bool) {
    let mut sum = 0;
    let carry = unsafe { _addcarry_u64(carry as u8, a, b, &mut sum) };
    (sum, carry != 0)
}

#[inline]
#[allow(unused_unsafe)]
pub fn sub_with_borrow(a: Limb, b: Limb, borrow: bool) -> (Limb, bool) {
    let mut difference = 0;
    let borrow = unsafe { _subborrow_u64(borrow as u8, a, b, &mut difference) };
    (difference, borrow != 0)
}

/// `mul`: rdx:rax = rax * operand.
#[inline]
pub fn widening_mul(a: Limb, b: Limb) -> Uint128 {
    let low: Limb;
    let high: Limb;
    unsafe {
        asm!(
            "mul {factor}",
            factor = in(reg) b,
            inlateout("rax") a => low,
            lateout("rdx") high,
            options(pure, nomem, nostack),
        );
    }
    Uint128::from_parts(high, low)
}

/// `div`: rax, rdx = rdx:rax / operand, rdx:rax % operand.
///
/// The caller must ensure `high < divisor`: the instruction faults otherwise.
#[inline]
pub fn div_wide(high: Limb, low: Limb, divisor: Limb) -> (Limb, Limb) {
    assert!(high < divisor);
    let quotient: Limb;
    let remainder: Limb;
    unsafe {
        asm!(
            "div {divisor}",
            divisor = in(reg) divisor,
            inlateout("rax") low => quotient,
            inlateout("rdx") high => remainder,
            options(pure, nomem, nostack),
        );
    }
    (quotient, remainder)
}

limb_composites!();
