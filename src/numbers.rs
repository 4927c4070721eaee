use core::cmp::Ordering;

use zeroize::Zeroize;

use crate::container::LimbContainer;
use crate::limb::{Limb, LIMBS, LIMB_BITS};

mod trait_implementations;

/// Unsigned 128-bit integer, arithmetic modulo $2^{128}$.
///
/// Internally two [`Limb`]s, or one native `u128` when the native backend is selected
/// (see [`crate::container`]). The representation never leaks: every constructor and
/// accessor below speaks in terms of the value, `high` being bits 64..128 and `low`
/// bits 0..64.
///
/// The operators (`+`, `-`, `*`, `<<`, `>>`) wrap, like the fixed width hardware
/// integers they replace. `/` and `%` panic on a zero divisor; use
/// [`Uint128::div_mod`] or [`Uint128::try_div_mod`] to handle that case instead.
#[derive(Copy, Clone, Default, Eq, PartialEq, Zeroize)]
#[repr(transparent)]
pub struct Uint128(pub(crate) LimbContainer);

/// Quotient and remainder of one division.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DivModResult<T> {
    pub quotient: T,
    pub remainder: T,
}

/// Result of an addition with carry in, or a subtraction with borrow in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CarryResult<T> {
    pub result: T,
    /// Carry (or borrow) out.
    pub carry: bool,
}

impl<T> From<(T, bool)> for CarryResult<T> {
    fn from((result, carry): (T, bool)) -> Self {
        Self { result, carry }
    }
}

// c'tors and such
impl Uint128 {
    pub const BITS: u32 = 128;
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(0, 1);
    pub const MIN: Self = Self::ZERO;
    pub const MAX: Self = Self::from_parts(Limb::MAX, Limb::MAX);

    #[inline]
    pub const fn from_parts(high: Limb, low: Limb) -> Self {
        Self(LimbContainer::from_parts(high, low))
    }

    /// Bits 64..128.
    #[inline]
    pub const fn high(self) -> Limb {
        self.0.high()
    }

    /// Bits 0..64.
    #[inline]
    pub const fn low(self) -> Limb {
        self.0.low()
    }

    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self::from_parts(0, value)
    }

    /// Little-endian limbs, `[low, high]`.
    #[inline]
    pub const fn from_limbs(limbs: [Limb; LIMBS]) -> Self {
        Self(LimbContainer::from_canonical(limbs))
    }

    /// Little-endian limbs, `[low, high]`.
    #[inline]
    pub const fn to_limbs(self) -> [Limb; LIMBS] {
        self.0.to_canonical()
    }

    #[inline]
    pub const fn from_native(value: u128) -> Self {
        Self(LimbContainer::from_native(value))
    }

    #[inline]
    pub const fn to_native(self) -> u128 {
        self.0.to_native()
    }

    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self(LimbContainer::from_le_bytes(bytes))
    }

    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_le_bytes(reversed(bytes))
    }

    pub const fn to_be_bytes(self) -> [u8; 16] {
        reversed(self.to_le_bytes())
    }

    /// Bytes in the target's order, the memory image of the native `u128`.
    pub const fn to_ne_bytes(self) -> [u8; 16] {
        if cfg!(target_endian = "little") {
            self.to_le_bytes()
        } else {
            self.to_be_bytes()
        }
    }

    pub const fn from_ne_bytes(bytes: [u8; 16]) -> Self {
        if cfg!(target_endian = "little") {
            Self::from_le_bytes(bytes)
        } else {
            Self::from_be_bytes(bytes)
        }
    }

    /// The low 8 bits.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.low() as u8
    }

    /// The low 16 bits.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.low() as u16
    }

    /// The low 32 bits.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.low() as u32
    }

    /// The low 64 bits.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.low()
    }

    #[inline]
    pub const fn as_i8(self) -> i8 {
        self.low() as i8
    }

    #[inline]
    pub const fn as_i16(self) -> i16 {
        self.low() as i16
    }

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.low() as i32
    }

    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.low() as i64
    }
}

const fn reversed(mut bytes: [u8; 16]) -> [u8; 16] {
    let mut i = 0;
    while i < 8 {
        let byte = bytes[i];
        bytes[i] = bytes[15 - i];
        bytes[15 - i] = byte;
        i += 1;
    }
    bytes
}

/// Bit queries.
impl Uint128 {
    #[inline]
    pub const fn is_zero(self) -> bool {
        (self.high() | self.low()) == 0
    }

    pub const fn leading_zeros(self) -> u32 {
        if self.high() != 0 {
            self.high().leading_zeros()
        } else {
            LIMB_BITS + self.low().leading_zeros()
        }
    }

    pub const fn trailing_zeros(self) -> u32 {
        if self.low() != 0 {
            self.low().trailing_zeros()
        } else {
            LIMB_BITS + self.high().trailing_zeros()
        }
    }

    pub const fn count_ones(self) -> u32 {
        self.high().count_ones() + self.low().count_ones()
    }

    pub const fn count_zeros(self) -> u32 {
        Self::BITS - self.count_ones()
    }

    /// Number of bits needed to represent the value, 0 for zero.
    pub const fn bit_width(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    pub const fn is_power_of_two(self) -> bool {
        self.count_ones() == 1
    }

    /// Bit `index`, counted from the least significant one.
    pub const fn bit(self, index: u32) -> bool {
        debug_assert!(index < Self::BITS);
        let index = index % Self::BITS;
        if index >= LIMB_BITS {
            (self.high() >> (index - LIMB_BITS)) & 1 != 0
        } else {
            (self.low() >> index) & 1 != 0
        }
    }
}

/// Comparison and hashing, as `const fn`.
impl Uint128 {
    pub const fn compare(self, other: Self) -> Ordering {
        let (a, b) = if self.high() != other.high() {
            (self.high(), other.high())
        } else {
            (self.low(), other.low())
        };
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    pub const fn is_greater_than(self, other: Self) -> bool {
        matches!(self.compare(other), Ordering::Greater)
    }

    #[inline]
    pub const fn is_less_than(self, other: Self) -> bool {
        matches!(self.compare(other), Ordering::Less)
    }

    #[inline]
    pub const fn equals(self, other: Self) -> bool {
        self.high() == other.high() && self.low() == other.low()
    }

    pub const fn max(self, other: Self) -> Self {
        if self.is_less_than(other) { other } else { self }
    }

    pub const fn min(self, other: Self) -> Self {
        if other.is_less_than(self) { other } else { self }
    }

    /// Deterministic hash of the value, usable in `const` context.
    ///
    /// Mixes the high limb, then the low limb, into a zero seed with the
    /// golden-ratio combiner `seed ^ (v + φ + (seed << 6) + (seed >> 2))`.
    /// Equal values hash equal on every target and in every mode.
    pub const fn hash_code(self) -> u64 {
        combine(combine(0, self.high()), self.low())
    }
}

/// 2^64 / φ
const GOLDEN_RATIO: u64 = 0x9e37_79b9_7f4a_7c15;

pub(crate) const fn combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    const X: Uint128 = Uint128::from_parts(0xc0de_d00d_face_cafe, 0xbabe_b00b_fea2_dad0);

    #[test]
    fn parts() {
        assert_eq!(X.high(), 0xc0de_d00d_face_cafe);
        assert_eq!(X.low(), 0xbabe_b00b_fea2_dad0);
        assert_eq!(X.to_limbs(), [0xbabe_b00b_fea2_dad0, 0xc0de_d00d_face_cafe]);
        assert_eq!(Uint128::from_limbs(X.to_limbs()), X);
        assert_eq!(X.to_native(), 0xc0ded00dfacecafebabeb00bfea2dad0);
        assert_eq!(Uint128::from_native(X.to_native()), X);
        assert_eq!(Uint128::from_u64(7), Uint128::from_parts(0, 7));
    }

    #[test]
    fn bytes() {
        let be = hex!("c0ded00dfacecafebabeb00bfea2dad0");
        assert_eq!(X.to_be_bytes(), be);
        assert_eq!(Uint128::from_be_bytes(be), X);

        let le = hex!("d0daa2fe0bb0bebafecacefa0dd0dec0");
        assert_eq!(X.to_le_bytes(), le);
        assert_eq!(Uint128::from_le_bytes(le), X);

        assert_eq!(X.to_ne_bytes(), X.to_native().to_ne_bytes());
        assert_eq!(Uint128::from_ne_bytes(X.to_ne_bytes()), X);
    }

    #[test]
    fn truncation() {
        assert_eq!(X.as_u8(), 0xd0);
        assert_eq!(X.as_u16(), 0xdad0);
        assert_eq!(X.as_u32(), 0xfea2_dad0);
        assert_eq!(X.as_u64(), 0xbabe_b00b_fea2_dad0);
        assert_eq!(X.as_i8(), 0xd0u8 as i8);
        assert_eq!(X.as_i64(), 0xbabe_b00b_fea2_dad0u64 as i64);
    }

    #[test]
    fn bit_queries() {
        assert!(Uint128::ZERO.is_zero());
        assert!(!Uint128::ONE.is_zero());
        assert_eq!(Uint128::ZERO.leading_zeros(), 128);
        assert_eq!(Uint128::ZERO.trailing_zeros(), 128);
        assert_eq!(Uint128::ZERO.bit_width(), 0);
        assert_eq!(Uint128::ONE.bit_width(), 1);
        assert_eq!(Uint128::MAX.bit_width(), 128);
        assert_eq!(Uint128::from_parts(1, 0).leading_zeros(), 63);
        assert_eq!(Uint128::from_parts(1, 0).trailing_zeros(), 64);
        assert!(Uint128::from_parts(1, 0).is_power_of_two());
        assert!(!Uint128::from_parts(1, 1).is_power_of_two());
        assert!(!Uint128::ZERO.is_power_of_two());
        assert_eq!(X.count_ones(), X.to_native().count_ones());
        assert_eq!(X.count_zeros(), X.to_native().count_zeros());
        assert!(X.bit(127));
        assert!(!X.bit(0));
        assert!(X.bit(4));
    }

    #[test]
    fn compare() {
        let a = Uint128::from_parts(1, 0);
        let b = Uint128::from_parts(0, Limb::MAX);
        assert_eq!(a.compare(b), Ordering::Greater);
        assert_eq!(b.compare(a), Ordering::Less);
        assert_eq!(a.compare(a), Ordering::Equal);
        assert!(a.is_greater_than(b));
        assert!(b.is_less_than(a));
        assert!(a.equals(a));
        assert_eq!(a.max(b), a);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn hash_code() {
        const H: u64 = X.hash_code();
        assert_eq!(H, X.hash_code());
        assert_eq!(Uint128::from_native(X.to_native()).hash_code(), H);
        assert_ne!(Uint128::from_parts(1, 0).hash_code(), Uint128::from_parts(0, 1).hash_code());
        // combine(combine(0, 0), 0) == combine(φ, 0)
        let seed = GOLDEN_RATIO;
        assert_eq!(
            Uint128::ZERO.hash_code(),
            seed ^ GOLDEN_RATIO.wrapping_add(seed << 6).wrapping_add(seed >> 2),
        );
    }
}
