//! Physical storage of a 128-bit value.
//!
//! With the native backend the container is one `u128`; otherwise it is two
//! [`Limb`]s laid out in the target's byte order (low limb first on little-endian
//! targets, high limb first on big-endian ones). Either way the in-memory bytes are
//! those of the target's own `u128`, which is what makes [`reinterpret`] and
//! [`unreinterpret`] exact.
//!
//! The *canonical* limb array used at the API boundary is always `[low, high]`.

use zeroize::Zeroize;

use crate::limb::{Limb, LIMBS};

/// Limbs in target memory order.
type NativeOrder = [Limb; LIMBS];

#[cfg(target_endian = "little")]
const LOW: usize = 0;
#[cfg(target_endian = "big")]
const LOW: usize = 1;
const HIGH: usize = 1 - LOW;

/// The one place a limb array is reinterpreted as a wide word.
///
/// `[u64; 2]` and `u128` have the same size and every bit pattern is valid for both;
/// `transmute` moves by value, so the differing alignment does not matter.
/// Equivalence with [`crate::limb::join`] is checked in the tests below.
#[inline]
pub const fn reinterpret(limbs: NativeOrder) -> u128 {
    unsafe { core::mem::transmute::<NativeOrder, u128>(limbs) }
}

/// Inverse of [`reinterpret`].
#[inline]
pub const fn unreinterpret(wide: u128) -> NativeOrder {
    unsafe { core::mem::transmute::<u128, NativeOrder>(wide) }
}

const fn native_order(high: Limb, low: Limb) -> NativeOrder {
    let mut limbs = [0; LIMBS];
    limbs[HIGH] = high;
    limbs[LOW] = low;
    limbs
}

#[cfg(uint128_backend = "native")]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Zeroize)]
#[repr(transparent)]
pub struct LimbContainer(u128);

#[cfg(uint128_backend = "native")]
impl LimbContainer {
    #[inline]
    pub const fn from_parts(high: Limb, low: Limb) -> Self {
        Self(reinterpret(native_order(high, low)))
    }

    #[inline]
    pub const fn high(self) -> Limb {
        unreinterpret(self.0)[HIGH]
    }

    #[inline]
    pub const fn low(self) -> Limb {
        unreinterpret(self.0)[LOW]
    }

    #[inline]
    pub const fn from_native(wide: u128) -> Self {
        Self(wide)
    }

    #[inline]
    pub const fn to_native(self) -> u128 {
        self.0
    }
}

#[cfg(not(uint128_backend = "native"))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Zeroize)]
#[repr(C)]
pub struct LimbContainer(NativeOrder);

#[cfg(not(uint128_backend = "native"))]
impl LimbContainer {
    #[inline]
    pub const fn from_parts(high: Limb, low: Limb) -> Self {
        Self(native_order(high, low))
    }

    #[inline]
    pub const fn high(self) -> Limb {
        self.0[HIGH]
    }

    #[inline]
    pub const fn low(self) -> Limb {
        self.0[LOW]
    }

    /// Shift/mask recomposition; no reinterpretation on this path.
    #[inline]
    pub const fn from_native(wide: u128) -> Self {
        let (high, low) = crate::limb::split(wide);
        Self::from_parts(high, low)
    }

    #[inline]
    pub const fn to_native(self) -> u128 {
        crate::limb::join(self.high(), self.low())
    }
}

impl LimbContainer {
    /// `[low, high]`, whatever the storage.
    #[inline]
    pub const fn to_canonical(self) -> [Limb; LIMBS] {
        [self.low(), self.high()]
    }

    #[inline]
    pub const fn from_canonical(limbs: [Limb; LIMBS]) -> Self {
        Self::from_parts(limbs[1], limbs[0])
    }

    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let mut low = [0u8; 8];
        let mut high = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            low[i] = bytes[i];
            high[i] = bytes[i + 8];
            i += 1;
        }
        Self::from_parts(Limb::from_le_bytes(high), Limb::from_le_bytes(low))
    }

    pub const fn to_le_bytes(self) -> [u8; 16] {
        let low = self.low().to_le_bytes();
        let high = self.high().to_le_bytes();
        let mut bytes = [0u8; 16];
        let mut i = 0;
        while i < 8 {
            bytes[i] = low[i];
            bytes[i + 8] = high[i];
            i += 1;
        }
        bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HI: Limb = 0xc0de_d00d_face_cafe;
    const LO: Limb = 0xbabe_b00b_fea2_dad0;

    #[test]
    fn reinterpretation_matches_recomposition() {
        let wide = reinterpret(native_order(HI, LO));
        assert_eq!(wide, crate::limb::join(HI, LO));
        assert_eq!(unreinterpret(wide), native_order(HI, LO));
        assert_eq!(crate::limb::split(wide), (HI, LO));
    }

    #[test]
    fn parts() {
        let container = LimbContainer::from_parts(HI, LO);
        assert_eq!(container.high(), HI);
        assert_eq!(container.low(), LO);
        assert_eq!(container.to_canonical(), [LO, HI]);
        assert_eq!(LimbContainer::from_canonical([LO, HI]), container);
        assert_eq!(container.to_native(), 0xc0ded00dfacecafebabeb00bfea2dad0);
        assert_eq!(LimbContainer::from_native(0xc0ded00dfacecafebabeb00bfea2dad0), container);
    }

    #[test]
    fn bytes() {
        let container = LimbContainer::from_parts(HI, LO);
        let bytes = container.to_le_bytes();
        assert_eq!(bytes, 0xc0ded00dfacecafebabeb00bfea2dad0u128.to_le_bytes());
        assert_eq!(LimbContainer::from_le_bytes(bytes), container);
    }

    #[test]
    fn usable_in_const() {
        const C: LimbContainer = LimbContainer::from_parts(1, 2);
        const N: u128 = C.to_native();
        const B: [u8; 16] = C.to_le_bytes();
        assert_eq!(N, (1u128 << 64) | 2);
        assert_eq!(B[0], 2);
        assert_eq!(B[8], 1);
    }
}
