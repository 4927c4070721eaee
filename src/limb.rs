/// A word of the engine. [`Uint128`][crate::Uint128] is composed of two limbs.
///
/// Unlike a general multi-precision crate, the limb is always 64-bit: what changes
/// per target is how two of them are combined (see [`crate::probe`]).
pub type Limb = u64;

/// Signed counterpart of [`Limb`], the type of the high limb of a negative value.
pub type SignedLimb = i64;

/// Number of limbs in a 128-bit value.
pub const LIMBS: usize = 2;

/// Bits per limb.
pub const LIMB_BITS: u32 = Limb::BITS;

#[cfg(any(
    all(feature = "native", feature = "intrinsic"),
    all(feature = "native", feature = "portable"),
    all(feature = "intrinsic", feature = "portable"),
))]
compile_error!("Either feature native, intrinsic or portable, not several!");

#[cfg(all(feature = "intrinsic", not(target_arch = "x86_64")))]
compile_error!("Feature intrinsic needs an x86_64 target.");

#[cfg(not(any(
    uint128_backend = "native",
    uint128_backend = "intrinsic",
    uint128_backend = "portable",
)))]
compile_error!("No backend selected, was build.rs skipped?");

/// Split a native wide word into `(high, low)`.
#[inline]
pub const fn split(wide: u128) -> (Limb, Limb) {
    ((wide >> LIMB_BITS) as Limb, wide as Limb)
}

/// Arithmetic recomposition of two limbs.
#[inline]
pub const fn join(high: Limb, low: Limb) -> u128 {
    ((high as u128) << LIMB_BITS) | low as u128
}
