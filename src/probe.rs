//! What the target offers, and which backend was picked for it.
//!
//! Everything here is fixed at build time: `build.rs` selects the backend and emits
//! the `uint128_backend` cfg, the remaining flags are plain target cfgs. The numeric
//! results never depend on any of it, only the speed does.

use core::fmt;

/// The strategy used to implement the limb primitives.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum CalculationMode {
    /// The compiler's `u128`, stored and operated on as one value.
    NativeWideWord,
    /// Two limbs, combined with x86-64 carry, `mul` and `div` instructions.
    PlatformIntrinsic64,
    /// Two limbs, combined with 32-bit schoolbook multiplication and
    /// shift-subtract division.
    PortableFallback,
}

impl CalculationMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NativeWideWord => "native-wide-word",
            Self::PlatformIntrinsic64 => "platform-intrinsic-64",
            Self::PortableFallback => "portable-fallback",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

/// Capabilities of the build target, together with the selected mode.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Capabilities {
    pub mode: CalculationMode,
    /// `u128` lowers to two machine words (as opposed to a library call per operation).
    pub native_wide_word: bool,
    /// add-with-carry / subtract-with-borrow intrinsics exist.
    pub carry_intrinsic: bool,
    /// 64x64 -> 128 multiply instruction usable by this crate.
    pub wide_multiply: bool,
    /// 128 / 64 -> 64 divide instruction usable by this crate.
    pub wide_divide: bool,
    pub byte_order: ByteOrder,
}

#[cfg(uint128_backend = "native")]
pub const MODE: CalculationMode = CalculationMode::NativeWideWord;
#[cfg(uint128_backend = "intrinsic")]
pub const MODE: CalculationMode = CalculationMode::PlatformIntrinsic64;
#[cfg(uint128_backend = "portable")]
pub const MODE: CalculationMode = CalculationMode::PortableFallback;

pub const CAPABILITIES: Capabilities = Capabilities {
    mode: MODE,
    native_wide_word: cfg!(target_pointer_width = "64"),
    carry_intrinsic: cfg!(any(target_arch = "x86", target_arch = "x86_64")),
    wide_multiply: cfg!(target_arch = "x86_64"),
    wide_divide: cfg!(target_arch = "x86_64"),
    byte_order: if cfg!(target_endian = "little") {
        ByteOrder::LittleEndian
    } else {
        ByteOrder::BigEndian
    },
};

/// The mode every operator of this build uses.
pub const fn calculation_mode() -> CalculationMode {
    MODE
}

/// Logs the probe result (at info level, when enabled).
pub fn report() {
    info!("uint128 backend: {}", CAPABILITIES);
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode={} native_wide_word={} carry_intrinsic={} wide_multiply={} wide_divide={} byte_order={:?}",
            self.mode,
            self.native_wide_word,
            self.carry_intrinsic,
            self.wide_multiply,
            self.wide_divide,
            self.byte_order,
        )
    }
}
