#![cfg_attr(not(test), no_std)]
//! Fixed-width 128-bit integers: [`Uint128`] and its two's complement
//! counterpart [`Int128`].
//!
//! Values behave exactly like hardware integers of that width, with the same results
//! whatever the target. What changes per target is how the arithmetic is done: on the
//! compiler's `u128`, on two 64-bit limbs with x86-64 instructions, or on two limbs in
//! plain portable code. `build.rs` picks one (see [`probe`]), the `native`,
//! `intrinsic` and `portable` features force one.
//!
//! ```
//! use uint128::{uint128, Uint128};
//!
//! const X: Uint128 = uint128!(0xc0ded00dfacecafebabeb00bfea2dad0);
//! let y: Uint128 = "256368684942083501355085096987188714192".parse().unwrap();
//! assert_eq!(X, y);
//! assert_eq!(X / Uint128::from(16u8), X >> 4);
//! ```

extern crate alloc;

#[macro_use]
extern crate delog;
generate_macros!();

pub mod limb;
pub mod container;
pub mod probe;
pub mod backend;

mod error;
pub use error::{Error, FloatError, ParseError, ParseErrorKind, Result};

mod numbers;
pub use numbers::{CarryResult, DivModResult, Uint128};

mod arithmetic;
pub use arithmetic::CarryingArithmetic;

mod float;

pub mod text;
pub use text::{Alignment, FormatSpec, Radix, TextUnit};

mod signed;
pub use signed::Int128;

#[doc(hidden)]
pub mod literal;

pub use probe::{calculation_mode, CalculationMode, Capabilities, CAPABILITIES};
