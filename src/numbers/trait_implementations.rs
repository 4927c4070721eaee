use core::{cmp::Ordering, convert::TryFrom, fmt, hash::{Hash, Hasher}};

use super::Uint128;
use crate::{Error, Result};

impl Ord for Uint128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl PartialOrd for Uint128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Hashes the value, never the storage, so equal values hash equal in every mode.
impl Hash for Uint128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.high().hash(state);
        self.low().hash(state);
    }
}

impl fmt::Debug for Uint128 {
    /// Decimal, like the primitive integers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! from_unsigned {
    ($($primitive:ty),*) => {$(
        impl From<$primitive> for Uint128 {
            #[inline]
            fn from(value: $primitive) -> Self {
                Self::from_parts(0, value as u64)
            }
        }

        impl TryFrom<Uint128> for $primitive {
            type Error = Error;
            fn try_from(value: Uint128) -> Result<Self> {
                if value.high() != 0 || value.low() > <$primitive>::MAX as u64 {
                    return Err(Error::OutOfRange);
                }
                Ok(value.low() as $primitive)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Uint128 {
    fn from(value: bool) -> Self {
        Self::from_parts(0, value as u64)
    }
}

impl From<u128> for Uint128 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_native(value)
    }
}

impl From<Uint128> for u128 {
    #[inline]
    fn from(value: Uint128) -> Self {
        value.to_native()
    }
}

impl From<[u64; 2]> for Uint128 {
    /// `[low, high]`
    fn from(limbs: [u64; 2]) -> Self {
        Self::from_limbs(limbs)
    }
}

macro_rules! try_from_signed {
    ($($primitive:ty),*) => {$(
        impl TryFrom<$primitive> for Uint128 {
            type Error = Error;
            fn try_from(value: $primitive) -> Result<Self> {
                if value < 0 {
                    return Err(Error::OutOfRange);
                }
                Ok(Self::from_parts(0, value as u64))
            }
        }

        impl TryFrom<Uint128> for $primitive {
            type Error = Error;
            fn try_from(value: Uint128) -> Result<Self> {
                if value.high() != 0 || value.low() > <$primitive>::MAX as u64 {
                    return Err(Error::OutOfRange);
                }
                Ok(value.low() as $primitive)
            }
        }
    )*};
}

try_from_signed!(i8, i16, i32, i64, isize);

impl TryFrom<i128> for Uint128 {
    type Error = Error;
    fn try_from(value: i128) -> Result<Self> {
        if value < 0 {
            return Err(Error::OutOfRange);
        }
        Ok(Self::from_native(value as u128))
    }
}

#[cfg(feature = "ct")]
mod constant_time {
    use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

    use super::Uint128;

    impl ConstantTimeEq for Uint128 {
        fn ct_eq(&self, other: &Self) -> Choice {
            self.high().ct_eq(&other.high()) & self.low().ct_eq(&other.low())
        }
    }

    impl ConditionallySelectable for Uint128 {
        fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
            Self::from_parts(
                u64::conditional_select(&a.high(), &b.high(), choice),
                u64::conditional_select(&a.low(), &b.low(), choice),
            )
        }
    }

    impl ConstantTimeGreater for Uint128 {
        fn ct_gt(&self, other: &Self) -> Choice {
            let high_greater = self.high().ct_gt(&other.high());
            let high_equal = self.high().ct_eq(&other.high());
            high_greater | (high_equal & self.low().ct_gt(&other.low()))
        }
    }

    impl ConstantTimeLess for Uint128 {}
}
