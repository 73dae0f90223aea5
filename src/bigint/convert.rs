use super::math::LIMB_BITS;
use super::{BigInt, Limb};
use crate::error::{Error, ErrorCode, Result};
use alloc::vec::Vec;
use core::str::FromStr;
use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

impl BigInt {
    /// Spreads a machine magnitude over as many limbs as a primitive of
    /// `bits` width occupies.
    fn from_machine(negative: bool, magnitude: u128, bits: u32) -> Self {
        let count = (bits / LIMB_BITS).max(1);
        let limbs: Vec<Limb> = (0..count)
            .map(|i| (magnitude >> (i * LIMB_BITS)) as Limb)
            .collect();
        BigInt::from_limbs(negative, limbs)
    }

    fn magnitude_u128(&self) -> Option<u128> {
        if self.limbs.len() > (u128::BITS / LIMB_BITS) as usize {
            return None;
        }
        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0, |acc, &limb| (acc << LIMB_BITS) | limb as u128),
        )
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            #[inline]
            fn from(n: $ty) -> Self {
                BigInt::from_machine(false, n as u128, <$ty>::BITS)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            #[inline]
            fn from(n: $ty) -> Self {
                BigInt::from_machine(n < 0, n.unsigned_abs() as u128, <$ty>::BITS)
            }
        }
    )*};
}

impl_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_from_signed!(i8 i16 i32 i64 i128 isize);

#[cold]
fn out_of_range() -> Error {
    Error::unpositioned(ErrorCode::NumberOutOfRange)
}

macro_rules! impl_try_from_bigint {
    ($($ty:ty => $via:ident,)*) => {$(
        impl<'a> TryFrom<&'a BigInt> for $ty {
            type Error = Error;

            fn try_from(n: &BigInt) -> Result<Self> {
                n.$via()
                    .and_then(|wide| <$ty>::try_from(wide).ok())
                    .ok_or_else(out_of_range)
            }
        }

        impl TryFrom<BigInt> for $ty {
            type Error = Error;

            fn try_from(n: BigInt) -> Result<Self> {
                <$ty>::try_from(&n)
            }
        }
    )*};
}

impl_try_from_bigint! {
    i8 => to_i128,
    i16 => to_i128,
    i32 => to_i128,
    i64 => to_i128,
    i128 => to_i128,
    isize => to_i128,
    u8 => to_u128,
    u16 => to_u128,
    u32 => to_u128,
    u64 => to_u128,
    u128 => to_u128,
    usize => to_u128,
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if self.negative {
            if magnitude <= i128::MAX as u128 + 1 {
                Some(0i128.wrapping_sub(magnitude as i128))
            } else {
                None
            }
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative {
            None
        } else {
            self.magnitude_u128()
        }
    }
}

impl FromPrimitive for BigInt {
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInt::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInt::from(n))
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }

    fn is_one(&self) -> bool {
        BigInt::is_one(self)
    }
}

impl Num for BigInt {
    type FromStrRadixErr = Error;

    /// Parses a decimal integer. Any other radix is rejected with
    /// [`ErrorCode::UnsupportedRadix`].
    fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if radix != 10 {
            return Err(Error::unpositioned(ErrorCode::UnsupportedRadix(radix)));
        }
        crate::de::from_str(s)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigInt::signum(self)
    }

    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses one decimal integer, allowing whitespace around it.
    fn from_str(s: &str) -> Result<Self> {
        crate::de::from_str(s)
    }
}
