use super::BigInt;
use core::fmt;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

// A decimal string is lossless in every data format, whatever the width of
// its native integers.
impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string of decimal digits")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_i128<E>(self, value: i128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u128<E>(self, value: u128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                crate::de::from_str(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
