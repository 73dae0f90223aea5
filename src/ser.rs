//! Print a `BigInt` as decimal text.

use crate::bigint::math::{small, Limb};
use crate::bigint::BigInt;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

#[cfg(feature = "std")]
use crate::error::{Error, Result};
#[cfg(feature = "std")]
use crate::io;

/// Decimal digits of a magnitude, most significant first, without a sign.
///
/// Divides a working copy by ten until it reaches zero, collecting the
/// remainders, then reverses them. Zero is `"0"`.
pub(crate) fn magnitude_digits(limbs: &[Limb]) -> String {
    if limbs.len() == 1 {
        let mut buffer = itoa::Buffer::new();
        return String::from(buffer.format(limbs[0]));
    }

    let mut work = limbs.to_vec();
    let mut digits = Vec::with_capacity(work.len() * 5);
    while !(work.len() == 1 && work[0] == 0) {
        let rem = small::idiv(&mut work, 10);
        digits.push(b'0' + rem as u8);
        small::normalize(&mut work);
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

impl Display for BigInt {
    /// Honors the formatter's width, fill, alignment, `+` and `0` flags the
    /// way primitive integers do.
    ///
    /// ```
    /// use knotnum::BigInt;
    ///
    /// assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    /// assert_eq!(format!("{:+}", BigInt::from(7)), "+7");
    /// assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &magnitude_digits(self.limbs()))
    }
}

impl BigInt {
    /// Length of [`to_string`](ToString::to_string) output, sign included.
    pub fn printed_len(&self) -> usize {
        magnitude_digits(self.limbs()).len() + self.is_negative() as usize
    }
}

/// Serialize the given value as a decimal `String`.
///
/// ```
/// use knotnum::BigInt;
///
/// assert_eq!(knotnum::to_string(&BigInt::from(-65536)), "-65536");
/// ```
#[inline]
pub fn to_string(value: &BigInt) -> String {
    let mut string = magnitude_digits(value.limbs());
    if value.is_negative() {
        string.insert(0, '-');
    }
    string
}

/// Serialize the given value as decimal bytes.
#[inline]
pub fn to_vec(value: &BigInt) -> Vec<u8> {
    to_string(value).into_bytes()
}

/// Serialize the given value as decimal text into the I/O stream.
///
/// # Errors
///
/// Fails with an IO error if the writer does.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[inline]
pub fn to_writer<W>(mut writer: W, value: &BigInt) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(to_string(value).as_bytes())
        .map_err(Error::io)
}
