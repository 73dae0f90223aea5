//! The numeric capabilities generic toolkit code is written against.
//!
//! Polynomial and matrix layers never name a concrete number type. They take
//! a type parameter bounded by [`Scalar`], and the caller picks the
//! representation when instantiating them.
//!
//! ```
//! use knotnum::{BigInt, Scalar};
//!
//! /// Evaluates `c[0] + c[1]*x + c[2]*x^2 + ...` by Horner's rule.
//! fn horner<T: Scalar>(coefficients: &[T], x: &T) -> Option<T> {
//!     let (top, rest) = coefficients.split_last()?;
//!     let mut acc = top.clone();
//!     for c in rest.iter().rev() {
//!         acc.mul_assign_scalar(x);
//!         acc.add_assign_scalar(c);
//!     }
//!     Some(acc)
//! }
//!
//! // 1 - 2t + 3t^2 at t = 10^20
//! let coefficients = [BigInt::from(1), BigInt::from(-2), BigInt::from(3)];
//! let t = BigInt::from(10).pow(20);
//! let value = horner(&coefficients, &t).unwrap();
//! assert_eq!(value.to_string(), "29999999999999999999800000000000000000001");
//! ```

use crate::bigint::BigInt;
use crate::de::Deserializer;
use crate::error::Result;
use crate::read::Read;
use core::fmt::{self, Debug, Display};

/// An exact numeric type usable as a coefficient or matrix entry.
///
/// Values are copied with `Clone` and compared with `Ord`. Arithmetic is in
/// place against another value of the same type. Division and remainder
/// report a zero divisor through `Result` instead of aborting.
pub trait Scalar: Clone + Ord + Display + Debug {
    /// `self += rhs`
    fn add_assign_scalar(&mut self, rhs: &Self);

    /// `self -= rhs`
    fn sub_assign_scalar(&mut self, rhs: &Self);

    /// `self *= rhs`
    fn mul_assign_scalar(&mut self, rhs: &Self);

    /// `self /= rhs`, leaving `self` unchanged on error.
    fn div_assign_scalar(&mut self, rhs: &Self) -> Result<()>;

    /// `self %= rhs`, leaving `self` unchanged on error.
    fn rem_assign_scalar(&mut self, rhs: &Self) -> Result<()>;

    /// The absolute value.
    fn abs(&self) -> Self;

    /// Adds one in place.
    fn increment(&mut self);

    /// Subtracts one in place.
    fn decrement(&mut self);

    /// Parses one value from a text cursor, leaving the cursor on the first
    /// byte after it.
    fn read<R: Read>(reader: R) -> Result<Self>;

    /// Writes the textual form.
    fn print<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self)
    }

    /// Length of the textual form written by [`print`](Scalar::print).
    fn printed_len(&self) -> usize;

    /// Writes the internal representation, for debugging.
    fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{:?}", self)
    }

    /// Restores the type's canonical form after raw manipulation.
    fn sanitize(&mut self);

    /// Returns true if the value is in canonical form.
    fn is_valid(&self) -> bool;
}

impl Scalar for BigInt {
    #[inline]
    fn add_assign_scalar(&mut self, rhs: &Self) {
        *self += rhs;
    }

    #[inline]
    fn sub_assign_scalar(&mut self, rhs: &Self) {
        *self -= rhs;
    }

    #[inline]
    fn mul_assign_scalar(&mut self, rhs: &Self) {
        *self *= rhs;
    }

    fn div_assign_scalar(&mut self, rhs: &Self) -> Result<()> {
        *self = tri!(self.checked_div(rhs));
        Ok(())
    }

    fn rem_assign_scalar(&mut self, rhs: &Self) -> Result<()> {
        *self = tri!(self.checked_rem(rhs));
        Ok(())
    }

    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn increment(&mut self) {
        self.inc();
    }

    fn decrement(&mut self) {
        self.dec();
    }

    fn read<R: Read>(reader: R) -> Result<Self> {
        Deserializer::new(reader).parse_bigint()
    }

    fn printed_len(&self) -> usize {
        BigInt::printed_len(self)
    }

    fn sanitize(&mut self) {
        BigInt::sanitize(self);
    }

    fn is_valid(&self) -> bool {
        self.is_canonical()
    }
}
