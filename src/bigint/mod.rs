//! The arbitrary-precision signed integer.
//!
//! A [`BigInt`] is a sign flag and a magnitude stored as base-65536 limbs,
//! least significant first. Every public operation leaves the value in
//! canonical form:
//!
//! - the most significant limb is nonzero, except that zero is exactly one
//!   `0` limb;
//! - zero is never negative.
//!
//! Two canonical values are equal exactly when their sign flags and limbs are
//! equal, which is what the derived `PartialEq`, `Eq` and `Hash` compare.

use crate::error::{Error, ErrorCode, Result};
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

mod convert;
mod gcd;
pub(crate) mod math;
mod ops;
mod serialize;

pub use self::gcd::{gcd, lcm};
pub use self::math::Limb;

use self::math::{large, small, LIMB_BITS};

/// An exact integer of unbounded magnitude.
///
/// ```
/// use knotnum::BigInt;
///
/// let x = BigInt::from(-5) + BigInt::from(3);
/// assert_eq!(x, BigInt::from(-2));
/// assert_eq!(format!("{:?}", BigInt::from(-5)), "BigInt { negative: true, limbs: [5] }");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BigInt {
    negative: bool,
    limbs: Vec<Limb>,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        BigInt {
            negative: false,
            limbs: vec![0],
        }
    }

    /// The value one.
    pub fn one() -> Self {
        BigInt {
            negative: false,
            limbs: vec![1],
        }
    }

    /// Builds a value from a sign and raw limbs, least significant first.
    ///
    /// The result is sanitized, so leading zero limbs, an empty vector and a
    /// negative zero are all accepted.
    ///
    /// ```
    /// use knotnum::BigInt;
    ///
    /// let x = BigInt::from_limbs(true, vec![0, 1, 0, 0]);
    /// assert_eq!(x, BigInt::from(-65536));
    /// assert_eq!(BigInt::from_limbs(true, Vec::new()), BigInt::zero());
    /// ```
    pub fn from_limbs(negative: bool, limbs: Vec<Limb>) -> Self {
        let mut value = BigInt { negative, limbs };
        value.sanitize();
        value
    }

    /// The magnitude, least significant limb first.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Returns true if the value is less than zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the value is greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Returns true if the value is exactly one.
    pub fn is_one(&self) -> bool {
        !self.negative && self.is_unit()
    }

    /// Nonzero test.
    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }

    /// Parity of the lowest bit. Zero is even.
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt {
                negative: self.negative,
                limbs: vec![1],
            }
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// The low-order limb as a machine integer, negated for negative values.
    ///
    /// Higher limbs are dropped without any check. Use `TryFrom` for a
    /// conversion that fails when the value does not fit.
    ///
    /// ```
    /// use knotnum::BigInt;
    ///
    /// assert_eq!(BigInt::from(-7).truncate(), -7);
    /// assert_eq!(BigInt::from(65537).truncate(), 1);
    /// ```
    pub fn truncate(&self) -> i64 {
        let low = self.limbs[0] as i64;
        if self.negative {
            -low
        } else {
            low
        }
    }

    /// Number of bits needed for the magnitude: the position of the highest
    /// set bit plus one, or 0 for zero.
    pub fn bits(&self) -> u64 {
        let top = self.limbs[self.limbs.len() - 1];
        if top == 0 {
            return 0;
        }
        (self.limbs.len() as u64 - 1) * LIMB_BITS as u64 + (LIMB_BITS - top.leading_zeros()) as u64
    }

    /// Adds one in place.
    pub fn inc(&mut self) {
        self.add_signed(&[1], false);
    }

    /// Subtracts one in place.
    pub fn dec(&mut self) {
        self.add_signed(&[1], true);
    }

    /// Raises the value to the power `exp` by repeated squaring. Any value to
    /// the power zero is one.
    ///
    /// ```
    /// use knotnum::BigInt;
    ///
    /// assert_eq!(BigInt::from(2).pow(64).to_string(), "18446744073709551616");
    /// assert_eq!(BigInt::from(-3).pow(3), BigInt::from(-27));
    /// ```
    pub fn pow(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut acc = BigInt::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.mul_ref(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_ref(&base);
            }
        }
        acc
    }

    /// Replaces the magnitude of `self` with `|self| - |other|`, keeping the
    /// sign of `self` unless the result is zero.
    ///
    /// This is the raw magnitude primitive beneath signed subtraction. It
    /// requires `|self| >= |other|`; otherwise it fails with
    /// [`ErrorCode::Underflow`](crate::error::ErrorCode::Underflow) and leaves
    /// `self` unchanged.
    ///
    /// ```
    /// use knotnum::BigInt;
    ///
    /// let mut x = BigInt::from(-10);
    /// x.sub_magnitude(&BigInt::from(3)).unwrap();
    /// assert_eq!(x, BigInt::from(-7));
    ///
    /// let err = x.sub_magnitude(&BigInt::from(8)).unwrap_err();
    /// assert!(err.is_contract());
    /// assert_eq!(x, BigInt::from(-7));
    /// ```
    pub fn sub_magnitude(&mut self, other: &BigInt) -> Result<()> {
        let mut limbs = self.limbs.clone();
        if large::isub(&mut limbs, &other.limbs) {
            log::debug!(
                "magnitude subtraction underflow: {}-limb minuend, {}-limb subtrahend",
                self.limbs.len(),
                other.limbs.len(),
            );
            return Err(Error::unpositioned(ErrorCode::Underflow));
        }
        self.limbs = limbs;
        self.sanitize();
        Ok(())
    }

    /// Quotient truncated toward zero, or an error when `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.is_zero() {
            return Err(Error::unpositioned(ErrorCode::DivisionByZero));
        }
        Ok(self.div_nonzero(rhs))
    }

    /// Remainder `self - (self / rhs) * rhs`, carrying the sign of `self`, or
    /// an error when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.is_zero() {
            return Err(Error::unpositioned(ErrorCode::DivisionByZero));
        }
        Ok(self.rem_nonzero(rhs))
    }

    /// Quotient and remainder together.
    ///
    /// ```
    /// use knotnum::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    ///
    /// let err = BigInt::from(1).div_rem(&BigInt::zero()).unwrap_err();
    /// assert!(err.is_arithmetic());
    /// ```
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        let q = tri!(self.checked_div(rhs));
        let r = self - &q.mul_ref(rhs);
        Ok((q, r))
    }

    /// Greatest common divisor of `self` and `other`. See [`gcd`].
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        gcd(self, other)
    }

    /// Least common multiple of `self` and `other`. See [`lcm`].
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        lcm(self, other)
    }

    /// Restores canonical form: drops leading zero limbs, turns an empty
    /// magnitude into zero, and clears the sign of zero.
    pub fn sanitize(&mut self) {
        small::normalize(&mut self.limbs);
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// Returns true if the value is in canonical form.
    ///
    /// Values produced by this crate always are. This is the check behind
    /// [`Scalar::is_valid`](crate::Scalar::is_valid).
    pub fn is_canonical(&self) -> bool {
        small::is_normalized(&self.limbs) && !(self.negative && self.is_zero())
    }

    /// Magnitude equal to one, either sign.
    fn is_unit(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.is_canonical(), "non-canonical result: {:?}", self);
    }

    pub(crate) fn div_nonzero(&self, rhs: &BigInt) -> BigInt {
        debug_assert!(!rhs.is_zero());
        let negative = self.negative != rhs.negative;

        let limbs = if rhs.is_unit() {
            log::trace!("division by unit divisor");
            self.limbs.clone()
        } else {
            match large::compare(&self.limbs, &rhs.limbs) {
                Ordering::Equal => {
                    log::trace!("division of equal magnitudes");
                    vec![1]
                }
                Ordering::Less => {
                    log::trace!("divisor exceeds dividend");
                    vec![0]
                }
                Ordering::Greater if self.limbs.len() == 1 => {
                    log::trace!("single-limb machine division");
                    vec![self.limbs[0] / rhs.limbs[0]]
                }
                Ordering::Greater if rhs.limbs.len() == 1 => {
                    log::trace!("short division of {} limbs", self.limbs.len());
                    let mut q = self.limbs.clone();
                    small::idiv(&mut q, rhs.limbs[0]);
                    q
                }
                Ordering::Greater => {
                    log::trace!(
                        "knuth division of {} limbs by {} limbs",
                        self.limbs.len(),
                        rhs.limbs.len(),
                    );
                    large::div(&self.limbs, &rhs.limbs)
                }
            }
        };

        let quotient = BigInt::from_limbs(negative, limbs);
        quotient.debug_check();
        quotient
    }

    pub(crate) fn rem_nonzero(&self, rhs: &BigInt) -> BigInt {
        let q = self.div_nonzero(rhs);
        let r = self - &q.mul_ref(rhs);
        r.debug_check();
        r
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}
