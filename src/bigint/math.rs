//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Nothing in here knows about signs. The sign-aware operators in
//! `bigint::ops` dispatch to these magnitude routines.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except that it stores a value
/// in `0..65536`.
pub type Limb = u16;

// Wide enough for the sum of two limbs plus an incoming carry,
// `2 * 65535 + 1`.
type Wide = u32;

// Wide enough for a limb product plus a carry plus an existing partial
// result. 33 bits are required; 64 is what the hardware gives us.
type DoubleWide = u64;

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: u32 = Limb::BITS;

/// The radix of the limb representation, 65536.
pub(crate) const BASE: Wide = 1 << LIMB_BITS;

const LIMB_MASK: DoubleWide = (1 << LIMB_BITS) - 1;

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two limbs and an incoming carry.
    ///
    /// Returns the (sum, carry) components.
    #[inline]
    pub fn add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let z = x as Wide + y as Wide + carry as Wide;
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }

    // SUBTRACTION

    /// Subtract a limb and an incoming borrow from `x`.
    ///
    /// Borrowing adds the base to the minuend. Returns the
    /// (difference, borrow) components.
    #[inline]
    pub fn sub(x: Limb, y: Limb, borrow: Limb) -> (Limb, Limb) {
        let z = x as Wide + BASE - y as Wide - borrow as Wide;
        (z as Limb, (z < BASE) as Limb)
    }

    // MULTIPLICATION

    /// Multiply two limbs, adding a carry and the partial result already
    /// stored at the destination.
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb, partial: Limb) -> (Limb, Limb) {
        // Cannot overflow: 65535 * 65535 + 2 * 65535 == 2^32 - 1.
        let z = x as DoubleWide * y as DoubleWide + carry as DoubleWide + partial as DoubleWide;
        (z as Limb, (z >> LIMB_BITS) as Limb)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
        let mut carry = y;
        for xi in x.iter_mut() {
            if carry == 0 {
                return;
            }
            let (v, c) = scalar::add(*xi, carry, 0);
            *xi = v;
            carry = c;
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            let (lo, hi) = scalar::mul(*xi, y, carry, 0);
            *xi = lo;
            carry = hi;
        }

        // Overflow of value, add to end.
        if carry != 0 {
            x.push(carry);
        }
    }

    // DIVISION

    /// DivAssign bigint by small integer, returning the remainder.
    ///
    /// Sweeps from the most significant limb down, carrying the running
    /// remainder into the next digit. May leave a leading zero limb.
    #[inline]
    pub fn idiv(x: &mut [Limb], y: Limb) -> Limb {
        debug_assert!(y != 0);
        let y = y as DoubleWide;
        let mut rem: DoubleWide = 0;
        for xi in x.iter_mut().rev() {
            let digit = (rem << LIMB_BITS) | *xi as DoubleWide;
            *xi = (digit / y) as Limb;
            rem = digit % y;
        }
        rem as Limb
    }

    // SHIFTS

    /// Shift-left by a single bit, growing the buffer if the top bit of the
    /// most significant limb would be lost.
    #[inline]
    pub fn ishl1(x: &mut Vec<Limb>) {
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            let top = *xi >> (LIMB_BITS - 1);
            *xi = (*xi << 1) | carry;
            carry = top;
        }
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-right by a single bit. The low bit of each limb moves into the
    /// high bit of the next less significant limb. May leave a leading zero
    /// limb.
    #[inline]
    pub fn ishr1(x: &mut [Limb]) {
        let mut carry: Limb = 0;
        for xi in x.iter_mut().rev() {
            let low = *xi & 1;
            *xi = (*xi >> 1) | (carry << (LIMB_BITS - 1));
            carry = low;
        }
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros, keeping a
    /// single zero limb for the value zero.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while x.len() > 1 && x[x.len() - 1] == 0 {
            x.pop();
        }
        if x.is_empty() {
            x.push(0);
        }
    }

    /// Check the container has no leading zero limb, and is not empty.
    #[inline]
    pub fn is_normalized(x: &[Limb]) -> bool {
        match x.last() {
            None => false,
            Some(&top) => top != 0 || x.len() == 1,
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Both buffers must be normalized.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> Ordering {
        debug_assert!(small::is_normalized(x) && small::is_normalized(y));
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }

    // ADDITION

    /// AddAssign bigint to bigint.
    pub fn iadd(x: &mut Vec<Limb>, y: &[Limb]) {
        // The effective x buffer is from `0..x.len()`, so align both
        // magnitudes to the same length first.
        if y.len() > x.len() {
            x.resize(y.len(), 0);
        }

        let mut carry: Limb = 0;
        for (i, xi) in x.iter_mut().enumerate() {
            let yi = y.get(i).copied().unwrap_or(0);
            let (v, c) = scalar::add(*xi, yi, carry);
            *xi = v;
            carry = c;
        }

        // Overflow from the previous bit.
        if carry != 0 {
            x.push(carry);
        }
        small::normalize(x);
    }

    // SUBTRACTION

    /// SubAssign bigint from bigint.
    ///
    /// Expects `|x| >= |y|`. Returns true when a borrow is left over after
    /// the most significant limb, which means the precondition was violated
    /// and `x` now holds garbage.
    #[must_use]
    pub fn isub(x: &mut Vec<Limb>, y: &[Limb]) -> bool {
        if y.len() > x.len() {
            x.resize(y.len(), 0);
        }

        let mut borrow: Limb = 0;
        for (i, xi) in x.iter_mut().enumerate() {
            let yi = y.get(i).copied().unwrap_or(0);
            let (v, b) = scalar::sub(*xi, yi, borrow);
            *xi = v;
            borrow = b;
        }
        small::normalize(x);
        borrow != 0
    }

    // MULTIPLICATION

    /// Schoolbook multiplication of two bigints.
    ///
    /// Every limb of `x` is multiplied against every limb of `y`, and the
    /// products are accumulated with carries into a `x.len() + y.len()`
    /// buffer.
    pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut z = vec![0; x.len() + y.len()];
        for (i, &xi) in x.iter().enumerate() {
            let mut carry: Limb = 0;
            for (j, &yj) in y.iter().enumerate() {
                let (lo, hi) = scalar::mul(xi, yj, carry, z[i + j]);
                z[i + j] = lo;
                carry = hi;
            }
            z[i + y.len()] = carry;
        }
        small::normalize(&mut z);
        z
    }

    // DIVISION

    /// Quotient of `u / v` by Knuth's Algorithm D (TAOCP vol. 2, 4.3.1).
    ///
    /// Requires `v.len() >= 2`, `u.len() >= v.len()`, and both buffers
    /// normalized.
    pub fn div(u: &[Limb], v: &[Limb]) -> Vec<Limb> {
        let n = v.len();
        debug_assert!(n >= 2 && u.len() >= n);
        debug_assert!(small::is_normalized(u) && small::is_normalized(v));
        let m = u.len() - n;

        // D1. Normalize, so the divisor's leading limb is at least BASE / 2.
        // The dividend gains one extra limb, which may be zero.
        let d = (BASE / (v[n - 1] as Wide + 1)) as Limb;
        let mut un = u.to_vec();
        small::imul(&mut un, d);
        un.resize(u.len() + 1, 0);
        let mut vn = v.to_vec();
        small::imul(&mut vn, d);
        debug_assert_eq!(vn.len(), n);
        debug_assert!(vn[n - 1] >= 1 << (LIMB_BITS - 1));

        let base = BASE as DoubleWide;
        let vtop = vn[n - 1] as DoubleWide;
        let vnext = vn[n - 2] as DoubleWide;
        let mut q = vec![0; m + 1];

        for j in (0..=m).rev() {
            // D3. Estimate the trial digit from the two-limb lookahead, then
            // correct it. The true digit is at most two below the estimate.
            let lookahead = (un[j + n] as DoubleWide) << LIMB_BITS | un[j + n - 1] as DoubleWide;
            let mut qhat = lookahead / vtop;
            let mut rhat = lookahead % vtop;
            while qhat >= base || qhat * vnext > (rhat << LIMB_BITS) + un[j + n - 2] as DoubleWide {
                qhat -= 1;
                rhat += vtop;
                if rhat >= base {
                    break;
                }
            }

            // D4. Multiply and subtract `qhat * vn` from the window
            // `un[j..=j + n]`.
            let mut borrow: i64 = 0;
            let mut carry: DoubleWide = 0;
            for i in 0..n {
                let p = qhat * vn[i] as DoubleWide + carry;
                carry = p >> LIMB_BITS;
                let t = un[i + j] as i64 - borrow - (p & LIMB_MASK) as i64;
                un[i + j] = t as Limb;
                borrow = (t < 0) as i64;
            }
            let t = un[j + n] as i64 - borrow - carry as i64;
            un[j + n] = t as Limb;

            // D6. The trial digit was one too large: add the divisor back.
            if t < 0 {
                log::trace!("knuth division add-back at quotient limb {}", j);
                qhat -= 1;
                let mut carry: Limb = 0;
                for i in 0..n {
                    let (v, c) = scalar::add(un[i + j], vn[i], carry);
                    un[i + j] = v;
                    carry = c;
                }
                un[j + n] = un[j + n].wrapping_add(carry);
            }

            // D5. Record the digit.
            q[j] = qhat as Limb;
        }

        small::normalize(&mut q);
        q
    }
}
