use super::BigInt;

/// Greatest common divisor by the binary method (Knuth, Algorithm B).
///
/// Uses only shifts, subtraction and comparison. The result is never
/// negative, and `gcd(a, 0)` is `|a|`.
///
/// ```
/// use knotnum::{gcd, BigInt};
///
/// assert_eq!(gcd(&BigInt::from(48), &BigInt::from(18)), BigInt::from(6));
/// assert_eq!(gcd(&BigInt::from(-48), &BigInt::from(0)), BigInt::from(48));
/// ```
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut u = a.abs();
    let mut v = b.abs();
    if u.is_zero() {
        return v;
    }
    if v.is_zero() {
        return u;
    }

    // B1. Find the power of two shared by both operands.
    let mut k = 0;
    while u.is_even() && v.is_even() {
        u >>= 1;
        v >>= 1;
        k += 1;
    }
    log::trace!("gcd common factor 2^{}", k);

    // B2. At least one of u, v is odd now. t holds the even candidate, or
    // -v when u is odd so the first halving step is skipped.
    let mut t = if u.is_even() { u.clone() } else { -&v };

    loop {
        // B3, B4. t is nonzero here, so halving terminates.
        while t.is_even() {
            t >>= 1;
        }

        // B5. Replace the larger of u, v with |t|.
        if t.is_negative() {
            v = -t;
        } else {
            u = t;
        }

        // B6.
        t = &u - &v;
        if t.is_zero() {
            break;
        }
    }

    u << k
}

/// Least common multiple, `|a / gcd(a, b) * b|`. Zero if either operand is
/// zero.
///
/// ```
/// use knotnum::{lcm, BigInt};
///
/// assert_eq!(lcm(&BigInt::from(-4), &BigInt::from(6)), BigInt::from(12));
/// ```
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    let g = gcd(a, b);
    (a.div_nonzero(&g).mul_ref(b)).abs()
}
