use super::math::{large, small};
use super::{BigInt, Limb};
use core::cmp::Ordering;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

impl BigInt {
    /// Adds the magnitude `rhs` carrying the sign `rhs_negative`.
    ///
    /// Same signs add magnitudes. Different signs subtract the smaller
    /// magnitude from the larger and take the sign of the larger.
    pub(crate) fn add_signed(&mut self, rhs: &[Limb], rhs_negative: bool) {
        if self.negative == rhs_negative {
            large::iadd(&mut self.limbs, rhs);
        } else {
            match large::compare(&self.limbs, rhs) {
                Ordering::Greater | Ordering::Equal => {
                    let borrow = large::isub(&mut self.limbs, rhs);
                    debug_assert!(!borrow);
                }
                Ordering::Less => {
                    let mut limbs = rhs.to_vec();
                    let borrow = large::isub(&mut limbs, &self.limbs);
                    debug_assert!(!borrow);
                    self.limbs = limbs;
                    self.negative = rhs_negative;
                }
            }
        }
        self.sanitize();
        self.debug_check();
    }

    pub(crate) fn mul_ref(&self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        let negative = self.negative != rhs.negative;
        let limbs = if self.is_unit() {
            rhs.limbs.clone()
        } else if rhs.is_unit() {
            self.limbs.clone()
        } else {
            large::mul(&self.limbs, &rhs.limbs)
        };
        let product = BigInt { negative, limbs };
        product.debug_check();
        product
    }
}

// Compound assignment by reference is where the work happens. Every other
// operand combination forwards to it.

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed(&rhs.limbs, rhs.negative);
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        // a - b is a + (-b)
        self.add_signed(&rhs.limbs, !rhs.negative);
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.mul_ref(rhs);
    }
}

impl<'a> DivAssign<&'a BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            panic!("attempt to divide by zero");
        }
        *self = self.div_nonzero(rhs);
    }
}

impl<'a> RemAssign<&'a BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            panic!("attempt to divide by zero");
        }
        *self = self.rem_nonzero(rhs);
    }
}

macro_rules! forward_binop {
    ($($imp:ident $method:ident, $imp_assign:ident $method_assign:ident;)*) => {$(
        impl $imp_assign<BigInt> for BigInt {
            #[inline]
            fn $method_assign(&mut self, rhs: BigInt) {
                $imp_assign::$method_assign(self, &rhs);
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, rhs: &BigInt) -> BigInt {
                $imp_assign::$method_assign(&mut self, rhs);
                self
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, rhs: BigInt) -> BigInt {
                $imp_assign::$method_assign(&mut self, &rhs);
                self
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                let mut lhs = self.clone();
                $imp_assign::$method_assign(&mut lhs, rhs);
                lhs
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                let mut lhs = self.clone();
                $imp_assign::$method_assign(&mut lhs, &rhs);
                lhs
            }
        }
    )*};
}

forward_binop! {
    Add add, AddAssign add_assign;
    Sub sub, SubAssign sub_assign;
    Mul mul, MulAssign mul_assign;
    Div div, DivAssign div_assign;
    Rem rem, RemAssign rem_assign;
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

// Shifts act on the magnitude one bit at a time. The sign is kept, so `>>`
// truncates toward zero rather than toward negative infinity.

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, bits: usize) {
        for _ in 0..bits {
            small::ishl1(&mut self.limbs);
        }
        self.sanitize();
        self.debug_check();
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, bits: usize) {
        for _ in 0..bits {
            small::ishr1(&mut self.limbs);
        }
        self.sanitize();
        self.debug_check();
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, bits: usize) -> BigInt {
        self <<= bits;
        self
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        self.clone() << bits
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, bits: usize) -> BigInt {
        self >>= bits;
        self
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;

    fn shr(self, bits: usize) -> BigInt {
        self.clone() >> bits
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => large::compare(&self.limbs, &other.limbs),
            (true, true) => large::compare(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + &x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc.mul_ref(&x))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |acc, x| acc.mul_ref(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn signed_addition() {
        assert_eq!(big(-5) + big(3), big(-2));
        assert_eq!(big(5) + big(-3), big(2));
        assert_eq!(big(-5) + big(-3), big(-8));
        assert_eq!(big(3) - big(5), big(-2));
        assert_eq!(big(7) + big(-7), big(0));
        assert!((big(7) + big(-7)).is_canonical());
        assert_eq!(big(0) - big(0), big(0));
        assert_eq!(big(0) - big(4), big(-4));
    }

    #[test]
    fn carry_and_borrow_across_limbs() {
        let x = BigInt::from_limbs(false, vec![0xFFFF, 0xFFFF]);
        let y = &x + &big(1);
        assert_eq!(y.limbs(), &[0, 0, 1]);
        assert_eq!(&y - &big(1), x);
        assert_eq!((&big(1) - &y).limbs(), &[0xFFFF, 0xFFFF]);
        assert!((&big(1) - &y).is_negative());
    }

    #[test]
    fn multiplication_signs_and_shortcuts() {
        assert_eq!(big(-4) * big(6), big(-24));
        assert_eq!(big(-4) * big(-6), big(24));
        assert_eq!(big(-4) * big(0), big(0));
        assert!(!(big(-4) * big(0)).is_negative());
        assert_eq!(big(1) * big(-9), big(-9));
        assert_eq!(big(-1) * big(-9), big(9));
        let square = big(65536) * big(65536);
        assert_eq!(square.limbs(), &[0, 0, 1]);
    }

    #[test]
    fn operand_combinations() {
        let a = big(17);
        let b = big(5);
        assert_eq!(&a / &b, big(3));
        assert_eq!(a.clone() / &b, big(3));
        assert_eq!(&a % b.clone(), big(2));
        assert_eq!(a.clone() % b.clone(), big(2));

        let mut c = a.clone();
        c *= &b;
        c -= big(1);
        c += &a;
        c /= big(2);
        c %= &big(7);
        assert_eq!(c, big(((17 * 5 - 1 + 17) / 2) % 7));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_by_zero_panics() {
        let _ = big(1) / big(0);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn rem_by_zero_panics() {
        let _ = big(1) % big(0);
    }

    #[test]
    fn shifts() {
        assert_eq!(big(3) << 17, big(3 << 17));
        assert_eq!(big(-3) << 1, big(-6));
        assert_eq!(big(3 << 17) >> 17, big(3));
        assert_eq!(big(-7) >> 1, big(-3));
        assert_eq!(big(-1) >> 1, big(0));
        assert!((big(-1) >> 1).is_canonical());
        assert_eq!((big(1) << 16).limbs(), &[0, 1]);
        assert_eq!((big(0x8000) << 1).limbs(), &[0, 1]);
        assert_eq!((BigInt::from_limbs(false, vec![0, 1]) >> 1).limbs(), &[0x8000]);
    }

    #[test]
    fn ordering() {
        let mut values: Vec<BigInt> = [5, -70000, 0, 70000, -1, 65536]
            .iter()
            .map(|&n| big(n))
            .collect();
        values.sort();
        let sorted: Vec<BigInt> = [-70000, -1, 0, 5, 65536, 70000]
            .iter()
            .map(|&n| big(n))
            .collect();
        assert_eq!(values, sorted);
        assert!(big(-2) < big(-1));
        assert!(big(-65536) < big(-65535));
    }

    #[test]
    fn negation() {
        assert_eq!(-big(5), big(-5));
        assert_eq!(-&big(-5), big(5));
        assert!(!(-big(0)).is_negative());
    }

    #[test]
    fn sum_and_product() {
        let values = vec![big(2), big(-3), big(4)];
        assert_eq!(values.iter().sum::<BigInt>(), big(3));
        assert_eq!(values.iter().product::<BigInt>(), big(-24));
        assert_eq!(values.into_iter().sum::<BigInt>(), big(3));
        assert_eq!(Vec::<BigInt>::new().into_iter().product::<BigInt>(), big(1));
    }
}
