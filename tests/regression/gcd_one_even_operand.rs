use knotnum::{gcd, BigInt};

// After the common factors of two are stripped, one operand may still be
// even. The loop must still make progress by halving.
#[test]
fn test() {
    let cases: &[(u64, u64, u64)] = &[
        (6, 9, 3),
        (9, 6, 3),
        (3 << 40, 5, 1),
        (5, 3 << 40, 1),
        (12 << 33, 18, 6),
        (1 << 50, 1 << 20, 1 << 20),
        (2, 1, 1),
    ];
    for &(a, b, expected) in cases {
        assert_eq!(
            gcd(&BigInt::from(a), &BigInt::from(b)),
            BigInt::from(expected),
            "gcd({}, {})",
            a,
            b,
        );
    }
}
