use knotnum::BigInt;

// Every way of reaching zero must produce the single non-negative zero limb,
// so that equality and hashing agree.
#[test]
fn test() {
    let a = BigInt::from(-70000);
    let zeros = [
        &a + &BigInt::from(70000),
        &a - &a,
        &a * &BigInt::from(0),
        BigInt::from(-3) / BigInt::from(4),
        &a % &BigInt::from(-70000),
        BigInt::from(-1) >> 1,
        -BigInt::from(0),
        "-0".parse().unwrap(),
        "-000000000000000000000000".parse().unwrap(),
        BigInt::from_limbs(true, vec![0, 0, 0]),
    ];
    for zero in &zeros {
        assert!(zero.is_canonical(), "{:?}", zero);
        assert_eq!(zero.limbs(), &[0]);
        assert!(!zero.is_negative());
        assert_eq!(*zero, BigInt::default());
        assert_eq!(zero.to_string(), "0");
    }
}
