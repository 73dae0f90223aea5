use knotnum::BigInt;

// Carries and borrows that ripple through every limb.
#[test]
fn test() {
    let max = BigInt::from(u128::MAX);
    let one = BigInt::from(1);

    let next = &max + &one;
    assert_eq!(next.limbs().len(), 9);
    assert_eq!(next.limbs()[8], 1);
    assert!(next.limbs()[..8].iter().all(|&limb| limb == 0));

    assert_eq!(&next - &one, max);
    assert_eq!((&one - &next).to_string(), "-340282366920938463463374607431768211456");

    let square = &max * &max;
    assert_eq!(
        square.to_string(),
        "115792089237316195423570985008687907852589419931798687112530834793049593217025",
    );
    assert_eq!(&square / &max, max);
    assert_eq!(&square % &max, BigInt::from(0));
}
