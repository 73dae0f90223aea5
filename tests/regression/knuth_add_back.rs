use knotnum::BigInt;

// Dividend/divisor pairs whose first trial quotient digit overshoots by one
// even after the two-limb correction, forcing the add-back step.
#[test]
fn test() {
    let cases = [
        (
            "9223231299366420480",
            "140737488355329",
            "65534",
            "140737488289794",
        ),
        (
            "9223372041149612032",
            "140737488420863",
            "65535",
            "140737488355327",
        ),
        ("140737488355331", "35184372088833", "3", "35184372088832"),
    ];

    for &(a, b, q, r) in &cases {
        let a: BigInt = a.parse().unwrap();
        let b: BigInt = b.parse().unwrap();
        let (quotient, remainder) = a.div_rem(&b).unwrap();
        assert_eq!(quotient.to_string(), q);
        assert_eq!(remainder.to_string(), r);
        assert_eq!(&quotient * &b + &remainder, a);

        let (quotient, remainder) = (-&a).div_rem(&b).unwrap();
        assert_eq!(quotient.to_string(), format!("-{}", q));
        assert_eq!(remainder.to_string(), format!("-{}", r));
    }
}
