use indoc::indoc;
use knotnum::error::{Category, ErrorCode};
use knotnum::{BigInt, Deserializer};

fn test_parse_ok(tests: &[(&str, &str)]) {
    for &(s, printed) in tests {
        let value: BigInt = knotnum::from_str(s).unwrap();
        assert_eq!(value.to_string(), printed, "parsing {:?}", s);
        assert!(value.is_canonical());

        let value = knotnum::from_slice(s.as_bytes()).unwrap();
        assert_eq!(value.to_string(), printed);

        let value = knotnum::from_reader(s.as_bytes()).unwrap();
        assert_eq!(value.to_string(), printed);
    }
}

fn test_parse_err(errors: &[(&str, &'static str)]) {
    for &(s, err) in errors {
        let error = knotnum::from_str(s).unwrap_err();
        assert_eq!(error.to_string(), err, "parsing {:?}", s);

        let error = knotnum::from_slice(s.as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), err);

        let error = knotnum::from_reader(s.as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), err);
    }
}

#[test]
fn test_parse_number() {
    test_parse_ok(&[
        ("0", "0"),
        ("-0", "0"),
        ("+0", "0"),
        ("007", "7"),
        (" -42", "-42"),
        ("+65536", "65536"),
        ("\t\n\r\x0b\x0c 12 \n", "12"),
        (
            "-123456789012345678901234567890123456789",
            "-123456789012345678901234567890123456789",
        ),
        (
            "00000000000000000000000000000000018446744073709551616",
            "18446744073709551616",
        ),
    ]);
}

#[test]
fn test_parse_errors() {
    test_parse_err(&[
        ("", "EOF while parsing a number at line 1 column 0"),
        ("   ", "EOF while parsing a number at line 1 column 3"),
        ("-", "EOF while parsing a number at line 1 column 1"),
        ("abc", "expected a decimal digit at line 1 column 1"),
        ("+-1", "expected a decimal digit at line 1 column 2"),
        ("\n\n  - 5", "expected a decimal digit at line 3 column 4"),
        ("12abc", "trailing characters at line 1 column 3"),
        ("1 2", "trailing characters at line 1 column 3"),
        ("1\n\n 2", "trailing characters at line 3 column 2"),
    ]);
}

#[test]
fn test_parse_leaves_cursor() {
    let mut de = Deserializer::from_str("abc");
    let err = de.parse_bigint().unwrap_err();
    assert_eq!(err.classify(), Category::Syntax);
    assert_eq!(*err.code(), ErrorCode::ExpectedSomeDigit);
    assert_eq!(de.byte_offset(), 0);

    let mut de = Deserializer::from_str("-abc");
    assert!(de.parse_bigint().is_err());
    assert_eq!(de.byte_offset(), 1);

    let mut de = Deserializer::from_str("985,211");
    assert_eq!(de.parse_bigint().unwrap(), BigInt::from(985));
    assert_eq!(de.byte_offset(), 3);
    assert!(de.end().is_err());
}

#[test]
fn test_parse_multiline() {
    let input = indoc! {"
        3
          -17
        \t1000000000000000000000
    "};
    let mut de = Deserializer::from_str(input);
    assert_eq!(de.parse_bigint().unwrap(), BigInt::from(3));
    assert_eq!(de.parse_bigint().unwrap(), BigInt::from(-17));
    assert_eq!(de.parse_bigint().unwrap(), BigInt::from(10).pow(21));
    de.end().unwrap();
    let err = de.parse_bigint().unwrap_err();
    assert!(err.is_eof());
}

#[test]
fn test_print_round_trip() {
    let values = [
        BigInt::from(0),
        BigInt::from(1),
        BigInt::from(-1),
        BigInt::from(i64::MIN),
        BigInt::from(u128::MAX),
        BigInt::from(-7).pow(55),
        BigInt::from_limbs(false, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]),
    ];
    for x in &values {
        let printed = x.to_string();
        assert_eq!(printed.len(), x.printed_len());
        assert_eq!(knotnum::from_str(&printed).unwrap(), *x);
        assert_eq!(knotnum::to_string(x), printed);
        assert_eq!(knotnum::to_vec(x), printed.as_bytes());

        let mut out = Vec::new();
        knotnum::to_writer(&mut out, x).unwrap();
        assert_eq!(out, printed.as_bytes());
    }
}

#[test]
fn test_formatter_flags() {
    let x = BigInt::from(-65536);
    assert_eq!(format!("{}", x), "-65536");
    assert_eq!(format!("{:10}", x), "    -65536");
    assert_eq!(format!("{:<10}|", x), "-65536    |");
    assert_eq!(format!("{:^10}", BigInt::from(42)), "    42    ");
    assert_eq!(format!("{:+}", BigInt::from(0)), "+0");
    assert_eq!(format!("{:*>5}", BigInt::from(7)), "****7");
}

#[test]
fn test_from_str_trait() {
    let x: BigInt = "  99 ".parse().unwrap();
    assert_eq!(x, BigInt::from(99));
    assert!("9 9".parse::<BigInt>().is_err());
    assert!("".parse::<BigInt>().unwrap_err().is_eof());
}

#[test]
fn test_io_error_conversion() {
    let err = knotnum::from_str("x").unwrap_err();
    let io_err: std::io::Error = err.into();
    assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);
}
