use knotnum::error::ErrorCode;
use knotnum::{BigInt, Deserializer, StreamDeserializer};

// Rustfmt issue https://github.com/rust-lang-nursery/rustfmt/issues/2740
#[rustfmt::skip]
macro_rules! test_stream {
    ($data:expr, |$stream:ident| $test:block) => {
        {
            let de = Deserializer::from_str($data);
            let mut $stream = de.into_iter();
            assert_eq!($stream.byte_offset(), 0);
            $test
        }
        {
            let de = Deserializer::from_slice($data.as_bytes());
            let mut $stream = de.into_iter();
            assert_eq!($stream.byte_offset(), 0);
            $test
        }
        {
            let mut bytes = $data.as_bytes();
            let de = Deserializer::from_reader(&mut bytes);
            let mut $stream = de.into_iter();
            assert_eq!($stream.byte_offset(), 0);
            $test
        }
    };
}

#[test]
fn test_number_stream_whitespace() {
    let data = "39 -40\t41\n+42";

    test_stream!(data, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(39));
        assert_eq!(stream.byte_offset(), 2);

        assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(-40));
        assert_eq!(stream.byte_offset(), 6);

        assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(41));
        assert_eq!(stream.byte_offset(), 9);

        assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(42));
        assert_eq!(stream.byte_offset(), 13);

        assert!(stream.next().is_none());
        assert_eq!(stream.byte_offset(), 13);
    });
}

#[test]
fn test_number_stream_trailing_whitespaces() {
    let data = "42 \t\n";

    test_stream!(data, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(42));
        assert_eq!(stream.byte_offset(), 2);

        assert!(stream.next().is_none());
        assert_eq!(stream.byte_offset(), 5);
    });
}

#[test]
fn test_number_stream_truncated() {
    let data = "40\n-";

    test_stream!(data, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(40));
        assert_eq!(stream.byte_offset(), 2);

        assert!(stream.next().unwrap().unwrap_err().is_eof());
        assert_eq!(stream.byte_offset(), 3);
    });
}

#[test]
fn test_number_stream_multi_limb() {
    let data = "18446744073709551616\n-340282366920938463463374607431768211456";

    test_stream!(data, |stream| {
        let first = stream.next().unwrap().unwrap();
        assert_eq!(first, BigInt::from(u64::MAX) + BigInt::from(1));
        assert_eq!(stream.byte_offset(), 20);

        let second = stream.next().unwrap().unwrap();
        assert_eq!(second, -(BigInt::from(u128::MAX) + BigInt::from(1)));
        assert_eq!(stream.byte_offset(), data.len());

        assert!(stream.next().is_none());
    });
}

#[test]
fn test_number_stream_empty() {
    let data = "";

    test_stream!(data, |stream| {
        assert!(stream.next().is_none());
        assert_eq!(stream.byte_offset(), 0);
    });
}

#[test]
fn test_number_stream_primitive() {
    let data = "{} 1";

    test_stream!(data, |stream| {
        let second = stream.next().unwrap().unwrap_err();
        assert_eq!(*second.code(), ErrorCode::ExpectedSomeDigit);
        assert_eq!(second.to_string(), "expected a decimal digit at line 1 column 1");
        assert_eq!(stream.byte_offset(), 0);
    });
}

#[test]
fn test_number_stream_invalid_literal() {
    let data = "1 2x 3";

    test_stream!(data, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(1));

        let second = stream.next().unwrap().unwrap_err();
        assert_eq!(*second.code(), ErrorCode::TrailingCharacters);
        assert_eq!(second.to_string(), "trailing characters at line 1 column 4");
        assert_eq!(stream.byte_offset(), 3);
    });
}

#[test]
fn test_error() {
    let data = "1 a 3";
    let de = Deserializer::from_str(data);
    let mut stream = de.into_iter();
    assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(1));
    assert!(stream.next().unwrap().is_err());
    assert!(stream.next().is_none());
}

#[test]
fn test_fused_after_error() {
    let data = "-\n5 6";
    let mut bytes = data.as_bytes();
    let mut stream = Deserializer::from_reader(&mut bytes).into_iter();
    assert!(stream.next().unwrap().is_err());
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn test_stream_from_read_cursor() {
    let read = knotnum::read::SliceRead::new(b"1 1 2 3 5 8");
    let stream = StreamDeserializer::new(read);
    let total: BigInt = stream.map(Result::unwrap).sum();
    assert_eq!(total, BigInt::from(20));
}
