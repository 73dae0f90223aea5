//! Parse decimal text into `BigInt` values.

use crate::bigint::math::{small, Limb};
use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::read::{self, Fused, Read};
use alloc::vec;
use core::iter::FusedIterator;

#[cfg(feature = "std")]
use crate::io;

//////////////////////////////////////////////////////////////////////////////

/// A structure that parses decimal integers from a byte cursor.
pub struct Deserializer<R> {
    read: R,
}

impl<R> Deserializer<R>
where
    R: read::Read,
{
    /// Wraps any cursor from [`read`](crate::read). `from_str`, `from_slice`
    /// and `from_reader` are shorthands for the common sources.
    pub fn new(read: R) -> Self {
        Deserializer { read }
    }
}

#[cfg(feature = "std")]
impl<R> Deserializer<read::IoRead<R>>
where
    R: io::Read,
{
    /// Parses from an `io::Read`, one byte at a time. Wrap slow sources in a
    /// [`std::io::BufReader`].
    pub fn from_reader(reader: R) -> Self {
        Deserializer::new(read::IoRead::new(reader))
    }
}

impl<'a> Deserializer<read::SliceRead<'a>> {
    /// Creates a number parser from a `&[u8]`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Deserializer::new(read::SliceRead::new(bytes))
    }
}

impl<'a> Deserializer<read::StrRead<'a>> {
    /// Creates a number parser from a `&str`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Deserializer::new(read::StrRead::new(s))
    }
}

impl<R: Read> Deserializer<R> {
    /// Checks that nothing but whitespace is left in the input.
    pub fn end(&mut self) -> Result<()> {
        if tri!(self.parse_whitespace()) {
            Ok(())
        } else {
            Err(self.peek_error(ErrorCode::TrailingCharacters))
        }
    }

    /// Turn a number parser into an iterator over whitespace-separated
    /// numbers.
    #[allow(clippy::should_implement_trait)]
    pub fn into_iter(self) -> StreamDeserializer<R> {
        StreamDeserializer {
            de: self,
            offset: 0,
            failed: false,
        }
    }

    /// Offset from the beginning of the input to the next byte that would be
    /// read.
    ///
    /// After a failed parse this is the offending byte.
    pub fn byte_offset(&self) -> usize {
        self.read.byte_offset()
    }

    /// Parses one signed decimal integer.
    ///
    /// Leading whitespace is skipped. An optional `+` or `-` sign is followed
    /// by one or more ASCII digits. The first byte that is not a digit ends
    /// the number and is left unread, as is the end of input.
    ///
    /// ```
    /// use knotnum::{BigInt, Deserializer};
    ///
    /// let mut de = Deserializer::from_str("  +0042x");
    /// assert_eq!(de.parse_bigint().unwrap(), BigInt::from(42));
    /// assert_eq!(de.byte_offset(), 7);
    ///
    /// let mut de = Deserializer::from_str("abc");
    /// assert!(de.parse_bigint().unwrap_err().is_syntax());
    /// assert_eq!(de.byte_offset(), 0);
    /// ```
    pub fn parse_bigint(&mut self) -> Result<BigInt> {
        if tri!(self.parse_whitespace()) {
            return Err(self.peek_error(ErrorCode::EofWhileParsingNumber));
        }

        let negative = match tri!(self.peek()) {
            Some(b'-') => {
                self.eat_char();
                true
            }
            Some(b'+') => {
                self.eat_char();
                false
            }
            _ => false,
        };

        let mut limbs = match tri!(self.peek()) {
            Some(c @ b'0'..=b'9') => {
                self.eat_char();
                vec![(c - b'0') as Limb]
            }
            Some(_) => return Err(self.peek_error(ErrorCode::ExpectedSomeDigit)),
            None => return Err(self.peek_error(ErrorCode::EofWhileParsingNumber)),
        };

        while let Some(c @ b'0'..=b'9') = tri!(self.peek()) {
            self.eat_char();
            small::imul(&mut limbs, 10);
            small::iadd(&mut limbs, (c - b'0') as Limb);
        }

        Ok(BigInt::from_limbs(negative, limbs))
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        self.read.peek()
    }

    fn eat_char(&mut self) {
        self.read.discard();
    }

    #[cold]
    fn peek_error(&self, reason: ErrorCode) -> Error {
        let position = self.read.peek_position();
        Error::syntax(reason, position.line, position.column)
    }

    /// Skips whitespace. `Ok(true)` means the input ran out.
    fn parse_whitespace(&mut self) -> Result<bool> {
        loop {
            match tri!(self.peek()) {
                Some(b) if is_whitespace(b) => {
                    self.eat_char();
                }
                Some(_) => {
                    return Ok(false);
                }
                None => return Ok(true),
            }
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

//////////////////////////////////////////////////////////////////////////////

/// Iterator that parses a stream of whitespace-separated numbers.
///
/// Each number must be followed by whitespace or the end of input. The
/// iterator yields one error and then stops when it meets anything else.
///
/// ```
/// use knotnum::{BigInt, Deserializer};
///
/// let data = "12 -3\n\n 99999999999999999999";
///
/// let mut stream = Deserializer::from_str(data).into_iter();
/// assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(12));
/// assert_eq!(stream.byte_offset(), 2);
/// assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(-3));
/// let big = stream.next().unwrap().unwrap();
/// assert_eq!(big.to_string(), "99999999999999999999");
/// assert!(stream.next().is_none());
/// ```
pub struct StreamDeserializer<R> {
    de: Deserializer<R>,
    offset: usize,
    failed: bool,
}

impl<R> StreamDeserializer<R>
where
    R: read::Read,
{
    /// Same as `Deserializer::new(read).into_iter()`.
    pub fn new(read: R) -> Self {
        Deserializer::new(read).into_iter()
    }

    /// Returns the number of bytes so far parsed into numbers.
    ///
    /// If the stream is at the end of input, this is the length of the
    /// input. If a number fails to parse, this is the offset where that
    /// number started, so callers can report or skip the offending text.
    ///
    /// ```
    /// use knotnum::Deserializer;
    ///
    /// let data = "7 8 -x 10";
    /// let mut stream = Deserializer::from_str(data).into_iter();
    /// assert!(stream.next().unwrap().is_ok());
    /// assert!(stream.next().unwrap().is_ok());
    /// assert!(stream.next().unwrap().is_err());
    /// assert_eq!(stream.byte_offset(), 4);
    /// assert!(stream.next().is_none());
    /// ```
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    fn peek_end_of_value(&mut self) -> Result<()> {
        match tri!(self.de.peek()) {
            Some(b) if !is_whitespace(b) => Err(self.de.peek_error(ErrorCode::TrailingCharacters)),
            _ => Ok(()),
        }
    }
}

impl<R> Iterator for StreamDeserializer<R>
where
    R: Read,
{
    type Item = Result<BigInt>;

    fn next(&mut self) -> Option<Result<BigInt>> {
        if R::should_early_return_if_failed && self.failed {
            return None;
        }

        // trailing whitespace ends the stream without an error
        match self.de.parse_whitespace() {
            Ok(true) => {
                self.offset = self.de.read.byte_offset();
                None
            }
            Ok(false) => {
                self.offset = self.de.read.byte_offset();
                let result = match self.de.parse_bigint() {
                    Ok(value) => {
                        self.offset = self.de.read.byte_offset();
                        self.peek_end_of_value().map(|()| value)
                    }
                    Err(err) => Err(err),
                };
                if result.is_err() {
                    self.de.read.set_failed(&mut self.failed);
                }
                Some(result)
            }
            Err(e) => {
                self.de.read.set_failed(&mut self.failed);
                Some(Err(e))
            }
        }
    }
}

impl<R> FusedIterator for StreamDeserializer<R> where R: Read + Fused {}

//////////////////////////////////////////////////////////////////////////////

fn from_trait<R>(read: R) -> Result<BigInt>
where
    R: Read,
{
    let mut de = Deserializer::new(read);
    let value = tri!(de.parse_bigint());
    tri!(de.end());
    Ok(value)
}

/// Parse a `BigInt` from an I/O stream of decimal text.
///
/// The content of the I/O stream must be exactly one number, optionally
/// surrounded by whitespace.
///
/// ```
/// use knotnum::BigInt;
///
/// let input: &[u8] = b"\n -18446744073709551616\n";
/// let x = knotnum::from_reader(input).unwrap();
/// assert_eq!(x, -BigInt::from(u64::MAX) - BigInt::from(1));
/// ```
///
/// # Errors
///
/// This conversion can fail if the input is not a decimal integer, if there
/// are trailing characters, or if the reader fails.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn from_reader<R>(rdr: R) -> Result<BigInt>
where
    R: io::Read,
{
    from_trait(read::IoRead::new(rdr))
}

/// Parse a `BigInt` from bytes of decimal text.
///
/// # Errors
///
/// This conversion can fail if the input is not a decimal integer or if
/// there are trailing characters.
pub fn from_slice(v: &[u8]) -> Result<BigInt> {
    from_trait(read::SliceRead::new(v))
}

/// Parse a `BigInt` from a string of decimal text.
///
/// ```
/// use knotnum::BigInt;
///
/// assert_eq!(knotnum::from_str(" -42 ").unwrap(), BigInt::from(-42));
/// assert!(knotnum::from_str("42 43").unwrap_err().is_syntax());
/// ```
///
/// # Errors
///
/// This conversion can fail if the input is not a decimal integer or if
/// there are trailing characters.
pub fn from_str(s: &str) -> Result<BigInt> {
    from_trait(read::StrRead::new(s))
}
