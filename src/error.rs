//! When arithmetic, parsing or printing goes wrong.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display};
use core::result;
use serde::{de, ser};

#[cfg(feature = "std")]
use crate::io;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur while computing
/// with, parsing, or printing a [`BigInt`](crate::BigInt).
pub struct Error {
    // Boxed so the error side of `Result<T>` is a single pointer.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `knotnum::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based line number at which the error was detected.
    ///
    /// Characters in the first line of the input (before the first newline
    /// character) are in line 1. Errors that are not tied to a position in
    /// some text input, such as division by zero, report line 0.
    pub fn line(&self) -> usize {
        self.err.line
    }

    /// One-based column number at which the error was detected.
    ///
    /// The first character in the input and any characters immediately
    /// following a newline character are in column 1.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to read or write bytes on an IO stream
    /// - `Category::Syntax` - input that is not a decimal integer
    /// - `Category::Eof` - input ended before a number was found
    /// - `Category::Data` - a well-formed value that does not fit the target
    /// - `Category::Arithmetic` - an undefined operation such as division by zero
    /// - `Category::Contract` - an internal primitive was called outside its precondition
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Message(_) | ErrorCode::NumberOutOfRange | ErrorCode::UnsupportedRadix(_) => {
                Category::Data
            }
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::EofWhileParsingNumber => Category::Eof,
            ErrorCode::ExpectedSomeDigit | ErrorCode::TrailingCharacters => Category::Syntax,
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::Underflow => Category::Contract,
        }
    }

    /// Returns true if this error was caused by a failure to read or write
    /// bytes on an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a value that is well formed
    /// but cannot be represented by the requested type.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by prematurely reaching the end of
    /// the input data.
    ///
    /// Callers that process streaming input may be interested in retrying the
    /// parse once more data is available.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was caused by an undefined arithmetic
    /// operation, i.e. division or remainder by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error signals a caller bug: a magnitude primitive
    /// was invoked with operands that violate its precondition.
    pub fn is_contract(&self) -> bool {
        self.classify() == Category::Contract
    }
}

/// Categorizes the cause of a `knotnum::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to read or write bytes on an IO
    /// stream.
    Io,

    /// The error was caused by input that is not a decimal integer.
    Syntax,

    /// The error was caused by a value that does not fit the requested type.
    Data,

    /// The error was caused by prematurely reaching the end of the input data.
    ///
    /// Callers that process streaming input may be interested in retrying the
    /// parse once more data is available.
    Eof,

    /// The error was caused by an arithmetic operation with no defined result.
    Arithmetic,

    /// The error was caused by calling a primitive outside of its
    /// precondition. This indicates a bug in the caller.
    Contract,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `knotnum::Error` into an `io::Error`.
    ///
    /// Syntax, data, arithmetic and contract errors are turned into
    /// `InvalidData` IO errors. EOF errors are turned into `UnexpectedEof` IO
    /// errors.
    fn from(error: Error) -> Self {
        let kind = match error.classify() {
            Category::Io => match error.err.code {
                ErrorCode::Io(err) => return err,
                _ => unreachable!(),
            },
            Category::Eof => io::ErrorKind::UnexpectedEof,
            Category::Syntax | Category::Data | Category::Arithmetic | Category::Contract => {
                io::ErrorKind::InvalidData
            }
        };
        io::Error::new(kind, error)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    line: usize,
    column: usize,
}

/// This type describes all possible errors that can occur while computing
/// with, parsing, or printing a `BigInt`.
pub enum ErrorCode {
    /// Catchall for custom messages, e.g. from a serde data format.
    Message(Box<str>),

    /// Some IO error occurred while reading or writing.
    #[cfg(feature = "std")]
    Io(io::Error),

    /// EOF before the first digit of a number.
    EofWhileParsingNumber,

    /// Expected a decimal digit, either at the start of a number or right
    /// after its sign.
    ExpectedSomeDigit,

    /// Input has non-whitespace characters after the number.
    TrailingCharacters,

    /// Number does not fit in the requested primitive type.
    NumberOutOfRange,

    /// Only radix 10 is supported by the text format.
    UnsupportedRadix(u32),

    /// Division or remainder by zero.
    DivisionByZero,

    /// Magnitude subtraction `|a| - |b|` was requested with `|a| < |b|`.
    Underflow,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => f.debug_tuple("Io").finish(),
            ErrorCode::EofWhileParsingNumber => f.write_str("EofWhileParsingNumber"),
            ErrorCode::ExpectedSomeDigit => f.write_str("ExpectedSomeDigit"),
            ErrorCode::TrailingCharacters => f.write_str("TrailingCharacters"),
            ErrorCode::NumberOutOfRange => f.write_str("NumberOutOfRange"),
            ErrorCode::UnsupportedRadix(radix) => {
                f.debug_tuple("UnsupportedRadix").field(radix).finish()
            }
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::Underflow => f.write_str("Underflow"),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::Message(l0), ErrorCode::Message(r0)) => l0 == r0,
            (ErrorCode::UnsupportedRadix(l0), ErrorCode::UnsupportedRadix(r0)) => l0 == r0,
            #[cfg(feature = "std")]
            (ErrorCode::Io(_), ErrorCode::Io(_)) => true,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, line: usize, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, line, column }),
        }
    }

    /// An error that is not tied to any position in text input.
    #[cold]
    pub(crate) fn unpositioned(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                line: 0,
                column: 0,
            }),
        }
    }

    #[cfg(feature = "std")]
    #[cold]
    pub(crate) fn io(error: io::Error) -> Self {
        Error::unpositioned(ErrorCode::Io(error))
    }

    #[cold]
    fn custom<T: Display>(msg: T) -> Self {
        Error::unpositioned(ErrorCode::Message(msg.to_string().into_boxed_str()))
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            #[cfg(feature = "std")]
            ErrorCode::Io(err) => Display::fmt(err, f),
            ErrorCode::EofWhileParsingNumber => f.write_str("EOF while parsing a number"),
            ErrorCode::ExpectedSomeDigit => f.write_str("expected a decimal digit"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
            ErrorCode::UnsupportedRadix(radix) => {
                write!(f, "unsupported radix {}, expected 10", radix)
            }
            ErrorCode::DivisionByZero => f.write_str("attempt to divide by zero"),
            ErrorCode::Underflow => {
                f.write_str("magnitude subtraction underflow: subtrahend exceeds minuend")
            }
        }
    }
}

impl de::StdError for Error {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        Error::custom(msg)
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Error {
        Error::custom(msg)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(
                f,
                "{} at line {} column {}",
                self.code, self.line, self.column
            )
        }
    }
}

// Shown by unwrap(), so print the message rather than the nested structs.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message: String = self.err.code.to_string();
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            message, self.err.line, self.err.column
        )
    }
}
