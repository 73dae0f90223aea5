//! Byte cursors the number parser reads from.

use crate::error::Result;
use core::cmp;

#[cfg(feature = "std")]
use crate::error::Error;
#[cfg(feature = "std")]
use crate::io;
#[cfg(feature = "std")]
use crate::iter::LineColIterator;

/// A byte cursor with one byte of lookahead.
///
/// Implemented for in-memory slices and strings, for `std::io` streams, and
/// for `&mut` references to any of those so a caller can keep ownership of
/// the cursor across several parses. Sealed; the set of sources is fixed.
pub trait Read: private::Sealed {
    #[doc(hidden)]
    fn peek(&mut self) -> Result<Option<u8>>;

    /// Consumes the byte returned by the last `peek`.
    #[doc(hidden)]
    fn discard(&mut self);

    /// Line and column of the last consumed byte. Error path only.
    #[doc(hidden)]
    fn position(&self) -> Position;

    /// Line and column of the byte under the cursor. Error path only.
    #[doc(hidden)]
    fn peek_position(&self) -> Position;

    /// Number of bytes consumed so far.
    #[doc(hidden)]
    fn byte_offset(&self) -> usize;

    /// True if a failed stream must be remembered in a flag. In-memory
    /// sources instead cut their input short, so they read as exhausted.
    #[doc(hidden)]
    const should_early_return_if_failed: bool;

    /// Makes every later read of a stream yield nothing.
    #[doc(hidden)]
    fn set_failed(&mut self, failed: &mut bool);
}

/// A one-based line and column in the input.
pub struct Position {
    /// Line of the byte, starting at 1.
    pub line: usize,
    /// Column of the byte, starting at 1. Zero right after a newline.
    pub column: usize,
}

/// Cursor over a `std::io::Read` stream.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub struct IoRead<R>
where
    R: io::Read,
{
    iter: LineColIterator<io::Bytes<R>>,
    peeked: Option<u8>,
}

/// Cursor over a byte slice.
pub struct SliceRead<'a> {
    slice: &'a [u8],
    // Line and column are recomputed from this on error only.
    index: usize,
}

/// Cursor over a string.
pub struct StrRead<'a> {
    delegate: SliceRead<'a>,
}

mod private {
    pub trait Sealed {}
}

//////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "std")]
impl<R> IoRead<R>
where
    R: io::Read,
{
    /// Reads `reader` byte by byte. Unbuffered sources such as a [`File`]
    /// should be wrapped in a [`std::io::BufReader`].
    ///
    /// [`File`]: std::fs::File
    pub fn new(reader: R) -> Self {
        IoRead {
            iter: LineColIterator::new(reader.bytes()),
            peeked: None,
        }
    }
}

#[cfg(feature = "std")]
impl<R> private::Sealed for IoRead<R> where R: io::Read {}

#[cfg(feature = "std")]
impl<R> Read for IoRead<R>
where
    R: io::Read,
{
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = match self.iter.next() {
                Some(byte) => Some(tri!(byte.map_err(Error::io))),
                None => None,
            };
        }
        Ok(self.peeked)
    }

    #[inline]
    fn discard(&mut self) {
        self.peeked = None;
    }

    fn position(&self) -> Position {
        Position {
            line: self.iter.line(),
            column: self.iter.col(),
        }
    }

    fn peek_position(&self) -> Position {
        // peek has already pulled the byte through the line counter
        self.position()
    }

    fn byte_offset(&self) -> usize {
        self.iter.byte_offset() - self.peeked.is_some() as usize
    }

    const should_early_return_if_failed: bool = true;

    #[inline]
    #[cold]
    fn set_failed(&mut self, failed: &mut bool) {
        *failed = true;
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> SliceRead<'a> {
    /// Reads from the start of `slice`.
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }

    fn position_of_index(&self, i: usize) -> Position {
        let before = &self.slice[..i];
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |newline| newline + 1);
        Position {
            line: 1 + memchr::memchr_iter(b'\n', &before[..line_start]).count(),
            column: i - line_start,
        }
    }
}

impl<'a> private::Sealed for SliceRead<'a> {}

impl<'a> Read for SliceRead<'a> {
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(self.slice.get(self.index).copied())
    }

    #[inline]
    fn discard(&mut self) {
        self.index += 1;
    }

    fn position(&self) -> Position {
        self.position_of_index(self.index)
    }

    fn peek_position(&self) -> Position {
        // at end of input, report the last byte
        self.position_of_index(cmp::min(self.slice.len(), self.index + 1))
    }

    fn byte_offset(&self) -> usize {
        self.index
    }

    const should_early_return_if_failed: bool = false;

    #[inline]
    #[cold]
    fn set_failed(&mut self, _failed: &mut bool) {
        self.slice = &self.slice[..self.index];
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<'a> StrRead<'a> {
    /// Reads from the start of `s`.
    pub fn new(s: &'a str) -> Self {
        StrRead {
            delegate: SliceRead::new(s.as_bytes()),
        }
    }
}

impl<'a> private::Sealed for StrRead<'a> {}

impl<'a> Read for StrRead<'a> {
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        self.delegate.peek()
    }

    #[inline]
    fn discard(&mut self) {
        self.delegate.discard();
    }

    fn position(&self) -> Position {
        self.delegate.position()
    }

    fn peek_position(&self) -> Position {
        self.delegate.peek_position()
    }

    fn byte_offset(&self) -> usize {
        self.delegate.byte_offset()
    }

    const should_early_return_if_failed: bool = false;

    #[inline]
    #[cold]
    fn set_failed(&mut self, failed: &mut bool) {
        self.delegate.set_failed(failed);
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<R> private::Sealed for &mut R where R: Read {}

impl<R> Read for &mut R
where
    R: Read,
{
    fn peek(&mut self) -> Result<Option<u8>> {
        R::peek(self)
    }

    fn discard(&mut self) {
        R::discard(self);
    }

    fn position(&self) -> Position {
        R::position(self)
    }

    fn peek_position(&self) -> Position {
        R::peek_position(self)
    }

    fn byte_offset(&self) -> usize {
        R::byte_offset(self)
    }

    const should_early_return_if_failed: bool = R::should_early_return_if_failed;

    fn set_failed(&mut self, failed: &mut bool) {
        R::set_failed(self, failed);
    }
}

//////////////////////////////////////////////////////////////////////////////

/// Sources whose [`StreamDeserializer`](crate::StreamDeserializer) is a
/// [`FusedIterator`](core::iter::FusedIterator).
pub trait Fused: private::Sealed {}
impl<'a> Fused for SliceRead<'a> {}
impl<'a> Fused for StrRead<'a> {}
