use crate::io;

/// Wraps a byte stream and remembers where in the text the last byte was.
///
/// Lines and columns are 1-based for reporting. After a `\n` has been
/// consumed the column reads 0 until the next byte arrives.
pub struct LineColIterator<I> {
    iter: I,
    line: usize,
    col: usize,
    // Bytes in all complete lines so far; the offset is this plus `col`.
    line_start: usize,
}

impl<I> LineColIterator<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    pub fn new(iter: I) -> LineColIterator<I> {
        LineColIterator {
            iter,
            line: 1,
            col: 0,
            line_start: 0,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn byte_offset(&self) -> usize {
        self.line_start + self.col
    }
}

impl<I> Iterator for LineColIterator<I>
where
    I: Iterator<Item = io::Result<u8>>,
{
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<io::Result<u8>> {
        let byte = match self.iter.next()? {
            Ok(byte) => byte,
            Err(err) => return Some(Err(err)),
        };
        if byte == b'\n' {
            self.line_start += self.col + 1;
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(Ok(byte))
    }
}
