//! Line segmentation over a chunked byte source.


use core::fmt;
use std::io::{self, Read};

use crate::buf::Buf;

pub(crate) const NL: u8 = b'\n';

/// Default carry capacity of a [`LineReader`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// Error raised while segmenting lines.
#[derive(Debug)]
#[non_exhaustive]
pub enum LineError {
    /// Reading a chunk from the source failed.
    Io(io::Error),
    /// A single line did not fit the carry buffer.
    Overflow { capacity: usize },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Io(error) => write!(f, "reading chunk failed: {error}"),
            LineError::Overflow { capacity } => {
                write!(f, "line longer than the carry capacity ({capacity})")
            }
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineError::Io(error) => Some(error),
            LineError::Overflow { .. } => None,
        }
    }
}

impl From<io::Error> for LineError {
    #[inline]
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

/// Streaming line reader over a chunked byte source.
///
/// Chunks are pulled from the source on demand into a [`Buf`] and scanned
/// for terminators; each line is yielded as a byte slice with the terminator
/// excluded and without copying out of the buffer. An unterminated partial
/// line is carried across refills. A final non-empty line with no
/// terminator is still yielded.
pub struct LineReader<R, const N: usize = DEFAULT_CAPACITY> {
    source: R,
    buf: Buf<N>,
    eof: bool,
}

impl<R, const N: usize> LineReader<R, N>
where
    R: Read,
{
    /// Construct a reader over the given chunk source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            buf: Buf::new(),
            eof: false,
        }
    }

    /// Next line, terminator excluded, or `None` once the source is
    /// exhausted.
    ///
    /// A trailing carriage return is left in place; stripping it is the
    /// decoder's concern.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, LineError> {
        loop {
            if let Some(at) = memchr::memchr(NL, self.buf.window()) {
                return Ok(Some(self.buf.take(at, 1)));
            }

            if self.eof {
                break;
            }

            self.refill()?;
        }

        if self.buf.is_empty() {
            return Ok(None);
        }

        // Unterminated trailing bytes still count as a line.
        let len = self.buf.len();
        Ok(Some(self.buf.take(len, 0)))
    }

    /// Pull one chunk from the source into the carry buffer.
    fn refill(&mut self) -> Result<(), LineError> {
        self.buf.compact();

        let free = self.buf.free_mut();

        if free.is_empty() {
            return Err(LineError::Overflow { capacity: N });
        }

        let n = loop {
            match self.source.read(free) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(LineError::Io(e)),
            }
        };

        if n == 0 {
            self.eof = true;
        }

        self.buf.advance(n);
        Ok(())
    }
}
