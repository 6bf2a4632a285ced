//! Pooled decoding of raw lines into characters.

#[cfg(test)]
mod tests;

use core::cell::RefCell;
use core::fmt;
use core::mem;
use core::ops::Deref;
use core::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

/// Lines at or below this many bytes decode into inline storage instead of
/// renting from the pool.
pub const INLINE: usize = 128;

/// Decode failure: the line was not valid UTF-8.
#[derive(Debug)]
pub struct DecodeError {
    valid_up_to: usize,
    line: Vec<u8>,
}

impl DecodeError {
    /// Byte offset of the first undecodable sequence.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected utf-8, found undecodable byte at offset {} in {:?}",
            self.valid_up_to,
            BStr::new(&self.line)
        )
    }
}

impl std::error::Error for DecodeError {}

/// Free list of reusable character buffers.
///
/// Buffers are checked out per line and returned by the [`Rented`] guard
/// before the next line decodes, so the list never grows past the deepest
/// point of the pipeline.
///
/// # Examples
///
/// ```
/// use lib::CharPool;
///
/// let pool = CharPool::new();
///
/// {
///     let mut buf = pool.rent(16);
///     buf.push('a');
///     assert_eq!(&buf[..], ['a']);
/// }
///
/// // Returned on drop, picked up again by the next checkout.
/// assert_eq!(pool.idle(), 1);
/// let _buf = pool.rent(16);
/// assert_eq!(pool.idle(), 0);
/// ```
#[derive(Debug)]
pub struct CharPool {
    free: RefCell<Vec<Vec<char>>>,
}

impl CharPool {
    /// Construct a new empty pool.
    pub const fn new() -> Self {
        Self {
            free: RefCell::new(Vec::new()),
        }
    }

    /// Check out a cleared buffer with capacity for at least `cap`
    /// characters.
    pub fn rent(&self, cap: usize) -> Rented<'_> {
        let mut buf = self.free.borrow_mut().pop().unwrap_or_default();
        buf.clear();
        buf.reserve(cap);

        Rented { pool: self, buf }
    }

    /// Number of buffers parked in the free list.
    pub fn idle(&self) -> usize {
        self.free.borrow().len()
    }

    fn put_back(&self, buf: Vec<char>) {
        self.free.borrow_mut().push(buf);
    }
}

impl Default for CharPool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A checked-out pool buffer, returned to the pool on drop.
#[derive(Debug)]
pub struct Rented<'a> {
    pool: &'a CharPool,
    buf: Vec<char>,
}

impl Rented<'_> {
    /// Append a character.
    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    fn pop(&mut self) -> Option<char> {
        self.buf.pop()
    }
}

impl Deref for Rented<'_> {
    type Target = [char];

    #[inline]
    fn deref(&self) -> &[char] {
        &self.buf
    }
}

impl Drop for Rented<'_> {
    fn drop(&mut self) {
        self.pool.put_back(mem::take(&mut self.buf));
    }
}

/// One decoded line: inline storage for short lines, pooled otherwise.
#[derive(Debug)]
pub enum Chars<'a> {
    Inline(ArrayVec<char, INLINE>),
    Rented(Rented<'a>),
}

impl Chars<'_> {
    fn push(&mut self, c: char) {
        match self {
            Chars::Inline(chars) => chars.push(c),
            Chars::Rented(rented) => rented.push(c),
        }
    }

    fn pop(&mut self) -> Option<char> {
        match self {
            Chars::Inline(chars) => chars.pop(),
            Chars::Rented(rented) => rented.pop(),
        }
    }
}

impl Deref for Chars<'_> {
    type Target = [char];

    #[inline]
    fn deref(&self) -> &[char] {
        match self {
            Chars::Inline(chars) => chars,
            Chars::Rented(rented) => rented,
        }
    }
}

/// Decode one raw line into characters, trimming a single trailing carriage
/// return.
///
/// The pooled buffer rides inside the returned [`Chars`] and goes back to
/// the pool when it drops, whether or not the record parse that follows
/// succeeds.
pub fn decode<'a>(pool: &'a CharPool, bytes: &[u8]) -> Result<Chars<'a>, DecodeError> {
    let text = match from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            return Err(DecodeError {
                valid_up_to: e.valid_up_to(),
                line: bytes.to_vec(),
            })
        }
    };

    let mut chars = if text.len() <= INLINE {
        Chars::Inline(ArrayVec::new())
    } else {
        Chars::Rented(pool.rent(text.len()))
    };

    // The character count never exceeds the byte count, so the inline arm
    // cannot overflow its capacity.
    for c in text.chars() {
        chars.push(c);
    }

    if matches!(chars.last(), Some('\r')) {
        chars.pop();
    }

    Ok(chars)
}
