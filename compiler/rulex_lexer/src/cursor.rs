//! Copyable cursor over a sentinel-terminated character buffer.
//!
//! EOF is detected when the position has reached the source length, where
//! the sentinel (`'\0'`) lives. An interior NUL at `pos < source_len` is
//! ordinary content, so recognizers see it as an unclassified character.
//!
//! Recognizers take a cursor by value and advance their own copy. Dropping
//! the copy is the backtrack: the caller's cursor never moved.

use crate::source_buffer::SENTINEL;

/// Cursor over a sentinel-terminated character buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is a plain assignment.
///
/// # Invariant
///
/// `buf[source_len] == SENTINEL` and `pos <= source_len` after any sequence
/// of advances that stops on the sentinel.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source characters followed by the sentinel.
    buf: &'a [char],
    /// Current read position (character index into `buf`).
    pos: usize,
    /// Number of source characters (index of the sentinel).
    source_len: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be the sentinel. This is guaranteed by
    /// `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [char], source_len: usize) -> Self {
        debug_assert!(
            source_len < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len] == SENTINEL, "sentinel must be '\\0'");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the character at the current position.
    ///
    /// Returns [`SENTINEL`] at EOF. Interior NULs also return `'\0'`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> char {
        self.char_at(self.pos)
    }

    /// Returns the character one position ahead of current.
    ///
    /// Reading past the sentinel yields the sentinel again.
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(self.pos + 1)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> char {
        self.buf.get(pos).copied().unwrap_or(SENTINEL)
    }

    /// Advance the cursor by one character.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` once the cursor has reached the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current character offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of source characters (excludes the sentinel).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Collect the characters in `start..end` into a `String`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len`. Recognizers only slice between
    /// positions they have themselves walked over.
    pub fn slice(&self, start: usize, end: usize) -> String {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.buf[start..end].iter().collect()
    }

    /// Collect the characters from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> String {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Returns the number of characters consumed.
    ///
    /// # Contract
    ///
    /// `pred(SENTINEL)` must return `false`. This holds for every classifier
    /// in [`char_class`](crate::char_class) and for single-character
    /// comparisons against printable characters.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }
}
