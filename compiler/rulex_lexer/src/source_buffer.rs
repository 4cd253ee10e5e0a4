//! Sentinel-terminated buffer of code points.
//!
//! The input is copied once, as `char`s, with a single `'\0'` sentinel
//! appended after the last real character. Recognizers detect the end of
//! input by hitting the sentinel: it is not a letter, digit, space, quote,
//! or operator character, so every greedy loop stops on it without an
//! explicit bounds check.
//!
//! Positions handed out by the [`Cursor`] are character offsets, not byte
//! offsets. CJK ideographs are single positions.

use crate::Cursor;

/// End-of-input marker stored one position past the source content.
pub const SENTINEL: char = '\0';

/// Sentinel-terminated copy of the scanner input.
///
/// # Layout
///
/// ```text
/// [source_chars..., '\0']
///  ^                ^
///  0                len() (sentinel)
/// ```
///
/// Interior NUL characters are legal input; the cursor tells them apart
/// from the sentinel by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_chars..., SENTINEL]`.
    buf: Box<[char]>,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    pub fn new(source: &str) -> Self {
        // A char is at least one byte, so the byte length bounds the char count.
        let mut buf = Vec::with_capacity(source.len() + 1);
        buf.extend(source.chars());
        buf.push(SENTINEL);
        Self {
            buf: buf.into_boxed_slice(),
        }
    }

    /// Returns the source characters (without the sentinel).
    pub fn as_chars(&self) -> &[char] {
        &self.buf[..self.len()]
    }

    /// Returns the full buffer including the trailing sentinel.
    pub fn as_sentinel_chars(&self) -> &[char] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at the first character.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.len())
    }

    /// Number of source characters (excludes the sentinel).
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
