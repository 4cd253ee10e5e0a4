//! Scanner error types.
//!
//! A recognizer has two ways to fail. A soft failure (`Ok(None)`) means
//! "not mine, try the next recognizer" and never leaves this crate. A hard
//! failure is a [`LexError`]: it aborts the whole scan and no tokens are
//! returned.

use thiserror::Error;

/// Fatal scanning error. The input is unusable as a whole.
///
/// Positions are character offsets into the input.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// Every recognizer declined the character at `pos`.
    #[error("unrecognized character {ch:?} at offset {pos}")]
    UnrecognizedCharacter { ch: char, pos: usize },

    /// An operator spelling with no category, such as a lone `!`.
    #[error("unsupported operator: {ch} at offset {pos}")]
    UnsupportedOperator { ch: char, pos: usize },

    /// The input ended before the quote opened at `start` was closed.
    #[error("incomplete string literal: {quote} opened at offset {start} is never closed")]
    IncompleteStringLiteral { quote: char, start: usize },
}

impl LexError {
    /// Offset of the character the error points at.
    pub fn pos(&self) -> usize {
        match *self {
            LexError::UnrecognizedCharacter { pos, .. }
            | LexError::UnsupportedOperator { pos, .. } => pos,
            LexError::IncompleteStringLiteral { start, .. } => start,
        }
    }
}

/// A token was assembled without one of its two parts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum InvalidToken {
    #[error("token symbol can not be missing")]
    MissingSymbol,
    #[error("token value can not be missing")]
    MissingValue,
}
