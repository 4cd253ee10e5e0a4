//! Lexical scanner for the rulex rule/formula language.
//!
//! Turns rule text such as `IF B_BLX=2 THEN [*,*]<=0{1~8,27~29,31}` into a
//! flat [`TokenList`]. The scanner does not check grammar: `IF`, `THEN` and
//! friends come out as plain `ID` tokens and a parser decides what they mean
//! (see [`Token::keyword`]).
//!
//! # Layers
//!
//! - [`char_class`]: letter / digit / keyword classification
//! - [`Symbol`]: the closed set of token categories
//! - [`Token`] / [`TokenList`]: scanner output
//! - [`SourceBuffer`] / [`Cursor`]: the sentinel-terminated input copy
//! - [`Scanner`] / [`scan`]: priority-ordered recognizers with backtracking
//!
//! # Errors
//!
//! Scanning is all-or-nothing. The first [`LexError`] ends the scan and no
//! tokens are returned with it.
//!
//! # Logging
//!
//! The scanner emits `tracing` events; call [`init_tracing`] (or install
//! your own subscriber) to see them.

pub mod char_class;
mod cursor;
mod lex_error;
mod scanner;
mod source_buffer;
mod symbol;
mod token;
mod tracing_setup;

pub use cursor::Cursor;
pub use lex_error::{InvalidToken, LexError};
pub use scanner::{scan, Scanner};
pub use source_buffer::{SourceBuffer, SENTINEL};
pub use symbol::Symbol;
pub use token::{Token, TokenList};
pub use tracing_setup::init_tracing;
