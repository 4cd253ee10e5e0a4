//! Tokens and the scanner's output sequence.

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;

use crate::char_class;
use crate::{InvalidToken, Symbol};

/// Immutable `(symbol, value)` pair.
///
/// Fixed-form tokens borrow their value from [`Symbol::canonical`]; literal
/// tokens own the text they were matched from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    symbol: Symbol,
    value: Cow<'static, str>,
}

impl Token {
    /// Token carrying matched text.
    pub fn new(symbol: Symbol, value: impl Into<String>) -> Self {
        Token {
            symbol,
            value: Cow::Owned(value.into()),
        }
    }

    /// Token whose value is the symbol's canonical spelling.
    pub const fn fixed(symbol: Symbol) -> Self {
        Token {
            symbol,
            value: Cow::Borrowed(symbol.canonical()),
        }
    }

    /// Build a token from parts that may be absent, e.g. when decoding
    /// tokens produced elsewhere.
    pub fn try_from_parts(
        symbol: Option<Symbol>,
        value: Option<String>,
    ) -> Result<Self, InvalidToken> {
        let symbol = symbol.ok_or(InvalidToken::MissingSymbol)?;
        let value = value.ok_or(InvalidToken::MissingValue)?;
        Ok(Token::new(symbol, value))
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Keyword category for an `ID` token spelled `IF`, `NOT`, `THEN` or
    /// `ELSE`.
    ///
    /// The scanner emits these words as plain identifiers; this is the
    /// lookup a parser applies afterwards.
    pub fn keyword(&self) -> Option<Symbol> {
        if self.symbol != Symbol::Id || !char_class::is_keyword(&self.value) {
            return None;
        }
        Symbol::from_canonical(&self.value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ symbol : {}, value : {} }}",
            self.symbol.canonical(),
            self.value
        )
    }
}

/// Ordered tokens produced by one scan.
///
/// `Display` concatenates the token values, which reproduces the input
/// modulo collapsed space runs, unescaped quotes and string delimiters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Categories only, in order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.tokens.iter().map(Token::symbol)
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.value())?;
        }
        Ok(())
    }
}
