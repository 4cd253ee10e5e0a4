//! Closed set of lexical categories.
//!
//! Every [`Symbol`] carries a canonical spelling. Fixed-form tokens
//! (operators, punctuation, `SPACE`) use it as their value; literal kinds
//! (`ID`, `STR`, `INT`, ...) use it only as a display name and carry the
//! matched text instead.
//!
//! # Discriminant layout
//!
//! `#[repr(u8)]` with semantic ranges so a category can be recovered from a
//! single byte:
//!
//! | range    | group                          |
//! |----------|--------------------------------|
//! | 0-15     | structural punctuation         |
//! | 16-31    | arithmetic operators           |
//! | 32-47    | comparison operators           |
//! | 48-63    | keywords and connectives       |
//! | 64-79    | literal kinds                  |
//! | 112      | whitespace                     |
//! | 255      | end of input                   |

use std::fmt;

/// Lexical category of a [`Token`](crate::Token).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    // === Structural punctuation (0-15) ===
    /// `=`
    Assign = 0,
    /// `:`
    Colon = 1,
    /// `(`
    LParen = 2,
    /// `)`
    RParen = 3,
    /// `[`
    LBracket = 4,
    /// `]`
    RBracket = 5,
    /// `{`
    LBrace = 6,
    /// `}`
    RBrace = 7,
    /// `,`
    Comma = 8,
    /// `?`
    Question = 9,
    /// `&`
    Acc = 10,
    /// `@`
    Extra = 11,

    // === Arithmetic (16-31) ===
    /// `+`
    Add = 16,
    /// `-`
    Sub = 17,
    /// `*`
    Mul = 18,
    /// `/`
    Div = 19,
    /// `%`
    Mod = 20,

    // === Comparison (32-47) ===
    /// `==`
    Equal = 32,
    /// `!=`
    NotEqual = 33,
    /// `<>`: same meaning as [`NotEqual`](Self::NotEqual), different spelling.
    NotEqualAlt = 34,
    /// `<`
    Lt = 35,
    /// `<=`
    Le = 36,
    /// `>`
    Gt = 37,
    /// `>=`
    Ge = 38,

    // === Keywords & connectives (48-63) ===
    If = 48,
    Not = 49,
    Then = 50,
    Else = 51,
    And = 52,
    Or = 53,

    // === Literal kinds (64-79) ===
    Id = 64,
    Node = 65,
    Str = 66,
    True = 67,
    False = 68,
    Int = 69,
    Double = 70,
    /// Inclusive integer range such as `1~8`.
    Domain = 71,

    // === Whitespace (112) ===
    /// A run of one or more spaces.
    Space = 112,

    // === Control (255) ===
    Eof = 255,
}

impl Symbol {
    /// Every category, in declaration order.
    pub const ALL: [Symbol; 40] = [
        Symbol::Assign,
        Symbol::Colon,
        Symbol::LParen,
        Symbol::RParen,
        Symbol::LBracket,
        Symbol::RBracket,
        Symbol::LBrace,
        Symbol::RBrace,
        Symbol::Comma,
        Symbol::Question,
        Symbol::Acc,
        Symbol::Extra,
        Symbol::Add,
        Symbol::Sub,
        Symbol::Mul,
        Symbol::Div,
        Symbol::Mod,
        Symbol::Equal,
        Symbol::NotEqual,
        Symbol::NotEqualAlt,
        Symbol::Lt,
        Symbol::Le,
        Symbol::Gt,
        Symbol::Ge,
        Symbol::If,
        Symbol::Not,
        Symbol::Then,
        Symbol::Else,
        Symbol::And,
        Symbol::Or,
        Symbol::Id,
        Symbol::Node,
        Symbol::Str,
        Symbol::True,
        Symbol::False,
        Symbol::Int,
        Symbol::Double,
        Symbol::Domain,
        Symbol::Space,
        Symbol::Eof,
    ];

    /// Canonical spelling of this category.
    pub const fn canonical(self) -> &'static str {
        match self {
            Symbol::Assign => "=",
            Symbol::Colon => ":",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::LBracket => "[",
            Symbol::RBracket => "]",
            Symbol::LBrace => "{",
            Symbol::RBrace => "}",
            Symbol::Comma => ",",
            Symbol::Question => "?",
            Symbol::Acc => "&",
            Symbol::Extra => "@",
            Symbol::Add => "+",
            Symbol::Sub => "-",
            Symbol::Mul => "*",
            Symbol::Div => "/",
            Symbol::Mod => "%",
            Symbol::Equal => "==",
            Symbol::NotEqual => "!=",
            Symbol::NotEqualAlt => "<>",
            Symbol::Lt => "<",
            Symbol::Le => "<=",
            Symbol::Gt => ">",
            Symbol::Ge => ">=",
            Symbol::If => "IF",
            Symbol::Not => "NOT",
            Symbol::Then => "THEN",
            Symbol::Else => "ELSE",
            Symbol::And => "AND",
            Symbol::Or => "OR",
            Symbol::Id => "ID",
            Symbol::Node => "NODE",
            Symbol::Str => "STR",
            Symbol::True => "TRUE",
            Symbol::False => "FALSE",
            Symbol::Int => "INT",
            Symbol::Double => "DOUBLE",
            Symbol::Domain => "DOMAIN",
            Symbol::Space => " ",
            Symbol::Eof => "EOF",
        }
    }

    /// Inverse of [`canonical`](Self::canonical).
    pub fn from_canonical(text: &str) -> Option<Symbol> {
        Self::ALL.into_iter().find(|symbol| symbol.canonical() == text)
    }

    /// `IF`, `NOT`, `THEN`, `ELSE`.
    pub const fn is_keyword(self) -> bool {
        matches!(self, Symbol::If | Symbol::Not | Symbol::Then | Symbol::Else)
    }

    /// Equality and ordering operators, including both not-equal spellings.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Symbol::Equal
                | Symbol::NotEqual
                | Symbol::NotEqualAlt
                | Symbol::Lt
                | Symbol::Le
                | Symbol::Gt
                | Symbol::Ge
        )
    }

    /// Categories whose token value is matched text rather than the
    /// canonical spelling.
    pub const fn is_literal_kind(self) -> bool {
        matches!(
            self,
            Symbol::Id
                | Symbol::Node
                | Symbol::Str
                | Symbol::True
                | Symbol::False
                | Symbol::Int
                | Symbol::Double
                | Symbol::Domain
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
