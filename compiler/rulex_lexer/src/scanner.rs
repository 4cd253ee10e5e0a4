//! Priority-ordered recognizers with full backtracking.
//!
//! The scanner keeps one cursor, `left`, at the start of the next token.
//! Each recognizer receives a copy of it (the lookahead cursor) and either
//! returns the token it matched together with the advanced copy, or
//! declines. Declining discards the copy, so nothing a recognizer read
//! leaks into the next attempt.
//!
//! # Order
//!
//! 1. identifier (`true`, `AND`, `OR` get their own categories)
//! 2. operator / punctuation
//! 3. string literal
//! 4. number (`INT`, `DOUBLE`, `DOMAIN`)
//! 5. space run
//!
//! The first recognizer to match wins. When all five decline at one
//! position the scan has stalled and fails with
//! [`LexError::UnrecognizedCharacter`].

use tracing::{debug, trace};

use crate::char_class;
use crate::cursor::Cursor;
use crate::{LexError, SourceBuffer, Symbol, Token, TokenList};

/// Failed attempts allowed at one position: one per recognizer.
const STALL_THRESHOLD: usize = 5;

/// Result of a successful recognizer: the token and the cursor just past it.
struct Match<'a> {
    token: Token,
    rest: Cursor<'a>,
}

impl<'a> Match<'a> {
    fn new(token: Token, rest: Cursor<'a>) -> Self {
        Match { token, rest }
    }
}

/// `Ok(None)` is a soft failure (try the next recognizer); `Err` aborts.
type RecognizeFn = for<'a> fn(Cursor<'a>) -> Result<Option<Match<'a>>, LexError>;

struct Recognizer {
    name: &'static str,
    recognize: RecognizeFn,
}

static RECOGNIZERS: [Recognizer; STALL_THRESHOLD] = [
    Recognizer {
        name: "identifier",
        recognize: identifier,
    },
    Recognizer {
        name: "operator",
        recognize: operator,
    },
    Recognizer {
        name: "string",
        recognize: string,
    },
    Recognizer {
        name: "number",
        recognize: number,
    },
    Recognizer {
        name: "whitespace",
        recognize: whitespace,
    },
];

/// Pull-based scanner over a [`SourceBuffer`].
///
/// After the first error, or once the input is exhausted, every further
/// call to [`next_token`](Self::next_token) returns `Ok(None)`.
pub struct Scanner<'a> {
    /// Start of the next token candidate.
    left: Cursor<'a>,
    halted: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Scanner {
            left: buf.cursor(),
            halted: false,
        }
    }

    /// Character offset where the next token starts.
    pub fn pos(&self) -> usize {
        self.left.pos()
    }

    /// Recognize the next token.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.halted || self.left.is_eof() {
            return Ok(None);
        }

        // Each failed attempt moves on to the next recognizer, so the fail
        // count doubles as the index of the recognizer to try.
        let mut fail_count = 0;
        while fail_count < STALL_THRESHOLD {
            let recognizer = &RECOGNIZERS[fail_count];
            match (recognizer.recognize)(self.left) {
                Ok(Some(Match { token, rest })) => {
                    debug_assert!(
                        rest.pos() > self.left.pos(),
                        "{} matched without consuming input",
                        recognizer.name
                    );
                    trace!(
                        recognizer = recognizer.name,
                        symbol = %token.symbol(),
                        value = token.value(),
                        pos = self.left.pos(),
                        "token"
                    );
                    self.left = rest;
                    return Ok(Some(token));
                }
                Ok(None) => fail_count += 1,
                Err(err) => {
                    self.halted = true;
                    return Err(err);
                }
            }
        }

        self.halted = true;
        Err(LexError::UnrecognizedCharacter {
            ch: self.left.current(),
            pos: self.left.pos(),
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Scan `text` into tokens. Any error discards everything scanned so far.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn scan(text: &str) -> Result<TokenList, LexError> {
    let buf = SourceBuffer::new(text);
    let mut scanner = Scanner::new(&buf);
    let mut tokens = TokenList::new();
    loop {
        match scanner.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(err) => {
                debug!(%err, scanned = tokens.len(), "scan aborted");
                return Err(err);
            }
        }
    }
    debug!(count = tokens.len(), "scan complete");
    Ok(tokens)
}

// ─── Identifiers ───────────────────────────────────────────────────

fn identifier(mut forward: Cursor<'_>) -> Result<Option<Match<'_>>, LexError> {
    if !char_class::is_letter(forward.current()) {
        return Ok(None);
    }
    let start = forward.pos();
    forward.advance();
    forward.eat_while(char_class::is_letter_or_digit);

    let text = forward.slice_from(start);
    // IF / NOT / THEN / ELSE stay identifiers; see Token::keyword.
    let symbol = if text == "true" {
        Symbol::True
    } else if char_class::is_or(&text) {
        Symbol::Or
    } else if char_class::is_and(&text) {
        Symbol::And
    } else {
        Symbol::Id
    };
    Ok(Some(Match::new(Token::new(symbol, text), forward)))
}

// ─── Operators ─────────────────────────────────────────────────────

fn operator(mut forward: Cursor<'_>) -> Result<Option<Match<'_>>, LexError> {
    let start = forward.pos();
    let symbol = match forward.current() {
        '=' => followed_by(&mut forward, &[('=', Symbol::Equal)]).unwrap_or(Symbol::Assign),
        '!' => followed_by(&mut forward, &[('=', Symbol::NotEqual)])
            .ok_or(LexError::UnsupportedOperator { ch: '!', pos: start })?,
        '<' => followed_by(
            &mut forward,
            &[('=', Symbol::Le), ('>', Symbol::NotEqualAlt)],
        )
        .unwrap_or(Symbol::Lt),
        '>' => followed_by(&mut forward, &[('=', Symbol::Ge)]).unwrap_or(Symbol::Gt),
        c => match single_char_symbol(c) {
            Some(symbol) => {
                forward.advance();
                symbol
            }
            None => return Ok(None),
        },
    };
    Ok(Some(Match::new(Token::fixed(symbol), forward)))
}

/// Consume the current character, then the next one too if it appears in
/// `pairs`, returning the paired symbol.
fn followed_by(forward: &mut Cursor<'_>, pairs: &[(char, Symbol)]) -> Option<Symbol> {
    forward.advance();
    let next = forward.current();
    let (_, symbol) = pairs.iter().find(|&&(c, _)| c == next)?;
    forward.advance();
    Some(*symbol)
}

fn single_char_symbol(c: char) -> Option<Symbol> {
    let symbol = match c {
        '+' => Symbol::Add,
        '-' => Symbol::Sub,
        '*' => Symbol::Mul,
        '/' => Symbol::Div,
        '%' => Symbol::Mod,
        '&' => Symbol::Acc,
        '(' => Symbol::LParen,
        ')' => Symbol::RParen,
        '[' => Symbol::LBracket,
        ']' => Symbol::RBracket,
        '{' => Symbol::LBrace,
        '}' => Symbol::RBrace,
        ',' => Symbol::Comma,
        '@' => Symbol::Extra,
        _ => return None,
    };
    Some(symbol)
}

// ─── Strings ───────────────────────────────────────────────────────

/// `"..."` or `'...'`. Inside, `\` followed by the active quote stands for
/// the quote; every other character, a lone `\` included, is literal.
fn string(mut forward: Cursor<'_>) -> Result<Option<Match<'_>>, LexError> {
    let quote = forward.current();
    if quote != '"' && quote != '\'' {
        return Ok(None);
    }
    let start = forward.pos();
    forward.advance(); // opening quote

    let mut value = String::new();
    loop {
        if forward.is_eof() {
            return Err(LexError::IncompleteStringLiteral { quote, start });
        }
        let c = forward.current();
        if c == quote {
            forward.advance(); // closing quote
            break;
        }
        if c == '\\' && forward.peek() == quote {
            forward.advance();
        }
        value.push(forward.current());
        forward.advance();
    }

    if value.is_empty() {
        // Empty literals keep their delimiters: `""` / `''`.
        value.push(quote);
        value.push(quote);
    }
    Ok(Some(Match::new(Token::new(Symbol::Str, value), forward)))
}

// ─── Numbers ───────────────────────────────────────────────────────

/// `123` INT, `12.5` / `12.` DOUBLE, `1~8` DOMAIN. The value is the raw text.
fn number(mut forward: Cursor<'_>) -> Result<Option<Match<'_>>, LexError> {
    if !char_class::is_digit(forward.current()) {
        return Ok(None);
    }
    let start = forward.pos();
    forward.eat_while(char_class::is_digit);

    let symbol = match forward.current() {
        '.' => Symbol::Double,
        '~' => Symbol::Domain,
        _ => Symbol::Int,
    };
    if symbol != Symbol::Int {
        forward.advance();
        forward.eat_while(char_class::is_digit);
    }
    Ok(Some(Match::new(
        Token::new(symbol, forward.slice_from(start)),
        forward,
    )))
}

// ─── Whitespace ────────────────────────────────────────────────────

/// Any run of spaces becomes a single `SPACE` token. Tabs and newlines are
/// not whitespace here.
fn whitespace(mut forward: Cursor<'_>) -> Result<Option<Match<'_>>, LexError> {
    if forward.eat_while(|c| c == ' ') == 0 {
        return Ok(None);
    }
    Ok(Some(Match::new(Token::fixed(Symbol::Space), forward)))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
