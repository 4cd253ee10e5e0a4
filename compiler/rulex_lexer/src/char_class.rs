//! Character and word classification for the recognizers.
//!
//! ASCII classes come from a table built by const evaluation; the only
//! non-ASCII letters are the CJK Unified Ideographs `U+4E00..=U+9FA5`, so
//! identifiers may be written in Chinese.

/// Reserved words. The identifier recognizer leaves these as `ID` tokens;
/// consumers check the raw text with [`is_keyword`].
const KEYWORDS: [&str; 4] = ["IF", "NOT", "THEN", "ELSE"];

/// First CJK ideograph treated as a letter.
const CJK_FIRST: char = '\u{4E00}';
/// Last CJK ideograph treated as a letter (inclusive).
const CJK_LAST: char = '\u{9FA5}';

const LETTER: u8 = 1 << 0;
const DIGIT: u8 = 1 << 1;

/// Class bits for every ASCII code point. The sentinel (`0x00`) maps to 0.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static ASCII_CLASS: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = match i as u8 {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => LETTER,
            b'0'..=b'9' => DIGIT,
            _ => 0,
        };
        i += 1;
    }
    table
};

#[inline]
fn ascii_class(c: char) -> Option<u8> {
    if c.is_ascii() {
        Some(ASCII_CLASS[c as usize])
    } else {
        None
    }
}

/// `a-z`, `A-Z`, `_`, `$`, or a CJK ideograph in `U+4E00..=U+9FA5`.
#[inline]
pub fn is_letter(c: char) -> bool {
    match ascii_class(c) {
        Some(class) => class & LETTER != 0,
        None => (CJK_FIRST..=CJK_LAST).contains(&c),
    }
}

/// [`is_letter`] or an ASCII decimal digit.
#[inline]
pub fn is_letter_or_digit(c: char) -> bool {
    match ascii_class(c) {
        Some(class) => class & (LETTER | DIGIT) != 0,
        None => (CJK_FIRST..=CJK_LAST).contains(&c),
    }
}

/// ASCII `0-9` only. Other Unicode digits are not numbers here.
#[inline]
pub fn is_digit(c: char) -> bool {
    ascii_class(c).is_some_and(|class| class & DIGIT != 0)
}

/// Exact, case-sensitive membership in `{IF, NOT, THEN, ELSE}`.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn is_and(word: &str) -> bool {
    word == "AND"
}

pub fn is_or(word: &str) -> bool {
    word == "OR"
}
