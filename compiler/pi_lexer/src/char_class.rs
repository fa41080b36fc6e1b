//! First-byte classification for the scanner's dispatch.
//!
//! Classification is ASCII-only: every byte outside the recognized set,
//! including all non-ASCII lead bytes, is [`CharClass::Unrecognized`].

use pi_ir::TokenKind;

/// What the scanner does with a token's first byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CharClass {
    /// Skipped silently.
    Whitespace,
    /// Starts a [`TokenKind::Number`] run.
    Digit,
    /// Starts a [`TokenKind::Variable`] run.
    Alpha,
    /// A complete one-byte token of the given kind.
    Single(TokenKind),
    /// Becomes a [`TokenKind::Error`] covering one character.
    Unrecognized,
}

/// Classify the first byte of a token.
pub const fn classify(byte: u8) -> CharClass {
    match byte {
        b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => CharClass::Whitespace,
        b'0'..=b'9' => CharClass::Digit,
        b'a'..=b'z' | b'A'..=b'Z' => CharClass::Alpha,
        b'+' => CharClass::Single(TokenKind::Plus),
        b'-' => CharClass::Single(TokenKind::Minus),
        b'*' => CharClass::Single(TokenKind::Multiply),
        // `:` is an alias for `/`
        b'/' | b':' => CharClass::Single(TokenKind::Divide),
        b'=' => CharClass::Single(TokenKind::Equals),
        b'(' => CharClass::Single(TokenKind::OpenParen),
        b')' => CharClass::Single(TokenKind::CloseParen),
        b'[' => CharClass::Single(TokenKind::OpenBracket),
        b']' => CharClass::Single(TokenKind::CloseBracket),
        b'{' => CharClass::Single(TokenKind::OpenBrace),
        b'}' => CharClass::Single(TokenKind::CloseBrace),
        _ => CharClass::Unrecognized,
    }
}

/// Whitespace per C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(classify(byte), CharClass::Whitespace)
}

#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Bytes allowed after the first letter of a variable.
#[inline]
pub const fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
