//! Hand-written scanner producing one [`Token`] per call.
//!
//! The scanner skips whitespace, dispatches on the [`CharClass`] of the next
//! byte, and returns the classified token with its span. Number and variable
//! runs are maximal munch. An unrecognized character becomes a one-character
//! `Error` token and scanning continues after it, so every non-whitespace
//! byte of the source ends up inside exactly one token.

use pi_ir::{Span, Token, TokenKind};

use crate::char_class::{classify, is_digit, is_ident_continue, CharClass};
use crate::cursor::Cursor;

/// Allocation-free scanner over a [`Cursor`].
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Offset of the next unscanned byte.
    pub(crate) fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token, or `None` once the source is exhausted.
    ///
    /// Subsequent calls after `None` keep returning `None`.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.cursor.is_eof() {
                return None;
            }
            let start = self.cursor.pos();
            let kind = match classify(self.cursor.current()) {
                CharClass::Whitespace => {
                    self.cursor.eat_whitespace();
                    continue;
                }
                CharClass::Single(kind) => self.single(kind),
                CharClass::Digit => self.number(),
                CharClass::Alpha => self.variable(),
                CharClass::Unrecognized => self.unrecognized(),
            };
            let token = Token::new(kind, Span::new(start, self.cursor.pos()));
            tracing::trace!(
                kind = %token.kind(),
                span = %token.span(),
                text = self.cursor.slice_from(start),
                "token"
            );
            return Some(token);
        }
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn number(&mut self) -> TokenKind {
        self.cursor.advance(); // first digit, already classified
        self.cursor.eat_while(is_digit);
        TokenKind::Number
    }

    fn variable(&mut self) -> TokenKind {
        self.cursor.advance(); // first letter, already classified
        self.cursor.eat_while(is_ident_continue);
        TokenKind::Variable
    }

    #[cold]
    fn unrecognized(&mut self) -> TokenKind {
        self.cursor.advance_char();
        TokenKind::Error
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests;
