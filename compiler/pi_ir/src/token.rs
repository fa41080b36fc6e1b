//! Token types for the π lexer output.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// Token kinds for π.
///
/// A closed set: two multi-character kinds (`Number`, `Variable`), the
/// single-character operators and delimiters, and `Error` for a character
/// the scanner does not recognize.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Maximal run of ASCII digits: `42`.
    Number,
    /// ASCII letter followed by letters, digits or `_`: `x_1`.
    Variable,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`, or its alias `:`
    Divide,
    /// `=`
    Equals,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// A single unrecognized character.
    Error,
}

impl TokenKind {
    /// Human-readable name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Variable => "Variable",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::Equals => "Equals",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::CloseBracket => "CloseBracket",
            TokenKind::OpenBrace => "OpenBrace",
            TokenKind::CloseBrace => "CloseBrace",
            TokenKind::Error => "Error",
        }
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified token with its exact source position.
///
/// `error_location` is `Some(span.start)` exactly when `kind` is
/// [`TokenKind::Error`]; the constructors maintain this.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    span: Span,
    error_location: Option<u32>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        debug_assert!(!span.is_empty(), "token spans cover at least one byte");
        Token {
            kind,
            span,
            error_location: kind.is_error().then_some(span.start),
        }
    }

    /// Create an error token for the unrecognized character at `span`.
    #[inline]
    pub fn error(span: Span) -> Self {
        Token::new(TokenKind::Error, span)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Offset of the offending character, for error tokens only.
    #[inline]
    pub fn error_location(&self) -> Option<u32> {
        self.error_location
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// The source text this token covers.
    ///
    /// `source` must be the buffer the token was scanned from. Returns an
    /// empty string if the span does not fit it.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_location {
            Some(offset) => write!(f, "{:?} @ {} (error at {offset})", self.kind, self.span),
            None => write!(f, "{:?} @ {}", self.kind, self.span),
        }
    }
}

/// Ordered token sequence produced by one scan of one line.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Append a token.
    ///
    /// Tokens must be pushed in source order without overlap.
    #[inline]
    pub fn push(&mut self, token: Token) {
        debug_assert!(
            self.tokens
                .last()
                .map_or(true, |last| last.span.end <= token.span.start),
            "tokens must be pushed in source order"
        );
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(Token::kind).collect()
    }

    /// Iterate over the error tokens only.
    pub fn errors(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|t| t.is_error())
    }

    /// Number of error tokens.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(Token::is_error)
    }

    /// Consume the list into its underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
