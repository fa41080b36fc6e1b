//! The caching tokenizer over one owned line of source.

use pi_ir::TokenList;

use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::scanner::Scanner;

/// Whether a [`Tokenizer`] has run its single scan yet.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScanState {
    /// Constructed, not scanned.
    #[default]
    Idle,
    /// Scanned; the token list is final.
    Scanned,
}

/// Tokenizer owning one line of π source.
///
/// The first call to [`scan()`](Self::scan) runs one left-to-right pass and
/// caches the result. Later calls return the cached list without rescanning,
/// including when the source produced no tokens at all.
///
/// # Example
///
/// ```
/// use pi_ir::TokenKind;
/// use pi_lexer::Tokenizer;
///
/// let mut tokenizer = Tokenizer::new("x = 12abc")?;
/// let kinds = tokenizer.scan().kinds();
/// assert_eq!(
///     kinds,
///     [TokenKind::Variable, TokenKind::Equals, TokenKind::Number, TokenKind::Variable]
/// );
/// # Ok::<(), pi_lexer::LexError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tokenizer {
    source: String,
    /// Next unscanned offset. `0` while idle, `source.len()` once scanned.
    cursor: u32,
    tokens: TokenList,
    state: ScanState,
}

impl Tokenizer {
    /// Take ownership of one line of source.
    ///
    /// Fails only if the source is longer than `u32::MAX` bytes.
    pub fn new(source: impl Into<String>) -> Result<Self, LexError> {
        let source = source.into();
        if u32::try_from(source.len()).is_err() {
            return Err(LexError::SourceTooLarge { len: source.len() });
        }
        Ok(Tokenizer {
            source,
            cursor: 0,
            tokens: TokenList::new(),
            state: ScanState::Idle,
        })
    }

    /// Tokenize the source, or return the cached tokens from an earlier call.
    pub fn scan(&mut self) -> &TokenList {
        if self.state == ScanState::Scanned {
            tracing::trace!(tokens = self.tokens.len(), "returning cached tokens");
            return &self.tokens;
        }
        self.scan_source();
        &self.tokens
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = self.source.len()))]
    fn scan_source(&mut self) {
        // Length checked in `new()`.
        let source_len = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        let mut scanner = Scanner::new(Cursor::new(&self.source, source_len));
        for token in scanner.by_ref() {
            self.tokens.push(token);
        }
        self.cursor = scanner.pos();
        self.state = ScanState::Scanned;
        debug_assert_eq!(self.cursor, source_len, "scan stopped before EOF");

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.tokens.error_count(),
            "scan complete"
        );
    }

    /// The source text, exactly as supplied.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[inline]
    pub fn is_scanned(&self) -> bool {
        self.state == ScanState::Scanned
    }

    /// Offset of the next unscanned byte.
    #[inline]
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// The cached tokens, once [`scan()`](Self::scan) has run.
    pub fn tokens(&self) -> Option<&TokenList> {
        self.is_scanned().then_some(&self.tokens)
    }

    /// One [`LexError::UnrecognizedCharacter`] per error token, scanning first
    /// if needed.
    pub fn errors(&mut self) -> Vec<LexError> {
        self.scan();
        self.tokens
            .errors()
            .filter_map(|token| {
                let found = token.text(&self.source).chars().next()?;
                Some(LexError::unrecognized_character(found, token.span()))
            })
            .collect()
    }

    /// Consume the tokenizer and return its tokens, scanning first if needed.
    pub fn into_tokens(mut self) -> TokenList {
        self.scan();
        self.tokens
    }
}
