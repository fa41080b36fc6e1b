//! Tokenizer for the π language.
//!
//! π is a one-line arithmetic/assignment language: numbers, variables, the
//! operators `+ - * / : =` (`:` is an alias for `/`) and three bracket pairs.
//! This crate turns one line of source into a [`TokenList`] in a single
//! left-to-right pass.
//!
//! # Architecture
//!
//! ```text
//! Tokenizer (owns the source, caches the result)
//!     │
//!     ▼
//! Scanner ──► Token { kind, span, error_location }
//!     │
//!     ├── CharClass  (first-byte dispatch)
//!     └── Cursor     (forward-only byte position)
//! ```
//!
//! Scanning is total: an unrecognized character becomes an `Error` token
//! covering that one character, and scanning resumes right after it.
//! [`Tokenizer::errors`] turns those tokens into [`LexError`] values for
//! reporting.

mod char_class;
mod confusables;
mod cursor;
mod lex_error;
mod scanner;
mod tokenizer;

pub use char_class::{classify, CharClass};
pub use confusables::lookup_confusable;
pub use lex_error::LexError;
pub use pi_ir::{Span, Token, TokenKind, TokenList};
pub use tokenizer::{ScanState, Tokenizer};

/// Tokenize one line of source.
///
/// Shorthand for [`Tokenizer::new`] followed by [`Tokenizer::into_tokens`].
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    Ok(Tokenizer::new(source)?.into_tokens())
}
