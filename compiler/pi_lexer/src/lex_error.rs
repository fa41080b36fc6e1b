//! Lexer error types.
//!
//! Scanning itself never fails: an unrecognized character becomes an
//! `Error` token and the scan continues. [`LexError`] is the typed view of
//! those tokens used for reporting, plus the one construction-time failure.

use pi_ir::Span;

use crate::confusables::lookup_confusable;

/// A lexer error with enough context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// A character outside π's alphabet, covered by one `Error` token.
    #[error("unrecognized character {found:?} at offset {}", .span.start)]
    UnrecognizedCharacter { found: char, span: Span },

    /// The source does not fit the `u32` offsets used by spans.
    #[error("source of {len} bytes exceeds the maximum of {} bytes", u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Create an unrecognized character error.
    #[cold]
    pub fn unrecognized_character(found: char, span: Span) -> Self {
        LexError::UnrecognizedCharacter { found, span }
    }

    /// Where the error occurred, if it has a source location.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnrecognizedCharacter { span, .. } => Some(*span),
            LexError::SourceTooLarge { .. } => None,
        }
    }

    /// Offset of the offending character.
    pub fn offset(&self) -> Option<u32> {
        self.span().map(|span| span.start)
    }

    /// Actionable hint for fixing the error, if one applies.
    pub fn help(&self) -> Option<String> {
        match self {
            LexError::UnrecognizedCharacter { found, .. } => {
                if let Some((suggested, name)) = lookup_confusable(*found) {
                    return Some(format!(
                        "`{found}` ({name}) looks like `{suggested}`; use the ASCII character instead"
                    ));
                }
                match found {
                    '_' => Some("variables must start with a letter".to_string()),
                    _ => Some(
                        "expected a number, a variable, an operator (+ - * / : =) or a bracket"
                            .to_string(),
                    ),
                }
            }
            LexError::SourceTooLarge { .. } => {
                Some("the prompt tokenizes one line at a time".to_string())
            }
        }
    }
}
