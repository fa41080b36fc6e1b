//! Errors surfaced by the prompt.

use std::io;

use pi_lexer::LexError;

/// Failure of the prompt loop itself. Lexical errors in user input are not
/// failures; they are rendered and the loop continues.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode tokens as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Lex(#[from] LexError),
}
