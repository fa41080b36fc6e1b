//! The read-tokenize-print loop.

use std::io::{BufRead, Write};

use pi_lexer::Tokenizer;

use crate::config::ReplConfig;
use crate::error::ReplError;
use crate::render::render_tokens;

const BANNER: &str = "Welcome to the \u{03C0} language prompt\n\
                      \u{03A0} is a language for solving simple mathematical equations.\n\
                      \n\
                      Press 'CTRL+C' or type 'exit' to exit the program.\n\n";

const PROMPT: &str = "> ";

/// Counters for one finished session.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ReplSummary {
    /// Lines tokenized (the exit command is not counted).
    pub lines: usize,
    /// Error tokens across all lines.
    pub errors: usize,
}

/// Interactive prompt over arbitrary streams.
///
/// The banner, prompt and farewell go to `out`; token reports go to `report`.
pub struct Repl<R, W, E> {
    config: ReplConfig,
    input: R,
    out: W,
    report: E,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    pub fn new(config: ReplConfig, input: R, out: W, report: E) -> Self {
        Repl {
            config,
            input,
            out,
            report,
        }
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> Result<ReplSummary, ReplError> {
        if self.config.banner {
            self.out.write_all(BANNER.as_bytes())?;
        }

        let mut summary = ReplSummary::default();
        let mut buf = Vec::new();
        loop {
            self.out.write_all(PROMPT.as_bytes())?;
            self.out.flush()?;

            buf.clear();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .map_err(ReplError::Read)?;
            if read == 0 {
                tracing::debug!("end of input");
                writeln!(self.out)?;
                break;
            }

            // Invalid UTF-8 becomes U+FFFD, which the tokenizer reports as
            // an unrecognized character.
            let line = String::from_utf8_lossy(&buf);
            let line = strip_line_terminator(&line);
            if is_exit_command(line) {
                break;
            }

            summary.errors += self.evaluate(line)?;
            summary.lines += 1;
        }

        self.out.write_all(b"\nBye!\n\n")?;
        self.out.flush()?;
        tracing::debug!(
            lines = summary.lines,
            errors = summary.errors,
            "session finished"
        );
        Ok(summary)
    }

    /// Tokenize one line and write its report. Returns the error token count.
    #[tracing::instrument(level = "debug", skip_all, fields(len = line.len()))]
    fn evaluate(&mut self, line: &str) -> Result<usize, ReplError> {
        let mut tokenizer = Tokenizer::new(line)?;
        let errors = tokenizer.errors();
        let tokens = tokenizer.scan();
        render_tokens(&self.config, line, tokens, &errors, &mut self.report)?;
        self.report.flush()?;
        Ok(errors.len())
    }
}

/// `true` if the whole line is `exit`, ignoring ASCII case.
pub fn is_exit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit")
}

/// Remove one trailing `\n` and an optional `\r` before it.
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests;
