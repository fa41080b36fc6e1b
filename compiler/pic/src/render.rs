//! Rendering of one tokenized line.

use std::io::Write;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use pi_ir::{Span, Token, TokenKind, TokenList};
use pi_lexer::LexError;
use serde::Serialize;

use crate::config::{OutputFormat, ReplConfig};
use crate::error::ReplError;

/// JSON shape of one token: the token plus the text it covers.
#[derive(Serialize)]
struct TokenView<'a> {
    kind: TokenKind,
    span: Span,
    error_location: Option<u32>,
    text: &'a str,
}

impl<'a> TokenView<'a> {
    fn new(token: &Token, source: &'a str) -> Self {
        TokenView {
            kind: token.kind(),
            span: token.span(),
            error_location: token.error_location(),
            text: token.text(source),
        }
    }
}

/// Write the report for one line in the configured format.
///
/// `errors` are the tokenizer's typed errors for the same line, used for the
/// diagnostic reports in `text` format.
pub fn render_tokens(
    config: &ReplConfig,
    source: &str,
    tokens: &TokenList,
    errors: &[LexError],
    out: &mut impl Write,
) -> Result<(), ReplError> {
    match config.format {
        OutputFormat::Text => render_text(config, source, tokens, errors, out),
        OutputFormat::Tokens => render_token_dump(source, tokens, out),
        OutputFormat::Json => render_json(source, tokens, out),
    }
}

fn render_text(
    config: &ReplConfig,
    source: &str,
    tokens: &TokenList,
    errors: &[LexError],
    out: &mut impl Write,
) -> Result<(), ReplError> {
    writeln!(out, "Found {} tokens:", tokens.len())?;
    for token in tokens.iter().filter(|t| !t.is_error()) {
        writeln!(out, "{}", token.text(source))?;
    }
    if tokens.has_errors() {
        if config.diagnostics {
            for error in errors {
                write_diagnostic(source, error, config.color, out)?;
            }
        }
        writeln!(out, "Found {} tokens with errors.", tokens.error_count())?;
    }
    Ok(())
}

fn render_token_dump(
    source: &str,
    tokens: &TokenList,
    out: &mut impl Write,
) -> Result<(), ReplError> {
    writeln!(out, "Found {} tokens:", tokens.len())?;
    for token in tokens {
        match token.error_location() {
            Some(offset) => writeln!(
                out,
                "  {} @ {} {:?} error at {offset}",
                token.kind(),
                token.span(),
                token.text(source)
            )?,
            None => writeln!(
                out,
                "  {} @ {} {:?}",
                token.kind(),
                token.span(),
                token.text(source)
            )?,
        }
    }
    Ok(())
}

fn render_json(source: &str, tokens: &TokenList, out: &mut impl Write) -> Result<(), ReplError> {
    let views: Vec<TokenView<'_>> = tokens.iter().map(|t| TokenView::new(t, source)).collect();
    serde_json::to_writer(&mut *out, &views)?;
    writeln!(out)?;
    Ok(())
}

/// Render one error as an `ariadne` report labelled at its byte span.
fn write_diagnostic(
    source: &str,
    error: &LexError,
    color: bool,
    out: &mut impl Write,
) -> Result<(), ReplError> {
    let Some(span) = error.span() else {
        writeln!(out, "error: {error}")?;
        return Ok(());
    };
    let range = span.to_range();
    let mut report = Report::<std::ops::Range<usize>>::build(ReportKind::Error, (), range.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(error.to_string())
        .with_label(Label::new(range).with_message("not a π token"));
    if let Some(help) = error.help() {
        report = report.with_help(help);
    }
    report.finish().write(Source::from(source), &mut *out)?;
    Ok(())
}
