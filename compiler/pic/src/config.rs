//! Command-line configuration for the `pi` binary.

use clap::{Parser, ValueEnum};

/// How each tokenized line is reported.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Token texts, then the error count.
    #[default]
    Text,
    /// One `Kind @ start..end` line per token.
    Tokens,
    /// One JSON array per line.
    Json,
}

/// When to colorize diagnostics.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Interactive prompt for the π language.
#[derive(Debug, Parser)]
#[command(name = "pi", version, about)]
pub struct Cli {
    /// Output style for tokenized lines.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the welcome text.
    #[arg(long)]
    pub no_banner: bool,

    /// Only report the error count, not a diagnostic per bad character.
    #[arg(long)]
    pub no_diagnostics: bool,

    /// Colorize diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Tracing filter, e.g. `pi_lexer=trace`. Overrides `PI_LOG` and `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Cli {
    /// The tracing filter from `--log`, `PI_LOG` or `RUST_LOG`, in that order.
    pub fn log_filter(&self) -> Option<String> {
        resolve_log_filter(self.log.as_deref(), |key| std::env::var(key).ok())
    }
}

/// Pick the first non-empty filter from the flag, then `PI_LOG`, then `RUST_LOG`.
pub fn resolve_log_filter(
    flag: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let non_empty = |filter: &String| !filter.trim().is_empty();

    flag.map(str::to_string)
        .filter(non_empty)
        .or_else(|| env("PI_LOG").filter(non_empty))
        .or_else(|| env("RUST_LOG").filter(non_empty))
}

/// Resolved settings for one prompt session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplConfig {
    pub format: OutputFormat,
    pub banner: bool,
    pub diagnostics: bool,
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            format: OutputFormat::Text,
            banner: true,
            diagnostics: true,
            color: false,
        }
    }
}

impl ReplConfig {
    /// Resolve the command line. `stderr_is_terminal` decides `--color auto`.
    pub fn from_cli(cli: &Cli, stderr_is_terminal: bool) -> Self {
        ReplConfig {
            format: cli.format,
            banner: !cli.no_banner,
            diagnostics: !cli.no_diagnostics,
            color: match cli.color {
                ColorChoice::Auto => stderr_is_terminal,
                ColorChoice::Always => true,
                ColorChoice::Never => false,
            },
        }
    }
}
