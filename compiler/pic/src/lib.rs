//! π prompt - the interactive driver around the π tokenizer.
//!
//! ```text
//! stdin line ──► exit check ──► Tokenizer::scan() ──► render ──► stderr
//! ```
//!
//! The driver owns everything the tokenizer does not: command-line
//! configuration, logging setup, signal handling, the read loop and output
//! formatting.

mod config;
mod error;
mod logging;
mod render;
mod repl;
mod signals;

pub use config::{resolve_log_filter, Cli, ColorChoice, OutputFormat, ReplConfig};
pub use error::ReplError;
pub use logging::init_tracing;
pub use render::render_tokens;
pub use repl::{is_exit_command, strip_line_terminator, Repl, ReplSummary};
pub use signals::{force_quit_message, install_signal_handlers, SIGINT, SIGTERM};
