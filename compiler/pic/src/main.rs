//! π prompt CLI
//!
//! Reads one line at a time from stdin and prints its tokens.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use pic::{init_tracing, install_signal_handlers, Cli, Repl, ReplConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_filter().as_deref());
    install_signal_handlers();

    let config = ReplConfig::from_cli(&cli, std::io::stderr().is_terminal());
    tracing::debug!(?config, "starting prompt");

    // stdout and stderr stay unlocked: the signal thread writes to them too.
    let mut repl = Repl::new(
        config,
        std::io::stdin().lock(),
        std::io::stdout(),
        std::io::stderr(),
    );
    match repl.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "prompt failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
