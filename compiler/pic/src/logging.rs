//! Tracing setup for the `pi` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output on stderr.
///
/// Does nothing unless a filter is given (see
/// [`resolve_log_filter`](crate::resolve_log_filter)), so a plain session
/// prints nothing beyond the prompt. Safe to call multiple times.
pub fn init_tracing(filter: Option<&str>) {
    let Some(filter) = filter else {
        return;
    };
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match EnvFilter::try_new(filter) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("warning: ignoring invalid log filter {filter:?}: {e}");
                return;
            }
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
