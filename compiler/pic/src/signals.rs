//! Force-quit on interrupt and terminate signals.
//!
//! A dedicated thread runs a current-thread Tokio runtime that waits for
//! SIGINT (Ctrl+C) or SIGTERM. When one arrives the process prints a notice
//! and exits with status 0, wherever the prompt loop happens to be blocked.

use std::io;

/// Signal number reported for an interrupt (Ctrl+C).
pub const SIGINT: i32 = 2;
/// Signal number reported for a termination request.
pub const SIGTERM: i32 = 15;

/// Notice printed to stderr before a forced exit.
pub fn force_quit_message(signal: i32) -> String {
    format!("Force quit: SIGNAL {signal}")
}

/// Spawn the signal-watching thread.
///
/// Failures are logged; the prompt then keeps the default signal behavior.
pub fn install_signal_handlers() {
    let spawned = std::thread::Builder::new()
        .name("pi-signals".to_string())
        .spawn(|| {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::warn!("failed to start signal runtime ({e}), using default handling");
                    return;
                }
            };
            match runtime.block_on(wait_for_signal()) {
                Ok(signal) => force_quit(signal),
                Err(e) => {
                    tracing::warn!("failed to listen for signals ({e}), using default handling");
                }
            }
        });
    if let Err(e) = spawned {
        tracing::warn!("failed to spawn signal thread ({e}), using default handling");
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<i32> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = interrupt.recv() => Ok(SIGINT),
        _ = terminate.recv() => Ok(SIGTERM),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<i32> {
    tokio::signal::ctrl_c().await?;
    Ok(SIGINT)
}

fn force_quit(signal: i32) -> ! {
    tracing::debug!(signal, "force quit");
    eprintln!("{}", force_quit_message(signal));
    println!();
    std::process::exit(0);
}
