//! Signal handlers
//!
//! Interrupt and termination exit the wrapper immediately with the
//! conventional signal-derived codes. The child is not signaled here;
//! default process-group semantics apply to it.

use colored::Colorize;

/// Exit code for SIGINT (128 + 2).
pub const EXIT_INTERRUPTED: i32 = 130;

/// Exit code for SIGTERM (128 + 15).
pub const EXIT_TERMINATED: i32 = 143;

/// Install the interrupt/termination handlers.
///
/// Must be called from within the tokio runtime. Failures here are
/// non-fatal for the run itself; the caller decides how loudly to warn.
#[cfg(unix)]
pub fn install() -> Result<(), std::io::Error> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::spawn(async move {
        sigint.recv().await;
        eprintln!("\n{} Interrupted by user", "↓".cyan());
        std::process::exit(EXIT_INTERRUPTED);
    });

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        sigterm.recv().await;
        eprintln!("\n{} Terminated", "↓".cyan());
        std::process::exit(EXIT_TERMINATED);
    });

    Ok(())
}

/// Install the interrupt handler (Ctrl+C only on non-Unix platforms).
#[cfg(not(unix))]
pub fn install() -> Result<(), std::io::Error> {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\n{} Interrupted by user", "↓".cyan());
            std::process::exit(EXIT_INTERRUPTED);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_the_shell_convention() {
        assert_eq!(EXIT_INTERRUPTED, 130);
        assert_eq!(EXIT_TERMINATED, 143);
    }
}
