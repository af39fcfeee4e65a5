//! ClaudeBeep CLI entry point

use std::env;
use std::process::ExitCode;

use claude_beep::cli::{app, args, presenter::Presenter, signals};
use claude_beep::domain::AppInfo;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let info = AppInfo::new();
    let parsed = args::parse(env::args().skip(1));

    if let Err(e) = signals::install() {
        // Signal handling is best-effort; the run itself can proceed.
        Presenter::new().warn(&format!("Failed to setup signal handler: {}", e));
    }

    app::run(info, parsed.options, parsed.passthrough).await
}
