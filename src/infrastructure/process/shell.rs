//! Shell-interpreting launcher
//!
//! Runs the wrapped tool through the platform shell with all three stdio
//! streams inherited, so the tool owns the terminal for its lifetime.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use crate::application::ports::{LaunchError, ToolLauncher};

/// Launches the wrapped program through `sh -c` (`cmd /C` on Windows).
///
/// The forwarded arguments are joined into a single command line verbatim,
/// so shell operators and metacharacters in them behave as if typed at a
/// prompt. This is a trust boundary: callers passing untrusted input hand
/// it to the shell unescaped.
pub struct ShellLauncher {
    program: String,
}

impl ShellLauncher {
    /// Create a launcher for `program`, resolved via `PATH` by the shell.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Join the program and its arguments into the shell command line.
    fn command_line(&self, args: &[String]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    fn shell_command(&self, args: &[String]) -> Command {
        let line = self.command_line(args);

        #[cfg(unix)]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        };

        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        };

        // The child owns the terminal; nothing is buffered or proxied.
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

#[async_trait]
impl ToolLauncher for ShellLauncher {
    async fn launch(&self, args: &[String]) -> Result<Option<i32>, LaunchError> {
        let status = self
            .shell_command(args)
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    LaunchError::NotFound {
                        program: self.program.clone(),
                    }
                } else {
                    LaunchError::Spawn {
                        program: self.program.clone(),
                        source: e,
                    }
                }
            })?;

        Ok(status.code())
    }
}
