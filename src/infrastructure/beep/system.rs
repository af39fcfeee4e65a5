//! Native system-sound beeper
//!
//! Plays the platform's stock completion/error sounds through its own
//! sound utility. Missing utilities or missing sound files surface as
//! errors so the chain can move on.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use crate::application::ports::{BeepError, BeepKind, Beeper};

/// Beeper that shells out to a platform sound command.
pub struct SystemSoundBeeper {
    label: &'static str,
    program: &'static str,
    success_args: &'static [&'static str],
    failure_args: &'static [&'static str],
}

impl SystemSoundBeeper {
    /// macOS: `afplay` with the stock system sounds.
    pub const fn afplay() -> Self {
        Self {
            label: "afplay",
            program: "afplay",
            success_args: &["/System/Library/Sounds/Glass.aiff"],
            failure_args: &["/System/Library/Sounds/Basso.aiff"],
        }
    }

    /// Linux: `paplay` with the freedesktop sound theme.
    pub const fn paplay() -> Self {
        Self {
            label: "paplay",
            program: "paplay",
            success_args: &["/usr/share/sounds/freedesktop/stereo/complete.oga"],
            failure_args: &["/usr/share/sounds/freedesktop/stereo/dialog-error.oga"],
        }
    }

    /// Windows: console beep sequences through PowerShell.
    pub const fn powershell() -> Self {
        Self {
            label: "powershell",
            program: "powershell",
            success_args: &[
                "-NoProfile",
                "-Command",
                "[console]::beep(523,100);[console]::beep(659,100);[console]::beep(784,160)",
            ],
            failure_args: &[
                "-NoProfile",
                "-Command",
                "[console]::beep(392,80);[console]::beep(330,120)",
            ],
        }
    }

    fn args_for(&self, kind: BeepKind) -> &'static [&'static str] {
        match kind {
            BeepKind::Success => self.success_args,
            BeepKind::Failure => self.failure_args,
        }
    }
}

#[async_trait]
impl Beeper for SystemSoundBeeper {
    fn name(&self) -> &'static str {
        self.label
    }

    async fn beep(&self, kind: BeepKind) -> Result<(), BeepError> {
        let status = Command::new(self.program)
            .args(self.args_for(kind))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| BeepError::CommandFailed(format!("{}: {}", self.program, e)))?;

        if !status.success() {
            return Err(BeepError::CommandFailed(format!(
                "{} exited with status: {}",
                self.program, status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_failure_use_distinct_sounds() {
        for beeper in [
            SystemSoundBeeper::afplay(),
            SystemSoundBeeper::paplay(),
            SystemSoundBeeper::powershell(),
        ] {
            assert_ne!(
                beeper.args_for(BeepKind::Success),
                beeper.args_for(BeepKind::Failure),
                "{} must distinguish the two cues",
                beeper.label
            );
        }
    }

    #[tokio::test]
    async fn missing_command_reports_an_error() {
        let beeper = SystemSoundBeeper {
            label: "missing",
            program: "definitely-not-a-sound-player-xyz",
            success_args: &[],
            failure_args: &[],
        };
        let err = beeper.beep(BeepKind::Success).await.unwrap_err();
        assert!(matches!(err, BeepError::CommandFailed(_)));
    }
}
