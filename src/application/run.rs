//! Wrapped-tool run use case

use thiserror::Error;

use crate::domain::{FailureCause, Options, RunOutcome};

use super::feedback::FeedbackSignaler;
use super::ports::{BeepKind, LaunchError, ToolLauncher};

/// Notification body for a successful run.
pub const SUCCESS_MESSAGE: &str = "Claude Code task completed successfully!";

/// Notification body for a failed run.
pub const FAILURE_MESSAGE: &str = "Claude Code task failed";

/// Errors from the run use case.
///
/// These are the only errors that propagate to the top level and decide
/// the wrapper's own exit code; feedback failures never surface here.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Launch failed: {0}")]
    Launch(#[from] LaunchError),

    #[error("{program} exited with status {code}")]
    NonZeroExit { program: String, code: i32 },

    #[error("{program} was terminated by a signal")]
    SignalTerminated { program: String },
}

impl RunError {
    /// Exit code the wrapper should report for this failure.
    ///
    /// Mirrors the child's code where one exists, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NonZeroExit { code, .. } => *code,
            Self::Launch(_) | Self::SignalTerminated { .. } => 1,
        }
    }
}

/// Callbacks for status banners around the run.
#[derive(Default)]
pub struct RunCallbacks {
    /// Called immediately before the wrapped tool is launched.
    pub on_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called after the wrapped tool exits cleanly.
    pub on_success: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called after the wrapped tool fails, with the error.
    pub on_failure: Option<Box<dyn Fn(&RunError) + Send + Sync>>,
}

/// Runs the wrapped tool once and signals the outcome.
///
/// Feedback is sequenced strictly after child termination so that the
/// beep and notification never interleave with the child's own terminal
/// I/O.
pub struct RunTask<L>
where
    L: ToolLauncher,
{
    launcher: L,
    signaler: FeedbackSignaler,
    program: String,
}

impl<L> RunTask<L>
where
    L: ToolLauncher,
{
    /// Create a new run task for `program`.
    pub fn new(launcher: L, signaler: FeedbackSignaler, program: impl Into<String>) -> Self {
        Self {
            launcher,
            signaler,
            program: program.into(),
        }
    }

    /// Launch the wrapped tool, await its termination, and signal.
    ///
    /// Returns the child's exit code on success. On failure the error
    /// carries the code to report (the child's own code for a non-zero
    /// exit, 1 when none is known).
    pub async fn execute(
        &self,
        args: &[String],
        options: Options,
        callbacks: &RunCallbacks,
    ) -> Result<i32, RunError> {
        if let Some(ref cb) = callbacks.on_start {
            cb();
        }

        // The only blocking point: await the child.
        let (outcome, launch_err) = match self.launcher.launch(args).await {
            Ok(status) => (RunOutcome::from_status(status), None),
            Err(err) => (
                RunOutcome::Failed {
                    code: 1,
                    cause: FailureCause::Launch,
                },
                Some(err),
            ),
        };

        if outcome.is_success() {
            if let Some(ref cb) = callbacks.on_success {
                cb();
            }

            if !options.silent {
                self.signaler.beep(BeepKind::Success).await;
            }
            if options.notification {
                self.signaler.notify(SUCCESS_MESSAGE, false).await;
            }

            return Ok(outcome.code());
        }

        let error = match outcome {
            RunOutcome::Failed {
                cause: FailureCause::Launch,
                ..
            } => {
                // launch_err is always present for this cause
                match launch_err {
                    Some(err) => RunError::Launch(err),
                    None => RunError::SignalTerminated {
                        program: self.program.clone(),
                    },
                }
            }
            RunOutcome::Failed {
                cause: FailureCause::NonZeroExit,
                code,
            } => RunError::NonZeroExit {
                program: self.program.clone(),
                code,
            },
            _ => RunError::SignalTerminated {
                program: self.program.clone(),
            },
        };

        if let Some(ref cb) = callbacks.on_failure {
            cb(&error);
        }

        if !options.silent {
            self.signaler.beep(BeepKind::Failure).await;
        }
        if options.notification {
            self.signaler.notify(FAILURE_MESSAGE, true).await;
        }

        Err(error)
    }
}
