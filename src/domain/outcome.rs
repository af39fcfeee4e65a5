//! Run outcome classification

/// Why a run is considered failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// The wrapped program could not be started.
    Launch,
    /// The wrapped program exited with a non-zero status.
    NonZeroExit,
    /// The wrapped program was killed by a signal and reported no code.
    SignalTerminated,
}

/// Outcome of a single wrapped-tool run.
///
/// Produced by the runner after the child has fully terminated and
/// consumed by the feedback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The wrapped program exited cleanly.
    Completed {
        /// Exit code reported by the child.
        code: i32,
    },
    /// The wrapped program failed to start, exited non-zero, or was
    /// killed by a signal.
    Failed {
        /// Exit code to surface. Defaults to 1 when the child reported none.
        code: i32,
        cause: FailureCause,
    },
}

impl RunOutcome {
    /// Classify a termination status as reported by the launcher.
    ///
    /// `Some(code)` is a normal exit with that code; `None` means the
    /// child was killed by a signal before reporting one.
    pub fn from_status(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Completed { code: 0 },
            Some(code) => Self::Failed {
                code,
                cause: FailureCause::NonZeroExit,
            },
            None => Self::Failed {
                code: 1,
                cause: FailureCause::SignalTerminated,
            },
        }
    }

    /// Exit code carried by this outcome.
    pub fn code(&self) -> i32 {
        match self {
            Self::Completed { code } | Self::Failed { code, .. } => *code,
        }
    }

    /// Whether the run finished successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        let outcome = RunOutcome::from_status(Some(0));
        assert!(outcome.is_success());
        assert_eq!(outcome.code(), 0);
    }

    #[test]
    fn nonzero_exit_carries_the_exact_code() {
        let outcome = RunOutcome::from_status(Some(7));
        assert!(!outcome.is_success());
        assert_eq!(outcome.code(), 7);
        assert_eq!(
            outcome,
            RunOutcome::Failed {
                code: 7,
                cause: FailureCause::NonZeroExit
            }
        );
    }

    #[test]
    fn signal_termination_defaults_to_one() {
        let outcome = RunOutcome::from_status(None);
        assert_eq!(
            outcome,
            RunOutcome::Failed {
                code: 1,
                cause: FailureCause::SignalTerminated
            }
        );
    }
}
