//! Main app runner

use std::process::ExitCode;

use crate::application::{RunCallbacks, RunError, RunTask};
use crate::domain::{AppInfo, Options};
use crate::infrastructure::{create_signaler, ShellLauncher};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Wire the adapters together and run the wrapped tool once.
///
/// The wrapper's exit code mirrors the child's wherever one exists.
pub async fn run(info: AppInfo, options: Options, passthrough: Vec<String>) -> ExitCode {
    let presenter = Presenter::new();

    let launcher = ShellLauncher::new(info.wrapped_program);
    let signaler = create_signaler(&info);
    let task = RunTask::new(launcher, signaler, info.wrapped_program);

    let callbacks = RunCallbacks {
        on_start: Some(Box::new(move || {
            presenter.info("Starting Claude Code...");
        })),
        on_success: Some(Box::new(move || {
            presenter.success("Claude Code task completed!");
        })),
        on_failure: Some(Box::new(move |error: &RunError| {
            presenter.error("Claude Code encountered an error");
            if let RunError::Launch(cause) = error {
                presenter.error(&cause.to_string());
            }
        })),
    };

    match task.execute(&passthrough, options, &callbacks).await {
        Ok(code) => to_exit_code(code),
        Err(error) => to_exit_code(error.exit_code()),
    }
}

/// Clamp a child exit code into the `u8` range this process can report.
///
/// Codes outside the range collapse to the generic error code.
fn clamp_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(EXIT_ERROR)
}

fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(clamp_code(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_codes_convert_directly() {
        assert_eq!(clamp_code(0), 0);
        assert_eq!(clamp_code(7), 7);
        assert_eq!(clamp_code(130), 130);
    }

    #[test]
    fn out_of_range_codes_collapse_to_error() {
        assert_eq!(clamp_code(-1), EXIT_ERROR);
        assert_eq!(clamp_code(512), EXIT_ERROR);
    }
}
