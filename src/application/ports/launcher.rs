//! Wrapped-tool launcher port

use async_trait::async_trait;
use thiserror::Error;

/// Errors starting the wrapped program.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The program (or the launching shell) was not found on `PATH`.
    #[error("{program} not found")]
    NotFound { program: String },

    /// The process could not be spawned for another reason.
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Port for launching the wrapped tool and awaiting its termination.
///
/// Returns `Some(code)` when the child exited with a code, `None` when it
/// was killed by a signal. The child's stdio stays connected to the
/// invoking terminal; awaiting termination is the caller's only blocking
/// point.
#[async_trait]
pub trait ToolLauncher: Send + Sync {
    async fn launch(&self, args: &[String]) -> Result<Option<i32>, LaunchError>;
}
