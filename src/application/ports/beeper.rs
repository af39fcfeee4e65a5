//! Audible cue port
//!
//! Provides the completion beep played after the wrapped tool exits.

use async_trait::async_trait;
use thiserror::Error;

/// Which cue to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeepKind {
    /// Task finished cleanly: brighter, longer pattern.
    Success,
    /// Task failed: shorter, lower pattern.
    Failure,
}

/// Errors that can occur while producing the cue.
#[derive(Debug, Error)]
pub enum BeepError {
    /// An external sound command could not run or exited non-zero.
    #[error("Sound command failed: {0}")]
    CommandFailed(String),

    /// Tone playback through the audio stack failed.
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available.
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),
}

/// Port trait for one audible-cue mechanism.
///
/// Implementations may fail; the feedback facade walks an ordered chain
/// of them and the final link (the terminal bell) always succeeds.
#[async_trait]
pub trait Beeper: Send + Sync {
    /// Name used when reporting which mechanism was attempted.
    fn name(&self) -> &'static str;

    /// Play the cue for `kind`.
    async fn beep(&self, kind: BeepKind) -> Result<(), BeepError>;
}
