//! Synthesized tone beeper
//!
//! Generates and plays short sine-tone sequences: a bright ascending
//! pattern for success, a short low pattern for failure.

use std::time::Duration;

use async_trait::async_trait;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::application::ports::{BeepError, BeepKind, Beeper};

/// Beeper that synthesizes tones through the default audio output.
pub struct ToneBeeper;

impl ToneBeeper {
    /// Create a new tone beeper
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToneBeeper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Beeper for ToneBeeper {
    fn name(&self) -> &'static str {
        "tone"
    }

    async fn beep(&self, kind: BeepKind) -> Result<(), BeepError> {
        // Run audio playback in a blocking thread to avoid stalling the runtime
        tokio::task::spawn_blocking(move || play_kind_sync(kind))
            .await
            .map_err(|e| BeepError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// Create a gentle tone with a fade-in for a smoother sound
fn gentle_tone(freq: f32, duration_ms: u64, amplitude: f32) -> impl Source<Item = f32> + Send {
    let fade_ms = (duration_ms / 5).min(30); // 20% fade or max 30ms
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(fade_ms))
        .amplify(amplitude)
}

/// Play a cue synchronously (called from spawn_blocking)
fn play_kind_sync(kind: BeepKind) -> Result<(), BeepError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| BeepError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| BeepError::PlaybackFailed(e.to_string()))?;

    // Softer amplitude for a pleasant cue
    const AMP: f32 = 0.3;

    match kind {
        BeepKind::Success => {
            // Ascending major triad: C5 -> E5 -> G5
            sink.append(gentle_tone(523.0, 100, AMP));
            sink.append(gentle_tone(659.0, 100, AMP));
            sink.append(gentle_tone(784.0, 160, AMP));
        }
        BeepKind::Failure => {
            // Two short low tones: G4 -> E4
            sink.append(gentle_tone(392.0, 80, AMP));
            sink.append(gentle_tone(330.0, 120, AMP));
        }
    }

    // Wait for playback to complete
    sink.sleep_until_end();

    Ok(())
}
