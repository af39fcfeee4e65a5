//! Completion feedback facade
//!
//! Wraps the beeper and notifier chains behind methods that never fail:
//! feedback is cosmetic and must not be able to change the run's outcome.

use super::ports::{BeepKind, Beeper, NotificationUrgency, Notifier};

/// Plays the completion cue and shows the desktop notification.
///
/// Both capabilities hold an ordered fallback chain. A chain step is only
/// tried after the previous one reported an error; the chains built by
/// [`crate::infrastructure::create_signaler`] end in primitives that
/// cannot fail (terminal bell, console print), so from the caller's
/// perspective `beep` and `notify` always succeed.
pub struct FeedbackSignaler {
    beepers: Vec<Box<dyn Beeper>>,
    notifiers: Vec<Box<dyn Notifier>>,
    title: String,
}

impl FeedbackSignaler {
    /// Create a signaler from ordered fallback chains.
    pub fn new(
        beepers: Vec<Box<dyn Beeper>>,
        notifiers: Vec<Box<dyn Notifier>>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            beepers,
            notifiers,
            title: title.into(),
        }
    }

    /// Play the audible cue for `kind`.
    ///
    /// Walks the beeper chain in order, stopping at the first mechanism
    /// that succeeds. Failures are swallowed; the chain tail is expected
    /// to be infallible.
    pub async fn beep(&self, kind: BeepKind) {
        for beeper in &self.beepers {
            if beeper.beep(kind).await.is_ok() {
                return;
            }
        }
    }

    /// Show a desktop notification with the configured title.
    ///
    /// Walks the notifier chain in order; the console fallback at the
    /// tail prints the message instead of raising.
    pub async fn notify(&self, message: &str, is_error: bool) {
        let urgency = if is_error {
            NotificationUrgency::Critical
        } else {
            NotificationUrgency::Normal
        };

        for notifier in &self.notifiers {
            if notifier.notify(&self.title, message, urgency).await.is_ok() {
                return;
            }
        }
    }
}
