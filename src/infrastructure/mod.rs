//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the shell
//! process launcher, the platform sound mechanisms, and the desktop
//! notification backends.

pub mod beep;
pub mod notification;
pub mod process;

// Re-export adapters
pub use beep::{create_beepers, SystemSoundBeeper, TerminalBellBeeper, ToneBeeper};
pub use notification::{create_notifiers, ConsoleNotifier, DesktopNotifier};
pub use process::ShellLauncher;

use crate::application::FeedbackSignaler;
use crate::domain::AppInfo;

/// Build the feedback signaler with the platform beeper chain and the
/// desktop-then-console notifier chain.
pub fn create_signaler(info: &AppInfo) -> FeedbackSignaler {
    FeedbackSignaler::new(
        create_beepers(),
        create_notifiers(info),
        info.notification_title,
    )
}
