//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationUrgency, Notifier};

/// Cross-platform notifier using notify-rust.
///
/// The notification carries no sound (audio is handled by the beeper
/// chain) and auto-dismisses after the configured timeout.
pub struct DesktopNotifier {
    /// Application name for notifications
    app_name: String,
    /// Auto-dismiss timeout in milliseconds
    timeout_ms: u32,
}

impl DesktopNotifier {
    /// Create a new desktop notifier
    pub fn new(app_name: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            app_name: app_name.into(),
            timeout_ms,
        }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        urgency: NotificationUrgency,
    ) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();
        let icon_name = urgency.icon_name().to_string();
        let timeout_ms = self.timeout_ms;

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .icon(&icon_name)
                .timeout(notify_rust::Timeout::Milliseconds(timeout_ms))
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::ShowFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::ShowFailed(format!("Task join error: {}", e)))?
    }
}
