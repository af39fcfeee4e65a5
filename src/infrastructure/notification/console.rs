//! Console fallback notifier
//!
//! Used when no desktop notification service is reachable; prints the
//! message in a recognizable "would show" format instead.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationUrgency, Notifier};

/// Notifier that prints to the console instead of the desktop.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier
    pub fn new() -> Self {
        Self
    }

    /// Line printed in place of the notification.
    fn render(message: &str) -> String {
        format!("(Notification would show: {})", message)
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(
        &self,
        _title: &str,
        message: &str,
        _urgency: NotificationUrgency,
    ) -> Result<(), NotificationError> {
        println!("{}", Self::render(message));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_the_original_text() {
        let line = ConsoleNotifier::render("Claude Code task failed");
        assert_eq!(line, "(Notification would show: Claude Code task failed)");
    }

    #[tokio::test]
    async fn console_notifier_never_fails() {
        let notifier = ConsoleNotifier::new();
        let result = notifier
            .notify("Claude Code", "done", NotificationUrgency::Normal)
            .await;
        assert!(result.is_ok());
    }
}
