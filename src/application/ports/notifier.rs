//! Desktop notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    ShowFailed(String),
}

/// How prominently the notification should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationUrgency {
    /// Task completed.
    Normal,
    /// Task failed.
    Critical,
}

impl NotificationUrgency {
    /// Freedesktop icon name for this urgency.
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Normal => "dialog-ok",
            Self::Critical => "dialog-error",
        }
    }
}

/// Port for desktop notifications.
///
/// Implementations must not block on user interaction; the notification
/// auto-dismisses after the timeout carried in [`crate::domain::AppInfo`].
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    async fn notify(
        &self,
        title: &str,
        message: &str,
        urgency: NotificationUrgency,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        urgency: NotificationUrgency,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message, urgency).await
    }
}
