//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod beeper;
pub mod launcher;
pub mod notifier;

// Re-export common types
pub use beeper::{BeepError, BeepKind, Beeper};
pub use launcher::{LaunchError, ToolLauncher};
pub use notifier::{NotificationError, NotificationUrgency, Notifier};
