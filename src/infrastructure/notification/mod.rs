//! Notification infrastructure module
//!
//! Desktop notifications via notify-rust, with a console fallback that
//! prints the message when no notification service is reachable.

mod console;
mod desktop;

pub use console::ConsoleNotifier;
pub use desktop::DesktopNotifier;

use crate::application::ports::Notifier;
use crate::domain::AppInfo;

/// Build the notifier fallback chain: native desktop first, console last.
pub fn create_notifiers(info: &AppInfo) -> Vec<Box<dyn Notifier>> {
    vec![
        Box::new(DesktopNotifier::new(info.name, info.notification_timeout_ms)),
        Box::new(ConsoleNotifier::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_ends_in_the_console_fallback() {
        let chain = create_notifiers(&AppInfo::new());
        assert_eq!(chain.len(), 2);
    }
}
