//! Invocation options and static application metadata

/// Per-invocation options parsed from the command line.
///
/// Constructed once by the argument scanner and treated as immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Suppress the audible cue.
    pub silent: bool,
    /// Show a desktop notification when the run finishes.
    pub notification: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            silent: false,
            notification: true,
        }
    }
}

/// Static application metadata, built once at startup and passed down.
///
/// Holding these in a value object keeps the adapters free of module-level
/// state and makes the notification title and wrapped program name
/// injectable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    /// Name of this wrapper binary.
    pub name: &'static str,
    /// Program the wrapper launches, resolved via `PATH` by the shell.
    pub wrapped_program: &'static str,
    /// Wrapper version.
    pub version: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Title used for desktop notifications.
    pub notification_title: &'static str,
    /// Auto-dismiss timeout for desktop notifications, in milliseconds.
    pub notification_timeout_ms: u32,
}

impl AppInfo {
    /// Metadata for the `claude-beep` binary.
    pub const fn new() -> Self {
        Self {
            name: "claude-beep",
            wrapped_program: "claude",
            version: env!("CARGO_PKG_VERSION"),
            description: "Claude Code wrapper with completion beep",
            notification_title: "Claude Code",
            notification_timeout_ms: 5000,
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_audible_with_notification() {
        let options = Options::default();
        assert!(!options.silent);
        assert!(options.notification);
    }

    #[test]
    fn app_info_names_the_wrapped_program() {
        let info = AppInfo::new();
        assert_eq!(info.name, "claude-beep");
        assert_eq!(info.wrapped_program, "claude");
        assert_eq!(info.notification_title, "Claude Code");
    }

    #[test]
    fn app_info_version_matches_package() {
        assert_eq!(AppInfo::new().version, env!("CARGO_PKG_VERSION"));
    }
}
