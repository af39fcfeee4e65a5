//! ClaudeBeep - Claude Code wrapper with completion feedback
//!
//! This crate wraps the `claude` CLI: it forwards its arguments to the tool,
//! waits for it to finish, and then plays an audible cue and shows a desktop
//! notification so long-running tasks announce themselves.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (options, run outcome) and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (shell launcher, sound
//!   players, desktop notifications)
//! - **CLI**: Argument scanning, output formatting, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
