//! Application layer - Use cases and port interfaces
//!
//! Contains the run orchestration, the never-failing feedback facade,
//! and trait definitions for external system interactions.

pub mod feedback;
pub mod ports;
pub mod run;

// Re-export use cases
pub use feedback::FeedbackSignaler;
pub use run::{RunCallbacks, RunError, RunTask};
