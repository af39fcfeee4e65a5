//! Terminal bell beeper
//!
//! The guaranteed-success tail of every beeper chain: writes the BEL
//! control character to stdout.

use async_trait::async_trait;
use std::io::Write;

use crate::application::ports::{BeepError, BeepKind, Beeper};

/// ASCII BEL.
const BELL: &[u8] = b"\x07";

/// Beeper that rings the terminal bell.
pub struct TerminalBellBeeper;

impl TerminalBellBeeper {
    /// Create a new terminal bell beeper
    pub fn new() -> Self {
        Self
    }

    /// Write the bell character to `out`.
    fn ring<W: Write>(out: &mut W) -> std::io::Result<()> {
        out.write_all(BELL)?;
        out.flush()
    }
}

impl Default for TerminalBellBeeper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Beeper for TerminalBellBeeper {
    fn name(&self) -> &'static str {
        "bell"
    }

    async fn beep(&self, _kind: BeepKind) -> Result<(), BeepError> {
        // Last resort: even a failed write returns Ok so the chain ends here.
        let _ = Self::ring(&mut std::io::stdout());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_emits_exactly_the_bell_character() {
        let mut out = Vec::new();
        TerminalBellBeeper::ring(&mut out).unwrap();
        assert_eq!(out, b"\x07");
    }

    #[tokio::test]
    async fn bell_never_fails() {
        let bell = TerminalBellBeeper::new();
        assert!(bell.beep(BeepKind::Success).await.is_ok());
        assert!(bell.beep(BeepKind::Failure).await.is_ok());
    }
}
