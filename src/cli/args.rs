//! Argument scanning
//!
//! The wrapper's surface is deliberately permissive: only its own two
//! flags are recognized, by exact token match, and every other token is
//! forwarded to the wrapped tool in its original position. There is no
//! usage output at this layer, so `--help` and `--version` reach the
//! wrapped tool instead of being intercepted.

use crate::domain::Options;

/// Result of scanning the argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// The wrapper's own options.
    pub options: Options,
    /// Everything else, order preserved, forwarded verbatim.
    pub passthrough: Vec<String>,
}

/// Scan the argument vector (without the program name).
///
/// Recognized tokens: `-s`/`--silent` and `-n`/`--no-notification`.
/// Repeated flags are idempotent; flags may appear anywhere.
pub fn parse<I, S>(tokens: I) -> ParsedInvocation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut passthrough = Vec::new();

    for token in tokens {
        let token = token.into();
        match token.as_str() {
            "-s" | "--silent" => options.silent = true,
            "-n" | "--no-notification" => options.notification = false,
            _ => passthrough.push(token),
        }
    }

    ParsedInvocation {
        options,
        passthrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_slice(tokens: &[&str]) -> ParsedInvocation {
        parse(tokens.iter().copied())
    }

    #[test]
    fn empty_input_yields_defaults_and_empty_passthrough() {
        let parsed = parse_slice(&[]);
        assert!(!parsed.options.silent);
        assert!(parsed.options.notification);
        assert!(parsed.passthrough.is_empty());
    }

    #[test]
    fn short_flags_with_positional() {
        let parsed = parse_slice(&["-s", "-n", "x"]);
        assert!(parsed.options.silent);
        assert!(!parsed.options.notification);
        assert_eq!(parsed.passthrough, vec!["x"]);
    }

    #[test]
    fn long_flags_are_recognized() {
        let parsed = parse_slice(&["--silent", "--no-notification"]);
        assert!(parsed.options.silent);
        assert!(!parsed.options.notification);
        assert!(parsed.passthrough.is_empty());
    }

    #[test]
    fn unknown_flags_and_values_pass_through_in_order() {
        let parsed = parse_slice(&["--resume", "abc", "-s", "-x", "--verbose"]);
        assert!(parsed.options.silent);
        assert_eq!(parsed.passthrough, vec!["--resume", "abc", "-x", "--verbose"]);
    }

    #[test]
    fn flags_after_positionals_are_still_recognized() {
        let parsed = parse_slice(&["do", "something", "-n"]);
        assert!(!parsed.options.notification);
        assert_eq!(parsed.passthrough, vec!["do", "something"]);
    }

    #[test]
    fn help_is_not_intercepted() {
        let parsed = parse_slice(&["--help"]);
        assert_eq!(parsed.passthrough, vec!["--help"]);
    }

    #[test]
    fn version_is_not_intercepted() {
        let parsed = parse_slice(&["--version"]);
        assert_eq!(parsed.passthrough, vec!["--version"]);
    }

    #[test]
    fn repeated_flags_are_idempotent() {
        let parsed = parse_slice(&["-s", "--silent", "-s"]);
        assert!(parsed.options.silent);
        assert!(parsed.passthrough.is_empty());
    }

    #[test]
    fn recognized_tokens_never_reach_the_passthrough() {
        let parsed = parse_slice(&["a", "-s", "b", "-n", "c"]);
        assert_eq!(parsed.passthrough, vec!["a", "b", "c"]);
    }

    #[test]
    fn lookalike_tokens_are_opaque() {
        // Only exact matches count; these belong to the wrapped tool.
        let parsed = parse_slice(&["-sn", "--silent=true", "--no-notifications"]);
        assert!(!parsed.options.silent);
        assert!(parsed.options.notification);
        assert_eq!(
            parsed.passthrough,
            vec!["-sn", "--silent=true", "--no-notifications"]
        );
    }
}
