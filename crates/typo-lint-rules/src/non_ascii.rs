//! Rule forbidding bytes outside 7-bit ASCII.

use typo_lint_core::{LineMatch, LineRule};

/// Rule name for non-ascii.
pub const NAME: &str = "non-ascii";

/// Reports the first byte `>= 128` on a line.
///
/// Bytes are classified one at a time; a multi-byte UTF-8 sequence is
/// reported at its lead byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonAscii;

impl NonAscii {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for NonAscii {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids bytes outside 7-bit ASCII"
    }

    fn message(&self) -> String {
        "non-ASCII character(s)".to_string()
    }

    fn check_line(&self, line: &[u8]) -> Option<LineMatch> {
        let start = line.iter().position(|b| !b.is_ascii())?;
        let run = line[start..].iter().take_while(|b| !b.is_ascii()).count();
        Some(LineMatch::at_offset(start, run))
    }
}
