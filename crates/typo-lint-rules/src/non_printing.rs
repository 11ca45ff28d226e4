//! Rule forbidding non-printing bytes.

use typo_lint_core::{LineMatch, LineRule};

/// Rule name for non-printing.
pub const NAME: &str = "non-printing";

/// Reports the first byte that is neither TAB, LF, space nor in `33..=126`.
///
/// Bytes `>= 128` count as non-printing too, so UTF-8 text matches both
/// this rule and `non-ascii`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPrinting;

impl NonPrinting {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_printing(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b' ' | 33..=126)
}

impl LineRule for NonPrinting {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids control characters and other non-printing bytes"
    }

    fn message(&self) -> String {
        "non-printing character(s)".to_string()
    }

    fn check_line(&self, line: &[u8]) -> Option<LineMatch> {
        line.iter()
            .position(|&b| !is_printing(b))
            .map(|offset| LineMatch::at_offset(offset, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters() {
        assert_eq!(NonPrinting.check_line(b"a\rb").map(|m| m.column), Some(2));
        assert_eq!(NonPrinting.check_line(b"\x0c").map(|m| m.column), Some(1));
        assert_eq!(NonPrinting.check_line(b"ab\x7f").map(|m| m.column), Some(3));
    }

    #[test]
    fn test_high_bytes() {
        assert_eq!(NonPrinting.check_line("é".as_bytes()).map(|m| m.column), Some(1));
    }

    #[test]
    fn test_tab_and_space_are_printing() {
        assert!(NonPrinting.check_line(b"\tlet x = ~-1 (* ok *)").is_none());
    }
}
