//! Rule forbidding trailing whitespace.

use typo_lint_core::{LineMatch, LineRule};

/// Rule name for white-at-eol.
pub const NAME: &str = "white-at-eol";

/// Reports the trailing run of spaces and TABs on a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteAtEol;

impl WhiteAtEol {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for WhiteAtEol {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids spaces and TABs at the end of a line"
    }

    fn message(&self) -> String {
        "whitespace at end of line".to_string()
    }

    fn check_line(&self, line: &[u8]) -> Option<LineMatch> {
        let run = line
            .iter()
            .rev()
            .take_while(|&&b| b == b' ' || b == b'\t')
            .count();
        (run > 0).then(|| LineMatch::at_offset(line.len() - run, run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_run() {
        let found = WhiteAtEol.check_line(b"let x = 1 \t ").expect("match");
        assert_eq!(found.column, 10);
        assert_eq!(found.length, 3);
    }

    #[test]
    fn test_blank_line_of_spaces() {
        assert_eq!(WhiteAtEol.check_line(b"   ").map(|m| m.column), Some(1));
    }

    #[test]
    fn test_clean_lines() {
        assert!(WhiteAtEol.check_line(b"let x = 1").is_none());
        assert!(WhiteAtEol.check_line(b"").is_none());
        assert!(WhiteAtEol.check_line(b"a b\r").is_none());
    }
}
