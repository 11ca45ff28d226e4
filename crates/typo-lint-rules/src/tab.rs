//! Rule forbidding TAB characters.

use typo_lint_core::{LineMatch, LineRule};

/// Rule name for tab.
pub const NAME: &str = "tab";

/// Reports the first TAB byte on a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tab;

impl Tab {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for Tab {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids TAB characters"
    }

    fn message(&self) -> String {
        "TAB character(s)".to_string()
    }

    fn check_line(&self, line: &[u8]) -> Option<LineMatch> {
        line.iter()
            .position(|&b| b == b'\t')
            .map(|offset| LineMatch::at_offset(offset, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_column() {
        assert_eq!(Tab.check_line(b"let\tx\t= 1").map(|m| m.column), Some(4));
        assert_eq!(Tab.check_line(b"\t").map(|m| m.column), Some(1));
    }

    #[test]
    fn test_no_tab() {
        assert!(Tab.check_line(b"let x = 1").is_none());
        assert!(Tab.check_line(b"").is_none());
    }
}
