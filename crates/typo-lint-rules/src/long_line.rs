//! Rules limiting line length.
//!
//! Two independent thresholds: `long-line` at 80 bytes, which the built-in
//! path table relaxes for generated documentation, and `very-long-line` at
//! 132 bytes, which always applies.

use typo_lint_core::{LineMatch, LineRule};

/// Rule name for long-line.
pub const LONG_LINE: &str = "long-line";

/// Rule name for very-long-line.
pub const VERY_LONG_LINE: &str = "very-long-line";

/// Reports lines longer than a byte limit, at the first column past it.
#[derive(Debug, Clone, Copy)]
pub struct LineLength {
    name: &'static str,
    limit: usize,
}

impl LineLength {
    /// The 80-column rule.
    #[must_use]
    pub fn long() -> Self {
        Self {
            name: LONG_LINE,
            limit: 80,
        }
    }

    /// The 132-column rule.
    #[must_use]
    pub fn very_long() -> Self {
        Self {
            name: VERY_LONG_LINE,
            limit: 132,
        }
    }
}

impl LineRule for LineLength {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        if self.name == VERY_LONG_LINE {
            "Forbids lines over 132 columns"
        } else {
            "Forbids lines over 80 columns"
        }
    }

    fn message(&self) -> String {
        format!("line is over {} columns", self.limit)
    }

    fn check_line(&self, line: &[u8]) -> Option<LineMatch> {
        (line.len() > self.limit)
            .then(|| LineMatch::at_offset(self.limit, line.len() - self.limit))
    }
}
