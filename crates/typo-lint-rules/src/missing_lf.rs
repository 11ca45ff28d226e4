//! Rule requiring a final linefeed.

use typo_lint_core::{FileMatch, FileRule, Lines};

/// Rule name for missing-lf.
pub const NAME: &str = "missing-lf";

/// Reports a file whose last line is not terminated by LF.
///
/// Reported on that last line, just past its final byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingLf;

impl MissingLf {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileRule for MissingLf {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires a linefeed at the end of the file"
    }

    fn message(&self) -> String {
        "missing linefeed at EOF".to_string()
    }

    fn check_file(&self, lines: &Lines<'_>) -> Option<FileMatch> {
        if lines.ends_with_newline() {
            return None;
        }
        Some(FileMatch::new(lines.line_count(), lines.last().len() + 1))
    }
}
