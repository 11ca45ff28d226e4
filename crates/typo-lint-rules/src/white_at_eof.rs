//! Rule forbidding blank lines at the end of a file.

use typo_lint_core::{FileMatch, FileRule, Lines};

/// Rule name for white-at-eof.
pub const NAME: &str = "white-at-eof";

/// Reports an empty line just before the end of the file.
///
/// A file without a final linefeed is judged as if it had one, so its
/// unterminated last line is the one inspected. The empty file is not
/// reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteAtEof;

impl WhiteAtEof {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileRule for WhiteAtEof {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids empty lines at the end of the file"
    }

    fn message(&self) -> String {
        "empty line(s) at EOF".to_string()
    }

    fn check_file(&self, lines: &Lines<'_>) -> Option<FileMatch> {
        match lines.line_before_last() {
            Some((line, content)) if content.is_empty() => Some(FileMatch::new(line, 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &[u8]) -> Option<FileMatch> {
        WhiteAtEof.check_file(&Lines::new(content))
    }

    #[test]
    fn test_trailing_blank_line() {
        assert_eq!(check(b"x\n\n"), Some(FileMatch::new(2, 1)));
        assert_eq!(check(b"x\n\n\n"), Some(FileMatch::new(3, 1)));
    }

    #[test]
    fn test_empty_file_is_quiet() {
        assert!(check(b"").is_none());
    }

    #[test]
    fn test_lone_linefeed_is_reported() {
        assert_eq!(check(b"\n"), Some(FileMatch::new(1, 1)));
    }

    #[test]
    fn test_clean_files() {
        assert!(check(b"x\n").is_none());
        assert!(check(b"x").is_none());
        assert!(check(b"a\n\nb\n").is_none());
    }

    #[test]
    fn test_missing_lf_shifts_the_window() {
        assert_eq!(check(b"x\n\ny"), None);
        assert_eq!(check(b"x\n\n\ny"), None);
    }
}
