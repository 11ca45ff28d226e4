//! Rule traits for defining typographic checks.

use crate::utils::lines::Lines;

/// Position of a match inside a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// Column of the first matching byte (1-indexed).
    pub column: usize,
    /// Number of bytes covered by the match.
    pub length: usize,
}

impl LineMatch {
    /// Creates a match from a 0-indexed byte offset within the line.
    #[must_use]
    pub fn at_offset(offset: usize, length: usize) -> Self {
        Self {
            column: offset + 1,
            length,
        }
    }
}

/// A per-line rule.
///
/// Every line of a file is handed to every line rule, so detectors must be
/// independent: a match from one rule never prevents another from running.
///
/// # Example
///
/// ```ignore
/// use typo_lint_core::{LineMatch, LineRule};
///
/// pub struct NoFormFeed;
///
/// impl LineRule for NoFormFeed {
///     fn name(&self) -> &'static str { "form-feed" }
///     fn message(&self) -> String { "form feed character".to_string() }
///
///     fn check_line(&self, line: &[u8]) -> Option<LineMatch> {
///         line.iter()
///             .position(|&b| b == 0x0c)
///             .map(|offset| LineMatch::at_offset(offset, 1))
///     }
/// }
/// ```
pub trait LineRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "white-at-eol").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the message printed for every reported match.
    fn message(&self) -> String;

    /// Checks one line (without its terminator).
    fn check_line(&self, line: &[u8]) -> Option<LineMatch>;
}

/// Type alias for boxed `LineRule` trait objects.
pub type LineRuleBox = Box<dyn LineRule>;

/// Position of a whole-file match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMatch {
    /// Line the match is attributed to (1-indexed).
    pub line: usize,
    /// Column the match is attributed to (1-indexed).
    pub column: usize,
}

impl FileMatch {
    /// Creates a new file-level match.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A whole-file rule such as end-of-file or header checks.
pub trait FileRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "missing-lf").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the message printed when this rule matches.
    fn message(&self) -> String;

    /// Checks the file and returns at most one match.
    fn check_file(&self, lines: &Lines<'_>) -> Option<FileMatch>;
}

/// Type alias for boxed `FileRule` trait objects.
pub type FileRuleBox = Box<dyn FileRule>;
