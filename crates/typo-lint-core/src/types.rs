//! Core types for lint diagnostics and results.

use miette::{Diagnostic as MietteDiagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Source location of a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as it was given or discovered.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A single rule match that was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule name (e.g., "white-at-eol").
    pub rule: String,
    /// Where the match starts.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(rule: impl Into<String>, location: Location, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            location,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}.{}: [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.rule,
            self.message
        )
    }
}

/// Notice emitted once when a rule reaches its report limit in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooMany {
    /// Rule whose further matches are no longer reported.
    pub rule: String,
    /// File the notice applies to.
    pub file: PathBuf,
}

impl std::fmt::Display for TooMany {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: too many [{}] in this file; others will not be reported",
            self.file.display(),
            self.rule
        )
    }
}

/// One line of lint output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A reported rule match.
    Violation(Violation),
    /// The report limit for a rule was reached.
    TooMany(TooMany),
}

impl Diagnostic {
    /// Returns the rule this diagnostic belongs to.
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            Self::Violation(v) => &v.rule,
            Self::TooMany(t) => &t.rule,
        }
    }

    /// Returns the violation, if this is one.
    #[must_use]
    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(v) => Some(v),
            Self::TooMany(_) => None,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Violation(v) => v.fmt(f),
            Self::TooMany(t) => t.fmt(f),
        }
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("[{rule}] {message}")]
#[diagnostic(code(typo_lint::violation))]
pub struct ViolationDiagnostic {
    rule: String,
    message: String,
    #[label("{rule}")]
    span: SourceSpan,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            rule: v.rule.clone(),
            message: v.message.clone(),
            span: SourceSpan::from((v.location.offset, v.location.length)),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// Diagnostics in output order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of candidate files skipped as exempt.
    pub files_skipped: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over reported violations, skipping notices.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.diagnostics.iter().filter_map(Diagnostic::as_violation)
    }

    /// Returns true if any violation was reported.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.violations().next().is_some()
    }

    /// Counts reported violations per rule.
    #[must_use]
    pub fn count_by_rule(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for v in self.violations() {
            *counts.entry(v.rule.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Prints every diagnostic to stdout, one per line.
    pub fn print_report(&self) {
        for diagnostic in &self.diagnostics {
            println!("{diagnostic}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(rule: &str, line: usize) -> Violation {
        Violation::new(
            rule,
            Location::new(PathBuf::from("stdlib/list.ml"), line, 5),
            "TAB character(s)",
        )
    }

    #[test]
    fn violation_display_uses_line_dot_column() {
        let v = make_violation("tab", 42);
        assert_eq!(v.to_string(), "stdlib/list.ml:42.5: [tab] TAB character(s)");
    }

    #[test]
    fn too_many_display_names_rule() {
        let t = TooMany {
            rule: "tab".to_string(),
            file: PathBuf::from("stdlib/list.ml"),
        };
        assert_eq!(
            t.to_string(),
            "stdlib/list.ml: too many [tab] in this file; others will not be reported"
        );
    }

    #[test]
    fn violations_skip_notices() {
        let mut result = LintResult::new();
        result
            .diagnostics
            .push(Diagnostic::Violation(make_violation("tab", 1)));
        result.diagnostics.push(Diagnostic::TooMany(TooMany {
            rule: "tab".to_string(),
            file: PathBuf::from("stdlib/list.ml"),
        }));

        assert_eq!(result.violations().count(), 1);
        assert!(result.has_violations());
    }

    #[test]
    fn count_by_rule_groups_violations() {
        let mut result = LintResult::new();
        for (rule, line) in [("tab", 1), ("tab", 2), ("long-line", 3)] {
            result
                .diagnostics
                .push(Diagnostic::Violation(make_violation(rule, line)));
        }

        let counts = result.count_by_rule();
        assert_eq!(counts.get("tab"), Some(&2));
        assert_eq!(counts.get("long-line"), Some(&1));
    }

    #[test]
    fn miette_diagnostic_keeps_span() {
        let v = Violation::new(
            "tab",
            Location::new(PathBuf::from("a.ml"), 2, 3).with_span(12, 1),
            "TAB character(s)",
        );
        let diag = ViolationDiagnostic::from(&v);
        assert_eq!(diag.to_string(), "[tab] TAB character(s)");
        assert_eq!(diag.span.offset(), 12);
        assert_eq!(diag.span.len(), 1);
    }
}
