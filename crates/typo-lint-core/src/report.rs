//! Per-file match counting and the report cap.

use crate::exceptions::Resolution;
use crate::types::{Diagnostic, Location, TooMany, Violation};
use std::collections::BTreeMap;
use std::path::Path;

/// Number of diagnostics printed per rule and file before the notice.
pub const DEFAULT_REPORT_LIMIT: usize = 10;

/// What to do with a match after it has been counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Print the diagnostic.
    Report,
    /// Print the diagnostic, then the "too many" notice.
    ReportLast,
    /// Past the limit: count only.
    Silent,
}

/// A counter with a reporting threshold.
///
/// Counting never stops; only the admission changes once the limit is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimit {
    limit: usize,
    count: usize,
}

impl ReportLimit {
    /// Creates a counter that admits `limit` reports.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, count: 0 }
    }

    /// Counts one match and returns its admission.
    pub fn record(&mut self) -> Admission {
        self.count += 1;
        match self.count.cmp(&self.limit) {
            std::cmp::Ordering::Less => Admission::Report,
            std::cmp::Ordering::Equal => Admission::ReportLast,
            std::cmp::Ordering::Greater => Admission::Silent,
        }
    }

    /// Number of matches counted so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for ReportLimit {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_LIMIT)
    }
}

/// Collects diagnostics for one file.
///
/// Owns the per-rule counters. Every match is counted, suppressed or not;
/// the resolution only decides whether anything is printed.
#[derive(Debug)]
pub struct Reporter<'a> {
    path: &'a Path,
    resolution: &'a Resolution,
    limit: usize,
    counters: BTreeMap<String, ReportLimit>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter for one file.
    #[must_use]
    pub fn new(path: &'a Path, resolution: &'a Resolution, limit: usize) -> Self {
        Self {
            path,
            resolution,
            limit,
            counters: BTreeMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Path of the file being reported on.
    #[must_use]
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Counts a match and emits its diagnostic if admitted.
    pub fn report(&mut self, rule: &str, location: Location, message: impl Into<String>) {
        let limit = self.limit;
        let admission = self
            .counters
            .entry(rule.to_string())
            .or_insert_with(|| ReportLimit::new(limit))
            .record();

        if self.resolution.is_suppressed(rule) {
            return;
        }

        match admission {
            Admission::Report => {
                self.diagnostics
                    .push(Diagnostic::Violation(Violation::new(rule, location, message)));
            }
            Admission::ReportLast => {
                self.diagnostics
                    .push(Diagnostic::Violation(Violation::new(rule, location, message)));
                self.diagnostics.push(Diagnostic::TooMany(TooMany {
                    rule: rule.to_string(),
                    file: self.path.to_path_buf(),
                }));
            }
            Admission::Silent => {}
        }
    }

    /// Number of matches counted for `rule`, suppressed ones included.
    #[must_use]
    pub fn count(&self, rule: &str) -> usize {
        self.counters.get(rule).map_or(0, ReportLimit::count)
    }

    /// Finishes the file and returns its report.
    #[must_use]
    pub fn finish(self) -> FileReport {
        FileReport {
            diagnostics: self.diagnostics,
            counts: self
                .counters
                .into_iter()
                .map(|(rule, counter)| (rule, counter.count()))
                .collect(),
        }
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Emitted diagnostics in order.
    pub diagnostics: Vec<Diagnostic>,
    /// Match counts per rule, suppressed matches included.
    pub counts: BTreeMap<String, usize>,
}

impl FileReport {
    /// Number of matches counted for `rule`.
    #[must_use]
    pub fn count(&self, rule: &str) -> usize {
        self.counts.get(rule).copied().unwrap_or(0)
    }

    /// Reported violations for `rule`.
    pub fn violations_for<'r>(&'r self, rule: &'r str) -> impl Iterator<Item = &'r Violation> {
        self.diagnostics
            .iter()
            .filter_map(Diagnostic::as_violation)
            .filter(move |v| v.rule == rule)
    }
}
