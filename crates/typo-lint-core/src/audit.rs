//! Unused exception audit.
//!
//! An exception declared in a file's attribute string that never matched
//! anything in the file is stale metadata and gets reported. Global
//! disables and built-in path exemptions are run-level policy and are
//! never audited.

use crate::exceptions::Resolution;
use crate::report::Reporter;
use crate::types::Location;

/// Rule name used for unused exception reports.
pub const UNUSED_PROP: &str = "unused-prop";

/// Reports every declared exception whose rule counted zero matches.
///
/// Reports go through the reporter, so `unused-prop` is itself counted,
/// capped and suppressible.
pub fn audit_unused(
    resolution: &Resolution,
    reporter: &mut Reporter<'_>,
    attribute: &str,
    line: usize,
) {
    let unused: Vec<&String> = resolution
        .declared
        .iter()
        .filter(|rule| rule.as_str() != UNUSED_PROP && reporter.count(rule) == 0)
        .collect();

    for rule in unused {
        let location = Location::new(reporter.path().to_path_buf(), line, 1);
        reporter.report(
            UNUSED_PROP,
            location,
            format!("unused [{rule}] in {attribute} attribute"),
        );
    }
}
