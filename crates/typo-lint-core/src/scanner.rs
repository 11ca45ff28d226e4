//! Line scanner.

use crate::report::Reporter;
use crate::rule::LineRuleBox;
use crate::types::Location;
use crate::utils::lines::Lines;

/// Runs every line rule over every line, in rule order within a line.
///
/// The synthetic empty record at the end of the file is scanned like any
/// other line; no line rule matches an empty line.
pub fn scan_lines(lines: &Lines<'_>, rules: &[LineRuleBox], reporter: &mut Reporter<'_>) {
    let path = reporter.path().to_path_buf();

    for (number, line) in lines.iter() {
        let line_start = lines.offset(number);
        for rule in rules {
            if let Some(found) = rule.check_line(line) {
                let location = Location::new(path.clone(), number, found.column)
                    .with_span(line_start + found.column.saturating_sub(1), found.length);
                reporter.report(rule.name(), location, rule.message());
            }
        }
    }
}
