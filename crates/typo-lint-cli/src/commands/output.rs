//! Shared output formatting for lint results.

use anyhow::Result;
use typo_lint_core::LintResult;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    result.print_report();

    if !result.has_violations() {
        tracing::info!(
            "No violations in {} file(s), {} skipped",
            result.files_checked,
            result.files_skipped
        );
        return;
    }

    tracing::info!(
        "{} violation(s) in {} file(s), {} skipped",
        result.violations().count(),
        result.files_checked,
        result.files_skipped
    );
    for (rule, count) in result.count_by_rule() {
        tracing::debug!("  {rule}: {count}");
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
