//! List rules command implementation.

use typo_lint_rules::catalogue;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<16} Description", "Name");
    println!("{}", "-".repeat(72));

    for (name, description) in catalogue() {
        println!("{name:<16} {description}");
    }

    println!("\nDisable rules for a run with -name flags before the paths, e.g.:");
    println!("  typo-lint check -long-line -unused-prop stdlib");
    println!("\nDisable rules per file with the `typo` git attribute, e.g. in .gitattributes:");
    println!("  otherlibs/win32unix/*.c  typo=tab,long-line");
}
