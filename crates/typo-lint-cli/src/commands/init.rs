//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# typo-lint configuration

[analyzer]
# Glob patterns skipped during discovery (`*` also matches `/`)
exclude = [
    "*/_build/*",
]

# Git attribute holding per-file exceptions, e.g. `*.c typo=tab,long-line`
attribute = "typo"

# Ask git which files are tracked and read their attributes.
# Outside a work tree the [attributes] table below is used instead.
use_git = true

# Diagnostics printed per rule and file before "too many"
report_limit = 10

[header]
# Banner line: `(*`, `#` or `/*`, spaces, then this word, on line 3 to 5
project = "OCaml"
# Expected 4 to 6 lines below the banner
copyright = "Copyright"

# Extra path exemptions, applied after the built-in ones
# [[exemptions]]
# pattern = "*.gen.ml"
# rules = ["long-line"]        # or ["all"] to skip matching files

# Attribute table for trees outside git
# [attributes]
# "legacy/*" = "tab,long-line"
# "vendor/*" = "prune"

# Disable a rule everywhere
# [rules.svn-keyword]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("typo-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created typo-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit typo-lint.toml to adjust exemptions and header markers");
    println!("  2. Run: typo-lint check");

    Ok(())
}
