//! Path utilities for pattern matching.

use glob::{MatchOptions, Pattern};
use std::path::Path;

/// `*` crosses `/`, like a shell `case` pattern.
pub const SHELL_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Converts a path to the `/`-separated string used for pattern matching.
///
/// Leading `./` components are dropped so that `./stdlib/list.ml` and
/// `stdlib/list.ml` match the same patterns.
///
/// # Example
///
/// ```ignore
/// assert_eq!(normalize(Path::new("./otherlibs/Makefile")), "otherlibs/Makefile");
/// ```
#[must_use]
pub fn normalize(path: &Path) -> String {
    let mut s = path.to_string_lossy().replace('\\', "/");
    while let Some(rest) = s.strip_prefix("./") {
        s = rest.to_string();
    }
    s
}

/// Matches a normalized path against a shell-style pattern.
///
/// Relative paths are tried both bare and with `./` so that root-level
/// entries match `*/name` patterns however the tree was named.
#[must_use]
pub fn pattern_matches(pattern: &Pattern, path: &str) -> bool {
    if pattern.matches_with(path, SHELL_MATCH) {
        return true;
    }
    let relative = !path.starts_with('/') && !path.starts_with("../");
    relative && pattern.matches_with(&format!("./{path}"), SHELL_MATCH)
}

/// Returns true if the final component of the path is `.git`.
#[must_use]
pub fn is_git_dir(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == ".git")
}
