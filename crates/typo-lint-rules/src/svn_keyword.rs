//! Rule forbidding SVN `$Id$` keyword markers.

use typo_lint_core::{LineMatch, LineRule};

/// Rule name for svn-keyword.
pub const NAME: &str = "svn-keyword";

const MARKER: &[u8] = b"$Id";

/// Reports `$Id$` or `$Id: ... $` on a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvnKeyword;

impl SvnKeyword {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Length of the keyword starting at `start`, if `line[start..]` is one.
fn keyword_at(line: &[u8], start: usize) -> Option<usize> {
    let rest = line[start..].strip_prefix(MARKER)?;
    if rest.first() == Some(&b'$') {
        return Some(MARKER.len() + 1);
    }
    let expanded = rest.strip_prefix(b": ")?;
    let close = expanded.iter().rposition(|&b| b == b'$')?;
    Some(MARKER.len() + 2 + close + 1)
}

impl LineRule for SvnKeyword {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forbids SVN keyword markers such as $Id$"
    }

    fn message(&self) -> String {
        "SVN keyword marker".to_string()
    }

    fn check_line(&self, line: &[u8]) -> Option<LineMatch> {
        line.windows(MARKER.len())
            .enumerate()
            .filter(|(_, w)| *w == MARKER)
            .find_map(|(start, _)| {
                keyword_at(line, start).map(|len| LineMatch::at_offset(start, len))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_keyword() {
        let found = SvnKeyword.check_line(b"(* $Id$ *)").expect("match");
        assert_eq!(found.column, 4);
        assert_eq!(found.length, 4);
    }

    #[test]
    fn test_expanded_keyword() {
        let line = b"# $Id: list.ml 12345 2012-01-01 xleroy $";
        let found = SvnKeyword.check_line(line).expect("match");
        assert_eq!(found.column, 3);
        assert_eq!(found.length, line.len() - 2);
    }

    #[test]
    fn test_not_keywords() {
        assert!(SvnKeyword.check_line(b"$Id").is_none());
        assert!(SvnKeyword.check_line(b"$Idx$").is_none());
        assert!(SvnKeyword.check_line(b"$Id:$").is_none());
        assert!(SvnKeyword.check_line(b"$Id: never closed").is_none());
    }

    #[test]
    fn test_later_occurrence() {
        let found = SvnKeyword.check_line(b"$Id and $Id$").expect("match");
        assert_eq!(found.column, 9);
    }
}
