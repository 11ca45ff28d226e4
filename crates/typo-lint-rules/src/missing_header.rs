//! Rule requiring the project copyright header.
//!
//! ```text
//! (**************************************************************)
//! (*                                                            *)
//! (*                           OCaml                            *)
//! (*                                                            *)
//! (*          Xavier Leroy, projet Cristal, INRIA Rocquencourt  *)
//! (*                                                            *)
//! (*  Copyright 1996 Institut National de Recherche en ...      *)
//! ```
//!
//! The banner must sit on line 3, 4 or 5 and the copyright line 4 to 6
//! lines below it. See [`HeaderState`] for the exact window.

use typo_lint_core::{FileMatch, FileRule, HeaderMarkers, HeaderState, Lines};

/// Rule name for missing-header.
pub const NAME: &str = "missing-header";

/// Reports a file without a banner and copyright line, at line 1.
#[derive(Debug, Clone, Default)]
pub struct MissingHeader {
    markers: HeaderMarkers,
}

impl MissingHeader {
    /// Creates the rule with the default markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the banner and copyright markers.
    #[must_use]
    pub fn markers(mut self, markers: HeaderMarkers) -> Self {
        self.markers = markers;
        self
    }
}

impl FileRule for MissingHeader {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires a banner and copyright header near the top of the file"
    }

    fn message(&self) -> String {
        "missing copyright header".to_string()
    }

    fn check_file(&self, lines: &Lines<'_>) -> Option<FileMatch> {
        let state = HeaderState::scan(lines, &self.markers);
        (!state.is_present()).then(|| FileMatch::new(1, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
(**************************************************************************)
(*                                                                        *)
(*                                 OCaml                                  *)
(*                                                                        *)
(*             Xavier Leroy, projet Cristal, INRIA Rocquencourt           *)
(*                                                                        *)
(*   Copyright 1996 Institut National de Recherche en Informatique et     *)
(*     en Automatique.                                                    *)
(**************************************************************************)
";

    fn check(rule: &MissingHeader, content: &str) -> Option<FileMatch> {
        rule.check_file(&Lines::new(content.as_bytes()))
    }

    #[test]
    fn test_standard_header() {
        let content = format!("{HEADER}\nlet x = 1\n");
        assert!(check(&MissingHeader::new(), &content).is_none());
    }

    #[test]
    fn test_no_header() {
        assert_eq!(
            check(&MissingHeader::new(), "let x = 1\n"),
            Some(FileMatch::new(1, 1))
        );
        assert_eq!(check(&MissingHeader::new(), ""), Some(FileMatch::new(1, 1)));
    }

    #[test]
    fn test_shell_style_header() {
        let content = "#!/bin/sh\n#\n# OCaml\n#\n#\n#\n# Copyright 2020\n";
        assert!(check(&MissingHeader::new(), content).is_none());
    }

    #[test]
    fn test_other_project_word() {
        let rule = MissingHeader::new().markers(HeaderMarkers::new("Camlp4", "Copyright"));
        assert!(check(&rule, HEADER).is_some());
        let content = HEADER.replace(" OCaml ", "Camlp4 ");
        assert!(check(&rule, &content).is_none());
    }
}
