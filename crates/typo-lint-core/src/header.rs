//! Copyright header recognition.
//!
//! A header is present when a banner line naming the project appears on
//! one of lines 3 to 5, and a copyright line follows it 4 to 6 lines later:
//!
//! ```text
//! 1 (**************************************************************)
//! 2 (*                                                            *)
//! 3 (*                                OCaml                       *)
//! 4 (*                                                            *)
//! 5 (*            Xavier Leroy, projet Cristal, INRIA Rocquencourt *)
//! 6 (*                                                            *)
//! 7 (*  Copyright 1996 Institut National de Recherche en ...      *)
//! ```

use crate::utils::lines::Lines;
use std::ops::RangeInclusive;

/// Lines searched for the banner.
const BANNER_LINES: RangeInclusive<usize> = 3..=5;

/// Offsets from the banner line searched for the copyright marker.
const COPYRIGHT_OFFSETS: RangeInclusive<usize> = 4..=6;

/// Comment openers a banner line may start with.
const BANNER_OPENERS: &[&[u8]] = &[b"(*", b"#", b"/*"];

/// Literal markers identifying a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMarkers {
    /// Project word that follows the comment opener on the banner line.
    pub project: String,
    /// Text that identifies the copyright line.
    pub copyright: String,
}

impl Default for HeaderMarkers {
    fn default() -> Self {
        Self {
            project: "OCaml".to_string(),
            copyright: "Copyright".to_string(),
        }
    }
}

impl HeaderMarkers {
    /// Creates markers for a project word and copyright text.
    #[must_use]
    pub fn new(project: impl Into<String>, copyright: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            copyright: copyright.into(),
        }
    }

    /// Returns true for `(*`, `#` or `/*`, at least one space, then the
    /// project word.
    #[must_use]
    pub fn is_banner(&self, line: &[u8]) -> bool {
        BANNER_OPENERS.iter().any(|opener| {
            line.strip_prefix(*opener).is_some_and(|rest| {
                let trimmed = trim_leading_spaces(rest);
                trimmed.len() < rest.len() && trimmed.starts_with(self.project.as_bytes())
            })
        })
    }

    /// Returns true if the line carries the copyright marker.
    #[must_use]
    pub fn is_copyright(&self, line: &[u8]) -> bool {
        let needle = self.copyright.as_bytes();
        !needle.is_empty() && line.windows(needle.len()).any(|w| w == needle)
    }
}

fn trim_leading_spaces(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b' ').unwrap_or(bytes.len());
    &bytes[start..]
}

/// Where the header parts were found in one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Line of the first banner within lines 3 to 5.
    pub banner_line: Option<usize>,
    /// Line of the copyright marker within the window after the banner.
    pub copyright_line: Option<usize>,
}

impl HeaderState {
    /// Scans the header window of a file.
    #[must_use]
    pub fn scan(lines: &Lines<'_>, markers: &HeaderMarkers) -> Self {
        let banner_line = BANNER_LINES
            .clone()
            .find(|&n| lines.get(n).is_some_and(|line| markers.is_banner(line)));

        let copyright_line = banner_line.and_then(|banner| {
            COPYRIGHT_OFFSETS
                .clone()
                .map(|offset| banner + offset)
                .find(|&n| lines.get(n).is_some_and(|line| markers.is_copyright(line)))
        });

        Self {
            banner_line,
            copyright_line,
        }
    }

    /// Returns true when both the banner and the copyright line were found.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.banner_line.is_some() && self.copyright_line.is_some()
    }
}
