//! # typo-lint-rules
//!
//! Built-in typographic rules for typo-lint.
//!
//! All checks are byte-level; nothing here parses source syntax.
//!
//! ## Available Rules
//!
//! | Name | Kind | Reported at | Message |
//! |------|------|-------------|---------|
//! | `tab` | line | first TAB | TAB character(s) |
//! | `non-ascii` | line | first byte >= 128 | non-ASCII character(s) |
//! | `non-printing` | line | first control or high byte | non-printing character(s) |
//! | `white-at-eol` | line | start of trailing whitespace | whitespace at end of line |
//! | `svn-keyword` | line | start of `$Id` | SVN keyword marker |
//! | `long-line` | line | column 81 | line is over 80 columns |
//! | `very-long-line` | line | column 133 | line is over 132 columns |
//! | `missing-lf` | file | just past the last byte | missing linefeed at EOF |
//! | `white-at-eof` | file | the trailing blank line | empty line(s) at EOF |
//! | `missing-header` | file | line 1 | missing copyright header |
//!
//! `unused-prop` is reported by the engine itself, not by a rule object.
//!
//! ## Usage
//!
//! ```ignore
//! use typo_lint_core::{Analyzer, HeaderMarkers};
//!
//! let analyzer = typo_lint_rules::install(Analyzer::builder(), &HeaderMarkers::default())
//!     .disable("long-line")
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod long_line;
mod missing_header;
mod missing_lf;
mod non_ascii;
mod non_printing;
mod presets;
mod svn_keyword;
mod tab;
mod white_at_eof;
mod white_at_eol;

pub use long_line::{LineLength, LONG_LINE, VERY_LONG_LINE};
pub use missing_header::MissingHeader;
pub use missing_lf::MissingLf;
pub use non_ascii::NonAscii;
pub use non_printing::NonPrinting;
pub use presets::{catalogue, file_rules, install, line_rules, rule_names};
pub use svn_keyword::SvnKeyword;
pub use tab::Tab;
pub use white_at_eof::WhiteAtEof;
pub use white_at_eol::WhiteAtEol;

/// Re-export core types for convenience.
pub use typo_lint_core::{FileRule, LineRule, Violation};
