//! # typo-lint-core
//!
//! Core engine for typographic linting of source trees.
//!
//! Checks are purely lexical: every file is treated as a sequence of byte
//! lines, and every rule is an independent detector over a single line
//! ([`LineRule`]) or over the whole file ([`FileRule`]). This crate provides:
//!
//! - [`LineRule`] and [`FileRule`] traits for rule implementations
//! - [`ExceptionResolver`] for path-, attribute- and flag-driven exceptions
//! - [`Reporter`] and [`ReportLimit`] for counting and capping diagnostics
//! - [`Analyzer`] for orchestrating discovery, scanning and auditing
//!
//! ## Example
//!
//! ```ignore
//! use typo_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .line_rule(MyRule::new())
//!     .disable("long-line")
//!     .build()?;
//!
//! let result = analyzer.analyze(&["src".into()])?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod attributes;
mod audit;
mod config;
mod context;
mod discovery;
mod exceptions;
mod header;
mod report;
mod rule;
mod scanner;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, FileOutcome};
pub use attributes::{
    AttributeError, AttributeProvider, FileAttributes, GitAttributes, StaticAttributes,
};
pub use audit::{audit_unused, UNUSED_PROP};
pub use config::{
    AnalyzerConfig, Config, ConfigError, ExemptionConfig, HeaderConfig, RuleConfig,
};
pub use context::FileContext;
pub use discovery::{discover, Candidate};
pub use exceptions::{AttributeValue, ExceptionResolver, Exemption, Resolution, SkipReason};
pub use header::{HeaderMarkers, HeaderState};
pub use report::{Admission, FileReport, ReportLimit, Reporter, DEFAULT_REPORT_LIMIT};
pub use rule::{FileMatch, FileRule, FileRuleBox, LineMatch, LineRule, LineRuleBox};
pub use scanner::scan_lines;
pub use types::{Diagnostic, LintResult, Location, TooMany, Violation, ViolationDiagnostic};
pub use utils::lines::Lines;
