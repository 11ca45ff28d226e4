//! Core analyzer for orchestrating lint execution.

use crate::attributes::{AttributeError, AttributeProvider, FileAttributes, StaticAttributes};
use crate::audit::audit_unused;
use crate::config::{Config, ConfigError};
use crate::context::FileContext;
use crate::discovery::{discover, Candidate};
use crate::exceptions::{ExceptionResolver, Exemption, Resolution, SkipReason};
use crate::report::{FileReport, Reporter};
use crate::rule::{FileRule, FileRuleBox, LineRule, LineRuleBox};
use crate::scanner::scan_lines;
use crate::types::{LintResult, Location};
use crate::utils::lines::Lines;

use glob::Pattern;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while building or running the analyzer.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    #[diagnostic(code(typo_lint::analyzer::io))]
    Io(#[from] std::io::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    #[diagnostic(code(typo_lint::analyzer::pattern))]
    Pattern(#[from] glob::PatternError),

    /// Attribute provider error.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Attributes(#[from] AttributeError),

    /// Configuration error.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// What happened to one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was exempt and not read.
    Skipped(SkipReason),
    /// The file was checked.
    Checked(FileReport),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    line_rules: Vec<LineRuleBox>,
    file_rules: Vec<FileRuleBox>,
    disabled: Vec<String>,
    exclude_patterns: Vec<String>,
    exemptions: Vec<(String, Exemption)>,
    config: Option<Config>,
    attributes: Option<Box<dyn AttributeProvider>>,
    report_limit: Option<usize>,
    attribute_name: Option<String>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a per-line rule. Line rules run in the order they are added.
    #[must_use]
    pub fn line_rule<R: LineRule + 'static>(mut self, rule: R) -> Self {
        self.line_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-line rule.
    #[must_use]
    pub fn line_rule_box(mut self, rule: LineRuleBox) -> Self {
        self.line_rules.push(rule);
        self
    }

    /// Adds a whole-file rule.
    #[must_use]
    pub fn file_rule<R: FileRule + 'static>(mut self, rule: R) -> Self {
        self.file_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed whole-file rule.
    #[must_use]
    pub fn file_rule_box(mut self, rule: FileRuleBox) -> Self {
        self.file_rules.push(rule);
        self
    }

    /// Suppresses a rule for every file.
    #[must_use]
    pub fn disable(mut self, rule: impl Into<String>) -> Self {
        self.disabled.push(rule.into());
        self
    }

    /// Suppresses several rules for every file.
    #[must_use]
    pub fn disables<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Adds a discovery exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Appends a path exemption after the built-in table.
    #[must_use]
    pub fn exemption(mut self, pattern: impl Into<String>, effect: Exemption) -> Self {
        self.exemptions.push((pattern.into(), effect));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the attribute provider (default: the static table from config).
    #[must_use]
    pub fn attributes(mut self, provider: Box<dyn AttributeProvider>) -> Self {
        self.attributes = Some(provider);
        self
    }

    /// Overrides the per-rule report limit.
    #[must_use]
    pub fn report_limit(mut self, limit: usize) -> Self {
        self.report_limit = Some(limit);
        self
    }

    /// Overrides the attribute name used in unused exception messages.
    #[must_use]
    pub fn attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = Some(name.into());
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or the report limit is zero.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let report_limit = self
            .report_limit
            .unwrap_or(config.analyzer.report_limit);
        if report_limit == 0 {
            return Err(ConfigError::Invalid {
                message: "report limit must be at least 1".to_string(),
            }
            .into());
        }

        let mut resolver = ExceptionResolver::new()
            .with_global_disable(config.disabled_rules())
            .with_global_disable(self.disabled);
        for entry in &config.exemptions {
            resolver = resolver.with_exemption(&entry.pattern, entry.effect())?;
        }
        for (pattern, effect) in self.exemptions {
            resolver = resolver.with_exemption(&pattern, effect)?;
        }

        let exclude = config
            .analyzer
            .exclude
            .iter()
            .chain(&self.exclude_patterns)
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let attributes = match self.attributes {
            Some(provider) => provider,
            None => Box::new(StaticAttributes::from_table(&config.attributes)?),
        };

        Ok(Analyzer {
            line_rules: self.line_rules,
            file_rules: self.file_rules,
            resolver,
            exclude,
            attributes,
            report_limit,
            attribute_name: self
                .attribute_name
                .unwrap_or_else(|| config.analyzer.attribute.clone()),
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance. The analyzer holds
/// no per-file state; each file gets its own [`Reporter`].
pub struct Analyzer {
    line_rules: Vec<LineRuleBox>,
    file_rules: Vec<FileRuleBox>,
    resolver: ExceptionResolver,
    exclude: Vec<Pattern>,
    attributes: Box<dyn AttributeProvider>,
    report_limit: usize,
    attribute_name: String,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.line_rules.len() + self.file_rules.len()
    }

    /// Returns the names of registered rules in evaluation order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.line_rules
            .iter()
            .map(|r| r.name())
            .chain(self.file_rules.iter().map(|r| r.name()))
            .collect()
    }

    /// Checks every file under the given paths.
    ///
    /// Unreadable files are logged and skipped; content violations never
    /// make this fail.
    ///
    /// # Errors
    ///
    /// Lookup and read failures are logged per file rather than returned,
    /// so this only fails if discovery itself cannot start.
    pub fn analyze(&self, paths: &[PathBuf]) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis of {} path(s)", paths.len());

        let candidates = discover(paths, &*self.attributes, &self.exclude);
        info!("Found {} candidate files", candidates.len());

        let mut result = LintResult::new();
        for candidate in &candidates {
            match self.check_candidate(candidate) {
                Some(FileOutcome::Checked(report)) => {
                    result.diagnostics.extend(report.diagnostics);
                    result.files_checked += 1;
                }
                Some(FileOutcome::Skipped(_)) => result.files_skipped += 1,
                None => {}
            }
        }

        info!(
            "Analysis complete: {} diagnostics in {} files ({} skipped)",
            result.diagnostics.len(),
            result.files_checked,
            result.files_skipped
        );

        Ok(result)
    }

    /// Looks up a candidate's status, then reads and checks it unless it is
    /// exempt. Returns `None` if the file could not be read.
    fn check_candidate(&self, candidate: &Candidate) -> Option<FileOutcome> {
        let path = candidate.path.as_path();

        let is_tracked = self.attributes.is_tracked(path).unwrap_or_else(|e| {
            warn!("Tracked-status lookup failed for {}: {e}", path.display());
            true
        });
        // Untracked files found by the walk are skipped whatever their attributes.
        let attributes = if is_tracked || candidate.is_explicit {
            self.attributes.attributes(path).unwrap_or_else(|e| {
                warn!("Attribute lookup failed for {}: {e}", path.display());
                FileAttributes::default()
            })
        } else {
            FileAttributes::default()
        };

        let ctx = FileContext::new(path, &[])
            .explicit(candidate.is_explicit)
            .tracked(is_tracked)
            .with_attributes(attributes);
        let resolution = self.resolver.resolve(&ctx);
        if let Some(reason) = resolution.skip {
            return Some(FileOutcome::Skipped(reason));
        }

        match std::fs::read(path) {
            Ok(content) => Some(FileOutcome::Checked(
                self.check_resolved(path, &content, &resolution),
            )),
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                None
            }
        }
    }

    /// Checks one file whose content and status are already known.
    #[must_use]
    pub fn check_file(&self, ctx: &FileContext<'_>) -> FileOutcome {
        let resolution = self.resolver.resolve(ctx);
        match resolution.skip {
            Some(reason) => FileOutcome::Skipped(reason),
            None => FileOutcome::Checked(self.check_resolved(ctx.path, ctx.content, &resolution)),
        }
    }

    fn check_resolved(&self, path: &Path, content: &[u8], resolution: &Resolution) -> FileReport {
        debug!("Checking: {}", path.display());

        let lines = Lines::new(content);
        let mut reporter = Reporter::new(path, resolution, self.report_limit);

        scan_lines(&lines, &self.line_rules, &mut reporter);

        for rule in &self.file_rules {
            if let Some(found) = rule.check_file(&lines) {
                let offset =
                    (lines.offset(found.line) + found.column.saturating_sub(1)).min(content.len());
                let location =
                    Location::new(path.to_path_buf(), found.line, found.column).with_span(offset, 0);
                reporter.report(rule.name(), location, rule.message());
            }
        }

        audit_unused(
            resolution,
            &mut reporter,
            &self.attribute_name,
            lines.line_count(),
        );

        reporter.finish()
    }
}
