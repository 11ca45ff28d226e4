//! Configuration types for typo-lint.

use crate::exceptions::Exemption;
use crate::header::HeaderMarkers;
use crate::report::DEFAULT_REPORT_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Top-level configuration for typo-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Copyright header markers.
    #[serde(default)]
    pub header: HeaderConfig,

    /// Path exemptions appended after the built-in table.
    #[serde(default)]
    pub exemptions: Vec<ExemptionConfig>,

    /// Static attribute table, used when git attributes are unavailable.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or the report limit is zero.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        if config.analyzer.report_limit == 0 {
            return Err(ConfigError::Invalid {
                message: "analyzer.report_limit must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Returns the names of rules explicitly disabled, sorted.
    #[must_use]
    pub fn disabled_rules(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .rules
            .keys()
            .filter(|name| !self.is_rule_enabled(name))
            .cloned()
            .collect();
        names.sort();
        names
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns skipped during discovery.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Git attribute carrying per-file exceptions.
    #[serde(default = "default_attribute")]
    pub attribute: String,

    /// Whether to ask git for tracked status and attributes.
    #[serde(default = "default_true")]
    pub use_git: bool,

    /// Diagnostics reported per rule per file.
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            attribute: default_attribute(),
            use_git: true,
            report_limit: DEFAULT_REPORT_LIMIT,
        }
    }
}

fn default_attribute() -> String {
    "typo".to_string()
}

fn default_true() -> bool {
    true
}

fn default_report_limit() -> usize {
    DEFAULT_REPORT_LIMIT
}

/// Copyright header markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Project word expected on the banner line.
    #[serde(default = "default_project")]
    pub project: String,

    /// Text identifying the copyright line.
    #[serde(default = "default_copyright")]
    pub copyright: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        let markers = HeaderMarkers::default();
        Self {
            project: markers.project,
            copyright: markers.copyright,
        }
    }
}

fn default_project() -> String {
    HeaderMarkers::default().project
}

fn default_copyright() -> String {
    HeaderMarkers::default().copyright
}

impl From<&HeaderConfig> for HeaderMarkers {
    fn from(config: &HeaderConfig) -> Self {
        Self::new(config.project.clone(), config.copyright.clone())
    }
}

/// A configured path exemption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExemptionConfig {
    /// Shell-style pattern; `*` crosses directory separators.
    pub pattern: String,

    /// Rules suppressed for matching files; `all` skips them.
    #[serde(default)]
    pub rules: Vec<String>,
}

impl ExemptionConfig {
    /// Returns the effect of this entry.
    #[must_use]
    pub fn effect(&self) -> Exemption {
        Exemption::from_rules(&self.rules)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(typo_lint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(typo_lint::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Well-formed TOML with an unusable value.
    #[error("Invalid config: {message}")]
    #[diagnostic(code(typo_lint::config::invalid))]
    Invalid {
        /// What is wrong.
        message: String,
    },
}
