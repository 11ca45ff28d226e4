//! Locating and loading `typo-lint.toml`.
//!
//! First match wins:
//!
//! 1. `--config <file>`
//! 2. `typo-lint.toml`, then `.typo-lint.toml`, in the working directory
//! 3. `config.toml` in `$TYPO_LINT_CONFIG_DIR`, else in `~/.typo-lint/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use typo_lint_core::Config;

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named with `--config`; not checked for existence.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Found in the per-user directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the file to read, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration, or returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or invalid.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

const PROJECT_FILES: [&str; 2] = ["typo-lint.toml", ".typo-lint.toml"];
const GLOBAL_FILE: &str = "config.toml";
const CONFIG_DIR_VAR: &str = "TYPO_LINT_CONFIG_DIR";

/// Resolves the configuration source for a project directory.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(project_dir, explicit, user_config_dir().as_deref())
}

fn resolve_with(project_dir: &Path, explicit: Option<&Path>, user_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = PROJECT_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match user_dir.map(|dir| dir.join(GLOBAL_FILE)) {
        Some(found) if found.is_file() => {
            tracing::debug!("Found global config: {}", found.display());
            ConfigSource::Global(found)
        }
        _ => ConfigSource::Default,
    }
}

/// Per-user configuration directory.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_VAR)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".typo-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_and_is_not_checked() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("typo-lint.toml"), "").unwrap();

        let source = resolve_with(project.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/nonexistent.toml")));
        assert!(source.load().is_err());
    }

    #[test]
    fn project_files_in_order() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".typo-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with(project.path(), None, None),
            ConfigSource::Project(project.path().join(".typo-lint.toml"))
        );

        fs::write(project.path().join("typo-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_with(project.path(), None, None),
            ConfigSource::Project(project.path().join("typo-lint.toml"))
        );
    }

    #[test]
    fn user_dir_is_the_fallback() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        assert_eq!(
            resolve_with(project.path(), None, Some(user.path())),
            ConfigSource::Default
        );

        fs::write(user.path().join("config.toml"), "[header]\nproject = \"Coq\"\n").unwrap();
        let source = resolve_with(project.path(), None, Some(user.path()));
        assert_eq!(source, ConfigSource::Global(user.path().join("config.toml")));
        assert_eq!(source.load().unwrap().header.project, "Coq");
    }

    #[test]
    fn default_loads_builtin_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert_eq!(config.analyzer.attribute, "typo");
    }
}
