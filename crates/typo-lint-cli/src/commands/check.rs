//! Check command implementation.

use anyhow::{Context, Result};
use typo_lint_core::{
    Analyzer, AttributeProvider, Config, GitAttributes, HeaderMarkers, StaticAttributes,
};

use crate::config_resolver::ConfigSource;
use crate::invocation::Invocation;
use crate::OutputFormat;

/// Runs the check command.
///
/// Always succeeds once the files have been checked, whatever was found.
pub fn run(invocation: &Invocation, format: OutputFormat, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    let markers = HeaderMarkers::from(&config.header);
    let provider = attribute_provider(&config)?;

    let analyzer = typo_lint_rules::install(Analyzer::builder(), &markers)
        .config(config)
        .attributes(provider)
        .disables(invocation.disabled.iter().cloned())
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!(
        "Checking {:?} with {} rules",
        invocation.paths,
        analyzer.rule_count()
    );

    let result = analyzer
        .analyze(&invocation.paths)
        .context("Analysis failed")?;

    super::output::print(&result, format)
}

/// Git attributes inside a work tree, the static table from config otherwise.
fn attribute_provider(config: &Config) -> Result<Box<dyn AttributeProvider>> {
    if config.analyzer.use_git {
        if GitAttributes::is_available() {
            match GitAttributes::load(config.analyzer.attribute.clone()) {
                Ok(git) => return Ok(Box::new(git)),
                Err(e) => {
                    tracing::warn!("Failed to read git attributes: {e}");
                    tracing::warn!("Using the [attributes] table");
                }
            }
        } else {
            tracing::warn!("Not inside a git work tree; using the [attributes] table");
        }
    }

    let table = StaticAttributes::from_table(&config.attributes)
        .context("Invalid pattern in [attributes]")?;
    Ok(Box::new(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_table_when_git_is_off() {
        let config = Config::parse(
            "[analyzer]\nuse_git = false\n\n[attributes]\n\"legacy/*\" = \"tab\"\n",
        )
        .unwrap();
        let provider = attribute_provider(&config).unwrap();

        let attributes = provider
            .attributes(std::path::Path::new("legacy/old.ml"))
            .unwrap();
        assert_eq!(attributes.value, "tab");
        assert!(provider
            .is_tracked(std::path::Path::new("anything.ml"))
            .unwrap());
    }

    #[test]
    fn bad_attribute_pattern_is_reported() {
        let config =
            Config::parse("[analyzer]\nuse_git = false\n\n[attributes]\n\"[\" = \"tab\"\n").unwrap();
        assert!(attribute_provider(&config).is_err());
    }
}
