//! The built-in rule catalogue.

use crate::{
    LineLength, MissingHeader, MissingLf, NonAscii, NonPrinting, SvnKeyword, Tab, WhiteAtEof,
    WhiteAtEol,
};
use tracing::debug;
use typo_lint_core::{AnalyzerBuilder, FileRuleBox, HeaderMarkers, LineRuleBox, UNUSED_PROP};

/// Returns every line rule, in evaluation order.
#[must_use]
pub fn line_rules() -> Vec<LineRuleBox> {
    vec![
        Box::new(Tab::new()),
        Box::new(NonAscii::new()),
        Box::new(NonPrinting::new()),
        Box::new(WhiteAtEol::new()),
        Box::new(SvnKeyword::new()),
        Box::new(LineLength::long()),
        Box::new(LineLength::very_long()),
    ]
}

/// Returns every whole-file rule, in evaluation order.
#[must_use]
pub fn file_rules(markers: &HeaderMarkers) -> Vec<FileRuleBox> {
    vec![
        Box::new(MissingLf::new()),
        Box::new(WhiteAtEof::new()),
        Box::new(MissingHeader::new().markers(markers.clone())),
    ]
}

/// Returns `(name, description)` for every rule, `unused-prop` last.
#[must_use]
pub fn catalogue() -> Vec<(&'static str, &'static str)> {
    let lines = line_rules();
    let files = file_rules(&HeaderMarkers::default());

    lines
        .iter()
        .map(|r| (r.name(), r.description()))
        .chain(files.iter().map(|r| (r.name(), r.description())))
        .chain(std::iter::once((
            UNUSED_PROP,
            "Reports attribute exceptions that matched nothing",
        )))
        .collect()
}

/// Returns every name accepted in a disable set.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    catalogue().into_iter().map(|(name, _)| name).collect()
}

/// Registers every built-in rule on an analyzer builder.
#[must_use]
pub fn install(builder: AnalyzerBuilder, markers: &HeaderMarkers) -> AnalyzerBuilder {
    let lines = line_rules();
    let files = file_rules(markers);
    debug!(
        "Installing {} line rules and {} file rules",
        lines.len(),
        files.len()
    );

    let builder = lines.into_iter().fold(builder, AnalyzerBuilder::line_rule_box);
    files.into_iter().fold(builder, AnalyzerBuilder::file_rule_box)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order() {
        assert_eq!(
            rule_names(),
            vec![
                "tab",
                "non-ascii",
                "non-printing",
                "white-at-eol",
                "svn-keyword",
                "long-line",
                "very-long-line",
                "missing-lf",
                "white-at-eof",
                "missing-header",
                "unused-prop",
            ]
        );
    }

    #[test]
    fn test_every_rule_is_described() {
        assert!(catalogue().iter().all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn test_install() {
        let analyzer = install(typo_lint_core::Analyzer::builder(), &HeaderMarkers::default())
            .build()
            .expect("Failed to build analyzer");
        assert_eq!(analyzer.rule_count(), 10);
    }
}
