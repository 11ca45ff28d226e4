//! Exception resolution.
//!
//! For each file the resolver decides whether the file is skipped entirely
//! and which rules have their diagnostics suppressed. Suppression is the
//! union of three sources, none of which can cancel another:
//!
//! 1. the global disable set (`-rule` flags and disabled rules in config),
//! 2. the path table (built-in patterns plus configured exemptions),
//! 3. the rule names listed in the file's attribute string.
//!
//! Every matching path entry applies; there is no first-match-wins.

use crate::context::FileContext;
use crate::utils::paths::{normalize, pattern_matches};
use glob::{Pattern, PatternError};
use std::collections::BTreeSet;
use tracing::debug;

/// Built-in path table: patterns and the rule they suppress (`None` skips
/// the file).
const BUILTIN_EXEMPTIONS: &[(&[&str], Option<&str>)] = &[
    (&["*.reference", "*/reference", "*/.depend*"], None),
    (&["Makefile*", "*/Makefile*"], Some("tab")),
    (
        &[
            "*/.gitignore",
            "*.mlpack",
            "*.mllib",
            "*.mltop",
            "*.odocl",
            "*.clib",
        ],
        Some("missing-header"),
    ),
    (&["ocamldoc/*", "*/ocamldoc/*"], Some("long-line")),
];

/// Attribute token that skips a file (or a whole directory during discovery).
pub const PRUNE: &str = "prune";

/// Attribute token that marks a file as binary.
pub const BINARY: &str = "binary";

/// Effect of a path-table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exemption {
    /// Skip the file entirely.
    Skip,
    /// Suppress the listed rules.
    Suppress(Vec<String>),
}

impl Exemption {
    /// Builds an exemption from a configured rule list, where `all` means
    /// skipping the file.
    #[must_use]
    pub fn from_rules(rules: &[String]) -> Self {
        if rules.iter().any(|r| r == "all") {
            Self::Skip
        } else {
            Self::Suppress(rules.to_vec())
        }
    }
}

#[derive(Debug, Clone)]
struct PathExemption {
    patterns: Vec<Pattern>,
    effect: Exemption,
}

impl PathExemption {
    fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern_matches(pattern, path))
    }
}

/// Why a file was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The path matched a skip entry of the path table.
    PathPattern,
    /// The file is binary.
    Binary,
    /// The attribute string contains `prune`.
    Pruned,
    /// Not under version control and not named explicitly.
    Untracked,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PathPattern => write!(f, "path pattern"),
            Self::Binary => write!(f, "binary"),
            Self::Pruned => write!(f, "pruned"),
            Self::Untracked => write!(f, "untracked"),
        }
    }
}

/// Parsed attribute string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeValue {
    /// Rule names declared as exceptions.
    pub rules: BTreeSet<String>,
    /// Whether `prune` was given.
    pub prune: bool,
    /// Whether `binary` was given.
    pub binary: bool,
}

impl AttributeValue {
    /// Parses a comma/space separated attribute string.
    ///
    /// The git states `unspecified`, `set` and `unset` carry no rule names.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut value = Self::default();
        for token in raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            match token {
                "unspecified" | "set" | "unset" => {}
                PRUNE => value.prune = true,
                BINARY => value.binary = true,
                rule => {
                    value.rules.insert(rule.to_string());
                }
            }
        }
        value
    }
}

/// Effective exceptions for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Set when the file must not be checked at all.
    pub skip: Option<SkipReason>,
    /// Rules whose diagnostics are hidden for this file.
    pub suppressed: BTreeSet<String>,
    /// Rules declared in the attribute string, subject to the unused audit.
    pub declared: BTreeSet<String>,
}

impl Resolution {
    /// Returns true if the file is skipped.
    #[must_use]
    pub fn is_exempt(&self) -> bool {
        self.skip.is_some()
    }

    /// Returns true if diagnostics for `rule` are hidden.
    #[must_use]
    pub fn is_suppressed(&self, rule: &str) -> bool {
        self.suppressed.contains(rule)
    }
}

/// Computes a [`Resolution`] for each file.
#[derive(Debug, Clone)]
pub struct ExceptionResolver {
    table: Vec<PathExemption>,
    global: BTreeSet<String>,
}

impl Default for ExceptionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExceptionResolver {
    /// Creates a resolver with the built-in path table and no global
    /// disables.
    #[must_use]
    pub fn new() -> Self {
        let table = BUILTIN_EXEMPTIONS
            .iter()
            .map(|(patterns, rule)| PathExemption {
                patterns: patterns
                    .iter()
                    .filter_map(|p| Pattern::new(p).ok())
                    .collect(),
                effect: rule.map_or(Exemption::Skip, |r| {
                    Exemption::Suppress(vec![r.to_string()])
                }),
            })
            .collect();

        Self {
            table,
            global: BTreeSet::new(),
        }
    }

    /// Adds rules to the global disable set.
    #[must_use]
    pub fn with_global_disable<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Appends an entry to the path table.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn with_exemption(mut self, pattern: &str, effect: Exemption) -> Result<Self, PatternError> {
        self.table.push(PathExemption {
            patterns: vec![Pattern::new(pattern)?],
            effect,
        });
        Ok(self)
    }

    /// Resolves exceptions for one file.
    #[must_use]
    pub fn resolve(&self, ctx: &FileContext<'_>) -> Resolution {
        let path = normalize(ctx.path);
        let mut resolution = Resolution {
            suppressed: self.global.clone(),
            ..Resolution::default()
        };

        for entry in self.table.iter().filter(|e| e.matches(&path)) {
            match &entry.effect {
                Exemption::Skip => {
                    resolution.skip.get_or_insert(SkipReason::PathPattern);
                }
                Exemption::Suppress(rules) => {
                    resolution.suppressed.extend(rules.iter().cloned());
                }
            }
        }

        if !ctx.is_tracked && !ctx.is_explicit {
            resolution.skip.get_or_insert(SkipReason::Untracked);
        }

        let value = AttributeValue::parse(&ctx.attributes.value);
        if ctx.attributes.binary || value.binary {
            resolution.skip.get_or_insert(SkipReason::Binary);
        }
        if value.prune {
            resolution.skip.get_or_insert(SkipReason::Pruned);
        }

        resolution.suppressed.extend(value.rules.iter().cloned());
        resolution.declared = value.rules;

        if let Some(reason) = resolution.skip {
            debug!("Skipping {} ({reason})", ctx.path.display());
        } else if !resolution.suppressed.is_empty() {
            debug!(
                "Suppressed for {}: {:?}",
                ctx.path.display(),
                resolution.suppressed
            );
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn resolve(path: &str) -> Resolution {
        let ctx = FileContext::new(Path::new(path), b"");
        ExceptionResolver::new().resolve(&ctx)
    }

    #[test]
    fn test_builtin_patterns_compile() {
        let resolver = ExceptionResolver::new();
        for (entry, (patterns, _)) in resolver.table.iter().zip(BUILTIN_EXEMPTIONS) {
            assert_eq!(entry.patterns.len(), patterns.len());
        }
    }

    #[test]
    fn test_reference_files_are_skipped() {
        assert_eq!(
            resolve("testsuite/tests/basic/arrays.reference").skip,
            Some(SkipReason::PathPattern)
        );
        assert_eq!(
            resolve("testsuite/tests/reference").skip,
            Some(SkipReason::PathPattern)
        );
        assert_eq!(
            resolve("stdlib/.depend").skip,
            Some(SkipReason::PathPattern)
        );
        assert_eq!(
            resolve("stdlib/.depend.nt").skip,
            Some(SkipReason::PathPattern)
        );
        assert!(!resolve("stdlib/list.ml").is_exempt());
    }

    #[test]
    fn test_makefile_suppresses_tab() {
        assert!(resolve("Makefile").is_suppressed("tab"));
        assert!(resolve("Makefile.config").is_suppressed("tab"));
        assert!(resolve("otherlibs/unix/Makefile").is_suppressed("tab"));
        assert!(resolve("./otherlibs/unix/Makefile.nt").is_suppressed("tab"));
        assert!(!resolve("stdlib/list.ml").is_suppressed("tab"));
    }

    #[test]
    fn test_header_free_files() {
        for path in [
            "stdlib/.gitignore",
            ".gitignore",
            "ocamlbuild/ocamlbuild.mlpack",
            "otherlibs/str/str.mllib",
            "toplevel/toplevellib.mltop",
            "ocamldoc/odoc.odocl",
            "otherlibs/unix/unix.clib",
        ] {
            assert!(
                resolve(path).is_suppressed("missing-header"),
                "{path} should suppress missing-header"
            );
        }
        assert!(!resolve("stdlib/list.ml").is_suppressed("missing-header"));
    }

    #[test]
    fn test_ocamldoc_suppresses_only_long_line() {
        let resolution = resolve("ocamldoc/odoc_html.ml");
        assert!(resolution.is_suppressed("long-line"));
        assert!(!resolution.is_suppressed("very-long-line"));

        assert!(resolve("tools/ocamldoc/x.ml").is_suppressed("long-line"));
        assert!(!resolve("stdlib/list.ml").is_suppressed("long-line"));
    }

    #[test]
    fn test_multiple_entries_accumulate() {
        let resolution = resolve("ocamldoc/Makefile");
        assert!(resolution.is_suppressed("tab"));
        assert!(resolution.is_suppressed("long-line"));
    }

    #[test]
    fn test_attribute_rules_are_declared_and_suppressed() {
        let ctx = FileContext::new(Path::new("a.ml"), b"").attribute("tab, long-line white-at-eol");
        let resolution = ExceptionResolver::new().resolve(&ctx);

        let expected: BTreeSet<String> = ["long-line", "tab", "white-at-eol"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(resolution.declared, expected);
        assert!(expected.is_subset(&resolution.suppressed));
        assert!(!resolution.is_exempt());
    }

    #[test]
    fn test_unspecified_attribute_is_empty() {
        assert_eq!(AttributeValue::parse("unspecified"), AttributeValue::default());
        assert_eq!(AttributeValue::parse(""), AttributeValue::default());
        assert_eq!(AttributeValue::parse(" , "), AttributeValue::default());
    }

    #[test]
    fn test_global_disable_is_not_declared() {
        let ctx = FileContext::new(Path::new("a.ml"), b"");
        let resolution = ExceptionResolver::new()
            .with_global_disable(["tab"])
            .resolve(&ctx);
        assert!(resolution.is_suppressed("tab"));
        assert!(resolution.declared.is_empty());
    }

    #[test]
    fn test_global_and_attribute_union() {
        let ctx = FileContext::new(Path::new("a.ml"), b"").attribute("tab");
        let resolution = ExceptionResolver::new()
            .with_global_disable(["tab", "long-line"])
            .resolve(&ctx);
        assert!(resolution.is_suppressed("tab"));
        assert!(resolution.is_suppressed("long-line"));
        assert_eq!(resolution.declared.len(), 1);
    }

    #[test]
    fn test_binary_is_exempt() {
        let ctx = FileContext::new(Path::new("boot/ocamlc"), b"").binary(true);
        assert_eq!(
            ExceptionResolver::new().resolve(&ctx).skip,
            Some(SkipReason::Binary)
        );

        let ctx = FileContext::new(Path::new("boot/ocamlc"), b"").attribute("binary");
        assert_eq!(
            ExceptionResolver::new().resolve(&ctx).skip,
            Some(SkipReason::Binary)
        );
    }

    #[test]
    fn test_prune_is_exempt() {
        let ctx = FileContext::new(Path::new("vendor/x.c"), b"").attribute("prune");
        assert_eq!(
            ExceptionResolver::new().resolve(&ctx).skip,
            Some(SkipReason::Pruned)
        );
    }

    #[test]
    fn test_untracked_needs_explicit() {
        let ctx = FileContext::new(Path::new("scratch.ml"), b"")
            .tracked(false)
            .explicit(false);
        assert_eq!(
            ExceptionResolver::new().resolve(&ctx).skip,
            Some(SkipReason::Untracked)
        );

        let ctx = FileContext::new(Path::new("scratch.ml"), b"").tracked(false);
        assert!(!ExceptionResolver::new().resolve(&ctx).is_exempt());
    }

    #[test]
    fn test_configured_exemption() {
        let resolver = ExceptionResolver::new()
            .with_exemption("*.gen.ml", Exemption::from_rules(&["long-line".to_string()]))
            .and_then(|r| r.with_exemption("vendor/*", Exemption::from_rules(&["all".to_string()])))
            .expect("patterns are valid");

        let ctx = FileContext::new(Path::new("parsing/parser.gen.ml"), b"");
        assert!(resolver.resolve(&ctx).is_suppressed("long-line"));

        let ctx = FileContext::new(Path::new("vendor/lib.c"), b"");
        assert_eq!(resolver.resolve(&ctx).skip, Some(SkipReason::PathPattern));
    }

    #[test]
    fn test_invalid_configured_pattern() {
        assert!(ExceptionResolver::new()
            .with_exemption("[", Exemption::Skip)
            .is_err());
    }
}
