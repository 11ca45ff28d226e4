//! Parsing of the `check` argument list.
//!
//! Arguments are read left to right: each `-name` adds `name` to the set of
//! disabled rules, `--` ends the flags, and the first argument that is not
//! a flag starts the path list. With no paths the current directory is
//! checked. Names that match no rule are kept and only logged.

use std::path::PathBuf;

/// A parsed `check` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Rules disabled for every file, in command-line order.
    pub disabled: Vec<String>,
    /// Files and directories to check.
    pub paths: Vec<PathBuf>,
}

/// Usage errors in the `check` argument list.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InvocationError {
    /// A lone `-`.
    #[error("`-` must be followed by a rule name")]
    #[diagnostic(code(typo_lint::cli::empty_rule))]
    EmptyRule,
}

impl Invocation {
    /// Parses `check` arguments against the known rule names.
    ///
    /// # Errors
    ///
    /// Returns an error for a bare `-`.
    pub fn parse<S: AsRef<str>>(args: &[S], known_rules: &[&str]) -> Result<Self, InvocationError> {
        let mut disabled = Vec::new();
        let mut rest = args.iter().map(|a| a.as_ref()).peekable();

        while let Some(&arg) = rest.peek() {
            if arg == "--" {
                rest.next();
                break;
            }
            let Some(name) = arg.strip_prefix('-') else {
                break;
            };
            if name.is_empty() {
                return Err(InvocationError::EmptyRule);
            }
            if !known_rules.contains(&name) {
                tracing::warn!("Disabling unknown rule `{name}`; see `typo-lint list-rules`");
            }
            disabled.push(name.to_string());
            rest.next();
        }

        let mut paths: Vec<PathBuf> = rest.map(PathBuf::from).collect();
        if paths.is_empty() {
            paths.push(PathBuf::from("."));
        }

        Ok(Self { disabled, paths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[&str] = &["tab", "long-line", "unused-prop"];

    fn parse(args: &[&str]) -> Result<Invocation, InvocationError> {
        Invocation::parse(args, KNOWN)
    }

    #[test]
    fn defaults_to_current_directory() {
        let inv = parse(&[]).unwrap();
        assert!(inv.disabled.is_empty());
        assert_eq!(inv.paths, vec![PathBuf::from(".")]);
    }

    #[test]
    fn flags_then_paths() {
        let inv = parse(&["-tab", "-unused-prop", "stdlib", "otherlibs/unix"]).unwrap();
        assert_eq!(inv.disabled, vec!["tab", "unused-prop"]);
        assert_eq!(
            inv.paths,
            vec![PathBuf::from("stdlib"), PathBuf::from("otherlibs/unix")]
        );
    }

    #[test]
    fn double_dash_ends_flags() {
        let inv = parse(&["-tab", "--", "-odd-name.ml"]).unwrap();
        assert_eq!(inv.disabled, vec!["tab"]);
        assert_eq!(inv.paths, vec![PathBuf::from("-odd-name.ml")]);
    }

    #[test]
    fn flags_stop_at_first_path() {
        let inv = parse(&["a.ml", "-tab"]).unwrap();
        assert!(inv.disabled.is_empty());
        assert_eq!(inv.paths, vec![PathBuf::from("a.ml"), PathBuf::from("-tab")]);
    }

    #[test]
    fn unknown_rule_is_still_disabled() {
        let inv = parse(&["-tabs", "a.ml"]).unwrap();
        assert_eq!(inv.disabled, vec!["tabs"]);
        assert_eq!(inv.paths, vec![PathBuf::from("a.ml")]);
    }

    #[test]
    fn bare_dash_is_an_error() {
        assert!(matches!(parse(&["-"]), Err(InvocationError::EmptyRule)));
    }
}
