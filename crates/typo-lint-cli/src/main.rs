//! typo-lint CLI tool.
//!
//! Usage:
//! ```bash
//! typo-lint check [--format text|json] [-rule]... [--] [PATH]...
//! typo-lint list-rules
//! typo-lint init [--force]
//! ```

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod invocation;

/// Typographic style checker for source trees
#[derive(Parser)]
#[command(name = "typo-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files and directories (default: current directory)
    Check {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// `-rule` flags disabling rules, then paths; `--` ends the flags
        #[arg(
            value_name = "ARGS",
            num_args = 0..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parses the command line, keeping a `--` that opens the `check` list.
    fn parse_args<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(&raw)?;
        if let Commands::Check { args, .. } = &mut cli.command {
            restore_separator(&raw, args);
        }
        Ok(cli)
    }
}

/// clap swallows a `--` placed before the first trailing value. The values
/// always form a suffix of the raw command line, so the separator is the
/// raw argument just before them.
fn restore_separator(raw: &[OsString], args: &mut Vec<String>) {
    let Some(before) = raw.len().checked_sub(args.len() + 1) else {
        return;
    };
    if raw.get(before).is_some_and(|arg| arg == "--") {
        args.insert(0, "--".to_string());
    }
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per diagnostic.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { format, args } => {
            let rules = typo_lint_rules::rule_names();
            let invocation = invocation::Invocation::parse(args.as_slice(), &rules)
                .unwrap_or_else(|e| Cli::command().error(ErrorKind::InvalidValue, e).exit());
            let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());
            commands::check::run(&invocation, format, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::Invocation;

    fn check_args(raw: &[&str]) -> Vec<String> {
        let cli = Cli::parse_args(raw).unwrap();
        let Commands::Check { args, .. } = cli.command else {
            panic!("expected the check command");
        };
        args
    }

    fn paths(raw: &[&str]) -> Vec<PathBuf> {
        Invocation::parse(&check_args(raw), &typo_lint_rules::rule_names())
            .unwrap()
            .paths
    }

    #[test]
    fn leading_double_dash_reaches_invocation() {
        assert_eq!(
            check_args(&["typo-lint", "check", "--", "-x.ml"]),
            vec!["--", "-x.ml"]
        );
        assert_eq!(
            paths(&["typo-lint", "check", "--", "-x.ml"]),
            vec![PathBuf::from("-x.ml")]
        );
    }

    #[test]
    fn double_dash_after_options() {
        assert_eq!(
            paths(&["typo-lint", "--verbose", "check", "--format", "json", "--", "-x.ml"]),
            vec![PathBuf::from("-x.ml")]
        );
    }

    #[test]
    fn double_dash_after_flags_is_kept_once() {
        let args = check_args(&["typo-lint", "check", "-tab", "--", "-x.ml"]);
        assert_eq!(args, vec!["-tab", "--", "-x.ml"]);
    }

    #[test]
    fn path_named_double_dash() {
        assert_eq!(
            paths(&["typo-lint", "check", "--", "--", "a.ml"]),
            vec![PathBuf::from("--"), PathBuf::from("a.ml")]
        );
    }

    #[test]
    fn flags_without_separator() {
        let args = check_args(&["typo-lint", "check", "-tab", "stdlib"]);
        assert_eq!(args, vec!["-tab", "stdlib"]);
    }
}
