//! Per-file attribute lookup.
//!
//! The engine only consumes an attribute string and a binary flag per file.
//! Where they come from is up to an [`AttributeProvider`]: git attributes
//! in a work tree, or a static pattern table from the configuration.

use crate::utils::paths::{normalize, pattern_matches};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Attributes attached to one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttributes {
    /// Raw attribute string (comma/space separated rule names or sentinels).
    pub value: String,
    /// Whether the file is marked binary.
    pub binary: bool,
}

/// Errors raised by attribute providers.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AttributeError {
    /// Git could not be started.
    #[error("Failed to run git: {0}")]
    #[diagnostic(
        code(typo_lint::attributes::spawn),
        help("is git installed and on PATH?")
    )]
    Spawn(#[from] std::io::Error),

    /// Git ran but reported a failure.
    #[error("git {command} failed: {stderr}")]
    #[diagnostic(code(typo_lint::attributes::git))]
    Git {
        /// Git subcommand that failed.
        command: String,
        /// Captured standard error.
        stderr: String,
    },

    /// Invalid pattern in a static attribute table.
    #[error("Invalid attribute pattern: {0}")]
    #[diagnostic(code(typo_lint::attributes::pattern))]
    Pattern(#[from] glob::PatternError),
}

/// Supplies version-control status and attributes for files.
pub trait AttributeProvider: Send + Sync {
    /// Returns whether the path is under version control.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn is_tracked(&self, path: &Path) -> Result<bool, AttributeError>;

    /// Returns the attributes for the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails.
    fn attributes(&self, path: &Path) -> Result<FileAttributes, AttributeError>;
}

/// Attribute provider backed by the `git` command line.
///
/// The index, and the attributes of every tracked file and of the
/// directories holding them, are read up front with one `git ls-files` and
/// one `git check-attr --stdin`. Paths outside that set are looked up one
/// at a time.
#[derive(Debug, Clone)]
pub struct GitAttributes {
    attribute: String,
    work_dir: PathBuf,
    tracked: BTreeSet<String>,
    known: BTreeMap<String, FileAttributes>,
}

impl GitAttributes {
    /// Reads the index and attributes for the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run or fails.
    pub fn load(attribute: impl Into<String>) -> Result<Self, AttributeError> {
        Self::load_in(Path::new("."), attribute)
    }

    /// Reads the index and attributes for `work_dir`. Paths handed to the
    /// provider are relative to it.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run or fails.
    pub fn load_in(work_dir: &Path, attribute: impl Into<String>) -> Result<Self, AttributeError> {
        let attribute = attribute.into();

        let listing = git(work_dir, "ls-files", &["-z"], None)?;
        let tracked: BTreeSet<String> = String::from_utf8_lossy(&listing)
            .split('\0')
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();

        let mut queries = tracked.clone();
        for file in &tracked {
            let mut dir = file.as_str();
            while let Some(slash) = dir.rfind('/') {
                dir = &dir[..slash];
                if !queries.insert(dir.to_string()) {
                    break;
                }
            }
        }

        let mut input = Vec::new();
        for path in &queries {
            input.extend_from_slice(path.as_bytes());
            input.push(0);
        }
        let output = git(
            work_dir,
            "check-attr",
            &["-z", "--stdin", attribute.as_str(), "binary"],
            Some(input),
        )?;
        let known = parse_check_attr(&output, &attribute);

        debug!(
            "Loaded git attributes: {} tracked files, {} paths",
            tracked.len(),
            known.len()
        );

        Ok(Self {
            attribute,
            work_dir: work_dir.to_path_buf(),
            tracked,
            known,
        })
    }

    /// Returns true if the current directory is inside a git work tree.
    #[must_use]
    pub fn is_available() -> bool {
        Command::new("git")
            .args(["rev-parse", "--is-inside-work-tree"])
            .stderr(Stdio::null())
            .output()
            .is_ok_and(|output| {
                output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true"
            })
    }

    /// Key into the preloaded tables, for paths inside the work directory.
    fn index_key(path: &Path) -> Option<String> {
        let outside = path.is_absolute() || path.components().any(|c| c == Component::ParentDir);
        (!outside).then(|| normalize(path))
    }
}

impl AttributeProvider for GitAttributes {
    fn is_tracked(&self, path: &Path) -> Result<bool, AttributeError> {
        if let Some(key) = Self::index_key(path) {
            return Ok(self.tracked.contains(&key));
        }

        let status = Command::new("git")
            .current_dir(&self.work_dir)
            .args(["ls-files", "--error-unmatch", "--"])
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(status.success())
    }

    fn attributes(&self, path: &Path) -> Result<FileAttributes, AttributeError> {
        if let Some(key) = Self::index_key(path) {
            if let Some(found) = self.known.get(&key) {
                return Ok(found.clone());
            }
            // Nothing tracked below it, so nothing inside is checked.
            if self.work_dir.join(path).is_dir() {
                return Ok(FileAttributes::default());
            }
        }

        let arg = path.to_string_lossy();
        let args = ["-z", self.attribute.as_str(), "binary", "--", arg.as_ref()];
        let output = git(&self.work_dir, "check-attr", &args, None)?;

        let attributes = parse_check_attr(&output, &self.attribute)
            .into_values()
            .next()
            .unwrap_or_default();
        debug!("Attributes for {}: {:?}", path.display(), attributes);
        Ok(attributes)
    }
}

/// Runs a git subcommand, feeding `input` on stdin, and returns its stdout.
fn git(
    work_dir: &Path,
    command: &str,
    args: &[&str],
    input: Option<Vec<u8>>,
) -> Result<Vec<u8>, AttributeError> {
    let mut child = Command::new("git")
        .current_dir(work_dir)
        .arg(command)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // git writes stdout while still reading stdin.
    let writer = match (input, child.stdin.take()) {
        (Some(bytes), Some(mut stdin)) => {
            Some(std::thread::spawn(move || stdin.write_all(&bytes)))
        }
        _ => None,
    };
    let output = child.wait_with_output()?;
    let written = writer.map(std::thread::JoinHandle::join);

    if !output.status.success() {
        return Err(AttributeError::Git {
            command: command.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    if let Some(joined) = written {
        joined.map_err(|_| AttributeError::Git {
            command: command.to_string(),
            stderr: "stdin writer panicked".to_string(),
        })??;
    }

    Ok(output.stdout)
}

/// Parses `git check-attr -z` output: `path NUL attribute NUL info NUL`
/// records, grouped by path.
fn parse_check_attr(stdout: &[u8], attribute: &str) -> BTreeMap<String, FileAttributes> {
    let text = String::from_utf8_lossy(stdout);
    let fields: Vec<&str> = text.split('\0').collect();
    let mut by_path: BTreeMap<String, FileAttributes> = BTreeMap::new();

    for record in fields.chunks_exact(3) {
        let (path, name, info) = (record[0], record[1], record[2]);
        let attributes = by_path.entry(path.to_string()).or_default();
        if name == attribute {
            attributes.value = info.to_string();
        } else if name == "binary" {
            attributes.binary = info == "set";
        }
    }

    by_path
}

/// Attribute provider driven by a pattern table.
///
/// Every file counts as tracked. A file's attribute string is the
/// comma-joined values of every matching pattern.
#[derive(Debug, Clone, Default)]
pub struct StaticAttributes {
    entries: Vec<(Pattern, String)>,
}

impl StaticAttributes {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern and its attribute string.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn with_entry(
        mut self,
        pattern: &str,
        value: impl Into<String>,
    ) -> Result<Self, AttributeError> {
        self.entries.push((Pattern::new(pattern)?, value.into()));
        Ok(self)
    }

    /// Builds a table from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid glob.
    pub fn from_table(table: &BTreeMap<String, String>) -> Result<Self, AttributeError> {
        table
            .iter()
            .try_fold(Self::new(), |acc, (pattern, value)| {
                acc.with_entry(pattern, value.clone())
            })
    }
}

impl AttributeProvider for StaticAttributes {
    fn is_tracked(&self, _path: &Path) -> Result<bool, AttributeError> {
        Ok(true)
    }

    fn attributes(&self, path: &Path) -> Result<FileAttributes, AttributeError> {
        let path = normalize(path);
        let values: Vec<&str> = self
            .entries
            .iter()
            .filter(|(pattern, _)| pattern_matches(pattern, &path))
            .map(|(_, value)| value.as_str())
            .collect();

        Ok(FileAttributes {
            value: values.join(","),
            binary: false,
        })
    }
}
