//! Candidate file discovery.
//!
//! Explicit file arguments are always candidates. Directory arguments are
//! walked recursively in file-name order; `.git`, excluded paths and
//! directories whose attribute contains `prune` are not descended into.

use crate::attributes::AttributeProvider;
use crate::exceptions::AttributeValue;
use crate::utils::paths::{is_git_dir, normalize, pattern_matches};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A file handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path as given or as found under a directory argument.
    pub path: PathBuf,
    /// Whether the path was named on the invocation.
    pub is_explicit: bool,
}

impl Candidate {
    /// Creates a candidate.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, is_explicit: bool) -> Self {
        Self {
            path: path.into(),
            is_explicit,
        }
    }
}

/// Expands invocation paths into candidate files.
///
/// Missing paths are logged and skipped.
#[must_use]
pub fn discover(
    paths: &[PathBuf],
    provider: &dyn AttributeProvider,
    exclude: &[Pattern],
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for path in paths {
        if path.is_dir() {
            walk(path, provider, exclude, &mut candidates);
        } else if path.exists() {
            candidates.push(Candidate::new(path.clone(), true));
        } else {
            warn!("No such file or directory: {}", path.display());
        }
    }

    debug!("Discovered {} candidate files", candidates.len());
    candidates
}

fn walk(
    root: &Path,
    provider: &dyn AttributeProvider,
    exclude: &[Pattern],
    candidates: &mut Vec<Candidate>,
) {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned(entry, provider, exclude));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                candidates.push(Candidate::new(entry.into_path(), false));
            }
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable entry: {e}"),
        }
    }
}

fn is_pruned(entry: &DirEntry, provider: &dyn AttributeProvider, exclude: &[Pattern]) -> bool {
    let path = entry.path();
    if is_git_dir(path) {
        return true;
    }

    let normalized = normalize(path);
    if exclude.iter().any(|p| pattern_matches(p, &normalized)) {
        debug!("Excluding: {}", path.display());
        return true;
    }

    if !entry.file_type().is_dir() {
        return false;
    }

    match provider.attributes(path) {
        Ok(attributes) if AttributeValue::parse(&attributes.value).prune => {
            debug!("Pruning directory: {}", path.display());
            true
        }
        Ok(_) => false,
        Err(e) => {
            warn!("Attribute lookup failed for {}: {e}", path.display());
            false
        }
    }
}
