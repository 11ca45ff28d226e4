//! Context types for rule execution.

use crate::attributes::FileAttributes;
use std::path::Path;

/// Everything the engine needs to know about one candidate file.
///
/// Discovery and attribute lookup happen before this is built; the engine
/// only reads from it.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path as given on the command line or found during discovery.
    pub path: &'a Path,
    /// Raw file contents.
    pub content: &'a [u8],
    /// Whether the file was named explicitly on the invocation.
    pub is_explicit: bool,
    /// Whether the file is under version control.
    pub is_tracked: bool,
    /// Per-file attributes supplied by the attribute provider.
    pub attributes: FileAttributes,
}

impl<'a> FileContext<'a> {
    /// Creates a context for an explicitly named, tracked file with no
    /// attributes.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a [u8]) -> Self {
        Self {
            path,
            content,
            is_explicit: true,
            is_tracked: true,
            attributes: FileAttributes::default(),
        }
    }

    /// Sets whether the file was named explicitly.
    #[must_use]
    pub fn explicit(mut self, explicit: bool) -> Self {
        self.is_explicit = explicit;
        self
    }

    /// Sets whether the file is under version control.
    #[must_use]
    pub fn tracked(mut self, tracked: bool) -> Self {
        self.is_tracked = tracked;
        self
    }

    /// Sets the attribute string for this file.
    #[must_use]
    pub fn attribute(mut self, value: impl Into<String>) -> Self {
        self.attributes.value = value.into();
        self
    }

    /// Sets the binary flag for this file.
    #[must_use]
    pub fn binary(mut self, binary: bool) -> Self {
        self.attributes.binary = binary;
        self
    }

    /// Sets all attributes at once.
    #[must_use]
    pub fn with_attributes(mut self, attributes: FileAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}
