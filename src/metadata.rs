//! `key=value` metadata file handling (Arduino `library.properties` style).
//!
//! Parsing rules: one entry per line, split on the first `=`, key and value
//! trimmed. Blank lines, comment lines (`#` or `!`) and lines without `=` are
//! skipped. A later duplicate key overrides an earlier one.

use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseGateError, Result};

/// Keys every published library must declare
pub const DEFAULT_REQUIRED_FIELDS: [&str; 8] = [
    "name",
    "version",
    "author",
    "maintainer",
    "sentence",
    "paragraph",
    "category",
    "url",
];

/// Parsed metadata file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFile {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl MetadataFile {
    /// Read and parse a metadata file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let metadata = MetadataFile::parse(path, &content);
        tracing::debug!(
            path = %path.display(),
            entries = metadata.entries.len(),
            "metadata file loaded"
        );
        Ok(metadata)
    }

    /// Parse metadata text; `path` is only used in error messages
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                entries.insert(key.to_string(), value.trim().to_string());
            }
        }

        MetadataFile {
            path: path.into(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value for `key`, treating an empty value as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Value for `key`, or `MissingField`
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| ReleaseGateError::missing_field(key, &self.path))
    }

    /// The `version` value
    pub fn version(&self) -> Result<&str> {
        self.require("version")
    }

    /// Entries of the `depends` line, trimmed, with empty entries dropped
    pub fn dependencies(&self) -> Vec<&str> {
        match self.get("depends") {
            Some(line) => line
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Read the `version` value from a metadata file.
///
/// A file that does not exist is reported as `MissingField`, same as a file
/// without the key.
pub fn read_version(path: impl AsRef<Path>) -> Result<String> {
    let metadata = load_expecting(path, "version")?;
    Ok(metadata.version()?.to_string())
}

/// Load a metadata file, reporting a file that does not exist as `field`
/// missing from it.
pub fn load_expecting(path: impl AsRef<Path>, field: &str) -> Result<MetadataFile> {
    let path = path.as_ref();
    match MetadataFile::load(path) {
        Err(ReleaseGateError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            Err(ReleaseGateError::missing_field(field, path))
        }
        other => other,
    }
}

/// Check that every field in `fields` is present and non-empty.
///
/// Reports the first missing field in list order.
pub fn validate_required_fields<S: AsRef<str>>(metadata: &MetadataFile, fields: &[S]) -> Result<()> {
    for field in fields {
        let field = field.as_ref();
        if metadata.get(field).is_none() {
            return Err(ReleaseGateError::MissingRequiredField(field.to_string()));
        }
    }
    Ok(())
}

/// Check every `depends` entry against the allowed character set
/// (letters, digits, spaces, underscores and hyphens).
///
/// Returns the validated names. A file without `depends` is valid.
pub fn validate_dependencies(metadata: &MetadataFile) -> Result<Vec<String>> {
    let re = Regex::new(r"^[A-Za-z0-9 _-]+$")
        .map_err(|e| ReleaseGateError::config(format!("Invalid dependency pattern: {}", e)))?;

    let mut names = Vec::new();
    for entry in metadata.dependencies() {
        if !re.is_match(entry) {
            return Err(ReleaseGateError::InvalidDependencyName(entry.to_string()));
        }
        names.push(entry.to_string());
    }
    Ok(names)
}
