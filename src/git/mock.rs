use crate::error::{ReleaseGateError, Result};
use crate::git::Repository;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory repository for testing without a real git checkout
pub struct MockRepository {
    files: HashMap<(String, PathBuf), String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            files: HashMap::new(),
        }
    }

    /// Record the contents of `path` at `reference`
    pub fn add_file(
        &mut self,
        reference: impl Into<String>,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) {
        self.files
            .insert((reference.into(), path.into()), content.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn read_file_at(&self, reference: &str, path: &Path) -> Result<String> {
        self.files
            .get(&(reference.to_string(), path.to_path_buf()))
            .cloned()
            .ok_or_else(|| {
                ReleaseGateError::missing_field(
                    "version",
                    format!("{}:{}", reference, path.display()),
                )
            })
    }
}
