use crate::error::{ReleaseGateError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn read_file_at(&self, reference: &str, path: &Path) -> Result<String> {
        let commit = self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                ReleaseGateError::config(format!(
                    "Cannot resolve git reference '{}': {}",
                    reference,
                    e.message()
                ))
            })?;

        let tree = commit.tree()?;
        let entry = match tree.get_path(path) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(ReleaseGateError::missing_field(
                    "version",
                    format!("{}:{}", reference, path.display()),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        String::from_utf8(blob.content().to_vec()).map_err(|_| {
            ReleaseGateError::config(format!(
                "{}:{} is not valid UTF-8",
                reference,
                path.display()
            ))
        })
    }
}
