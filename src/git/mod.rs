//! Git access for reading the baseline metadata file.
//!
//! The baseline version is whatever the metadata file says on the target
//! branch. [Repository] abstracts reading a committed file so the workflow can
//! run against a real repository ([repository::Git2Repository]) or an
//! in-memory one ([mock::MockRepository]) in tests.
//!
//! ```rust
//! # use release_gate::git::{read_baseline_version, Repository};
//! # use std::path::Path;
//! # fn example<R: Repository>(repo: &R) -> release_gate::Result<()> {
//! let baseline = read_baseline_version(repo, "origin/main", Path::new("library.properties"))?;
//! println!("main is at {}", baseline);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use crate::error::Result;
use crate::metadata::MetadataFile;

/// Read-only view of committed files
pub trait Repository {
    /// Contents of `path` as committed at `reference`
    ///
    /// `reference` is any revision git understands ("origin/main", "v1.2.0",
    /// a commit hash). `path` is relative to the repository root.
    ///
    /// # Returns
    /// * `Ok(String)` - File contents
    /// * `Err(MissingField)` - If the file does not exist at that revision
    /// * `Err` - If the revision cannot be resolved or the file is not UTF-8
    fn read_file_at(&self, reference: &str, path: &Path) -> Result<String>;
}

/// Read the `version` value from the metadata file as committed at `reference`.
pub fn read_baseline_version<R: Repository + ?Sized>(
    repo: &R,
    reference: &str,
    path: &Path,
) -> Result<String> {
    let content = repo.read_file_at(reference, path)?;
    let metadata = MetadataFile::parse(format!("{}:{}", reference, path.display()), &content);
    let version = metadata.version()?.to_string();
    tracing::debug!(reference, path = %path.display(), %version, "baseline version read");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseGateError;

    #[test]
    fn test_read_baseline_version_from_mock() {
        let mut repo = MockRepository::new();
        repo.add_file("origin/main", "library.properties", "name=Foo\nversion=1.5.3\n");

        let version =
            read_baseline_version(&repo, "origin/main", Path::new("library.properties")).unwrap();
        assert_eq!(version, "1.5.3");
    }

    #[test]
    fn test_read_baseline_version_without_key() {
        let mut repo = MockRepository::new();
        repo.add_file("origin/main", "library.properties", "name=Foo\n");

        let err = read_baseline_version(&repo, "origin/main", Path::new("library.properties"))
            .unwrap_err();
        match err {
            ReleaseGateError::MissingField { field, path } => {
                assert_eq!(field, "version");
                assert_eq!(path.to_string_lossy(), "origin/main:library.properties");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
