//! Resolution of process inputs into workflow values.

use std::path::PathBuf;

use crate::domain::PullRequest;
use crate::error::{ReleaseGateError, Result};
use crate::git::{self, Repository};
use crate::metadata;

/// Where a version string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Given directly (flag or environment)
    Literal(String),
    /// The `version` key of a metadata file in the working tree
    MetadataFile(PathBuf),
    /// The `version` key of a metadata file as committed at a git reference
    GitRef { reference: String, path: PathBuf },
}

impl VersionSource {
    /// Whether resolving this source needs a git repository
    pub fn needs_repository(&self) -> bool {
        matches!(self, VersionSource::GitRef { .. })
    }

    /// Produce the version string.
    ///
    /// `repo` is only consulted for [VersionSource::GitRef].
    pub fn resolve<R: Repository + ?Sized>(&self, repo: Option<&R>) -> Result<String> {
        match self {
            VersionSource::Literal(version) => Ok(version.trim().to_string()),
            VersionSource::MetadataFile(path) => metadata::read_version(path),
            VersionSource::GitRef { reference, path } => {
                let repo = repo.ok_or_else(|| {
                    ReleaseGateError::config(format!(
                        "Reading the baseline from '{}' requires a git repository",
                        reference
                    ))
                })?;
                git::read_baseline_version(repo, reference, path)
            }
        }
    }
}

/// Build the pull request from its parts.
///
/// Returns `None` when neither repository nor number is given; a partial set is
/// an error. `repository` must be `owner/name`.
pub fn pull_request_from(
    repository: Option<&str>,
    number: Option<u64>,
    title: Option<&str>,
) -> Result<Option<PullRequest>> {
    match (repository, number) {
        (None, None) => Ok(None),
        (Some(repository), Some(number)) => {
            let valid = matches!(
                repository.split_once('/'),
                Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
            );
            if !valid {
                return Err(ReleaseGateError::config(format!(
                    "Repository '{}' must be in owner/name form",
                    repository
                )));
            }
            Ok(Some(PullRequest::new(
                repository,
                number,
                title.unwrap_or_default(),
            )))
        }
        (None, Some(_)) => Err(ReleaseGateError::config(
            "A pull request number was given without a repository",
        )),
        (Some(_), None) => Err(ReleaseGateError::config(
            "A repository was given without a pull request number",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use std::path::Path;

    #[test]
    fn test_literal_source_is_trimmed() {
        let source = VersionSource::Literal(" 1.2.3\n".to_string());
        assert_eq!(source.resolve::<MockRepository>(None).unwrap(), "1.2.3");
        assert!(!source.needs_repository());
    }

    #[test]
    fn test_git_ref_source_reads_committed_file() {
        let mut repo = MockRepository::new();
        repo.add_file("origin/main", "library.properties", "version=1.5.3\n");
        let source = VersionSource::GitRef {
            reference: "origin/main".to_string(),
            path: PathBuf::from("library.properties"),
        };

        assert!(source.needs_repository());
        assert_eq!(source.resolve(Some(&repo)).unwrap(), "1.5.3");
    }

    #[test]
    fn test_git_ref_source_without_repository() {
        let source = VersionSource::GitRef {
            reference: "origin/main".to_string(),
            path: PathBuf::from("library.properties"),
        };
        assert!(matches!(
            source.resolve::<MockRepository>(None),
            Err(ReleaseGateError::Config(_))
        ));
    }

    #[test]
    fn test_metadata_source_missing_file() {
        let source = VersionSource::MetadataFile(Path::new("no/such/library.properties").into());
        assert!(matches!(
            source.resolve::<MockRepository>(None),
            Err(ReleaseGateError::MissingField { .. })
        ));
    }

    #[test]
    fn test_pull_request_from_parts() {
        let pr = pull_request_from(Some("acme/widget"), Some(3), Some("Bump"))
            .unwrap()
            .unwrap();
        assert_eq!(pr, PullRequest::new("acme/widget", 3, "Bump"));

        let pr = pull_request_from(Some("acme/widget"), Some(3), None)
            .unwrap()
            .unwrap();
        assert_eq!(pr.title, "");
    }

    #[test]
    fn test_pull_request_absent() {
        assert_eq!(pull_request_from(None, None, Some("ignored")).unwrap(), None);
    }

    #[test]
    fn test_pull_request_partial_or_malformed() {
        assert!(pull_request_from(Some("acme/widget"), None, None).is_err());
        assert!(pull_request_from(None, Some(1), None).is_err());
        for bad in ["widget", "/widget", "acme/", "acme/widget/extra"] {
            assert!(
                pull_request_from(Some(bad), Some(1), None).is_err(),
                "{} should be rejected",
                bad
            );
        }
    }
}
