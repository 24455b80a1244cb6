// tests/git_baseline_test.rs
use release_gate::git::{read_baseline_version, Git2Repository};
use release_gate::ReleaseGateError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a repository with one commit holding `library.properties`
fn repo_with_commit(content: &str) -> (TempDir, git2::Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("library.properties"), content).unwrap();

    {
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("library.properties")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
    }

    (dir, repo)
}

#[test]
fn test_reads_committed_version_not_working_tree() {
    let (dir, repo) = repo_with_commit("name=Blink\nversion=1.5.3\n");
    fs::write(dir.path().join("library.properties"), "name=Blink\nversion=1.6.0\n").unwrap();

    let repo = Git2Repository::from_git2(repo);
    let version =
        read_baseline_version(&repo, "HEAD", Path::new("library.properties")).unwrap();
    assert_eq!(version, "1.5.3");
}

#[test]
fn test_open_discovers_repository() {
    let (dir, _repo) = repo_with_commit("version=2.0.0\n");

    let repo = Git2Repository::open(dir.path()).unwrap();
    let version =
        read_baseline_version(&repo, "HEAD", Path::new("library.properties")).unwrap();
    assert_eq!(version, "2.0.0");
}

#[test]
fn test_missing_file_at_reference() {
    let (_dir, repo) = repo_with_commit("version=1.0.0\n");
    let repo = Git2Repository::from_git2(repo);

    let err = read_baseline_version(&repo, "HEAD", Path::new("other.properties")).unwrap_err();
    assert!(matches!(err, ReleaseGateError::MissingField { .. }));
}

#[test]
fn test_unknown_reference() {
    let (_dir, repo) = repo_with_commit("version=1.0.0\n");
    let repo = Git2Repository::from_git2(repo);

    let err = read_baseline_version(&repo, "no-such-branch", Path::new("library.properties"))
        .unwrap_err();
    assert!(matches!(err, ReleaseGateError::Config(_)));
    assert!(err.to_string().contains("no-such-branch"));
}
