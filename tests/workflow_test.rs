// tests/workflow_test.rs
use release_gate::cli::{run_release_workflow, ReleaseRequest};
use release_gate::config::Config;
use release_gate::domain::{MergeMethod, PullRequest, VersionComparison};
use release_gate::host::{HostCall, MockHost};
use release_gate::ReleaseGateError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const COMPLETE: &str = "\
name=Blink
version=1.6.0
author=Jane Doe
maintainer=Jane Doe <jane@example.com>
sentence=Blinks an LED.
paragraph=Blinks an LED without delay().
category=Timing
url=https://example.com/blink
depends=Servo, Adafruit GFX Library
";

fn metadata_dir(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("library.properties"), content).unwrap();
    dir
}

fn request(metadata_path: &Path) -> ReleaseRequest {
    ReleaseRequest {
        candidate: "1.6.0".to_string(),
        baseline: "1.5.3".to_string(),
        pull_request: Some(PullRequest::new("acme/blink", 12, "Release 1.6.0")),
        metadata_path: metadata_path.to_path_buf(),
        validate_metadata: true,
        validate_dependencies: true,
        dry_run: false,
    }
}

#[test]
fn test_full_run_with_validation() {
    let dir = metadata_dir(COMPLETE);
    let host = MockHost::new();

    let result = run_release_workflow(
        &request(&dir.path().join("library.properties")),
        &Config::default(),
        &host,
    )
    .unwrap();

    assert_eq!(result.comparison, VersionComparison::MinorBump);
    assert!(result.merged && result.released);
    assert_eq!(
        result.release_url.as_deref(),
        Some("https://github.com/acme/blink/releases/tag/v1.6.0")
    );

    let calls = host.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(&calls[0], HostCall::Merge { method: MergeMethod::Squash, .. }));
    assert!(matches!(&calls[1], HostCall::Release { .. }));
}

#[test]
fn test_missing_required_field_stops_before_merge() {
    let dir = metadata_dir(&COMPLETE.replace("url=https://example.com/blink\n", ""));
    let host = MockHost::new();

    let err = run_release_workflow(
        &request(&dir.path().join("library.properties")),
        &Config::default(),
        &host,
    )
    .unwrap_err();

    assert!(matches!(err, ReleaseGateError::MissingRequiredField(ref name) if name == "url"));
    assert!(host.calls().is_empty());
}

#[test]
fn test_invalid_dependency_stops_before_merge() {
    let dir = metadata_dir(&COMPLETE.replace("Servo,", "Servo (>=1.0),"));
    let host = MockHost::new();

    let err = run_release_workflow(
        &request(&dir.path().join("library.properties")),
        &Config::default(),
        &host,
    )
    .unwrap_err();

    assert!(matches!(err, ReleaseGateError::InvalidDependencyName(ref name) if name == "Servo (>=1.0)"));
    assert!(host.calls().is_empty());
}

#[test]
fn test_validators_skipped_when_disabled() {
    let host = MockHost::new();
    let mut req = request(Path::new("missing/library.properties"));
    req.validate_metadata = false;
    req.validate_dependencies = false;

    assert!(run_release_workflow(&req, &Config::default(), &host).is_ok());
    assert_eq!(host.calls().len(), 2);
}

#[test]
fn test_custom_release_formatting() {
    let dir = metadata_dir(COMPLETE);
    let host = MockHost::new();
    let mut config = Config::default();
    config.release.tag_pattern = "{version}".to_string();
    config.release.name_pattern = "Blink {version}".to_string();
    config.release.commit_title_pattern = "{title} (#{number})".to_string();
    config.release.merge_method = MergeMethod::Rebase;
    config.release.draft = true;

    let result = run_release_workflow(
        &request(&dir.path().join("library.properties")),
        &config,
        &host,
    )
    .unwrap();
    assert_eq!(result.tag, "1.6.0");

    match &host.calls()[..] {
        [HostCall::Merge {
            commit_title,
            method,
            ..
        }, HostCall::Release { draft, .. }] => {
            assert_eq!(commit_title, "Release 1.6.0 (#12)");
            assert_eq!(*method, MergeMethod::Rebase);
            assert_eq!(draft.name, "Blink 1.6.0");
            assert!(draft.draft);
        }
        calls => panic!("unexpected calls: {:?}", calls),
    }
}

#[test]
fn test_missing_metadata_file_names_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.properties");
    let host = MockHost::new();

    let err = run_release_workflow(&request(&path), &Config::default(), &host).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Missing field 'name' in {}", path.display())
    );
    assert!(host.calls().is_empty());
}
