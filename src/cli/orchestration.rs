//! Main workflow orchestration logic
//!
//! The release workflow runs strictly in order and stops at the first failure:
//! version gate, optional metadata checks, merge, release. Nothing here reads
//! the process environment; every input arrives in a [ReleaseRequest].

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{PullRequest, ReleaseDraft, SemanticVersion, VersionComparison};
use crate::error::{ReleaseGateError, Result};
use crate::gate;
use crate::host::ReleaseHost;
use crate::metadata;
use crate::warning::GateWarning;

/// Inputs of one release run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseRequest {
    /// Version proposed by the pull request
    pub candidate: String,

    /// Version currently on the target branch
    pub baseline: String,

    /// Pull request to merge; required unless `dry_run`
    pub pull_request: Option<PullRequest>,

    /// Metadata file checked by the optional validators
    pub metadata_path: PathBuf,

    /// Check that every configured required field is present
    pub validate_metadata: bool,

    /// Check the `depends` entries
    pub validate_dependencies: bool,

    /// Validate only; skip merge and release
    pub dry_run: bool,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The accepted candidate version
    pub version: SemanticVersion,

    /// How the candidate moved relative to the baseline
    pub comparison: VersionComparison,

    /// Tag of the release (rendered even on dry runs)
    pub tag: String,

    /// Whether the pull request was merged
    pub merged: bool,

    /// Whether the release was created
    pub released: bool,

    /// Release page reported by the host
    pub release_url: Option<String>,

    /// Non-fatal notes collected along the way
    pub warnings: Vec<GateWarning>,
}

/// Build the release payload for an accepted version
pub fn build_release_draft(version: &SemanticVersion, config: &Config) -> Result<ReleaseDraft> {
    let release = &config.release;
    Ok(ReleaseDraft {
        tag_name: release.tag_template()?.render_version(version),
        name: release.name_template()?.render_version(version),
        body: release.body_template().render_version(version),
        draft: release.draft,
        prerelease: release.mark_prereleases && version.is_prerelease(),
    })
}

/// Main release workflow
///
/// Orchestrates the whole run:
/// 1. Evaluate the candidate against the baseline
/// 2. Optionally validate required metadata fields and dependency names
/// 3. Stop here on a dry run
/// 4. Merge the pull request
/// 5. Create the release
///
/// # Arguments
///
/// * `request` - Versions, pull request and toggles for this run
/// * `config` - Release formatting and metadata settings
/// * `host` - Hosting API used for merge and release
///
/// # Returns
///
/// The accepted version and what was done with it, or the first error hit
pub fn run_release_workflow<H: ReleaseHost + ?Sized>(
    request: &ReleaseRequest,
    config: &Config,
    host: &H,
) -> Result<WorkflowResult> {
    let accepted = gate::evaluate_str(&request.candidate, &request.baseline)?;
    tracing::info!(
        candidate = %accepted.candidate,
        baseline = %accepted.baseline,
        bump = accepted.comparison.name(),
        "version accepted"
    );

    if request.validate_metadata || request.validate_dependencies {
        let expected = if request.validate_metadata {
            config
                .metadata
                .required_fields
                .first()
                .map(String::as_str)
                .unwrap_or("version")
        } else {
            "depends"
        };
        let metadata = metadata::load_expecting(&request.metadata_path, expected)?;
        if request.validate_metadata {
            metadata::validate_required_fields(&metadata, &config.metadata.required_fields)?;
            tracing::debug!(path = %metadata.path().display(), "required fields present");
        }
        if request.validate_dependencies {
            let names = metadata::validate_dependencies(&metadata)?;
            tracing::debug!(count = names.len(), "dependency names valid");
        }
    }

    let draft = build_release_draft(&accepted.candidate, config)?;
    let mut warnings = accepted.warnings.clone();

    if request.dry_run {
        warnings.push(GateWarning::DryRun {
            version: accepted.candidate.to_string(),
        });
        return Ok(WorkflowResult {
            version: accepted.candidate,
            comparison: accepted.comparison,
            tag: draft.tag_name,
            merged: false,
            released: false,
            release_url: None,
            warnings,
        });
    }

    let pr = request.pull_request.as_ref().ok_or_else(|| {
        ReleaseGateError::config("A repository and pull request number are required to merge")
    })?;

    let commit_title = config
        .release
        .commit_title_template()
        .render_commit_title(&accepted.candidate, pr);
    host.merge_pull_request(pr, &commit_title, config.release.merge_method)?;

    let created = host.create_release(&pr.repository, &draft)?;

    Ok(WorkflowResult {
        version: accepted.candidate,
        comparison: accepted.comparison,
        tag: created.tag_name,
        merged: true,
        released: true,
        release_url: created.html_url,
        warnings,
    })
}
