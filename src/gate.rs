//! Version gate - decides whether a candidate version is a valid increment
//! over the baseline.
//!
//! Rules, in order:
//! 1. The candidate must sort strictly above the baseline.
//! 2. A major bump resets minor and patch to 0.
//! 3. A minor bump resets patch to 0.
//! 4. A patch-only bump moves patch by exactly one.
//!
//! A pre-release label on the candidate never rejects on its own; it only adds
//! a [`GateWarning::PreReleaseCandidate`] to the accepted decision.

use thiserror::Error;

use crate::domain::{SemanticVersion, VersionComparison};
use crate::error::Result;
use crate::warning::GateWarning;

/// Reasons the gate refuses a candidate version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Version {candidate} is not an increment over {baseline}")]
    NotAnIncrement { candidate: String, baseline: String },

    #[error("Major version increment ({baseline} -> {candidate}) requires MINOR and PATCH to reset to 0")]
    MajorBumpMustResetMinorPatch { candidate: String, baseline: String },

    #[error("Minor version increment ({baseline} -> {candidate}) requires PATCH to reset to 0")]
    MinorBumpMustResetPatch { candidate: String, baseline: String },

    #[error("Patch version increment ({baseline} -> {candidate}) must be sequential: expected patch {expected_patch}")]
    PatchMustBeSequential {
        candidate: String,
        baseline: String,
        expected_patch: u64,
    },
}

/// A candidate the gate let through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub candidate: SemanticVersion,
    pub baseline: SemanticVersion,
    pub comparison: VersionComparison,
    pub warnings: Vec<GateWarning>,
}

impl Accepted {
    pub fn is_prerelease(&self) -> bool {
        self.candidate.is_prerelease()
    }
}

/// Evaluate `candidate` against `baseline`.
pub fn evaluate(
    candidate: &SemanticVersion,
    baseline: &SemanticVersion,
) -> std::result::Result<Accepted, Rejection> {
    let names = || (candidate.to_string(), baseline.to_string());

    let comparison = VersionComparison::classify(candidate, baseline);
    match comparison {
        VersionComparison::NoChangeOrRegression => {
            let (candidate, baseline) = names();
            return Err(Rejection::NotAnIncrement {
                candidate,
                baseline,
            });
        }
        VersionComparison::MajorBump => {
            if candidate.minor != 0 || candidate.patch != 0 {
                let (candidate, baseline) = names();
                return Err(Rejection::MajorBumpMustResetMinorPatch {
                    candidate,
                    baseline,
                });
            }
        }
        VersionComparison::MinorBump => {
            if candidate.patch != 0 {
                let (candidate, baseline) = names();
                return Err(Rejection::MinorBumpMustResetPatch {
                    candidate,
                    baseline,
                });
            }
        }
        VersionComparison::PatchBump => {
            // A baseline patch of u64::MAX cannot be followed by anything.
            let expected = baseline.patch.checked_add(1);
            if expected != Some(candidate.patch) {
                let (candidate, baseline) = names();
                return Err(Rejection::PatchMustBeSequential {
                    candidate,
                    baseline,
                    expected_patch: expected.unwrap_or(u64::MAX),
                });
            }
        }
    }

    let mut warnings = Vec::new();
    if let Some(label) = candidate.prerelease_label() {
        warnings.push(GateWarning::PreReleaseCandidate {
            version: candidate.to_string(),
            label: label.to_string(),
        });
    }

    Ok(Accepted {
        candidate: candidate.clone(),
        baseline: baseline.clone(),
        comparison,
        warnings,
    })
}

/// Parse both version strings, then [`evaluate`].
///
/// Malformed input fails with `InvalidVersionFormat` before any comparison.
pub fn evaluate_str(candidate: &str, baseline: &str) -> Result<Accepted> {
    let candidate = SemanticVersion::parse(candidate)?;
    let baseline = SemanticVersion::parse(baseline)?;
    Ok(evaluate(&candidate, &baseline)?)
}
