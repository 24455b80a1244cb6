use std::fmt;

use super::SemanticVersion;

/// How a candidate version relates to the baseline it replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComparison {
    MajorBump,
    MinorBump,
    PatchBump,
    NoChangeOrRegression,
}

impl VersionComparison {
    /// Classify `candidate` against `baseline`.
    ///
    /// Anything that does not sort strictly above the baseline is
    /// `NoChangeOrRegression`; otherwise the highest component that moved decides.
    /// A candidate whose numeric triple matches the baseline but whose
    /// pre-release precedence is higher counts as `PatchBump`.
    pub fn classify(candidate: &SemanticVersion, baseline: &SemanticVersion) -> Self {
        if candidate <= baseline {
            VersionComparison::NoChangeOrRegression
        } else if candidate.major > baseline.major {
            VersionComparison::MajorBump
        } else if candidate.minor > baseline.minor {
            VersionComparison::MinorBump
        } else {
            VersionComparison::PatchBump
        }
    }

    /// Short lowercase name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            VersionComparison::MajorBump => "major",
            VersionComparison::MinorBump => "minor",
            VersionComparison::PatchBump => "patch",
            VersionComparison::NoChangeOrRegression => "none",
        }
    }
}

impl fmt::Display for VersionComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionComparison::MajorBump => write!(f, "major bump"),
            VersionComparison::MinorBump => write!(f, "minor bump"),
            VersionComparison::PatchBump => write!(f, "patch bump"),
            VersionComparison::NoChangeOrRegression => write!(f, "no change or regression"),
        }
    }
}
