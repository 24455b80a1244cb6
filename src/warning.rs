use std::fmt;

/// Non-fatal notes attached to an accepted release.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateWarning {
    /// Candidate carries a pre-release label
    PreReleaseCandidate { version: String, label: String },
    /// Merge and release were skipped
    DryRun { version: String },
}

impl fmt::Display for GateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateWarning::PreReleaseCandidate { version, label } => {
                write!(
                    f,
                    "Version {} is a pre-release ('{}'); it was accepted as a normal increment",
                    version, label
                )
            }
            GateWarning::DryRun { version } => {
                write!(
                    f,
                    "Dry run: version {} was validated but nothing was merged or released",
                    version
                )
            }
        }
    }
}
