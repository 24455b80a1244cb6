//! Domain logic - pure release rules independent of the host API and the filesystem

pub mod comparison;
pub mod release;
pub mod version;

pub use comparison::VersionComparison;
pub use release::{MergeMethod, PullRequest, ReleaseDraft, Template};
pub use version::SemanticVersion;
