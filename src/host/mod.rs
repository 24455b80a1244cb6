//! Remote hosting API abstraction
//!
//! [ReleaseHost] covers the two calls a release needs: merging the pull
//! request and creating the release. [github::GitHubHost] talks to the GitHub
//! REST API; [mock::MockHost] records calls for tests.
//!
//! Calls are blocking and never retried. Any response other than the expected
//! success status is an error that ends the run.

pub mod github;
pub mod mock;

pub use github::GitHubHost;
pub use mock::{HostCall, MockHost};

use crate::domain::{MergeMethod, PullRequest, ReleaseDraft};
use crate::error::Result;

/// Release created on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRelease {
    pub tag_name: String,
    /// Web page of the release, when the host reports one
    pub html_url: Option<String>,
}

/// Operations the release workflow needs from the hosting service
pub trait ReleaseHost {
    /// Merge `pr` with the given commit title and strategy
    ///
    /// # Returns
    /// * `Ok(())` - The host reported the pull request as merged
    /// * `Err(MergeFailed)` - Any other status, or a transport failure
    fn merge_pull_request(
        &self,
        pr: &PullRequest,
        commit_title: &str,
        method: MergeMethod,
    ) -> Result<()>;

    /// Create a release in `repository` (`owner/name`)
    ///
    /// # Returns
    /// * `Ok(CreatedRelease)` - The host reported the release as created
    /// * `Err(ReleaseCreationFailed)` - Any other status, or a transport failure
    fn create_release(&self, repository: &str, draft: &ReleaseDraft) -> Result<CreatedRelease>;
}
