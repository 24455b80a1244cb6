use std::cell::RefCell;

use crate::domain::{MergeMethod, PullRequest, ReleaseDraft};
use crate::error::{ReleaseGateError, Result};
use crate::host::{CreatedRelease, ReleaseHost};

/// A call the mock host received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Merge {
        pr: PullRequest,
        commit_title: String,
        method: MergeMethod,
    },
    Release {
        repository: String,
        draft: ReleaseDraft,
    },
}

/// Mock host for testing without network access
#[derive(Default)]
pub struct MockHost {
    calls: RefCell<Vec<HostCall>>,
    merge_status: Option<u16>,
    release_status: Option<u16>,
}

impl MockHost {
    /// Create a host where every call succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make merge calls fail with the given HTTP status
    pub fn failing_merge(mut self, status: u16) -> Self {
        self.merge_status = Some(status);
        self
    }

    /// Make release calls fail with the given HTTP status
    pub fn failing_release(mut self, status: u16) -> Self {
        self.release_status = Some(status);
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }
}

impl ReleaseHost for MockHost {
    fn merge_pull_request(
        &self,
        pr: &PullRequest,
        commit_title: &str,
        method: MergeMethod,
    ) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Merge {
            pr: pr.clone(),
            commit_title: commit_title.to_string(),
            method,
        });

        match self.merge_status {
            Some(status) => Err(ReleaseGateError::merge_failed(
                Some(status),
                "mock merge failure",
            )),
            None => Ok(()),
        }
    }

    fn create_release(&self, repository: &str, draft: &ReleaseDraft) -> Result<CreatedRelease> {
        self.calls.borrow_mut().push(HostCall::Release {
            repository: repository.to_string(),
            draft: draft.clone(),
        });

        match self.release_status {
            Some(status) => Err(ReleaseGateError::release_failed(
                Some(status),
                "mock release failure",
            )),
            None => Ok(CreatedRelease {
                tag_name: draft.tag_name.clone(),
                html_url: Some(format!(
                    "https://github.com/{}/releases/tag/{}",
                    repository, draft.tag_name
                )),
            }),
        }
    }
}
