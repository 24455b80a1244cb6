use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{MergeMethod, PullRequest, ReleaseDraft};
use crate::error::{ReleaseGateError, Result};
use crate::host::{CreatedRelease, ReleaseHost};

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("release-gate/", env!("CARGO_PKG_VERSION"));

/// Status GitHub answers a successful merge with
const MERGED: u16 = 200;
/// Status GitHub answers a successful release creation with
const CREATED: u16 = 201;

#[derive(Serialize)]
struct MergeBody<'a> {
    commit_title: &'a str,
    merge_method: &'a str,
}

#[derive(Deserialize)]
struct ReleaseResponse {
    tag_name: Option<String>,
    html_url: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// GitHub REST API client
pub struct GitHubHost {
    agent: ureq::Agent,
    base_url: String,
    token: String,
}

impl GitHubHost {
    /// Create a client for `base_url` (e.g. "https://api.github.com")
    ///
    /// # Arguments
    /// * `base_url` - API root, without trailing slash
    /// * `token` - Token sent as `Authorization: token <token>`
    /// * `timeout` - Upper bound for each whole request
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .into();

        GitHubHost {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn merge_url(&self, pr: &PullRequest) -> String {
        format!(
            "{}/repos/{}/pulls/{}/merge",
            self.base_url, pr.repository, pr.number
        )
    }

    pub fn releases_url(&self, repository: &str) -> String {
        format!("{}/repos/{}/releases", self.base_url, repository)
    }

    fn authorization(&self) -> String {
        format!("token {}", self.token)
    }
}

/// Pull the `message` out of a GitHub error body, falling back to the raw text
fn api_message(body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

impl ReleaseHost for GitHubHost {
    fn merge_pull_request(
        &self,
        pr: &PullRequest,
        commit_title: &str,
        method: MergeMethod,
    ) -> Result<()> {
        let url = self.merge_url(pr);
        tracing::debug!(%url, merge_method = %method, "merging pull request");

        let body = MergeBody {
            commit_title,
            merge_method: method.as_str(),
        };

        let mut response = self
            .agent
            .put(&url)
            .header("Authorization", self.authorization())
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send_json(&body)
            .map_err(|e| ReleaseGateError::merge_failed(None, e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ReleaseGateError::merge_failed(Some(status), e.to_string()))?;

        tracing::info!(
            repository = %pr.repository,
            number = pr.number,
            status,
            "merge request complete"
        );

        if status != MERGED {
            return Err(ReleaseGateError::merge_failed(
                Some(status),
                api_message(&text),
            ));
        }
        Ok(())
    }

    fn create_release(&self, repository: &str, draft: &ReleaseDraft) -> Result<CreatedRelease> {
        let url = self.releases_url(repository);
        tracing::debug!(%url, tag = %draft.tag_name, "creating release");

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", self.authorization())
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send_json(draft)
            .map_err(|e| ReleaseGateError::release_failed(None, e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ReleaseGateError::release_failed(Some(status), e.to_string()))?;

        tracing::info!(repository, tag = %draft.tag_name, status, "release request complete");

        if status != CREATED {
            return Err(ReleaseGateError::release_failed(
                Some(status),
                api_message(&text),
            ));
        }

        let created = serde_json::from_str::<ReleaseResponse>(&text).ok();
        Ok(CreatedRelease {
            tag_name: created
                .as_ref()
                .and_then(|r| r.tag_name.clone())
                .unwrap_or_else(|| draft.tag_name.clone()),
            html_url: created.and_then(|r| r.html_url),
        })
    }
}
