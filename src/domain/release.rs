use crate::error::{ReleaseGateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SemanticVersion;

/// Pull request being merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Repository in `owner/name` form
    pub repository: String,
    pub number: u64,
    pub title: String,
}

impl PullRequest {
    pub fn new(repository: impl Into<String>, number: u64, title: impl Into<String>) -> Self {
        PullRequest {
            repository: repository.into(),
            number,
            title: title.into(),
        }
    }
}

/// Merge strategy requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    Merge,
    #[default]
    Squash,
    Rebase,
}

impl MergeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeMethod::Merge => "merge",
            MergeMethod::Squash => "squash",
            MergeMethod::Rebase => "rebase",
        }
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text pattern with `{version}`, `{number}` and `{title}` placeholders
/// (e.g. "v{version}", "Merge PR #{number} - {title}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub pattern: String,
}

impl Template {
    pub fn new(pattern: impl Into<String>) -> Self {
        Template {
            pattern: pattern.into(),
        }
    }

    /// Create a template that must mention `{version}`
    pub fn versioned(pattern: impl Into<String>) -> Result<Self> {
        let template = Template::new(pattern);
        if !template.pattern.contains("{version}") {
            return Err(ReleaseGateError::config(format!(
                "Pattern '{}' must contain {{version}} placeholder",
                template.pattern
            )));
        }
        Ok(template)
    }

    /// Substitute the version placeholder
    pub fn render_version(&self, version: &SemanticVersion) -> String {
        self.pattern.replace("{version}", &version.to_string())
    }

    /// Substitute the version and pull request placeholders
    ///
    /// `{version}` is replaced first so a PR title containing the literal text
    /// `{version}` is left alone.
    pub fn render_commit_title(&self, version: &SemanticVersion, pr: &PullRequest) -> String {
        self.render_version(version)
            .replace("{number}", &pr.number.to_string())
            .replace("{title}", &pr.title)
    }
}

/// Release about to be created on the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDraft {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}
