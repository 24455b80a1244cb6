use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{MergeMethod, Template};
use crate::error::{ReleaseGateError, Result};
use crate::metadata::DEFAULT_REQUIRED_FIELDS;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "release-gate.toml";

/// Represents the complete configuration for release-gate.
///
/// Contains the API endpoint, metadata file settings and release formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Hosting API settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from("library.properties")
}

fn default_required_fields() -> Vec<String> {
    DEFAULT_REQUIRED_FIELDS
        .iter()
        .map(|field| field.to_string())
        .collect()
}

/// Metadata file settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MetadataConfig {
    #[serde(default = "default_metadata_path")]
    pub path: PathBuf,

    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        MetadataConfig {
            path: default_metadata_path(),
            required_fields: default_required_fields(),
        }
    }
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_name_pattern() -> String {
    "Release v{version}".to_string()
}

fn default_body_template() -> String {
    "Changelog:\n- Updated to version {version}".to_string()
}

fn default_commit_title_pattern() -> String {
    "Merge PR #{number} - {title}".to_string()
}

/// Release and merge formatting.
///
/// Patterns use `{version}`; the commit title uses `{number}` and `{title}`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_name_pattern")]
    pub name_pattern: String,

    #[serde(default = "default_body_template")]
    pub body_template: String,

    #[serde(default = "default_commit_title_pattern")]
    pub commit_title_pattern: String,

    #[serde(default)]
    pub merge_method: MergeMethod,

    #[serde(default)]
    pub draft: bool,

    /// Flag releases of labelled versions (e.g. `1.6.0-beta`) as pre-releases
    #[serde(default)]
    pub mark_prereleases: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_pattern: default_tag_pattern(),
            name_pattern: default_name_pattern(),
            body_template: default_body_template(),
            commit_title_pattern: default_commit_title_pattern(),
            merge_method: MergeMethod::default(),
            draft: false,
            mark_prereleases: false,
        }
    }
}

impl ReleaseConfig {
    pub fn tag_template(&self) -> Result<Template> {
        Template::versioned(&self.tag_pattern)
    }

    pub fn name_template(&self) -> Result<Template> {
        Template::versioned(&self.name_pattern)
    }

    pub fn body_template(&self) -> Template {
        Template::new(&self.body_template)
    }

    pub fn commit_title_template(&self) -> Template {
        Template::new(&self.commit_title_pattern)
    }
}

impl Config {
    /// Check the settings that cannot be checked by deserialization alone
    pub fn validate(&self) -> Result<()> {
        self.release.tag_template()?;
        self.release.name_template()?;
        if self.api.base_url.trim().is_empty() {
            return Err(ReleaseGateError::config("api.base_url must not be empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(ReleaseGateError::config("api.timeout_secs must be positive"));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-gate.toml` in current directory
/// 3. `release-gate.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    let config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = fs::read_to_string(&path).map_err(|e| {
                ReleaseGateError::config(format!("Cannot read {}: {}", path.display(), e))
            })?;
            toml::from_str::<Config>(&content).map_err(|e| {
                ReleaseGateError::config(format!("Cannot parse {}: {}", path.display(), e))
            })?
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.metadata.path, PathBuf::from("library.properties"));
        assert_eq!(config.metadata.required_fields.len(), 8);
        assert_eq!(config.release.merge_method, MergeMethod::Squash);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[release]
merge_method = "rebase"
"#,
        )
        .unwrap();
        assert_eq!(config.release.merge_method, MergeMethod::Rebase);
        assert_eq!(config.release.tag_pattern, "v{version}");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_validate_rejects_tag_pattern_without_version() {
        let mut config = Config::default();
        config.release.tag_pattern = "latest".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
