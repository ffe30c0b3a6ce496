//! Configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `BREACH_SEARCH_*` environment variables (`__` separates sections, e.g.
//! `BREACH_SEARCH_API__URL`).
//!
//! ```toml
//! [api]
//! url = "https://breach.vip/api/search"
//! timeout_secs = 30
//!
//! [output]
//! path = "output.json"
//! email_prefix = "emails_"
//! password_prefix = "passwords_"
//!
//! [limits]
//! max_results = 10000
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::BREACH_VIP_API_URL;
use crate::utils::DEFAULT_USER_AGENT;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "breach-search.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "BREACH_SEARCH";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Search endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Whole-request timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_api_url() -> String {
    BREACH_VIP_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Artifact settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default = "default_email_prefix")]
    pub email_prefix: String,

    #[serde(default = "default_password_prefix")]
    pub password_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            email_prefix: default_email_prefix(),
            password_prefix: default_password_prefix(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.json")
}

fn default_email_prefix() -> String {
    "emails_".to_string()
}

fn default_password_prefix() -> String {
    "passwords_".to_string()
}

/// Result limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Most results the API returns for one search. Reported next to the
    /// total, never enforced client-side.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    10_000
}

/// Load configuration from an optional file plus the environment
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Find a config file in the working directory or the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("breach-search").join("config.toml"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.url, "https://breach.vip/api/search");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.output.path, PathBuf::from("output.json"));
        assert_eq!(config.output.email_prefix, "emails_");
        assert_eq!(config.output.password_prefix, "passwords_");
        assert_eq!(config.limits.max_results, 10_000);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
url = "http://localhost:9000/search"
timeout_secs = 5

[output]
email_prefix = "mails-"

[limits]
max_results = 500
"#,
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.api.url, "http://localhost:9000/search");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.output.email_prefix, "mails-");
        assert_eq!(config.output.password_prefix, "passwords_");
        assert_eq!(config.limits.max_results, 500);
    }

    #[test]
    fn test_load_config_missing_file() {
        let path = PathBuf::from("/nonexistent/breach-search.toml");
        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");
        std::fs::write(&path, "invalid = toml = content").unwrap();

        assert!(load_config(Some(path.as_path())).is_err());
    }
}
