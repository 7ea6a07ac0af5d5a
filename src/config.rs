//! Bot configuration
//!
//! Bots are configured from YAML: endpoint, identity, transport tuning, and
//! optionally the server version the operator expects to talk to.

use crate::error::{Error, Result};
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bot configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Full URL of the wiki's `api.php` endpoint
    pub api_url: String,

    /// User agent presented to the server
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum transport retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Request budget per second
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Server version the operator expects, e.g. `"1.24"`
    #[serde(default)]
    pub expected_version: Option<String>,
}

fn default_user_agent() -> String {
    format!("wikibotkit/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_requests_per_second() -> u32 {
    10
}

impl BotConfig {
    /// Create a config with defaults for the given endpoint
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            requests_per_second: default_requests_per_second(),
            expected_version: None,
        }
    }

    /// Load a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: BotConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse bot YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read bot config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// The expected server version, resolved through the version model
    ///
    /// Unrecognized numbers resolve to `Unknown` like any other generator
    /// string.
    pub fn resolved_version(&self) -> Option<Version> {
        self.expected_version
            .as_deref()
            .map(Version::from_generator)
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_url)?;
        if self.requests_per_second == 0 {
            return Err(Error::config("requests_per_second must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Release;
    use std::io::Write;

    #[test]
    fn test_minimal_yaml_applies_defaults() {
        let config = BotConfig::from_yaml_str("api_url: https://wiki.example/w/api.php").unwrap();
        assert_eq!(config.api_url, "https://wiki.example/w/api.php");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.requests_per_second, 10);
        assert!(config.user_agent.starts_with("wikibotkit/"));
        assert!(config.expected_version.is_none());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r"
api_url: https://wiki.example/w/api.php
user_agent: mybot/1.0
timeout_secs: 5
max_retries: 1
requests_per_second: 2
expected_version: '1.24'
";
        let config = BotConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.user_agent, "mybot/1.0");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(
            config.resolved_version(),
            Some(Version::Release(Release::V1_24))
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = BotConfig::from_yaml_str("api_url: 'not a url'").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_zero_rate_rejected() {
        let yaml = "api_url: https://wiki.example/w/api.php\nrequests_per_second: 0\n";
        let err = BotConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_bad_yaml_rejected() {
        let err = BotConfig::from_yaml_str("api_url: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url: https://wiki.example/w/api.php").unwrap();
        let config = BotConfig::from_path(file.path()).unwrap();
        assert_eq!(config.api_url, "https://wiki.example/w/api.php");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = BotConfig::from_path("/nonexistent/bot.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_unrecognized_expected_version_is_unknown() {
        let mut config = BotConfig::new("https://wiki.example/w/api.php");
        config.expected_version = Some("0.9".to_string());
        assert_eq!(config.resolved_version(), Some(Version::Unknown));
    }
}
