//! Bot facade
//!
//! Ties the transport and the connected server version together so callers
//! can construct actions and collect titles without wiring the pieces
//! themselves. The connected version is supplied by the session layer; the
//! bot only carries it.

use crate::config::BotConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::query::{ListAction, TitleCollector};
use crate::version::Version;
use std::time::Duration;

/// A bot bound to one wiki endpoint
#[derive(Debug)]
pub struct Bot {
    client: HttpClient,
    version: Version,
}

impl Bot {
    /// Create a bot with default transport settings
    ///
    /// The connected version starts as `Unknown` until the session layer
    /// supplies the real one via [`set_version`](Bot::set_version).
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(api_url),
            version: Version::Unknown,
        }
    }

    /// Create a bot from a loaded configuration
    pub fn from_config(config: &BotConfig) -> Self {
        let http = HttpClientConfig::builder(&config.api_url)
            .timeout(Duration::from_secs(config.timeout_secs))
            .max_retries(config.max_retries)
            .rate_limit(RateLimiterConfig::new(
                config.requests_per_second,
                config.requests_per_second,
            ))
            .user_agent(&config.user_agent)
            .build();
        Self {
            client: HttpClient::with_config(http),
            version: config.resolved_version().unwrap_or(Version::Unknown),
        }
    }

    /// The connected server version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Record the connected server version
    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    /// The underlying transport
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Collect up to `limit` unique titles from a listing
    ///
    /// See [`TitleCollector::collect`] for the limit and continuation
    /// semantics.
    pub fn collect(&self, action: &mut dyn ListAction, limit: usize) -> Result<Vec<String>> {
        TitleCollector::new(&self.client).collect(action, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Release;

    #[test]
    fn test_new_bot_version_unknown() {
        let bot = Bot::new("https://wiki.example/w/api.php");
        assert_eq!(bot.version(), Version::Unknown);
    }

    #[test]
    fn test_set_version() {
        let mut bot = Bot::new("https://wiki.example/w/api.php");
        bot.set_version(Version::latest());
        assert_eq!(bot.version(), Version::Release(Release::V1_24));
    }

    #[test]
    fn test_from_config_carries_expected_version() {
        let mut config = BotConfig::new("https://wiki.example/w/api.php");
        config.expected_version = Some("1.23".to_string());
        let bot = Bot::from_config(&config);
        assert_eq!(bot.version(), Version::Release(Release::V1_23));
        assert_eq!(bot.client().api_url(), "https://wiki.example/w/api.php");
    }

    #[test]
    fn test_from_config_without_version() {
        let config = BotConfig::new("https://wiki.example/w/api.php");
        let bot = Bot::from_config(&config);
        assert_eq!(bot.version(), Version::Unknown);
    }
}
