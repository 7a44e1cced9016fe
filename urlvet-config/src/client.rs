use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Connection settings for the validation service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base address the `/validate` path is appended to.
    #[serde(default = "ClientConfig::default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds. 0 leaves the transport default in place.
    #[serde(default)]
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds. 0 leaves the transport default in place.
    #[serde(default)]
    pub connect_timeout_secs: u64,
    #[serde(default = "ClientConfig::default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            request_timeout_secs: 0,
            connect_timeout_secs: 0,
            user_agent: Self::default_user_agent(),
        }
    }
}

impl ClientConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_owned()
    }

    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_owned()
    }

    /// Config pointing at a specific base address, everything else defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        seconds_to_duration(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        seconds_to_duration(self.connect_timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(self.base_url.trim())
            .with_context(|| format!("client.base_url '{}' is not a valid URL", self.base_url))?;
        ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "client.base_url must use http or https, got '{}'",
            parsed.scheme()
        );
        ensure!(
            parsed.has_host(),
            "client.base_url '{}' has no host",
            self.base_url
        );
        ensure!(
            !self.user_agent.trim().is_empty(),
            "client.user_agent cannot be empty"
        );
        Ok(())
    }
}

fn seconds_to_duration(seconds: u64) -> Option<Duration> {
    if seconds == 0 {
        None
    } else {
        Some(Duration::from_secs(seconds))
    }
}
