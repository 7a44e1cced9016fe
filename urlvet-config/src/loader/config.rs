use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::client::ClientConfig;
use crate::debug::DebugConfig;

/// Effective configuration after all layers are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UrlvetConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl UrlvetConfig {
    pub fn validate(&self) -> Result<()> {
        self.client
            .validate()
            .context("Invalid [client] configuration")
    }
}
