//! Defaults and well-known names shared by the loader and the client.

/// Base address of the validation service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5005";

/// File name searched for in the workspace and user config directory.
pub const CONFIG_FILE_NAME: &str = "urlvet.toml";

/// Sub-directory of the platform config dir holding the user config.
pub const USER_CONFIG_DIR_NAME: &str = "urlvet";

pub const DEFAULT_USER_AGENT: &str = concat!("urlvet/", env!("CARGO_PKG_VERSION"));

pub mod env {
    /// Load exactly this file instead of searching the layers.
    pub const CONFIG_PATH: &str = "URLVET_CONFIG_PATH";
    pub const BASE_URL: &str = "URLVET_BASE_URL";
    pub const TIMEOUT_SECS: &str = "URLVET_TIMEOUT_SECS";
}

pub mod logging {
    /// Targets enabled when `debug.trace_targets` is empty.
    pub const DEFAULT_TARGETS: &str = "urlvet,urlvet_client,urlvet_config";
}
