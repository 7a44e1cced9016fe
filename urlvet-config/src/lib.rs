//! Configuration for the urlvet validation client.
//!
//! Settings are read from TOML layers (user config dir, workspace file,
//! environment, runtime overrides) and merged into a single [`UrlvetConfig`].
//!
//! ```toml
//! [client]
//! base_url = "http://localhost:5005"
//! request_timeout_secs = 0
//!
//! [debug]
//! enable_tracing = true
//! trace_level = "debug"
//! ```

pub mod client;
pub mod constants;
pub mod debug;
pub mod loader;

pub use client::ClientConfig;
pub use debug::{DebugConfig, TraceLevel};
pub use loader::layers::{ConfigLayerEntry, ConfigLayerSource, ConfigLayerStack};
pub use loader::{
    ConfigBuilder, ConfigManager, UrlvetConfig, merge_toml_values, user_config_path,
};
