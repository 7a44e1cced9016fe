use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml::Value as TomlValue;

use crate::constants::{CONFIG_FILE_NAME, USER_CONFIG_DIR_NAME, env};
use crate::loader::config::UrlvetConfig;
use crate::loader::layers::{ConfigLayerEntry, ConfigLayerSource, ConfigLayerStack};

/// Loads, merges and validates configuration layers.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub(crate) config: UrlvetConfig,
    pub(crate) layer_stack: ConfigLayerStack,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        if let Ok(config_path) = std::env::var(env::CONFIG_PATH) {
            let trimmed = config_path.trim();
            if !trimmed.is_empty() {
                return Self::load_from_file(trimmed).with_context(|| {
                    format!(
                        "Failed to load configuration from {}={}",
                        env::CONFIG_PATH,
                        trimmed
                    )
                });
            }
        }

        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load the user and workspace layers for `workspace`, then apply the environment.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_user_config(workspace.as_ref(), user_config_path())
    }

    pub(crate) fn load_with_user_config(
        workspace: &Path,
        user_config: Option<PathBuf>,
    ) -> Result<Self> {
        let mut layer_stack = ConfigLayerStack::default();

        // 1. User config (~/.config/urlvet/urlvet.toml)
        if let Some(user_config) = user_config
            && user_config.exists()
            && let Some(toml) = Self::load_optional_layer(&user_config)
        {
            layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::User { file: user_config },
                toml,
            ));
        }

        // 2. Workspace config (urlvet.toml in workspace root)
        let workspace_config = workspace.join(CONFIG_FILE_NAME);
        if workspace_config.exists()
            && let Some(toml) = Self::load_optional_layer(&workspace_config)
        {
            layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::Workspace {
                    file: workspace_config,
                },
                toml,
            ));
        }

        // 3. Environment
        if let Some(layer) = Self::environment_layer()? {
            layer_stack.push(layer);
        }

        Self::from_layers(layer_stack)
    }

    /// Load a single explicit file, then apply the environment.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml = Self::load_toml_from_file(path)?;

        let mut layer_stack = ConfigLayerStack::default();
        layer_stack.push(ConfigLayerEntry::new(
            ConfigLayerSource::Explicit {
                file: path.to_path_buf(),
            },
            toml,
        ));
        if let Some(layer) = Self::environment_layer()? {
            layer_stack.push(layer);
        }

        Self::from_layers(layer_stack)
    }

    fn from_layers(layer_stack: ConfigLayerStack) -> Result<Self> {
        let mut manager = Self {
            config: UrlvetConfig::default(),
            layer_stack,
        };
        manager.rebuild()?;
        Ok(manager)
    }

    /// Re-derive the effective config from the current layer stack.
    pub(crate) fn rebuild(&mut self) -> Result<()> {
        let config: UrlvetConfig = if self.layer_stack.is_empty() {
            UrlvetConfig::default()
        } else {
            self.layer_stack
                .effective_config()
                .try_into()
                .context("Failed to deserialize effective configuration")?
        };
        config
            .validate()
            .context("Configuration failed validation")?;
        self.config = config;
        Ok(())
    }

    fn load_toml_from_file(path: &Path) -> Result<TomlValue> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    // Discovered layers are best effort; a broken file is reported and skipped.
    fn load_optional_layer(path: &Path) -> Option<TomlValue> {
        match Self::load_toml_from_file(path) {
            Ok(toml) => Some(toml),
            Err(err) => {
                tracing::warn!(path = %path.display(), "Skipping config layer: {err:#}");
                None
            }
        }
    }

    fn environment_layer() -> Result<Option<ConfigLayerEntry>> {
        let mut client = toml::Table::new();

        if let Ok(base_url) = std::env::var(env::BASE_URL) {
            let trimmed = base_url.trim();
            if !trimmed.is_empty() {
                client.insert("base_url".to_owned(), TomlValue::String(trimmed.to_owned()));
            }
        }

        if let Ok(timeout) = std::env::var(env::TIMEOUT_SECS) {
            let trimmed = timeout.trim();
            if !trimmed.is_empty() {
                let seconds: i64 = trimmed.parse().with_context(|| {
                    format!("{} must be a whole number of seconds", env::TIMEOUT_SECS)
                })?;
                anyhow::ensure!(seconds >= 0, "{} cannot be negative", env::TIMEOUT_SECS);
                client.insert(
                    "request_timeout_secs".to_owned(),
                    TomlValue::Integer(seconds),
                );
            }
        }

        if client.is_empty() {
            return Ok(None);
        }

        let mut root = toml::Table::new();
        root.insert("client".to_owned(), TomlValue::Table(client));
        Ok(Some(ConfigLayerEntry::new(
            ConfigLayerSource::Environment,
            TomlValue::Table(root),
        )))
    }

    pub fn config(&self) -> &UrlvetConfig {
        &self.config
    }

    /// The highest-precedence file that contributed to the config, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.layer_stack.last_file()
    }

    pub fn layer_stack(&self) -> &ConfigLayerStack {
        &self.layer_stack
    }
}

/// Location of the per-user config file, when the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
