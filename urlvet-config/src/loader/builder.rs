use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::loader::layers::{ConfigLayerEntry, ConfigLayerSource};
use crate::loader::manager::ConfigManager;

/// Builder for creating a [`ConfigManager`] with runtime overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    config_file: Option<PathBuf>,
    cli_overrides: Vec<(String, toml::Value)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workspace(mut self, path: PathBuf) -> Self {
        self.workspace = Some(path);
        self
    }

    /// Use a specific configuration file instead of the layered search.
    pub fn config_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Add a runtime override such as `("client.base_url", "http://...")`.
    pub fn cli_override(mut self, key: impl Into<String>, value: toml::Value) -> Self {
        self.cli_overrides.push((key.into(), value));
        self
    }

    pub fn build(self) -> Result<ConfigManager> {
        let mut manager = match (self.config_file, self.workspace) {
            (Some(config_file), _) => ConfigManager::load_from_file(config_file)?,
            (None, Some(workspace)) => ConfigManager::load_from_workspace(workspace)?,
            (None, None) => ConfigManager::load()?,
        };

        if !self.cli_overrides.is_empty() {
            let mut runtime_toml = toml::Table::new();
            for (key, value) in self.cli_overrides {
                insert_dotted_key(&mut runtime_toml, &key, value)?;
            }

            manager.layer_stack.push(ConfigLayerEntry::new(
                ConfigLayerSource::Runtime,
                toml::Value::Table(runtime_toml),
            ));
            manager.rebuild()?;
        }

        Ok(manager)
    }
}

fn insert_dotted_key(table: &mut toml::Table, key: &str, value: toml::Value) -> Result<()> {
    let Some((head, rest)) = key.split_once('.') else {
        table.insert(key.to_owned(), value);
        return Ok(());
    };

    let entry = table
        .entry(head.to_owned())
        .or_insert(toml::Value::Table(toml::Table::new()));
    if !entry.is_table() {
        *entry = toml::Value::Table(toml::Table::new());
    }
    match entry.as_table_mut() {
        Some(nested) => insert_dotted_key(nested, rest, value),
        None => bail!("override key '{key}' does not address a table"),
    }
}
