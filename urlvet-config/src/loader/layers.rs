use std::path::{Path, PathBuf};

use toml::Value as TomlValue;

use crate::loader::merge_toml_values;

/// Where a layer's TOML came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// `<config dir>/urlvet/urlvet.toml`
    User { file: PathBuf },
    /// `urlvet.toml` in the workspace root
    Workspace { file: PathBuf },
    /// A file named by `--config` or `URLVET_CONFIG_PATH`
    Explicit { file: PathBuf },
    /// `URLVET_*` variables
    Environment,
    /// CLI flags
    Runtime,
}

impl ConfigLayerSource {
    /// Backing file, for layers read from disk.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::User { file } | Self::Workspace { file } | Self::Explicit { file } => {
                Some(file)
            }
            Self::Environment | Self::Runtime => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLayerEntry {
    pub source: ConfigLayerSource,
    pub config: TomlValue,
}

impl ConfigLayerEntry {
    pub fn new(source: ConfigLayerSource, config: TomlValue) -> Self {
        Self { source, config }
    }
}

/// Layers in precedence order; later entries win.
#[derive(Debug, Clone, Default)]
pub struct ConfigLayerStack {
    layers: Vec<ConfigLayerEntry>,
}

impl ConfigLayerStack {
    pub fn push(&mut self, layer: ConfigLayerEntry) {
        self.layers.push(layer);
    }

    pub fn effective_config(&self) -> TomlValue {
        self.layers.iter().fold(
            TomlValue::Table(toml::Table::new()),
            |mut merged, layer| {
                merge_toml_values(&mut merged, &layer.config);
                merged
            },
        )
    }

    pub fn layers(&self) -> &[ConfigLayerEntry] {
        &self.layers
    }

    /// Highest-precedence layer that was read from a file.
    pub fn last_file(&self) -> Option<&Path> {
        self.layers.iter().rev().find_map(|layer| layer.source.file())
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
