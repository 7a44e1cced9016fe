//! Tracing configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::logging::DEFAULT_TARGETS;

/// Verbosity applied to the urlvet tracing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    const ALL: [Self; 5] = [Self::Error, Self::Warn, Self::Info, Self::Debug, Self::Trace];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl FromStr for TraceLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown trace level '{wanted}'"))
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TraceLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|err: String| {
            tracing::warn!("{err}, using '{}'", Self::default());
            Self::default()
        }))
    }
}

/// Debug and tracing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DebugConfig {
    /// Install a tracing subscriber even when `RUST_LOG` is unset
    #[serde(default)]
    pub enable_tracing: bool,

    /// Trace level (error, warn, info, debug, trace)
    #[serde(default)]
    pub trace_level: TraceLevel,

    /// Tracing targets to enable, e.g. "urlvet_client"
    #[serde(default)]
    pub trace_targets: Vec<String>,
}

impl DebugConfig {
    /// Build an `EnvFilter`-compatible directive string for the configured targets.
    pub fn filter_directive(&self) -> String {
        let level = self.trace_level.as_str();
        if self.trace_targets.is_empty() {
            DEFAULT_TARGETS
                .split(',')
                .map(|target| format!("{target}={level}"))
                .collect::<Vec<_>>()
                .join(",")
        } else {
            self.trace_targets
                .iter()
                .map(|target| format!("{}={level}", target.trim()))
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}
