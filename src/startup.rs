use anyhow::{Context, Result};
use urlvet_client::ValidationClient;
use urlvet_config::{ConfigBuilder, UrlvetConfig};

use crate::cli::Cli;

/// Everything resolved from CLI flags and config layers before the request runs.
#[derive(Debug, Clone)]
pub struct StartupContext {
    pub config: UrlvetConfig,
    pub client: ValidationClient,
}

impl StartupContext {
    pub fn from_cli_args(args: &Cli) -> Result<Self> {
        let config = config_builder(args)
            .build()
            .context("Failed to load urlvet configuration")?
            .config()
            .clone();

        let client = ValidationClient::new(&config.client)
            .context("Failed to create validation client")?;

        Ok(Self { config, client })
    }
}

fn config_builder(args: &Cli) -> ConfigBuilder {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &args.config {
        builder = builder.config_file(path.clone());
    }
    if let Some(base_url) = &args.base_url {
        builder = builder.cli_override("client.base_url", toml::Value::String(base_url.clone()));
    }
    if let Some(timeout) = args.timeout {
        let seconds = i64::try_from(timeout).unwrap_or(i64::MAX);
        builder = builder.cli_override("client.request_timeout_secs", toml::Value::Integer(seconds));
    }
    if args.verbose {
        builder = builder
            .cli_override("debug.enable_tracing", toml::Value::Boolean(true))
            .cli_override("debug.trace_level", toml::Value::String("debug".to_owned()));
    }
    builder
}
