//! urlvet - send a URL to a validation service and print its reply.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, reload};
use urlvet::cli::Cli;
use urlvet::output::render_response;
use urlvet::startup::StartupContext;
use urlvet_client::ValidationError;
use urlvet_config::DebugConfig;

/// Filter used until config is loaded, so skipped config layers are visible.
const STARTUP_FILTER: &str = "warn";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (non-fatal if missing)
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    // RUST_LOG takes precedence over the config file
    let filter_handle = initialize_tracing();

    let startup = StartupContext::from_cli_args(&args)?;
    if startup.config.debug.enable_tracing
        && let Some(handle) = &filter_handle
    {
        apply_config_filter(handle, &startup.config.debug);
    }

    tracing::debug!(endpoint = startup.client.endpoint(), "validation client ready");

    let response = startup
        .client
        .validate_url(&args.url)
        .await
        .map_err(|err| describe_failure(&args.url, err))?;

    tracing::info!(status = %response.status(), "validation service replied");
    println!("{}", render_response(&response, args.json));

    Ok(())
}

fn describe_failure(url: &str, err: ValidationError) -> anyhow::Error {
    let service_message = err.service_message();
    let err = anyhow::Error::new(err).context(format!("Validation request for '{url}' failed"));
    match service_message {
        Some(message) => err.context(format!("Validation service reported: {message}")),
        None => err,
    }
}

/// Install a stderr subscriber before config loads.
///
/// Returns a handle for swapping in the config filter, or `None` when
/// `RUST_LOG` drives the filter (or a subscriber was already installed).
fn initialize_tracing() -> Option<FilterHandle> {
    let rust_log_set = std::env::var("RUST_LOG").is_ok();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(STARTUP_FILTER));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()
        .ok()?;

    (!rust_log_set).then_some(handle)
}

fn apply_config_filter(handle: &FilterHandle, debug_cfg: &DebugConfig) {
    let directive = debug_cfg.filter_directive();
    match handle.reload(EnvFilter::new(&directive)) {
        Ok(()) => tracing::debug!(filter = %directive, "tracing enabled from config"),
        Err(err) => tracing::warn!("Failed to apply tracing config: {err}"),
    }
}
