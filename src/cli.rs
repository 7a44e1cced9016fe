use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "urlvet")]
#[command(about = "Ask a validation service whether a URL can be trusted")]
#[command(version)]
pub struct Cli {
    /// URL to send to the validation service
    pub url: String,

    /// Base address of the validation service (overrides config and URLVET_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Load this config file instead of searching the default locations
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (0 disables)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print only the response body, pretty-printed when it is JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
