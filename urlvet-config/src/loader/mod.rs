pub mod layers;

mod builder;
mod config;
mod manager;
mod merge;

#[cfg(test)]
mod tests;

pub use builder::ConfigBuilder;
pub use config::UrlvetConfig;
pub use manager::{ConfigManager, user_config_path};
pub use merge::merge_toml_values;
