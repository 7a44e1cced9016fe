use super::*;

use crate::constants::{DEFAULT_BASE_URL, env as env_names};
use crate::loader::layers::ConfigLayerSource;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::fs;

fn set_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

fn remove_var(key: &str) {
    unsafe { env::remove_var(key) };
}

fn clear_env() {
    remove_var(env_names::BASE_URL);
    remove_var(env_names::TIMEOUT_SECS);
    remove_var(env_names::CONFIG_PATH);
}

#[test]
#[serial]
fn no_layers_yields_defaults() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");

    let manager = ConfigManager::load_with_user_config(workspace.path(), None)
        .expect("failed to load config");

    assert_eq!(manager.config(), &UrlvetConfig::default());
    assert!(manager.layer_stack().is_empty());
    assert!(manager.config_path().is_none());
}

#[test]
#[serial]
fn workspace_layer_overrides_user_layer() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    let root = workspace.path();

    let user_config = root.join("home").join("urlvet.toml");
    fs::create_dir_all(root.join("home")).expect("failed to create home dir");
    fs::write(
        &user_config,
        "[client]\nbase_url = \"http://user.test:1\"\nrequest_timeout_secs = 9",
    )
    .expect("failed to write user config");
    fs::write(
        root.join("urlvet.toml"),
        "[client]\nbase_url = \"http://workspace.test:2\"",
    )
    .expect("failed to write workspace config");

    let manager = ConfigManager::load_with_user_config(root, Some(user_config))
        .expect("failed to load config");

    assert_eq!(manager.config().client.base_url, "http://workspace.test:2");
    assert_eq!(manager.config().client.request_timeout_secs, 9);

    let layers = manager.layer_stack().layers();
    assert_eq!(layers.len(), 2);
    assert!(matches!(layers[0].source, ConfigLayerSource::User { .. }));
    assert!(matches!(
        layers[1].source,
        ConfigLayerSource::Workspace { .. }
    ));
    assert_eq!(manager.config_path(), Some(root.join("urlvet.toml").as_path()));
}

#[test]
#[serial]
fn environment_overrides_files() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    fs::write(
        workspace.path().join("urlvet.toml"),
        "[client]\nbase_url = \"http://workspace.test\"",
    )
    .expect("failed to write workspace config");

    set_var(env_names::BASE_URL, "http://env.test:7000");
    set_var(env_names::TIMEOUT_SECS, "4");
    let result = ConfigManager::load_with_user_config(workspace.path(), None);
    clear_env();

    let manager = result.expect("failed to load config");
    assert_eq!(manager.config().client.base_url, "http://env.test:7000");
    assert_eq!(manager.config().client.request_timeout_secs, 4);
    assert!(matches!(
        manager.layer_stack().layers().last().map(|layer| &layer.source),
        Some(ConfigLayerSource::Environment)
    ));
}

#[test]
#[serial]
fn invalid_timeout_env_is_an_error() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");

    set_var(env_names::TIMEOUT_SECS, "soon");
    let result = ConfigManager::load_with_user_config(workspace.path(), None);
    clear_env();

    let err = result.expect_err("timeout must be numeric");
    assert!(format!("{err:#}").contains("whole number of seconds"));
}

#[test]
#[serial]
fn broken_workspace_file_is_skipped() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    fs::write(workspace.path().join("urlvet.toml"), "[client\nbase_url = ")
        .expect("failed to write workspace config");

    let manager = ConfigManager::load_with_user_config(workspace.path(), None)
        .expect("broken discovered layers are skipped");
    assert_eq!(manager.config().client.base_url, DEFAULT_BASE_URL);
}

#[test]
#[serial]
fn explicit_file_must_parse() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    let path = workspace.path().join("custom.toml");
    fs::write(&path, "not = [valid").expect("failed to write config");

    let err = ConfigManager::load_from_file(&path).expect_err("explicit file must parse");
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}

#[test]
#[serial]
fn invalid_base_url_fails_validation() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    let path = workspace.path().join("custom.toml");
    fs::write(&path, "[client]\nbase_url = \"file:///etc/passwd\"").expect("write config");

    let err = ConfigManager::load_from_file(&path).expect_err("file scheme is rejected");
    assert!(format!("{err:#}").contains("http or https"));
}

#[test]
#[serial]
fn config_path_env_selects_single_file() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    let path = workspace.path().join("pinned.toml");
    fs::write(&path, "[client]\nbase_url = \"http://pinned.test\"").expect("write config");

    set_var(env_names::CONFIG_PATH, path.to_str().expect("utf-8 path"));
    let result = ConfigManager::load();
    clear_env();

    let manager = result.expect("failed to load config");
    assert_eq!(manager.config().client.base_url, "http://pinned.test");
    assert_eq!(manager.config_path(), Some(path.as_path()));
    assert!(matches!(
        manager.layer_stack().layers().first().map(|layer| &layer.source),
        Some(ConfigLayerSource::Explicit { .. })
    ));
}

#[test]
#[serial]
fn builder_runtime_overrides_win() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");
    let path = workspace.path().join("custom.toml");
    fs::write(
        &path,
        "[client]\nbase_url = \"http://file.test\"\n[debug]\ntrace_level = \"warn\"",
    )
    .expect("write config");

    set_var(env_names::BASE_URL, "http://env.test");
    let result = ConfigBuilder::new()
        .config_file(path)
        .cli_override(
            "client.base_url",
            toml::Value::String("http://cli.test:9".to_owned()),
        )
        .cli_override("client.connect_timeout_secs", toml::Value::Integer(2))
        .build();
    clear_env();

    let manager = result.expect("failed to build config");
    let config = manager.config();
    assert_eq!(config.client.base_url, "http://cli.test:9");
    assert_eq!(config.client.connect_timeout_secs, 2);
    assert_eq!(config.debug.trace_level, crate::TraceLevel::Warn);

    let sources: Vec<_> = manager
        .layer_stack()
        .layers()
        .iter()
        .map(|layer| layer.source.clone())
        .collect();
    assert!(matches!(
        sources.as_slice(),
        [
            ConfigLayerSource::Explicit { .. },
            ConfigLayerSource::Environment,
            ConfigLayerSource::Runtime
        ]
    ));
}

#[test]
#[serial]
fn builder_rejects_invalid_runtime_override() {
    clear_env();
    let workspace = assert_fs::TempDir::new().expect("failed to create workspace");

    let result = ConfigBuilder::new()
        .workspace(workspace.path().to_path_buf())
        .cli_override(
            "client.base_url",
            toml::Value::String("not a url".to_owned()),
        )
        .build();

    assert!(result.is_err());
}
