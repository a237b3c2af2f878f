//! Configuration file discovery and environment overrides

use libstorefront::config::{resolve_config_path, Config, DEFAULT_BASE_URL};
use libstorefront::error::ConfigError;
use libstorefront::logging::LogFormat;
use libstorefront::StorefrontError;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    std::env::remove_var("STOREFRONT_CONFIG");
    std::env::remove_var("STOREFRONT_API_URL");
}

#[test]
#[serial]
fn test_config_path_from_env() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::env::set_var("STOREFRONT_CONFIG", &path);

    assert_eq!(resolve_config_path().unwrap(), path);
    clear_env();
}

#[test]
#[serial]
fn test_missing_file_yields_defaults() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("STOREFRONT_CONFIG", dir.path().join("absent.toml"));

    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    clear_env();
}

#[test]
#[serial]
fn test_file_is_loaded() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[api]
base_url = "http://catalog.internal:8080"

[logging]
format = "pretty"
level = "debug"
"#
    )
    .unwrap();
    std::env::set_var("STOREFRONT_CONFIG", file.path());

    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, "http://catalog.internal:8080");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.logging.level, "debug");
    clear_env();
}

#[test]
#[serial]
fn test_api_url_env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nbase_url = \"http://from-file\"").unwrap();
    std::env::set_var("STOREFRONT_CONFIG", file.path());
    std::env::set_var("STOREFRONT_API_URL", "http://from-env");

    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, "http://from-env");
    clear_env();
}

#[test]
#[serial]
fn test_malformed_file_is_a_parse_error() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api\nbase_url = ").unwrap();
    std::env::set_var("STOREFRONT_CONFIG", file.path());

    let result = Config::load();
    assert!(matches!(
        result,
        Err(StorefrontError::Config(ConfigError::ParseError(_)))
    ));
    clear_env();
}
