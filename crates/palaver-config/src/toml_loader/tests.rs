//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_palaver_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, palaver_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[backend]
base_url = "https://chat.example.com"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.backend.base_url, "https://chat.example.com");
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert!(config.backend.probe_on_startup);
    assert_eq!(config.chat.title, "Claude Search Assistant");
    assert_eq!(config.chat.prompt, "> ");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, palaver_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_still_returns_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[backend]
base_url = "not-a-url"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.backend.base_url, "not-a-url");
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palaver").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn default_config_path_ends_with_palaver_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("palaver/config.toml"));
    }
}
