//! Palaver configuration system.
//!
//! TOML-based configuration with a single environment override for the
//! backend URL. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use palaver_config::{load_config, config_to_json};
//!
//! let config = load_config(None, None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::API_URL_VAR;
pub use schema::PalaverConfig;

use palaver_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Load the effective configuration.
///
/// Reads `.env`, then `path` (or the platform default file, created if
/// missing). The backend URL comes from `base_url` if given, else from
/// `PALAVER_API_URL`, else from the file. Validation runs once, on the
/// merged result.
pub fn load_config(
    path: Option<&Path>,
    base_url: Option<&str>,
) -> Result<PalaverConfig, ConfigError> {
    env::load_dotenv();

    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    resolve(config, |key| std::env::var(key).ok(), base_url)
}

/// Layer the environment and then `base_url` over `config`, and validate.
fn resolve<F>(
    mut config: PalaverConfig,
    lookup: F,
    base_url: Option<&str>,
) -> Result<PalaverConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    env::apply_overrides_with(&mut config, lookup);
    if let Some(url) = base_url {
        info!("backend base URL taken from the command line");
        config.backend.base_url = url.to_string();
    }
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PalaverConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = PalaverConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"backend\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"http://localhost:8000\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = PalaverConfig::default();
        let json = config_to_json(&config);
        let parsed: PalaverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.chat.title, "Claude Search Assistant");
        assert_eq!(parsed.logging.level, schema::LogLevel::Info);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\ntitle = \"\"\n").unwrap();

        let err = load_config(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    fn bad_env(key: &str) -> Option<String> {
        (key == API_URL_VAR).then(|| "localhost:9000".to_string())
    }

    #[test]
    fn explicit_url_wins_over_bad_env_value() {
        let config = resolve(
            PalaverConfig::default(),
            bad_env,
            Some("http://127.0.0.1:9000"),
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn bad_env_value_fails_without_explicit_url() {
        let err = resolve(PalaverConfig::default(), bad_env, None).unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => assert!(msg.contains("localhost:9000")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn url_precedence_is_explicit_then_env_then_file() {
        let mut config = PalaverConfig::default();
        config.backend.base_url = "http://from-file:1".into();

        let env = |key: &str| (key == API_URL_VAR).then(|| "http://from-env:2".to_string());
        let resolved = resolve(config.clone(), env, None).unwrap();
        assert_eq!(resolved.backend.base_url, "http://from-env:2");

        let resolved = resolve(config.clone(), env, Some("http://from-flag:3")).unwrap();
        assert_eq!(resolved.backend.base_url, "http://from-flag:3");

        let resolved = resolve(config, |_| None, None).unwrap();
        assert_eq!(resolved.backend.base_url, "http://from-file:1");
    }

    #[test]
    fn invalid_file_url_is_accepted_when_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[backend]\nbase_url = \"ftp://nope\"\n").unwrap();

        let config = load_config(Some(&path), Some("https://chat.example")).unwrap();
        assert_eq!(config.backend.base_url, "https://chat.example");
    }
}
