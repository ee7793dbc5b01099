//! Core TOML config loading: read from path or platform default.

use crate::schema::PalaverConfig;
use crate::validation;
use palaver_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation problems are logged here but not returned; the caller
/// validates again after environment overrides are applied.
pub fn load_from_path(path: &Path) -> Result<PalaverConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PalaverConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/palaver/config.toml`
/// On Linux: `~/.config/palaver/config.toml`
///
/// If the file does not exist, creates a commented default file and
/// returns defaults.
pub fn load_default() -> Result<PalaverConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                warn!("could not write default config: {e}");
            }
            Ok(PalaverConfig::default())
        }
        Err(e) => Err(e),
    }
}
