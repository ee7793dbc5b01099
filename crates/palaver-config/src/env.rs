//! Environment overrides applied on top of the file config.
//!
//! The backend base URL is the only value the environment may supply.

use tracing::{debug, info};

use crate::schema::PalaverConfig;

/// Environment variable that overrides `backend.base_url`.
pub const API_URL_VAR: &str = "PALAVER_API_URL";

/// Load `KEY=VALUE` pairs from a `.env` file in the working directory
/// or one of its parents. Variables already set in the process win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("failed to read .env file: {e}"),
    }
}

/// Apply overrides using `lookup` as the environment.
pub fn apply_overrides_with<F>(config: &mut PalaverConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(API_URL_VAR) {
        let url = url.trim();
        if !url.is_empty() {
            info!("backend base URL taken from {API_URL_VAR}");
            config.backend.base_url = url.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_var_overrides_file_value() {
        let mut config = PalaverConfig::default();
        config.backend.base_url = "http://from-file:1".into();

        apply_overrides_with(&mut config, |key| {
            (key == API_URL_VAR).then(|| "https://from-env.example".to_string())
        });

        assert_eq!(config.backend.base_url, "https://from-env.example");
    }

    #[test]
    fn missing_var_leaves_config_alone() {
        let mut config = PalaverConfig::default();
        apply_overrides_with(&mut config, |_| None);
        assert_eq!(config.backend.base_url, "http://localhost:8000");
    }

    #[test]
    fn blank_var_is_ignored() {
        let mut config = PalaverConfig::default();
        apply_overrides_with(&mut config, |_| Some("   ".into()));
        assert_eq!(config.backend.base_url, "http://localhost:8000");
    }

    #[test]
    fn other_variables_are_not_consulted() {
        let mut config = PalaverConfig::default();
        apply_overrides_with(&mut config, |key| {
            (key != API_URL_VAR).then(|| "https://wrong.example".to_string())
        });
        assert_eq!(config.backend.base_url, "http://localhost:8000");
    }
}
