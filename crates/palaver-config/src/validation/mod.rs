//! Full configuration validation.
//!
//! Each section pushes its problems onto a shared list; the orchestrator
//! collects them into a single `ConfigError`.


use crate::schema::PalaverConfig;
use palaver_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PalaverConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_backend(&mut errors, config);
    validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_backend(errors: &mut Vec<String>, config: &PalaverConfig) {
    let url = config.backend.base_url.trim();
    if url.is_empty() {
        errors.push("backend.base_url must not be empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "backend.base_url = {url:?} must start with http:// or https://"
        ));
    }
}

fn validate_chat(errors: &mut Vec<String>, config: &PalaverConfig) {
    if config.chat.title.trim().is_empty() {
        errors.push("chat.title must not be empty".into());
    }
}
