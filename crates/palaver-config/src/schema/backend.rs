use serde::{Deserialize, Serialize};

/// Default backend location when neither the config file nor the
/// environment supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the chat backend lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL; `/chat` and `/clear_history` are appended to it.
    pub base_url: String,
    /// Probe `GET {base_url}/` on startup and log whether it answered.
    pub probe_on_startup: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            probe_on_startup: true,
        }
    }
}
