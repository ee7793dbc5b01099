//! Configuration schema types for Palaver.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that talk to a backend on
//! localhost.

mod backend;
mod chat;
mod system;

pub use backend::*;
pub use chat::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Palaver.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PalaverConfig {
    pub backend: BackendConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
