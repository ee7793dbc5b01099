use serde::{Deserialize, Serialize};

/// Presentation settings for the chat front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Header shown above the transcript.
    pub title: String,
    /// Prompt printed before each input line.
    pub prompt: String,
    /// Show `HH:MM:SS` next to each message.
    pub show_timestamps: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: "Claude Search Assistant".into(),
            prompt: "> ".into(),
            show_timestamps: true,
        }
    }
}
