//! Chat engine for Palaver.
//!
//! Provides:
//! - The `ChatBackend` seam and its HTTP implementation
//! - Session identity and the append-only transcript
//! - `ChatController`, which runs one exchange at a time and keeps the
//!   busy flag and current-date field in step with the transcript

pub mod http;
pub mod message;
pub mod protocol;
pub mod session;

use async_trait::async_trait;
use palaver_common::SessionId;

pub use http::HttpBackend;
pub use message::{Message, Role, Transcript};
pub use protocol::{ExchangeRequest, ExchangeResponse};
pub use session::{BusyFlag, ChatController, ExchangeOutcome, PendingExchange, Session};

/// Assistant text recorded in place of a reply when an exchange fails.
pub const FALLBACK_REPLY: &str = "Sorry, an error occurred. Please try again.";

/// The remote side of a conversation.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one user message and wait for the single reply.
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeResponse, ExchangeError>;

    /// Ask the backend to drop whatever it remembers about `session`.
    /// Returns the backend's confirmation text.
    async fn clear_history(&self, session: &SessionId) -> Result<String, ExchangeError>;

    /// Check that the backend answers at all.
    async fn ping(&self) -> Result<(), ExchangeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("message is empty")]
    EmptyInput,
    #[error("an exchange is already in flight")]
    Busy,
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("exchange cancelled before a reply arrived")]
    Cancelled,
}

impl ExchangeError {
    /// True for errors raised before any request was issued. These leave
    /// the transcript untouched; every other kind becomes `FALLBACK_REPLY`.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ExchangeError::EmptyInput | ExchangeError::Busy)
    }
}
