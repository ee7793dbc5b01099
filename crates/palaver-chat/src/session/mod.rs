//! Conversation session management.
//!
//! A `Session` is the run-scoped identity sent with every exchange.
//! A `ChatController` owns the session, the transcript, the busy flag and
//! the latest current-date string, and drives exchanges against a
//! `ChatBackend`.

mod exchange;
mod manager;
mod types;

pub use manager::{ChatController, Session};
pub use types::{BusyFlag, ExchangeOutcome, PendingExchange};
