//! JSON bodies exchanged with the backend.

use palaver_common::SessionId;
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub message: String,
    pub session_id: SessionId,
}

/// Reply to `POST /chat`.
///
/// `current_date` is a display string; it is never parsed. Backends may
/// echo `session_id`, which is only used for a consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub message: String,
    pub current_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

/// Body of `POST /clear_history`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClearHistoryRequest<'a> {
    pub session_id: &'a SessionId,
}

/// Reply to `POST /clear_history`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClearHistoryResponse {
    pub message: String,
}
