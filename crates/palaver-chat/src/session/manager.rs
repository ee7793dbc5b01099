//! Session identity and the controller that owns conversation state.

use palaver_common::SessionId;
use tracing::debug;

use crate::{ChatBackend, Transcript};

use super::types::BusyFlag;

/// Run-scoped conversation identity.
///
/// Created once at startup; the id never changes and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of one conversation's client-side state.
pub struct ChatController {
    pub(super) session: Session,
    pub(super) transcript: Transcript,
    /// Set from request issuance until the reply or failure is recorded.
    pub(super) busy: BusyFlag,
    /// Last `current_date` reported by the backend.
    pub(super) current_date: Option<String>,
    pub(super) backend: Box<dyn ChatBackend>,
}

impl ChatController {
    pub fn new(backend: impl ChatBackend + 'static) -> Self {
        Self::with_session(Session::new(), backend)
    }

    pub fn with_session(session: Session, backend: impl ChatBackend + 'static) -> Self {
        debug!(session = %session.id(), "chat session started");
        Self {
            session,
            transcript: Transcript::new(),
            busy: BusyFlag::default(),
            current_date: None,
            backend: Box::new(backend),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn current_date(&self) -> Option<&str> {
        self.current_date.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    /// A handle that keeps observing the busy flag while the controller
    /// is borrowed by an exchange.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }
}
