//! Async exchange methods for ChatController.

use palaver_common::new_correlation_id;
use tracing::{debug, info, warn};

use crate::{ExchangeError, ExchangeRequest, ExchangeResponse, Message, FALLBACK_REPLY};

use super::manager::ChatController;
use super::types::{BusyGuard, ExchangeOutcome, PendingExchange};

impl ChatController {
    /// Run one exchange: record the user message, ask the backend, record
    /// the reply or the fallback text.
    ///
    /// `Err` means nothing happened: the text was blank or another
    /// exchange is still in flight. Every issued exchange returns `Ok`,
    /// with failures reported as `ExchangeOutcome::Failed`.
    ///
    /// Dropping this future mid-request clears the busy flag but leaves the
    /// user entry unanswered. Callers that can be interrupted should drive
    /// the steps themselves and finish with `ExchangeError::Cancelled`.
    pub async fn send_message(&mut self, text: &str) -> Result<ExchangeOutcome, ExchangeError> {
        let pending = self.begin_exchange(text)?;
        let result = self.dispatch(&pending).await;
        Ok(self.complete_exchange(pending, result))
    }

    /// Issue the single backend request for `pending`.
    pub async fn dispatch(
        &self,
        pending: &PendingExchange,
    ) -> Result<ExchangeResponse, ExchangeError> {
        self.backend.exchange(pending.request()).await
    }

    /// First step of `send_message`: validate, append the user entry and
    /// set the busy flag. The flag stays set until the returned value is
    /// passed to `complete_exchange` or dropped.
    pub fn begin_exchange(&mut self, text: &str) -> Result<PendingExchange, ExchangeError> {
        if text.trim().is_empty() {
            return Err(ExchangeError::EmptyInput);
        }
        let guard = BusyGuard::acquire(&self.busy)?;

        self.transcript.push(Message::user(text));

        let pending = PendingExchange {
            request: ExchangeRequest {
                message: text.to_string(),
                session_id: self.session.id().clone(),
            },
            correlation_id: new_correlation_id(),
            _guard: guard,
        };
        debug!(
            session = %self.session.id(),
            exchange = pending.correlation_id(),
            chars = text.chars().count(),
            "exchange started"
        );
        Ok(pending)
    }

    /// Last step of `send_message`: record the backend's answer and
    /// release the busy flag. `pending` must come from this controller's
    /// `begin_exchange`.
    pub fn complete_exchange(
        &mut self,
        pending: PendingExchange,
        result: Result<ExchangeResponse, ExchangeError>,
    ) -> ExchangeOutcome {
        debug_assert_eq!(
            &pending.request.session_id,
            self.session.id(),
            "pending exchange belongs to another session"
        );
        let outcome = match result {
            Ok(response) => {
                if let Some(echoed) = &response.session_id {
                    if echoed != self.session.id() {
                        warn!(
                            session = %self.session.id(),
                            %echoed,
                            "backend answered for a different session"
                        );
                    }
                }
                self.transcript.push(Message::assistant(&response.message));
                self.current_date = Some(response.current_date.clone());
                debug!(exchange = pending.correlation_id(), "exchange completed");
                ExchangeOutcome::Replied {
                    reply: response.message,
                    current_date: response.current_date,
                }
            }
            Err(err) => {
                warn!(exchange = pending.correlation_id(), "exchange failed: {err}");
                self.transcript.push(Message::assistant(FALLBACK_REPLY));
                ExchangeOutcome::Failed(err)
            }
        };
        drop(pending);
        outcome
    }

    /// Ask the backend to forget this session's history. The local
    /// transcript is kept.
    pub async fn forget_remote_history(&self) -> Result<String, ExchangeError> {
        let confirmation = self.backend.clear_history(self.session.id()).await?;
        info!(session = %self.session.id(), "remote history cleared");
        Ok(confirmation)
    }

    /// Check that the backend is reachable.
    pub async fn probe_backend(&self) -> Result<(), ExchangeError> {
        self.backend.ping().await
    }
}
