//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{ExchangeError, ExchangeRequest};

/// Shared, read-only view of the controller's busy flag.
///
/// Clones observe the same flag, so a front end can show a "thinking"
/// indicator while the controller is mutably borrowed by an exchange.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Guard that clears the busy flag on drop, so it is released even if
/// the exchange future is cancelled or an early return occurs.
#[derive(Debug)]
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    /// Attempt to set the flag. Returns `Err` if it is already set.
    pub(crate) fn acquire(flag: &BusyFlag) -> Result<Self, ExchangeError> {
        if flag
            .0
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ExchangeError::Busy);
        }
        Ok(Self {
            flag: Arc::clone(&flag.0),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// An exchange whose user message is already in the transcript and whose
/// request has not been answered yet. Holds the busy flag until dropped.
#[derive(Debug)]
pub struct PendingExchange {
    pub(crate) request: ExchangeRequest,
    pub(crate) correlation_id: String,
    pub(crate) _guard: BusyGuard,
}

impl PendingExchange {
    /// The request to send to the backend.
    pub fn request(&self) -> &ExchangeRequest {
        &self.request
    }

    /// Short token identifying this exchange in log lines.
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

/// How an issued exchange ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// The backend replied; its text is now the last transcript entry.
    Replied {
        reply: String,
        current_date: String,
    },
    /// The request failed; `FALLBACK_REPLY` is now the last transcript
    /// entry. The error is kept for logging only.
    Failed(ExchangeError),
}

impl ExchangeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExchangeOutcome::Replied { .. })
    }
}
