//! Request liveness tracking.
//!
//! When a caller navigates away (or starts a newer request) before an
//! in-flight selection or narrative resolves, the stale result must be
//! discarded rather than applied. [`RequestTracker`] hands out one
//! [`RequestTicket`] per request; starting a new request cancels the
//! previous ticket, and [`RequestTracker::commit`] only applies results for
//! the current one.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle for one in-flight request
#[derive(Debug, Clone)]
pub struct RequestTicket {
    key: String,
    generation: u64,
    token: CancellationToken,
}

impl RequestTicket {
    /// What the request is for (a subject, an exam id, ...)
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

#[derive(Default)]
struct TrackerState {
    next_generation: u64,
    current: Option<RequestTicket>,
}

/// Tracks the single live request of one consumer (a view, a REPL prompt).
#[derive(Default)]
pub struct RequestTracker {
    state: Mutex<TrackerState>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, TrackerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a request for `key`, cancelling whichever request was live.
    pub fn begin(&self, key: impl Into<String>) -> RequestTicket {
        let mut state = self.state();
        if let Some(previous) = state.current.take() {
            debug!(
                "Superseding request '{}' (generation {})",
                previous.key, previous.generation
            );
            previous.token.cancel();
        }

        state.next_generation += 1;
        let ticket = RequestTicket {
            key: key.into(),
            generation: state.next_generation,
            token: CancellationToken::new(),
        };
        state.current = Some(ticket.clone());
        ticket
    }

    /// Cancel the live request, e.g. when its consumer goes away.
    pub fn cancel(&self) {
        if let Some(current) = self.state().current.take() {
            current.token.cancel();
        }
    }

    /// Whether `ticket` is still the live request
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        !ticket.is_cancelled()
            && self
                .state()
                .current
                .as_ref()
                .is_some_and(|c| c.generation == ticket.generation && c.key == ticket.key)
    }

    /// Apply `value` only if `ticket` is still live. Returns whether it was
    /// applied. The check and the update happen under the same lock.
    pub fn commit<T>(&self, ticket: &RequestTicket, value: T, apply: impl FnOnce(T)) -> bool {
        let state = self.state();
        let live = !ticket.is_cancelled()
            && state
                .current
                .as_ref()
                .is_some_and(|c| c.generation == ticket.generation);
        if live {
            apply(value);
        } else {
            debug!(
                "Discarding stale result for '{}' (generation {})",
                ticket.key, ticket.generation
            );
        }
        live
    }

    /// Drive `future` until it resolves or `ticket` is cancelled.
    ///
    /// Returns `None` when the request was superseded or cancelled first.
    pub async fn run<F>(&self, ticket: &RequestTicket, future: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = ticket.token.cancelled() => None,
            output = future => self.is_current(ticket).then_some(output),
        }
    }
}
