//! Single mutation entry point for the session state.

use std::sync::mpsc::Sender;
use std::sync::{Arc, RwLock};

use crate::error::ErrorKind;
use crate::events::AuthEvent;
use crate::provider::UserId;
use crate::session::state::SessionState;

/// Thread-safe holder of the one process-wide [`SessionState`].
///
/// Readers clone the current state; writers go through the `pub(crate)`
/// setters, which only [`super::SessionController`] reaches. Every mutation
/// is published as [`AuthEvent::SessionChanged`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionState>>,
    events: Sender<AuthEvent>,
}

impl SessionStore {
    pub fn new(events: Sender<AuthEvent>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState::Unauthenticated)),
            events,
        }
    }

    /// Get a clone of the current state. Cheap; concurrent readers do not
    /// block each other.
    pub fn state(&self) -> SessionState {
        self.inner.read().expect("session lock poisoned").clone()
    }

    /// Claim the single in-flight slot.
    ///
    /// Check and transition happen under one write lock: returns false and
    /// leaves the state untouched if a submission is already in flight or
    /// the session is already authenticated.
    pub(crate) fn begin_authenticating(&self) -> bool {
        let mut state = self.inner.write().expect("session lock poisoned");
        if !state.accepts_submission() {
            return false;
        }
        *state = SessionState::Authenticating;
        drop(state);
        self.publish(SessionState::Authenticating);
        true
    }

    pub(crate) fn set_authenticated(&self, user_id: UserId) {
        self.set(SessionState::Authenticated { user_id });
    }

    pub(crate) fn set_failed(&self, kind: ErrorKind) {
        self.set(SessionState::Failed { kind });
    }

    pub(crate) fn set_unauthenticated(&self) {
        self.set(SessionState::Unauthenticated);
    }

    fn set(&self, next: SessionState) {
        let mut state = self.inner.write().expect("session lock poisoned");
        if *state == next {
            return;
        }
        tracing::info!(from = ?*state, to = ?next, "session transition");
        *state = next.clone();
        drop(state);
        self.publish(next);
    }

    fn publish(&self, state: SessionState) {
        // A dropped receiver means the flow is tearing down; nothing to do.
        let _ = self.events.send(AuthEvent::SessionChanged(state));
    }
}
