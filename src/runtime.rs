//! Screen-flow runtime.
//!
//! Composes the store, controller, sequencer and navigation reducer into
//! one cooperative loop: imperative entry points go down to the provider,
//! [`AuthEvent`]s come back up and are folded into navigation state by
//! [`pump`](AuthRuntime::pump). All mutation happens on the caller's task.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use crate::choreography::{celebration_sequence, signup_handback_sequence, splash_sequence};
use crate::events::{self, AuthEvent};
use crate::flow::Reducer;
use crate::nav::{screen_for, NavIntent, NavReducer, NavState, Screen, SubScreenKind};
use crate::provider::IdentityProvider;
use crate::sequencer::{self, SequenceHandle};
use crate::session::{Credentials, SessionController, SessionState, SessionStore};

/// Owns the authentication screen flow for one UI scope.
///
/// Sequences started by the runtime are cancelled when it is dropped, so a
/// torn-down screen can never receive a late navigation hand-off.
pub struct AuthRuntime {
    controller: SessionController,
    store: SessionStore,
    nav: NavState,
    events_tx: Sender<AuthEvent>,
    events_rx: Receiver<AuthEvent>,
    splash: Option<SequenceHandle>,
    celebration: Option<SequenceHandle>,
    handback: Option<SequenceHandle>,
    last_session: SessionState,
    notices: Vec<AuthEvent>,
}

impl AuthRuntime {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (events_tx, events_rx) = events::channel();
        let store = SessionStore::new(events_tx.clone());
        let controller =
            SessionController::new(provider, store.clone(), events_tx.clone());
        Self {
            controller,
            store,
            nav: NavState::default(),
            events_tx,
            events_rx,
            splash: None,
            celebration: None,
            handback: None,
            last_session: SessionState::Unauthenticated,
            notices: Vec::new(),
        }
    }

    /// Start the splash timeline. Must run inside a tokio runtime; calling
    /// it again is a no-op.
    pub fn start(&mut self) {
        if self.splash.is_none() {
            self.splash = Some(sequencer::spawn(splash_sequence(self.events_tx.clone())));
        }
    }

    /// The screen to render right now. Derived, never stored.
    pub fn screen(&self) -> Screen {
        screen_for(&self.store.state(), &self.nav)
    }

    pub fn session(&self) -> SessionState {
        self.store.state()
    }

    pub async fn login(&mut self, credentials: &Credentials) {
        self.controller.login(credentials).await;
        self.pump();
    }

    pub async fn signup(&mut self, credentials: &Credentials, confirm: &str) {
        self.controller.signup(credentials, confirm).await;
        self.pump();
    }

    pub async fn request_password_reset(&mut self, email: &str) {
        self.controller.request_password_reset(email).await;
        self.pump();
    }

    pub async fn sign_out(&mut self) {
        self.controller.sign_out().await;
        self.pump();
    }

    // Local navigation. Plain stack moves, not session transitions.

    pub fn show_signup(&mut self) {
        self.apply(NavIntent::ShowSignUp);
    }

    pub fn back_to_login(&mut self) {
        self.apply(NavIntent::BackToLogin);
    }

    pub fn open_menu(&mut self) {
        self.apply(NavIntent::OpenMenu);
    }

    pub fn open_sub_screen(&mut self, kind: SubScreenKind) {
        self.apply(NavIntent::OpenSubScreen(kind));
    }

    pub fn back(&mut self) {
        self.apply(NavIntent::Back);
    }

    /// Drain pending events and fold them into navigation state.
    pub fn pump(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.on_event(event);
        }
    }

    /// Display-only events (reset confirmations, sign-out failures)
    /// collected since the last call.
    pub fn drain_notices(&mut self) -> Vec<AuthEvent> {
        std::mem::take(&mut self.notices)
    }

    /// Handle of the splash timeline, once started.
    pub fn splash_handle(&self) -> Option<&SequenceHandle> {
        self.splash.as_ref()
    }

    /// Handle of the running celebration, between login success and the
    /// hand-off into the authenticated area.
    pub fn celebration_handle(&self) -> Option<&SequenceHandle> {
        self.celebration.as_ref()
    }

    pub fn handback_handle(&self) -> Option<&SequenceHandle> {
        self.handback.as_ref()
    }

    fn on_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SessionChanged(next) => self.on_session_changed(next),
            AuthEvent::SplashCosmetic(phase) => {
                // Animation fodder for the presentation layer only.
                tracing::trace!(?phase, "splash phase");
            }
            AuthEvent::SplashFinished => self.apply(NavIntent::SplashFinished),
            AuthEvent::CelebrationFinished => {
                self.celebration = None;
                self.apply(NavIntent::CelebrationFinished);
            }
            AuthEvent::SignupSucceeded { user_id } => {
                tracing::info!(%user_id, "account created");
                self.handback = Some(sequencer::spawn(signup_handback_sequence(
                    self.events_tx.clone(),
                )));
            }
            AuthEvent::SignupReturnToLogin => {
                self.handback = None;
                self.apply(NavIntent::BackToLogin);
            }
            notice @ (AuthEvent::PasswordResetSent { .. }
            | AuthEvent::PasswordResetFailed(_)
            | AuthEvent::SignOutFailed(_)) => {
                self.notices.push(notice);
            }
        }
    }

    fn on_session_changed(&mut self, next: SessionState) {
        let signed_out =
            self.last_session.is_authenticated() && next == SessionState::Unauthenticated;
        let signed_in = next.is_authenticated() && !self.last_session.is_authenticated();
        self.last_session = next;

        if signed_in {
            // Controller confirmed the sign-in; hold the login surface
            // until the celebration hands off.
            self.celebration = Some(sequencer::spawn(celebration_sequence(
                self.events_tx.clone(),
            )));
        }
        if signed_out {
            if let Some(celebration) = self.celebration.take() {
                celebration.cancel();
            }
            self.apply(NavIntent::SignedOut);
        }
    }

    fn apply(&mut self, intent: NavIntent) {
        self.nav = NavReducer::reduce(self.nav.clone(), intent);
    }
}

impl Drop for AuthRuntime {
    fn drop(&mut self) {
        // A fired hand-off must never outlive the screens it navigates.
        for handle in [&self.splash, &self.celebration, &self.handback]
            .into_iter()
            .flatten()
        {
            handle.cancel();
        }
    }
}
