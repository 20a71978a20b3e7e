//! Credential submission orchestration.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::error::{translate, ErrorKind};
use crate::events::AuthEvent;
use crate::provider::IdentityProvider;
use crate::session::state::Credentials;
use crate::session::store::SessionStore;
use crate::validate::{validate_email, validate_login, validate_signup, ValidationResult};

/// Drives the session state machine against the identity provider.
///
/// All transitions flow through the [`SessionStore`]; the controller itself
/// is stateless and cheap to clone. At most one authentication request is
/// in flight at a time — a submission while `Authenticating` is dropped,
/// not queued.
#[derive(Clone)]
pub struct SessionController {
    provider: Arc<dyn IdentityProvider>,
    store: SessionStore,
    events: Sender<AuthEvent>,
}

impl SessionController {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: SessionStore,
        events: Sender<AuthEvent>,
    ) -> Self {
        Self {
            provider,
            store,
            events,
        }
    }

    /// Submit a login. Local validation gates the provider call; the
    /// outcome lands in the session store.
    pub async fn login(&self, credentials: &Credentials) {
        // Invalid submissions are dropped too while one is in flight:
        // folding a validation failure into the store here would knock the
        // state off Authenticating and reopen the in-flight slot.
        if !self.store.state().accepts_submission() {
            tracing::debug!("login ignored, submission not accepted in current state");
            return;
        }
        let check = validate_login(&credentials.email, &credentials.password);
        if self.reject_invalid("login", &check) {
            return;
        }
        if !self.store.begin_authenticating() {
            tracing::debug!("login ignored, submission already in flight");
            return;
        }

        match self
            .provider
            .sign_in(&credentials.email, &credentials.password)
            .await
        {
            Ok(user_id) => {
                self.store.set_authenticated(user_id);
            }
            Err(err) => {
                let kind = translate(&err);
                tracing::warn!(code = err.code(), ?kind, "sign-in rejected");
                self.store.set_failed(kind);
            }
        }
    }

    /// Submit a signup. On provider success the account exists but the
    /// session stays unauthenticated; a verification email is sent on a
    /// detached task and its failure never surfaces.
    pub async fn signup(&self, credentials: &Credentials, confirm: &str) {
        if !self.store.state().accepts_submission() {
            tracing::debug!("signup ignored, submission not accepted in current state");
            return;
        }
        let check = validate_signup(&credentials.email, &credentials.password, confirm);
        if self.reject_invalid("signup", &check) {
            return;
        }
        if !self.store.begin_authenticating() {
            tracing::debug!("signup ignored, submission already in flight");
            return;
        }

        match self
            .provider
            .create_user(&credentials.email, &credentials.password)
            .await
        {
            Ok(user_id) => {
                self.store.set_unauthenticated();
                self.send_verification(user_id.clone());
                let _ = self.events.send(AuthEvent::SignupSucceeded { user_id });
            }
            Err(err) => {
                let kind = translate(&err);
                tracing::warn!(code = err.code(), ?kind, "account creation rejected");
                self.store.set_failed(kind);
            }
        }
    }

    /// Request a password reset email. No loading lock: both outcomes are
    /// terminal, user-visible events and the session state is untouched.
    pub async fn request_password_reset(&self, email: &str) {
        if email.is_empty() || !validate_email(email) {
            let _ = self
                .events
                .send(AuthEvent::PasswordResetFailed(ErrorKind::InvalidEmail));
            return;
        }

        match self.provider.send_password_reset(email).await {
            Ok(()) => {
                let _ = self.events.send(AuthEvent::PasswordResetSent {
                    email: email.to_string(),
                });
            }
            Err(err) => {
                let kind = translate(&err);
                tracing::warn!(code = err.code(), ?kind, "password reset rejected");
                let _ = self.events.send(AuthEvent::PasswordResetFailed(kind));
            }
        }
    }

    /// End the session. Confirm-then-transition: local state only changes
    /// once the provider acknowledges, so a failed sign-out leaves the
    /// session authenticated and reports the failure.
    pub async fn sign_out(&self) {
        match self.provider.sign_out().await {
            Ok(()) => {
                self.store.set_unauthenticated();
            }
            Err(err) => {
                let kind = translate(&err);
                tracing::warn!(code = err.code(), ?kind, "sign-out rejected");
                let _ = self.events.send(AuthEvent::SignOutFailed(kind));
            }
        }
    }

    /// Fold a failed local validation into a displayable session state.
    /// Returns true if the submission was rejected.
    fn reject_invalid(&self, op: &'static str, check: &ValidationResult) -> bool {
        let Some(failure) = check.primary_failure() else {
            return false;
        };
        tracing::debug!(op, reasons = ?check.reasons(), "submission rejected locally");
        self.store.set_failed(ErrorKind::from_validation(failure));
        true
    }

    fn send_verification(&self, user_id: crate::provider::UserId) {
        let provider = Arc::clone(&self.provider);
        tokio::spawn(async move {
            if let Err(err) = provider.send_email_verification(&user_id).await {
                // Secondary operation: log and move on, never block signup.
                tracing::warn!(code = err.code(), "verification email failed");
            } else {
                tracing::debug!(%user_id, "verification email sent");
            }
        });
    }
}
