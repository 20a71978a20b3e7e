//! Event channel between the core and the presentation layer.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::choreography::SplashPhase;
use crate::error::ErrorKind;
use crate::provider::UserId;
use crate::session::SessionState;

/// Everything the core publishes. The presentation layer consumes these to
/// re-render; the runtime consumes the navigation-gating ones to advance
/// the screen flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The session store transitioned. Sent on every confirmed mutation.
    SessionChanged(SessionState),
    /// Interior splash animation phase. Cosmetic; never gates navigation.
    SplashCosmetic(SplashPhase),
    /// Terminal action of the splash sequence fired.
    SplashFinished,
    /// Terminal action of the post-login celebration fired.
    CelebrationFinished,
    /// Account created. The session stays unauthenticated; the user logs in
    /// with the new credentials after the hand-back delay.
    SignupSucceeded { user_id: UserId },
    /// Signup hand-back delay elapsed; return to the login surface.
    SignupReturnToLogin,
    /// Password reset email accepted by the provider.
    PasswordResetSent { email: String },
    /// Password reset rejected. Non-blocking; no session transition.
    PasswordResetFailed(ErrorKind),
    /// Provider refused to end the session. State is left unchanged.
    SignOutFailed(ErrorKind),
}

/// Create the core event channel.
///
/// Unbounded std channel: senders live on timer tasks and the controller,
/// the single consumer drains on its own cadence.
pub fn channel() -> (Sender<AuthEvent>, Receiver<AuthEvent>) {
    mpsc::channel()
}
