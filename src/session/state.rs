use crate::error::ErrorKind;
use crate::provider::UserId;

/// A credential pair held only for the duration of one submission.
///
/// Never persisted. The password is kept out of Debug output so a logged
/// submission cannot leak it (same discipline as API keys elsewhere).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"••••••••")
            .finish()
    }
}

/// The process-wide authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No user signed in. Initial state; also the retry state after failure.
    #[default]
    Unauthenticated,
    /// Exactly one provider request in flight. Blocks new submissions.
    Authenticating,
    /// Provider confirmed the sign-in.
    Authenticated { user_id: UserId },
    /// Last submission failed with a displayable category. The user may
    /// edit and resubmit.
    Failed { kind: ErrorKind },
}

impl SessionState {
    pub fn is_authenticating(&self) -> bool {
        matches!(self, SessionState::Authenticating)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// Whether a new submission is currently accepted: only while
    /// `Unauthenticated` or `Failed`. `Authenticating` blocks until the
    /// in-flight request resolves; `Authenticated` is terminal until an
    /// explicit sign-out.
    pub fn accepts_submission(&self) -> bool {
        !self.is_authenticating() && !self.is_authenticated()
    }
}
