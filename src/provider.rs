//! Identity provider seam.
//!
//! The core only ever talks to the backend through [`IdentityProvider`];
//! concrete transports (and test doubles) live behind this trait. Provider
//! failures are a closed taxonomy so the translator can match exhaustively —
//! a new backend code must be added here and mapped explicitly, never
//! silently defaulted.

use async_trait::async_trait;
use thiserror::Error;

/// Opaque identifier for an authenticated user, assigned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure reported by the identity provider.
///
/// Wire codes follow the backend's numeric taxonomy; [`ProviderError::from_code`]
/// is the single place they are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider rejected the email address")]
    InvalidEmail,
    #[error("no account matches the email address")]
    UserNotFound,
    #[error("password does not match the account")]
    WrongPassword,
    #[error("the account is disabled")]
    UserDisabled,
    #[error("rate limited by the provider")]
    TooManyRequests,
    #[error("network failure reaching the provider")]
    NetworkError,
    #[error("an account already exists for the email address")]
    EmailAlreadyInUse,
    #[error("password rejected by the provider's policy")]
    WeakPassword,
    #[error("unrecognized provider error code {code}")]
    Unrecognized { code: i32 },
}

impl ProviderError {
    /// Decode a raw provider error code. Total: unknown codes become
    /// [`ProviderError::Unrecognized`].
    pub fn from_code(code: i32) -> Self {
        match code {
            17005 => ProviderError::UserDisabled,
            17007 => ProviderError::EmailAlreadyInUse,
            17008 => ProviderError::InvalidEmail,
            17009 => ProviderError::WrongPassword,
            17010 => ProviderError::TooManyRequests,
            17011 => ProviderError::UserNotFound,
            17020 => ProviderError::NetworkError,
            17026 => ProviderError::WeakPassword,
            other => ProviderError::Unrecognized { code: other },
        }
    }

    /// The raw wire code for this error.
    pub fn code(&self) -> i32 {
        match self {
            ProviderError::UserDisabled => 17005,
            ProviderError::EmailAlreadyInUse => 17007,
            ProviderError::InvalidEmail => 17008,
            ProviderError::WrongPassword => 17009,
            ProviderError::TooManyRequests => 17010,
            ProviderError::UserNotFound => 17011,
            ProviderError::NetworkError => 17020,
            ProviderError::WeakPassword => 17026,
            ProviderError::Unrecognized { code } => *code,
        }
    }
}

/// Remote authentication backend.
///
/// All operations resolve on the caller's task; implementations must not
/// block the thread. Object-safe so the controller can hold `Arc<dyn _>`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId, ProviderError>;

    async fn create_user(&self, email: &str, password: &str) -> Result<UserId, ProviderError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError>;

    async fn send_email_verification(&self, user_id: &UserId) -> Result<(), ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;
}
