//! Translation of provider failures into user-facing categories.
//!
//! Raw [`ProviderError`] values never cross the core boundary: every failure
//! is translated into an [`ErrorKind`] here, and display copy lives with the
//! kind so the presentation layer renders categories, not wire codes.

use crate::provider::ProviderError;
use crate::validate::ValidationFailure;

/// User-facing failure category. Closed set; anything the translator does
/// not recognize resolves to [`ErrorKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidEmail,
    UserNotFound,
    WrongPassword,
    UserDisabled,
    TooManyRequests,
    NetworkError,
    EmailAlreadyInUse,
    WeakPassword,
    Unknown,
}

impl ErrorKind {
    /// Display copy for this category.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEmail => "Invalid email address",
            ErrorKind::UserNotFound => "No account found with this email",
            ErrorKind::WrongPassword => "Incorrect password",
            ErrorKind::UserDisabled => "This account has been disabled",
            ErrorKind::TooManyRequests => "Too many attempts. Please try again later",
            ErrorKind::NetworkError => "Network error. Please check your connection",
            ErrorKind::EmailAlreadyInUse => "An account with this email already exists",
            ErrorKind::WeakPassword => {
                "Password is too weak. Please choose a stronger password"
            }
            ErrorKind::Unknown => "Something went wrong. Please try again",
        }
    }

    /// Category for a submission rejected by local validation.
    ///
    /// Local failures still need a displayable session state; they fold into
    /// the nearest provider-facing category.
    pub fn from_validation(failure: ValidationFailure) -> Self {
        match failure {
            ValidationFailure::EmptyField | ValidationFailure::MalformedEmail => {
                ErrorKind::InvalidEmail
            }
            ValidationFailure::PasswordTooShort | ValidationFailure::PasswordMismatch => {
                ErrorKind::WeakPassword
            }
        }
    }
}

/// Map a provider failure to its user-facing category.
///
/// Exhaustive over the provider taxonomy: adding a [`ProviderError`] variant
/// without a mapping here is a compile error.
pub fn translate(err: &ProviderError) -> ErrorKind {
    match err {
        ProviderError::InvalidEmail => ErrorKind::InvalidEmail,
        ProviderError::UserNotFound => ErrorKind::UserNotFound,
        ProviderError::WrongPassword => ErrorKind::WrongPassword,
        ProviderError::UserDisabled => ErrorKind::UserDisabled,
        ProviderError::TooManyRequests => ErrorKind::TooManyRequests,
        ProviderError::NetworkError => ErrorKind::NetworkError,
        ProviderError::EmailAlreadyInUse => ErrorKind::EmailAlreadyInUse,
        ProviderError::WeakPassword => ErrorKind::WeakPassword,
        ProviderError::Unrecognized { .. } => ErrorKind::Unknown,
    }
}
