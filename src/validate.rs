//! Local credential validation.
//!
//! Pure checks that gate a submission before any provider call is made.
//! All applicable failures are collected, not just the first, so the form
//! can display every unmet requirement at once.

use std::sync::LazyLock;

use regex::Regex;

/// `local-part @ domain . tld(2-64)`, matched against the whole string.
/// Permissive on the domain side; the provider is the final authority.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email pattern is valid")
});

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A single reason a submission was rejected locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// One or more required fields were left empty.
    EmptyField,
    /// The email does not match the accepted pattern.
    MalformedEmail,
    /// Password shorter than [`MIN_PASSWORD_LEN`].
    PasswordTooShort,
    /// Password and confirmation differ.
    PasswordMismatch,
}

impl ValidationFailure {
    /// User-facing copy for form feedback.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationFailure::EmptyField => "Please fill in all fields",
            ValidationFailure::MalformedEmail => "Please enter a valid email address",
            ValidationFailure::PasswordTooShort => "Password must be at least 6 characters",
            ValidationFailure::PasswordMismatch => "Passwords must match",
        }
    }
}

/// Outcome of a local validation pass.
///
/// `reasons` preserves check order so the form renders requirements in a
/// stable sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    reasons: Vec<ValidationFailure>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reasons(&self) -> &[ValidationFailure] {
        &self.reasons
    }

    /// The first failure, used to derive a session-level error when a
    /// rejected submission still needs a displayable state.
    pub fn primary_failure(&self) -> Option<ValidationFailure> {
        self.reasons.first().copied()
    }

    fn push(&mut self, failure: ValidationFailure) {
        self.reasons.push(failure);
    }
}

/// Whether `email` matches the accepted address pattern. Pure, no I/O.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a login submission. Only emptiness and email shape are checked
/// locally; password correctness is the provider's call.
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    let mut result = ValidationResult::default();
    if email.is_empty() || password.is_empty() {
        result.push(ValidationFailure::EmptyField);
    }
    if !email.is_empty() && !validate_email(email) {
        result.push(ValidationFailure::MalformedEmail);
    }
    result
}

/// Validate a signup submission, collecting every applicable failure.
///
/// Emptiness is reported once for the whole form. Shape and policy checks
/// only apply to non-empty fields so an untouched field is not reported
/// twice.
pub fn validate_signup(email: &str, password: &str, confirm: &str) -> ValidationResult {
    let mut result = ValidationResult::default();
    if email.is_empty() || password.is_empty() || confirm.is_empty() {
        result.push(ValidationFailure::EmptyField);
    }
    if !email.is_empty() && !validate_email(email) {
        result.push(ValidationFailure::MalformedEmail);
    }
    if !password.is_empty() && password.chars().count() < MIN_PASSWORD_LEN {
        result.push(ValidationFailure::PasswordTooShort);
    }
    if !password.is_empty() && !confirm.is_empty() && password != confirm {
        result.push(ValidationFailure::PasswordMismatch);
    }
    result
}
