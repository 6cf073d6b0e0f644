//! Error taxonomy for auth operations.
//!
//! Every failure in this crate is a user-input failure: it is surfaced to the
//! user as a transient notification and the operation can simply be retried
//! by resubmitting. Nothing here is fatal.

use thiserror::Error;

/// Errors produced by auth operations and the recovery wizard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The email is already registered (sign-up only).
    #[error("{0}")]
    Conflict(String),

    /// No record matches the supplied credentials (sign-in only).
    ///
    /// Deliberately does not distinguish "unknown email" from "wrong
    /// password" so the message cannot be used for account enumeration.
    #[error("{0}")]
    Authentication(String),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation(message.into())
    }

    /// The user-facing message for this error.
    pub fn message(&self) -> &str {
        match self {
            AuthError::Validation(m) | AuthError::Conflict(m) | AuthError::Authentication(m) => m,
        }
    }
}
