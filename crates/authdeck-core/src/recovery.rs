//! Password-recovery wizard state machine.
//!
//! A three-step flow: request a code by email, verify the code, set a new
//! password. Each state carries only the fields that are meaningful in that
//! state, so touching a field outside its owning state does not compile.
//!
//! No code is actually generated, sent, or compared: "send" succeeds for any
//! non-empty email and "verify" accepts any 6-character value. Both steps are
//! placeholders standing in for a real one-time-code exchange, which is out
//! of scope here.

use tracing::debug;

use crate::error::AuthError;
use crate::{CODE_LEN, MIN_PASSWORD_LEN};

/// Current step of the recovery wizard, with per-step payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryFlow {
    /// Initial state: collecting the account email.
    AwaitingEmail { email: String },
    /// Collecting the 6-character verification code.
    AwaitingCode { email: String, code: String },
    /// Collecting the replacement password.
    AwaitingNewPassword {
        email: String,
        new_password: String,
        confirm_password: String,
    },
}

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAdvance {
    /// Moved to the code step ("code sent").
    CodeSent,
    /// Moved to the new-password step ("code verified").
    CodeVerified,
    /// The flow finished and was reset to [`RecoveryFlow::AwaitingEmail`].
    Completed,
}

impl Default for RecoveryFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryFlow {
    pub fn new() -> Self {
        RecoveryFlow::AwaitingEmail {
            email: String::new(),
        }
    }

    /// The email captured so far, if past the first step.
    pub fn email(&self) -> Option<&str> {
        match self {
            RecoveryFlow::AwaitingEmail { .. } => None,
            RecoveryFlow::AwaitingCode { email, .. }
            | RecoveryFlow::AwaitingNewPassword { email, .. } => Some(email),
        }
    }

    /// Validates the current step's payload and advances the wizard.
    ///
    /// On validation failure the state is left untouched. Completing the last
    /// step resets the flow to [`RecoveryFlow::AwaitingEmail`] with every
    /// transient field cleared.
    pub fn submit(&mut self) -> Result<RecoveryAdvance, AuthError> {
        match self {
            RecoveryFlow::AwaitingEmail { email } => {
                if email.is_empty() {
                    return Err(AuthError::validation("Please enter your email address"));
                }
                debug!("recovery: advancing to code step");
                *self = RecoveryFlow::AwaitingCode {
                    email: std::mem::take(email),
                    code: String::new(),
                };
                Ok(RecoveryAdvance::CodeSent)
            }
            RecoveryFlow::AwaitingCode { email, code } => {
                if code.chars().count() != CODE_LEN {
                    return Err(AuthError::validation(
                        "Please enter the 6-digit verification code",
                    ));
                }
                // Any 6-character value passes; there is no real code.
                debug!("recovery: advancing to password step");
                *self = RecoveryFlow::AwaitingNewPassword {
                    email: std::mem::take(email),
                    new_password: String::new(),
                    confirm_password: String::new(),
                };
                Ok(RecoveryAdvance::CodeVerified)
            }
            RecoveryFlow::AwaitingNewPassword {
                new_password,
                confirm_password,
                ..
            } => {
                if new_password.is_empty() || confirm_password.is_empty() {
                    return Err(AuthError::validation("Please fill in all fields"));
                }
                if new_password != confirm_password {
                    return Err(AuthError::validation("Passwords do not match"));
                }
                if new_password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(AuthError::validation(
                        "Password must be at least 6 characters",
                    ));
                }
                debug!("recovery: completed");
                *self = RecoveryFlow::new();
                Ok(RecoveryAdvance::Completed)
            }
        }
    }

    /// Abandons the wizard: back to the first step, transient fields cleared.
    pub fn cancel(&mut self) {
        *self = RecoveryFlow::new();
    }
}
