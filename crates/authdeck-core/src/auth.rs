//! Sign-in, sign-up, and logout operations.
//!
//! All operations act on an explicit [`AuthContext`] passed in by the caller
//! rather than ambient shared state, so they stay deterministic and are
//! trivially testable in isolation. Every mutation happens synchronously in
//! response to a single submit.

use tracing::info;

use crate::MIN_PASSWORD_LEN;
use crate::directory::{UserDirectory, UserRecord};
use crate::error::AuthError;
use crate::session::Session;

/// The mutable world auth operations act on: the user directory plus the
/// (at most one) current session.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub directory: UserDirectory,
    pub session: Option<Session>,
}

impl AuthContext {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory,
            session: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Input for a sign-up submit.
#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Signs in with (email, password) against the directory.
///
/// On success the context's session is set and a clone is returned for the
/// caller's success notification.
pub fn sign_in(ctx: &mut AuthContext, email: &str, password: &str) -> Result<Session, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::validation("Please fill in all fields"));
    }

    let Some(user) = ctx.directory.find_by_credentials(email, password) else {
        info!(email_known = ctx.directory.find_by_email(email).is_some(), "sign-in rejected");
        // One message for both unknown email and wrong password.
        return Err(AuthError::Authentication(
            "Invalid email or password".to_string(),
        ));
    };

    let session = Session::new(user.name.clone(), user.email.clone());
    ctx.session = Some(session.clone());
    info!(name = %session.name, "sign-in succeeded");
    Ok(session)
}

/// Registers a new user and signs them in.
///
/// The directory gains exactly one record on success and is left untouched on
/// any failure.
pub fn sign_up(ctx: &mut AuthContext, request: &SignUpRequest) -> Result<Session, AuthError> {
    if request.name.is_empty()
        || request.email.is_empty()
        || request.password.is_empty()
        || request.confirm_password.is_empty()
    {
        return Err(AuthError::validation("Please fill in all fields"));
    }
    if request.password != request.confirm_password {
        return Err(AuthError::validation("Passwords do not match"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::validation(
            "Password must be at least 6 characters",
        ));
    }

    ctx.directory.insert(UserRecord {
        name: request.name.clone(),
        email: request.email.clone(),
        password: request.password.clone(),
    })?;

    let session = Session::new(request.name.clone(), request.email.clone());
    ctx.session = Some(session.clone());
    info!(name = %session.name, "sign-up succeeded");
    Ok(session)
}

/// Clears the current session. A no-op when nobody is signed in.
pub fn logout(ctx: &mut AuthContext) {
    if ctx.session.take().is_some() {
        info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_ctx() -> AuthContext {
        AuthContext::new(UserDirectory::seeded(UserRecord {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
        }))
    }

    fn request(name: &str, email: &str, password: &str, confirm: &str) -> SignUpRequest {
        SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_sign_in_demo_credentials() {
        let mut ctx = demo_ctx();
        let session = sign_in(&mut ctx, "demo@example.com", "demo123").unwrap();
        assert_eq!(session.name, "Demo User");
        assert_eq!(ctx.session, Some(session));
    }

    #[test]
    fn test_sign_in_empty_fields_is_validation_error() {
        let mut ctx = demo_ctx();
        assert!(matches!(
            sign_in(&mut ctx, "", "demo123"),
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            sign_in(&mut ctx, "demo@example.com", ""),
            Err(AuthError::Validation(_))
        ));
        assert!(ctx.session.is_none());
    }

    #[test]
    fn test_sign_in_wrong_password_is_authentication_error() {
        let mut ctx = demo_ctx();
        let err = sign_in(&mut ctx, "demo@example.com", "nope123").unwrap_err();
        assert!(matches!(err, AuthError::Authentication(_)));
        assert_eq!(err.message(), "Invalid email or password");
        assert!(ctx.session.is_none());
    }

    #[test]
    fn test_sign_in_unknown_email_uses_same_message() {
        let mut ctx = demo_ctx();
        let wrong_password = sign_in(&mut ctx, "demo@example.com", "nope123").unwrap_err();
        let unknown_email = sign_in(&mut ctx, "ghost@example.com", "demo123").unwrap_err();
        assert_eq!(wrong_password.message(), unknown_email.message());
    }

    #[test]
    fn test_sign_up_fresh_email_adds_record_and_session() {
        let mut ctx = demo_ctx();
        let session =
            sign_up(&mut ctx, &request("Ada", "ada@example.com", "lovelace", "lovelace")).unwrap();
        assert_eq!(ctx.directory.len(), 2);
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(ctx.session, Some(session));
    }

    #[test]
    fn test_sign_up_duplicate_email_is_conflict_and_directory_unchanged() {
        let mut ctx = demo_ctx();
        let err = sign_up(
            &mut ctx,
            &request("Other", "demo@example.com", "something", "something"),
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::Conflict(_)));
        assert_eq!(ctx.directory.len(), 1);
        assert!(ctx.session.is_none());
    }

    #[test]
    fn test_sign_up_short_password_is_rejected() {
        let mut ctx = demo_ctx();
        let err = sign_up(&mut ctx, &request("Ada", "ada@example.com", "abc", "abc")).unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(ctx.directory.len(), 1);
    }

    #[test]
    fn test_sign_up_mismatched_confirmation_is_rejected() {
        let mut ctx = demo_ctx();
        let err =
            sign_up(&mut ctx, &request("Ada", "ada@example.com", "lovelace", "byron")).unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(ctx.directory.len(), 1);
    }

    #[test]
    fn test_sign_up_validation_precedes_conflict() {
        // Mismatched passwords on an already-taken email reports validation,
        // matching the original submit order.
        let mut ctx = demo_ctx();
        let err = sign_up(
            &mut ctx,
            &request("Other", "demo@example.com", "something", "different"),
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_logout_clears_session() {
        let mut ctx = demo_ctx();
        sign_in(&mut ctx, "demo@example.com", "demo123").unwrap();
        logout(&mut ctx);
        assert!(ctx.session.is_none());

        // Idempotent.
        logout(&mut ctx);
        assert!(ctx.session.is_none());
    }
}
