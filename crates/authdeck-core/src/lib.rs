//! Core authdeck library (auth operations, recovery wizard, config).

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod recovery;
pub mod session;

pub use auth::AuthContext;
pub use error::AuthError;
pub use recovery::RecoveryFlow;
pub use session::Session;

/// Minimum accepted password length for sign-up and password reset.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Exact length of the (simulated) verification code.
pub const CODE_LEN: usize = 6;
