//! Feature slices of the TUI.
//!
//! Each feature owns its state, key handling, and rendering:
//!
//! - `auth`: the sign-in / sign-up card shown while logged out
//! - `dashboard`: the signed-in screen
//! - `toast`: transient outcome notifications

pub mod auth;
pub mod dashboard;
pub mod toast;
