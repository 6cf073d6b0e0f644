//! State mutations returned by key handlers.
//!
//! Handlers that live outside the reducer (feature modules, overlays) describe
//! cross-cutting state changes as data; `update::apply_mutations` is the only
//! place that executes them.

use crate::features::toast::ToastKind;

/// A single state change to apply to [`crate::state::TuiState`].
#[derive(Debug)]
pub enum StateMutation {
    Toast(ToastMutation),
    Auth(AuthMutation),
}

#[derive(Debug)]
pub enum ToastMutation {
    Push { kind: ToastKind, message: String },
}

#[derive(Debug)]
pub enum AuthMutation {
    /// Clear the session and every form field in one step.
    Logout,
}

impl StateMutation {
    pub fn toast_success(message: impl Into<String>) -> Self {
        StateMutation::Toast(ToastMutation::Push {
            kind: ToastKind::Success,
            message: message.into(),
        })
    }

    pub fn toast_error(message: impl Into<String>) -> Self {
        StateMutation::Toast(ToastMutation::Push {
            kind: ToastKind::Error,
            message: message.into(),
        })
    }
}
