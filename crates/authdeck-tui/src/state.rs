//! Application state for the TUI.

use authdeck_core::AuthContext;
use authdeck_core::config::Config;

use crate::features::auth::AuthFormsState;
use crate::features::toast::ToastState;
use crate::overlays::Overlay;

/// Top-level state: the base screen plus an optional modal overlay.
#[derive(Debug)]
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

/// State of the base screen.
///
/// Which screen is showing is derived, not stored: a live session means the
/// dashboard, otherwise the auth card.
#[derive(Debug)]
pub struct TuiState {
    pub config: Config,
    pub ctx: AuthContext,
    pub forms: AuthFormsState,
    pub toasts: ToastState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ctx = AuthContext::new(config.seed_directory());
        let toasts = ToastState::new(config.toast_ttl());
        Self {
            tui: TuiState {
                config,
                ctx,
                forms: AuthFormsState::default(),
                toasts,
            },
            overlay: None,
        }
    }
}
