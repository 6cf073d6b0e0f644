//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render
//! function.

pub mod recovery;
pub mod render_utils;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use recovery::RecoveryState;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;

/// Requests to open a new overlay.
#[derive(Debug)]
pub enum OverlayRequest {
    Recovery,
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Recovery(RecoveryState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Recovery(r) => r.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Recovery(r) => r.handle_key(key),
        }
    }
}

/// Routes a key to the active overlay, if any.
///
/// Returns `None` when no overlay is open so the caller can fall through to
/// the screen-level handlers.
pub fn handle_overlay_key(overlay: &mut Option<Overlay>, key: KeyEvent) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|overlay| overlay.handle_key(key))
}
