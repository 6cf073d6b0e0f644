//! Key handling for the auth screen (no overlay active, nobody signed in).

use authdeck_core::auth::{self, SignUpRequest};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::AuthTab;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;
use crate::state::TuiState;

/// Handles a key press on the auth screen.
///
/// Returns effects for the runtime, mutations for the reducer to apply, and
/// an optional request to open an overlay.
pub fn handle_main_key(
    tui: &mut TuiState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => (vec![UiEffect::Quit], vec![], None),
        KeyCode::Char('t') if ctrl => {
            tui.forms.toggle_tab();
            (vec![], vec![], None)
        }
        KeyCode::Char('r') if ctrl => (vec![], vec![], Some(OverlayRequest::Recovery)),
        KeyCode::Tab | KeyCode::Down => {
            tui.forms.focus_next();
            (vec![], vec![], None)
        }
        KeyCode::BackTab | KeyCode::Up => {
            tui.forms.focus_prev();
            (vec![], vec![], None)
        }
        KeyCode::Enter => (vec![], submit(tui), None),
        KeyCode::Char(' ') if tui.forms.on_checkbox() => {
            tui.forms.remember_me = !tui.forms.remember_me;
            (vec![], vec![], None)
        }
        KeyCode::Backspace => {
            if let Some(field) = tui.forms.active_field_mut() {
                field.pop();
            }
            (vec![], vec![], None)
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(field) = tui.forms.active_field_mut() {
                field.push(c);
            }
            (vec![], vec![], None)
        }
        _ => (vec![], vec![], None),
    }
}

/// Submits whichever form is active. Outcome always lands as a toast.
fn submit(tui: &mut TuiState) -> Vec<StateMutation> {
    let result = match tui.forms.tab {
        AuthTab::SignIn => auth::sign_in(
            &mut tui.ctx,
            &tui.forms.sign_in_email,
            &tui.forms.sign_in_password,
        )
        .map(|session| format!("Welcome back, {}!", session.name)),
        AuthTab::SignUp => auth::sign_up(
            &mut tui.ctx,
            &SignUpRequest {
                name: tui.forms.sign_up_name.clone(),
                email: tui.forms.sign_up_email.clone(),
                password: tui.forms.sign_up_password.clone(),
                confirm_password: tui.forms.sign_up_confirm.clone(),
            },
        )
        .map(|_| "Account created successfully! Welcome aboard!".to_string()),
    };

    match result {
        Ok(message) => vec![StateMutation::toast_success(message)],
        Err(err) => vec![StateMutation::toast_error(err.message())],
    }
}
