//! Key handling for the dashboard (somebody is signed in, no overlay).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::mutations::{AuthMutation, StateMutation};

pub fn handle_key(key: KeyEvent) -> (Vec<UiEffect>, Vec<StateMutation>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => (vec![UiEffect::Quit], vec![]),
        KeyCode::Char('l') => (vec![], vec![StateMutation::Auth(AuthMutation::Logout)]),
        _ => (vec![], vec![]),
    }
}
