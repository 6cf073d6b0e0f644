//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use authdeck_core::auth as auth_ops;
use crossterm::event::{Event, KeyEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::toast::ToastKind;
use crate::features::{auth, dashboard};
use crate::mutations::{AuthMutation, StateMutation};
use crate::overlays::{self, Overlay, OverlayRequest, OverlayTransition, OverlayUpdate, RecoveryState};
use crate::state::{AppState, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.toasts.expire();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        // Release/repeat events would double every keystroke on terminals
        // that report them.
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        // Layout is recomputed from the frame size on every draw.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: crossterm::event::KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        return apply_overlay_update(app, update);
    }

    if app.tui.ctx.is_logged_in() {
        let (effects, mutations) = dashboard::handle_key(key);
        apply_mutations(&mut app.tui, mutations);
        return effects;
    }

    let (effects, mutations, overlay_request) = auth::handle_main_key(&mut app.tui, key);
    apply_mutations(&mut app.tui, mutations);
    if let Some(request) = overlay_request
        && app.overlay.is_none()
    {
        let mut overlay_effects = open_overlay_request(app, request);
        overlay_effects.extend(effects);
        return overlay_effects;
    }

    effects
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Toast(mutation) => tui.toasts.apply(mutation),
            StateMutation::Auth(AuthMutation::Logout) => {
                // Session, both forms, and the checkbox go in one step so no
                // render can observe a half-cleared screen.
                auth_ops::logout(&mut tui.ctx);
                tui.forms.clear();
                tui.toasts
                    .push(ToastKind::Success, "Logged out successfully");
            }
        }
    }
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    match update.transition {
        OverlayTransition::Stay => {}
        OverlayTransition::Close => {
            app.overlay = None;
        }
        OverlayTransition::Open(request) => {
            effects.extend(open_overlay_request(app, request));
        }
    }
    effects
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) -> Vec<UiEffect> {
    match request {
        OverlayRequest::Recovery => {
            let (state, effects) = RecoveryState::open();
            app.overlay = Some(Overlay::Recovery(state));
            effects
        }
    }
}

#[cfg(test)]
mod tests {
    use authdeck_core::config::Config;
    use authdeck_core::recovery::RecoveryFlow;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::features::auth::AuthTab;

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn last_toast(app: &AppState) -> String {
        app.tui
            .toasts
            .iter()
            .last()
            .map(|t| t.message.clone())
            .unwrap_or_default()
    }

    fn sign_in_as_demo(app: &mut AppState) {
        type_text(app, "demo@example.com");
        press(app, KeyCode::Tab);
        type_text(app, "demo123");
        press(app, KeyCode::Enter);
        assert!(app.tui.ctx.is_logged_in());
    }

    #[test]
    fn test_ctrl_c_quits_from_auth_screen() {
        let mut app = app();
        assert_eq!(ctrl(&mut app, 'c'), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_ctrl_c_quits_from_dashboard() {
        let mut app = app();
        sign_in_as_demo(&mut app);
        assert_eq!(ctrl(&mut app, 'c'), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_demo_sign_in_reaches_dashboard() {
        let mut app = app();
        sign_in_as_demo(&mut app);
        assert_eq!(last_toast(&app), "Welcome back, Demo User!");
    }

    #[test]
    fn test_failed_sign_in_stays_on_auth_screen() {
        let mut app = app();
        type_text(&mut app, "demo@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "wrongpw");
        press(&mut app, KeyCode::Enter);

        assert!(!app.tui.ctx.is_logged_in());
        assert_eq!(last_toast(&app), "Invalid email or password");
        // Typed input survives a failed submit.
        assert_eq!(app.tui.forms.sign_in_email, "demo@example.com");
    }

    #[test]
    fn test_logout_clears_session_and_all_forms() {
        let mut app = app();
        // Leave residue on the sign-up form too.
        ctrl(&mut app, 't');
        type_text(&mut app, "Ada");
        ctrl(&mut app, 't');
        sign_in_as_demo(&mut app);

        press(&mut app, KeyCode::Char('l'));

        assert!(!app.tui.ctx.is_logged_in());
        assert_eq!(app.tui.forms.sign_in_email, "");
        assert_eq!(app.tui.forms.sign_up_name, "");
        assert!(!app.tui.forms.remember_me);
        assert_eq!(last_toast(&app), "Logged out successfully");
    }

    #[test]
    fn test_sign_up_new_account_signs_in() {
        let mut app = app();
        ctrl(&mut app, 't');
        assert_eq!(app.tui.forms.tab, AuthTab::SignUp);

        type_text(&mut app, "Ada Lovelace");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "lovelace");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "lovelace");
        press(&mut app, KeyCode::Enter);

        assert!(app.tui.ctx.is_logged_in());
        assert_eq!(app.tui.ctx.directory.len(), 2);
        assert_eq!(last_toast(&app), "Account created successfully! Welcome aboard!");
    }

    #[test]
    fn test_sign_up_duplicate_email_is_rejected() {
        let mut app = app();
        ctrl(&mut app, 't');
        type_text(&mut app, "Other");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "demo@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "something");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "something");
        press(&mut app, KeyCode::Enter);

        assert!(!app.tui.ctx.is_logged_in());
        assert_eq!(app.tui.ctx.directory.len(), 1);
        assert_eq!(last_toast(&app), "An account with this email already exists");
    }

    #[test]
    fn test_remember_me_toggles_with_space() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert!(app.tui.forms.on_checkbox());

        press(&mut app, KeyCode::Char(' '));
        assert!(app.tui.forms.remember_me);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.tui.forms.remember_me);
    }

    #[test]
    fn test_recovery_wizard_end_to_end() {
        let mut app = app();
        ctrl(&mut app, 'r');
        assert!(matches!(app.overlay, Some(Overlay::Recovery(_))));

        type_text(&mut app, "demo@example.com");
        press(&mut app, KeyCode::Enter);
        assert_eq!(last_toast(&app), "Verification code sent to your email!");

        type_text(&mut app, "123456");
        press(&mut app, KeyCode::Enter);
        assert_eq!(last_toast(&app), "Code verified successfully!");

        type_text(&mut app, "newpass99");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "newpass99");
        press(&mut app, KeyCode::Enter);

        assert!(app.overlay.is_none());
        assert_eq!(
            last_toast(&app),
            "Password reset successfully! You can now sign in."
        );
    }

    #[test]
    fn test_recovery_code_input_caps_at_six_chars() {
        let mut app = app();
        ctrl(&mut app, 'r');
        type_text(&mut app, "demo@example.com");
        press(&mut app, KeyCode::Enter);

        type_text(&mut app, "1234567890");
        let Some(Overlay::Recovery(state)) = &app.overlay else {
            panic!("recovery overlay should be open");
        };
        assert!(matches!(
            &state.flow,
            RecoveryFlow::AwaitingCode { code, .. } if code == "123456"
        ));
    }

    #[test]
    fn test_recovery_validation_failure_stays_on_step() {
        let mut app = app();
        ctrl(&mut app, 'r');
        press(&mut app, KeyCode::Enter);

        assert_eq!(last_toast(&app), "Please enter your email address");
        assert!(matches!(app.overlay, Some(Overlay::Recovery(_))));
    }

    #[test]
    fn test_esc_cancels_recovery_and_discards_input() {
        let mut app = app();
        ctrl(&mut app, 'r');
        type_text(&mut app, "demo@example.com");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());

        // Reopening starts over from the email step.
        ctrl(&mut app, 'r');
        let Some(Overlay::Recovery(state)) = &app.overlay else {
            panic!("recovery overlay should be open");
        };
        assert_eq!(state.flow, RecoveryFlow::new());
    }

    #[test]
    fn test_overlay_swallows_screen_keys() {
        let mut app = app();
        ctrl(&mut app, 'r');
        type_text(&mut app, "abc");

        // Typing went to the overlay, not the sign-in form.
        assert_eq!(app.tui.forms.sign_in_email, "");
    }

    #[test]
    fn test_tick_expires_toasts() {
        let config = Config {
            toast_ttl_secs: 0,
            ..Config::default()
        };
        let mut app = AppState::new(config);

        press(&mut app, KeyCode::Enter);
        assert!(!app.tui.toasts.is_empty());

        update(&mut app, UiEvent::Tick);
        assert!(app.tui.toasts.is_empty());
    }

    #[test]
    fn test_key_release_events_are_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        update(&mut app, UiEvent::Terminal(Event::Key(release)));

        assert_eq!(app.tui.forms.sign_in_email, "");
    }
}
