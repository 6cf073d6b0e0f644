//! Form state for the sign-in / sign-up screen.

/// Which form the auth card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

/// Everything the user has typed on the auth screen.
///
/// Both forms keep their contents while the other tab is active, matching a
/// tabbed card where switching does not discard input. Focus is an index into
/// the active tab's field list (sign-in: email, password, remember-me;
/// sign-up: name, email, password, confirm).
#[derive(Debug, Clone, Default)]
pub struct AuthFormsState {
    pub tab: AuthTab,
    pub focus: usize,

    pub sign_in_email: String,
    pub sign_in_password: String,
    pub remember_me: bool,

    pub sign_up_name: String,
    pub sign_up_email: String,
    pub sign_up_password: String,
    pub sign_up_confirm: String,
}

impl AuthFormsState {
    pub fn field_count(&self) -> usize {
        match self.tab {
            AuthTab::SignIn => 3,
            AuthTab::SignUp => 4,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(self.field_count() - 1);
    }

    /// Switches to the other tab, resetting focus to the first field.
    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            AuthTab::SignIn => AuthTab::SignUp,
            AuthTab::SignUp => AuthTab::SignIn,
        };
        self.focus = 0;
    }

    /// True when focus sits on the remember-me checkbox.
    pub fn on_checkbox(&self) -> bool {
        self.tab == AuthTab::SignIn && self.focus == 2
    }

    /// The focused text field, if the focused widget is one.
    pub fn active_field_mut(&mut self) -> Option<&mut String> {
        match (self.tab, self.focus) {
            (AuthTab::SignIn, 0) => Some(&mut self.sign_in_email),
            (AuthTab::SignIn, 1) => Some(&mut self.sign_in_password),
            (AuthTab::SignUp, 0) => Some(&mut self.sign_up_name),
            (AuthTab::SignUp, 1) => Some(&mut self.sign_up_email),
            (AuthTab::SignUp, 2) => Some(&mut self.sign_up_password),
            (AuthTab::SignUp, 3) => Some(&mut self.sign_up_confirm),
            _ => None,
        }
    }

    /// Resets every field, the checkbox, focus, and the active tab.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut forms = AuthFormsState::default();
        assert_eq!(forms.field_count(), 3);

        forms.focus_prev();
        assert_eq!(forms.focus, 2);
        forms.focus_next();
        assert_eq!(forms.focus, 0);
    }

    #[test]
    fn test_toggle_tab_resets_focus_but_keeps_fields() {
        let mut forms = AuthFormsState {
            focus: 1,
            sign_in_email: "demo@example.com".to_string(),
            ..Default::default()
        };

        forms.toggle_tab();
        assert_eq!(forms.tab, AuthTab::SignUp);
        assert_eq!(forms.focus, 0);
        assert_eq!(forms.sign_in_email, "demo@example.com");
    }

    #[test]
    fn test_checkbox_is_not_a_text_field() {
        let mut forms = AuthFormsState {
            focus: 2,
            ..Default::default()
        };
        assert!(forms.on_checkbox());
        assert!(forms.active_field_mut().is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut forms = AuthFormsState {
            tab: AuthTab::SignUp,
            focus: 3,
            sign_in_email: "a".to_string(),
            sign_up_password: "b".to_string(),
            remember_me: true,
            ..Default::default()
        };

        forms.clear();
        assert_eq!(forms.tab, AuthTab::SignIn);
        assert_eq!(forms.focus, 0);
        assert!(forms.sign_in_email.is_empty());
        assert!(forms.sign_up_password.is_empty());
        assert!(!forms.remember_me);
    }
}
