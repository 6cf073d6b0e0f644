//! Password-recovery overlay: a three-step wizard over [`RecoveryFlow`].
//!
//! The overlay owns only presentation state (focus within the password step);
//! all step transitions and validation live in the core state machine.

use authdeck_core::recovery::{RecoveryAdvance, RecoveryFlow};
use authdeck_core::CODE_LEN;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;

/// State for the password-recovery overlay.
#[derive(Debug, Clone)]
pub struct RecoveryState {
    pub flow: RecoveryFlow,
    /// Focused input on the password step (0 = new, 1 = confirm).
    pub focus: usize,
}

impl RecoveryState {
    pub fn open() -> (Self, Vec<UiEffect>) {
        (
            Self {
                flow: RecoveryFlow::new(),
                focus: 0,
            },
            vec![],
        )
    }

    fn field_count(&self) -> usize {
        match self.flow {
            RecoveryFlow::AwaitingNewPassword { .. } => 2,
            _ => 1,
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match &mut self.flow {
            RecoveryFlow::AwaitingEmail { email } => email,
            RecoveryFlow::AwaitingCode { code, .. } => code,
            RecoveryFlow::AwaitingNewPassword {
                new_password,
                confirm_password,
                ..
            } => {
                if self.focus == 0 {
                    new_password
                } else {
                    confirm_password
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                self.flow.cancel();
                OverlayUpdate::close()
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.field_count();
                OverlayUpdate::stay()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.checked_sub(1).unwrap_or(self.field_count() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Backspace => {
                self.active_field_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                let is_code_step = matches!(self.flow, RecoveryFlow::AwaitingCode { .. });
                let field = self.active_field_mut();
                if !is_code_step || field.chars().count() < CODE_LEN {
                    field.push(c);
                }
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    fn submit(&mut self) -> OverlayUpdate {
        match self.flow.submit() {
            Ok(RecoveryAdvance::CodeSent) => {
                self.focus = 0;
                OverlayUpdate::stay().with_mutations(vec![StateMutation::toast_success(
                    "Verification code sent to your email!",
                )])
            }
            Ok(RecoveryAdvance::CodeVerified) => {
                self.focus = 0;
                OverlayUpdate::stay().with_mutations(vec![StateMutation::toast_success(
                    "Code verified successfully!",
                )])
            }
            Ok(RecoveryAdvance::Completed) => {
                OverlayUpdate::close().with_mutations(vec![StateMutation::toast_success(
                    "Password reset successfully! You can now sign in.",
                )])
            }
            Err(err) => {
                OverlayUpdate::stay().with_mutations(vec![StateMutation::toast_error(err.message())])
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay, render_separator};

        let on_password_step = matches!(self.flow, RecoveryFlow::AwaitingNewPassword { .. });
        let hints = if on_password_step {
            vec![
                InputHint::new("Enter", "submit"),
                InputHint::new("Tab", "next field"),
                InputHint::new("Esc", "cancel"),
            ]
        } else {
            vec![
                InputHint::new("Enter", "continue"),
                InputHint::new("Esc", "cancel"),
            ]
        };

        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Reset Password",
                border_color: Color::Yellow,
                width: 50,
                height: 9,
                hints: &hints,
            },
        );

        let description = match &self.flow {
            RecoveryFlow::AwaitingEmail { .. } => {
                "Enter your account email to receive a code".to_string()
            }
            RecoveryFlow::AwaitingCode { email, .. } => {
                format!("Enter the 6-digit code sent to {email}")
            }
            RecoveryFlow::AwaitingNewPassword { .. } => {
                "Choose a new password (6+ characters)".to_string()
            }
        };
        let desc_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                description,
                Style::default().fg(Color::DarkGray),
            ))),
            desc_area,
        );

        match &self.flow {
            RecoveryFlow::AwaitingEmail { email } => {
                render_step_input(frame, layout.body, 2, email, "you@example.com", false, true);
            }
            RecoveryFlow::AwaitingCode { code, .. } => {
                render_step_input(frame, layout.body, 2, code, "6-digit code", false, true);
            }
            RecoveryFlow::AwaitingNewPassword {
                new_password,
                confirm_password,
                ..
            } => {
                render_step_input(
                    frame,
                    layout.body,
                    2,
                    new_password,
                    "New password",
                    true,
                    self.focus == 0,
                );
                render_step_input(
                    frame,
                    layout.body,
                    3,
                    confirm_password,
                    "Confirm password",
                    true,
                    self.focus == 1,
                );
            }
        }

        render_separator(frame, layout.body, 4);
    }
}

fn render_step_input(
    frame: &mut Frame,
    body: Rect,
    y_offset: u16,
    value: &str,
    placeholder: &str,
    masked: bool,
    focused: bool,
) {
    use super::render_utils::{InputLine, render_input_line};

    if y_offset >= body.height {
        return;
    }
    let area = Rect::new(body.x, body.y + y_offset, body.width, 1);
    render_input_line(
        frame,
        area,
        &InputLine {
            value,
            placeholder: Some(placeholder),
            prompt: "> ",
            prompt_color: Color::DarkGray,
            text_color: Color::Yellow,
            placeholder_color: Color::DarkGray,
            cursor_color: Color::Yellow,
            masked,
            focused,
        },
    );
}
