//! Top-level rendering: pure functions over `&AppState`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{auth, dashboard, toast};
use crate::state::AppState;

pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();

    if app.tui.ctx.is_logged_in() {
        dashboard::render(frame, area, &app.tui);
    } else {
        auth::render(frame, area, &app.tui);
    }

    render_status_line(frame, area, app);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }

    // Toasts paint last so they sit above overlays.
    toast::render(frame, area, &app.tui.toasts);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &AppState) {
    if area.height == 0 {
        return;
    }

    let hints: &[(&str, &str)] = if app.overlay.is_some() {
        &[("Enter", "submit"), ("Esc", "cancel")]
    } else if app.tui.ctx.is_logged_in() {
        &[("l", "logout"), ("Ctrl+C", "quit")]
    } else {
        &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("Ctrl+T", "switch tab"),
            ("Ctrl+R", "reset password"),
            ("Ctrl+C", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let line_area = Rect::new(area.x + 1, area.bottom() - 1, area.width.saturating_sub(2), 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
}
