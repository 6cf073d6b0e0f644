//! Toast rendering: stacked one-line notices in the top-right corner.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{ToastKind, ToastState};
use crate::common::truncate_with_ellipsis;

pub fn render(frame: &mut Frame, area: Rect, toasts: &ToastState) {
    let max_width = (area.width.saturating_sub(4)) as usize;

    for (i, toast) in toasts.iter().enumerate() {
        let y = area.y + 1 + i as u16;
        if y >= area.bottom() {
            break;
        }

        let (marker, color) = match toast.kind {
            ToastKind::Success => ("✓ ", Color::Green),
            ToastKind::Error => ("✗ ", Color::Red),
        };

        let message = truncate_with_ellipsis(&toast.message, max_width.saturating_sub(4));
        let text = format!(" {marker}{message} ");
        let width = text.width() as u16;
        let x = area.right().saturating_sub(width + 1);
        let toast_area = Rect::new(x, y, width, 1);

        frame.render_widget(Clear, toast_area);
        let line = Line::from(Span::styled(
            text,
            Style::default().fg(Color::Black).bg(color),
        ));
        frame.render_widget(Paragraph::new(line), toast_area);
    }
}
