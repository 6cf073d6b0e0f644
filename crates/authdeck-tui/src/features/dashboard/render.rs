//! Rendering for the signed-in dashboard.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::overlays::render_utils::calculate_overlay_area;
use crate::state::TuiState;

const CARD_WIDTH: u16 = 52;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    // The caller only routes here with a live session.
    let Some(session) = &tui.ctx.session else {
        return;
    };

    let label = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", session.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Name          ", label),
            Span::raw(session.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Email         ", label),
            Span::raw(session.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Member since  ", label),
            Span::raw(Local::now().format("%B %Y").to_string()),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Press l to log out",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let height = lines.len() as u16 + 3;
    let card = calculate_overlay_area(area, area.height, CARD_WIDTH, height);

    let brand_area = Rect::new(card.x, card.y, card.width, 1);
    let brand = Paragraph::new(Line::from(Span::styled(
        tui.config.brand.to_uppercase(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(brand, brand_area);

    let body = Rect::new(card.x, card.y + 1, card.width, height - 1);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Dashboard ")
        .title_style(Style::default().fg(Color::Gray));
    frame.render_widget(Paragraph::new(lines).block(block), body);
}
