//! Rendering for the sign-in / sign-up card.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{AuthFormsState, AuthTab};
use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::calculate_overlay_area;
use crate::state::TuiState;

const CARD_WIDTH: u16 = 52;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let forms = &tui.forms;
    let mut lines = vec![tabs_line(forms.tab), Line::default()];

    match forms.tab {
        AuthTab::SignIn => {
            lines.push(field_line(forms, 0, "Email   ", &forms.sign_in_email, false));
            lines.push(field_line(
                forms,
                1,
                "Password",
                &forms.sign_in_password,
                true,
            ));
            lines.push(Line::default());
            lines.push(checkbox_line(forms));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Forgot password?  Ctrl+R",
                Style::default().fg(Color::DarkGray),
            )));
        }
        AuthTab::SignUp => {
            lines.push(field_line(forms, 0, "Name    ", &forms.sign_up_name, false));
            lines.push(field_line(
                forms,
                1,
                "Email   ",
                &forms.sign_up_email,
                false,
            ));
            lines.push(field_line(
                forms,
                2,
                "Password",
                &forms.sign_up_password,
                true,
            ));
            lines.push(field_line(
                forms,
                3,
                "Confirm ",
                &forms.sign_up_confirm,
                true,
            ));
        }
    }

    if tui.config.demo.enabled {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "Demo account: {} / {}",
                tui.config.demo.email, tui.config.demo.password
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    // +2 for borders, +1 for the brand line above the card.
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
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, body);
}

fn tabs_line(active: AuthTab) -> Line<'static> {
    let tab_style = |tab: AuthTab| {
        if tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    Line::from(vec![
        Span::styled("Sign In", tab_style(AuthTab::SignIn)),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Sign Up", tab_style(AuthTab::SignUp)),
        Span::styled("   Ctrl+T", Style::default().fg(Color::DarkGray)),
    ])
}

fn field_line(
    forms: &AuthFormsState,
    index: usize,
    label: &'static str,
    value: &str,
    masked: bool,
) -> Line<'static> {
    let focused = forms.focus == index;
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display = if masked {
        "•".repeat(value.chars().count())
    } else {
        truncate_with_ellipsis(value, (CARD_WIDTH as usize).saturating_sub(16))
    };

    let mut spans = vec![
        Span::styled(format!("{label}  "), label_style),
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::raw(display),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn checkbox_line(forms: &AuthFormsState) -> Line<'static> {
    let focused = forms.on_checkbox();
    let marker = if forms.remember_me { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![Span::styled(format!("{marker} Remember me"), style)];
    if focused {
        spans.push(Span::styled(
            "  Space toggles",
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
