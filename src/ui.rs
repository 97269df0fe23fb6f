use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_SUBTITLE, APP_TITLE, APP_VERSION, CALLING_LABEL};
use crate::messages::RenderState;
use crate::models::{Backend, GreetingSlot, HealthStatus};

/// Accent color per backend card
pub fn backend_color(backend: Backend) -> Color {
    match backend {
        Backend::SpringBoot => Color::Green,
        Backend::FastApi => Color::Cyan,
    }
}

/// Health badge color
pub fn health_color(health: HealthStatus) -> Color {
    match health {
        HealthStatus::Unknown => Color::DarkGray,
        HealthStatus::Checking => Color::Yellow,
        HealthStatus::Up => Color::Green,
        HealthStatus::Down => Color::Red,
    }
}

/// Button text: the in-progress label while pending
pub fn button_label(backend: Backend, slot: &GreetingSlot) -> &'static str {
    if slot.pending {
        CALLING_LABEL
    } else {
        backend.button_label()
    }
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(8),    // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (backend, card_area) in Backend::ALL.into_iter().zip(cards.iter()) {
        draw_card(f, state, backend, *card_area);
    }

    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(APP_TITLE, Style::default().fg(Color::White).bold())),
        Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray))),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title_bottom(Line::from(format!(" gateway: {} ", state.gateway_url)).right_aligned());

    let header = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_card(f: &mut Frame, state: &RenderState, backend: Backend, area: Rect) {
    let slot = state.slot(backend);
    let is_focused = state.focused == backend;
    let accent = backend_color(backend);

    let border_style = if is_focused {
        Style::default().fg(accent).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", backend.name()))
        .title_style(Style::default().fg(accent).bold())
        .title_bottom(
            Line::from(Span::styled(
                format!(" health: {} ", slot.health.as_str()),
                Style::default().fg(health_color(slot.health)),
            ))
            .right_aligned(),
        );

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Path
            Constraint::Length(3), // Button
            Constraint::Min(1),    // Response area
        ])
        .split(inner);

    let path = Paragraph::new(format!("Path: {}", backend.hello_path()))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(path, rows[0]);

    // Disabled while pending
    let button_style = if slot.pending {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Black).bg(accent).bold()
    } else {
        Style::default().fg(accent)
    };
    let button = Paragraph::new(button_label(backend, slot))
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    f.render_widget(button, centered_rect(60, 100, rows[1]));

    let time_text = slot
        .elapsed_ms
        .map(|ms| format!(" {}ms ", ms))
        .unwrap_or_default();
    let response = Paragraph::new(slot.text.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title(" Response ")
                .title_bottom(Line::from(time_text).right_aligned()),
        );
    f.render_widget(response, rows[2]);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.spring.pending || state.fastapi.pending {
        " Waiting for backend... "
    } else {
        " Tab:focus | Enter:call | 1/2:call Spring/FastAPI | h:health | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 HELLO GATEWAY v{} - Keyboard Shortcuts

 CARDS
   Tab / ← / →        Focus a card
   Enter / Space      Call the focused backend
   1                  Call Spring
   2                  Call FastAPI
   h                  Check both health routes

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
