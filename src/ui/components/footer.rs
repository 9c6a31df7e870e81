use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::{App, LogLevel, TAB_ADMIN};
use crate::ui::theme::*;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let now = std::time::Instant::now();
    app.logs
        .retain(|l| now.duration_since(l.created_at) < std::time::Duration::from_secs(3));

    let key_hints: Vec<Span> = if app.selected_tab == TAB_ADMIN {
        vec![
            Span::styled("Move ", Style::default().fg(C_MUTED)),
            Span::styled(
                "↑/↓ j/k",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Add ", Style::default().fg(C_MUTED)),
            Span::styled(
                "a",
                Style::default().fg(C_SUCCESS).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Edit ", Style::default().fg(C_MUTED)),
            Span::styled(
                "e",
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Delete ", Style::default().fg(C_MUTED)),
            Span::styled(
                "d",
                Style::default().fg(C_WARNING).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Reorder ", Style::default().fg(C_MUTED)),
            Span::styled(
                "K/J",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Write ", Style::default().fg(C_MUTED)),
            Span::styled(
                "w",
                Style::default().fg(C_SUCCESS).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Copy ", Style::default().fg(C_MUTED)),
            Span::styled(
                "y",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Quit ", Style::default().fg(C_MUTED)),
            Span::styled(
                "q",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]
    } else {
        vec![
            Span::styled("Move ", Style::default().fg(C_MUTED)),
            Span::styled(
                "↑/↓ j/k",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Detail ", Style::default().fg(C_MUTED)),
            Span::styled(
                "Enter",
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Search ", Style::default().fg(C_MUTED)),
            Span::styled(
                "/",
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Refresh ", Style::default().fg(C_MUTED)),
            Span::styled(
                "r",
                Style::default().fg(C_SUCCESS).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Admin ", Style::default().fg(C_MUTED)),
            Span::styled(
                "Tab",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Quit ", Style::default().fg(C_MUTED)),
            Span::styled(
                "q",
                Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]
    };

    let mut second_line: Vec<Span> = vec![
        Span::styled(
            format!(
                "visible:{} total:{} [{}]",
                app.filtered_indices.len(),
                app.clients.len(),
                app.platform.label()
            ),
            Style::default().fg(C_MUTED),
        ),
        Span::styled("   |   ", Style::default().fg(C_PANEL)),
        Span::styled(app.status.clone(), Style::default().fg(C_TEXT)),
    ];

    for l in &app.logs {
        let color = match l.level {
            LogLevel::Success => C_SUCCESS,
            LogLevel::Error => C_WARNING,
            LogLevel::Info => C_PRIMARY,
        };
        second_line.push(Span::styled("  ", Style::default()));
        second_line.push(Span::styled(l.message.clone(), Style::default().fg(color)));
    }

    let footer_lines = vec![Line::from(key_hints), Line::from(second_line)];
    let footer = Paragraph::new(footer_lines).block(
        Block::default()
            .title(" Command Bar ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(C_PANEL)),
    );
    frame.render_widget(footer, area);
}
