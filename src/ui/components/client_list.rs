use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::{App, TAB_ADMIN};
use crate::ui::theme::*;
use crate::utils::truncate_with_ellipsis;

pub fn render_client_list(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let admin = app.selected_tab == TAB_ADMIN;

    let list_block = Block::default()
        .title(if admin { " Clients " } else { " Catalog " })
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_PANEL))
        .style(Style::default().bg(C_BG));
    let list_inner = list_block.inner(area);
    frame.render_widget(list_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(list_inner);

    let header = if admin {
        "  #  Name                 Download                       Short"
    } else {
        "     Name                 Version    Author          Short"
    };
    let header_line =
        Paragraph::new(header).style(Style::default().fg(C_MUTED).add_modifier(Modifier::BOLD));
    frame.render_widget(header_line, chunks[0]);

    let list_width = chunks[1].width as usize;
    let tail_width = if list_width > 58 { list_width - 58 } else { 12 };

    let items: Vec<ListItem> = app
        .filtered_indices
        .iter()
        .map(|&idx| {
            let client = &app.clients[idx];
            let display_name = truncate_with_ellipsis(&client.name, 20);
            let short = client.short.as_deref().unwrap_or("");

            let line = if admin {
                Line::from(vec![
                    Span::styled(format!("{:>3}  ", idx + 1), Style::default().fg(C_MUTED)),
                    Span::styled(format!("{:<21}", display_name), Style::default().fg(C_TEXT)),
                    Span::styled(
                        format!(
                            "{:<31}",
                            truncate_with_ellipsis(&client.download, 29)
                        ),
                        Style::default().fg(C_PRIMARY),
                    ),
                    Span::styled(
                        truncate_with_ellipsis(short, tail_width),
                        Style::default().fg(C_MUTED),
                    ),
                ])
            } else {
                let version = client.version.as_deref().unwrap_or("-");
                let author = client.author.as_deref().unwrap_or("-");
                Line::from(vec![
                    Span::styled(
                        format!("{:<5}", truncate_with_ellipsis(&client.thumb(), 3)),
                        Style::default().fg(C_PRIMARY),
                    ),
                    Span::styled(format!("{:<21}", display_name), Style::default().fg(C_TEXT)),
                    Span::styled(
                        format!("{:<11}", truncate_with_ellipsis(version, 9)),
                        Style::default().fg(C_SUCCESS),
                    ),
                    Span::styled(
                        format!("{:<16}", truncate_with_ellipsis(author, 14)),
                        Style::default().fg(C_MUTED),
                    ),
                    Span::styled(
                        truncate_with_ellipsis(short, tail_width),
                        Style::default().fg(C_TEXT),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    let client_list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(32, 57, 84))
                .fg(C_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ")
        .repeat_highlight_symbol(true);

    frame.render_stateful_widget(client_list, chunks[1], &mut app.list_state);
}
