use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::state::App;
use crate::catalog::Client;
use crate::ui::layout::centered_rect;
use crate::ui::theme::*;
use crate::utils::youtube::{embed_url, extract_youtube_id};

fn field_line<'a>(label: &'a str, value: Option<&'a str>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(C_MUTED)),
        Span::styled(value.unwrap_or("-"), Style::default().fg(C_TEXT)),
    ])
}

/// The always-visible right-hand panel: a field-per-line summary of the
/// highlighted record.
pub fn render_detail_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let details_block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(C_PANEL))
        .style(Style::default().bg(C_BG));
    let details_inner = details_block.inner(area);
    frame.render_widget(details_block, area);

    let details_lines = if let Some(client) = app.current_client() {
        vec![
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(C_MUTED)),
                Span::styled(
                    client.name.clone(),
                    Style::default().fg(C_TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            field_line("Short", client.short.as_deref()),
            field_line("Version", client.version.as_deref()),
            field_line("Author", client.author.as_deref()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Download: ", Style::default().fg(C_MUTED)),
                Span::styled(client.download.clone(), Style::default().fg(C_PRIMARY)),
            ]),
            field_line("Website", client.website.as_deref()),
            field_line("YouTube", client.youtube.as_deref()),
            field_line("Discord", client.discord.as_deref()),
            Line::from(""),
            Line::from(Span::styled(
                "Enter opens the full description.",
                Style::default().fg(C_MUTED).add_modifier(Modifier::ITALIC),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "No clients match the current search.",
            Style::default().fg(C_MUTED),
        ))]
    };

    let details_widget = Paragraph::new(details_lines).wrap(Wrap { trim: true });
    frame.render_widget(details_widget, details_inner);
}

/// The activation overlay: full description plus present-only link rows, and
/// the embed URL when a YouTube video ID extracts.
pub fn render_detail_overlay(frame: &mut Frame<'_>, app: &App) {
    let Some(client) = app.current_client() else {
        return;
    };

    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            client.description.as_deref().unwrap_or("").to_string(),
            Style::default().fg(C_TEXT),
        )),
        Line::from(""),
    ];

    lines.extend(link_lines(client));

    if let Some(video_id) = client.youtube.as_deref().and_then(extract_youtube_id) {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Embed: ", Style::default().fg(C_MUTED)),
            Span::styled(embed_url(&video_id), Style::default().fg(C_PRIMARY)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(C_MUTED).add_modifier(Modifier::ITALIC),
    )));

    let overlay = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", client.name))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(C_PRIMARY))
            .style(Style::default().bg(C_BG)),
    );
    frame.render_widget(overlay, area);
}

fn link_lines(client: &Client) -> Vec<Line<'static>> {
    let mut links: Vec<(&str, &str)> = vec![("Download", client.download.as_str())];
    if let Some(website) = client.website.as_deref() {
        links.push(("Website", website));
    }
    if let Some(youtube) = client.youtube.as_deref() {
        links.push(("YouTube", youtube));
    }
    if let Some(discord) = client.discord.as_deref() {
        links.push(("Discord", discord));
    }

    links
        .into_iter()
        .map(|(label, url)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(C_MUTED)),
                Span::styled(url.to_string(), Style::default().fg(C_PRIMARY)),
            ])
        })
        .collect()
}
