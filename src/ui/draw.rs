use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{App, ConfirmAction, TAB_CATALOG};
use crate::ui::components::{
    client_list::render_client_list, detail_panel::render_detail_overlay,
    detail_panel::render_detail_panel, editor_form::render_editor_form, footer::render_footer,
    tabs::render_main_tabs,
};
use crate::ui::layout::centered_rect;
use crate::ui::theme::*;

pub fn ui(frame: &mut Frame<'_>, app: &mut App) {
    frame.render_widget(
        Block::default().style(Style::default().bg(C_BG)),
        frame.area(),
    );

    let catalog_tab = app.selected_tab == TAB_CATALOG;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if catalog_tab { 3 } else { 0 }),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(frame.area());

    render_main_tabs(frame, vertical[0], app);

    if catalog_tab {
        render_search_bar(frame, vertical[1], app);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(vertical[2]);

    render_client_list(frame, body[0], app);
    if catalog_tab {
        render_detail_panel(frame, body[1], app);
    } else {
        render_editor_form(frame, body[1], app);
    }

    render_footer(frame, vertical[3], app);

    if app.detail_open {
        render_detail_overlay(frame, app);
    }

    if app.confirm_mode {
        render_confirm_dialog(frame, app);
    }

    if app.search_mode {
        let cursor_x = vertical[1].x + 1 + app.search_input.chars().count() as u16;
        let cursor_y = vertical[1].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn render_search_bar(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let search_title = if app.search_mode {
        " Search mode (/): typing... Enter apply, Esc close "
    } else {
        " Search (/ to start, Esc clear) "
    };

    let search_text = if app.search_input.is_empty() {
        "Type to filter by name, short, description".to_string()
    } else {
        app.search_input.clone()
    };
    let search = Paragraph::new(search_text)
        .block(
            Block::default()
                .title(search_title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if app.search_mode {
                    C_PRIMARY
                } else {
                    C_PANEL
                })),
        )
        .style(if app.search_mode {
            Style::default().fg(C_TEXT)
        } else {
            Style::default().fg(C_MUTED)
        });

    frame.render_widget(search, area);
}

fn render_confirm_dialog(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(50, 25, frame.area());
    frame.render_widget(Clear, area);

    let (title, msg) = match &app.confirm_action {
        Some(ConfirmAction::Delete(index)) => {
            let name = app
                .clients
                .get(*index)
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            (" Confirm Delete ", format!("Delete {name}?"))
        }
        Some(ConfirmAction::NewList) => (
            " Start Over ",
            "Create a new empty list? The current contents will be lost.".to_string(),
        ),
        None => (" Confirm ", "Confirm action?".to_string()),
    };

    let block = Paragraph::new(msg)
        .style(Style::default().fg(C_TEXT))
        .wrap(Wrap { trim: true })
        .alignment(ratatui::prelude::Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(C_PANEL)),
        );
    frame.render_widget(block, area);

    let btn_area = Rect::new(
        area.x + 2,
        area.y + area.height.saturating_sub(3),
        area.width.saturating_sub(4),
        2,
    );

    let yes_style = if app.confirm_selected {
        Style::default()
            .fg(C_BG)
            .bg(C_SUCCESS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_SUCCESS).add_modifier(Modifier::BOLD)
    };
    let no_style = if !app.confirm_selected {
        Style::default()
            .fg(C_BG)
            .bg(C_WARNING)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_WARNING).add_modifier(Modifier::BOLD)
    };

    let btns = Paragraph::new(vec![Line::from(vec![
        Span::styled("[ Yes ] ", yes_style),
        Span::styled("[ No ] ", no_style),
    ])
    .alignment(ratatui::prelude::Alignment::Center)])
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(btns, btn_area);
}
