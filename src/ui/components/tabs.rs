use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

use crate::app::state::{App, TABS};
use crate::ui::theme::*;

pub fn render_main_tabs(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let tab_titles = TABS
        .iter()
        .map(|title| Line::from(*title))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(tab_titles)
        .select(app.selected_tab)
        .block(
            Block::default()
                .title(" ClientHub ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(C_PANEL)),
        )
        .style(Style::default().fg(C_MUTED))
        .highlight_style(
            Style::default()
                .fg(C_PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ");
    frame.render_widget(tabs, area);
}
