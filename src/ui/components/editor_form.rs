use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::editor::{EditorState, FIELD_LABELS};
use crate::app::state::App;
use crate::ui::theme::*;

/// The Admin tab's right-hand panel: the record form when an edit is in
/// progress, a key hint otherwise.
pub fn render_editor_form(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let (title, editing) = match &app.editor {
        EditorState::Editing { index: None, .. } => (" New Client ".to_string(), true),
        EditorState::Editing {
            index: Some(i), ..
        } => {
            let name = app
                .clients
                .get(*i)
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            (format!(" Edit: {name} "), true)
        }
        EditorState::Idle => (" Editor ".to_string(), false),
    };

    let form_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if editing { C_PRIMARY } else { C_PANEL }))
        .style(Style::default().bg(C_BG));
    let form_inner = form_block.inner(area);
    frame.render_widget(form_block, area);

    let EditorState::Editing { form, .. } = &app.editor else {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "a add   e edit   d delete   K/J reorder",
                Style::default().fg(C_MUTED),
            )),
            Line::from(Span::styled(
                "w write file   y copy json   n new list   r reload",
                Style::default().fg(C_MUTED),
            )),
        ]);
        frame.render_widget(hint, form_inner);
        return;
    };

    let lines: Vec<Line> = FIELD_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let focused = i == form.focus;
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(C_MUTED)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{label:<12}"), label_style),
                Span::styled(form.values[i].clone(), Style::default().fg(C_TEXT)),
            ])
        })
        .collect();

    let fields = Paragraph::new(lines);
    frame.render_widget(fields, form_inner);

    // Cursor at the end of the focused field's value.
    let value_len = form.values[form.focus].chars().count() as u16;
    let cursor_x = form_inner.x + 14 + value_len;
    let cursor_y = form_inner.y + form.focus as u16;
    if cursor_x < form_inner.right() && cursor_y < form_inner.bottom() {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
