use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::state::{App, ConfirmAction, LogLevel, TABS, TAB_ADMIN, TAB_CATALOG};
use crate::catalog::loader::{load_clients, save_clients, to_json_pretty};
use crate::system::clipboard::copy_to_clipboard;
use crate::ui::draw::ui;

pub fn cycle_tab_right(app: &mut App) {
    app.selected_tab = (app.selected_tab + 1) % TABS.len();
    app.detail_open = false;
    app.refresh_filter();
}

pub fn cycle_tab_left(app: &mut App) {
    app.selected_tab = if app.selected_tab == 0 {
        TABS.len() - 1
    } else {
        app.selected_tab - 1
    };
    app.detail_open = false;
    app.refresh_filter();
}

/// Re-reads the catalog file wholesale. On failure the in-memory list is left
/// untouched; the latest successful read always wins.
pub fn reload(app: &mut App) {
    match load_clients(&app.source_path) {
        Ok(clients) => {
            let count = clients.len();
            app.replace_all(clients);
            app.set_status(format!(
                "Loaded {count} clients from {}",
                app.source_path.display()
            ));
            app.log("Catalog loaded".to_string(), LogLevel::Success);
        }
        Err(e) => {
            app.set_status(format!("Load error: {e:#}"));
            app.log("Load failed".to_string(), LogLevel::Error);
        }
    }
}

fn export_to_file(app: &mut App) {
    match save_clients(&app.source_path, &app.clients) {
        Ok(()) => {
            app.set_status(format!("Wrote {}", app.source_path.display()));
            app.log("Exported to file".to_string(), LogLevel::Success);
        }
        Err(e) => {
            app.set_status(format!("Write error: {e:#}"));
            app.log("Export failed".to_string(), LogLevel::Error);
        }
    }
}

fn export_to_clipboard(app: &mut App) {
    let result = to_json_pretty(&app.clients)
        .and_then(|text| copy_to_clipboard(&text, app.platform));
    match result {
        Ok(()) => {
            app.set_status("Copied JSON to clipboard.");
            app.log("Copied to clipboard".to_string(), LogLevel::Success);
        }
        Err(e) => {
            app.set_status(format!("Copy failed: {e:#}"));
            app.log("Copy failed".to_string(), LogLevel::Error);
        }
    }
}

pub fn run(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            if app.search_mode {
                match key.code {
                    KeyCode::Esc => {
                        app.search_mode = false;
                    }
                    KeyCode::Enter => {
                        app.search_mode = false;
                        app.set_status(format!("Search applied: '{}'", app.search_input));
                    }
                    KeyCode::Backspace => {
                        app.search_input.pop();
                        app.refresh_filter();
                    }
                    KeyCode::Char(c) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL) {
                            app.search_input.push(c);
                            app.refresh_filter();
                        }
                    }
                    _ => {}
                }
                continue;
            }

            if app.confirm_mode {
                match key.code {
                    KeyCode::Enter => {
                        let action = app.confirm_action.clone();
                        app.close_confirm();
                        if !app.confirm_selected {
                            app.set_status("Cancelled.");
                            continue;
                        }
                        match action {
                            Some(ConfirmAction::Delete(index)) => {
                                let name = app
                                    .clients
                                    .get(index)
                                    .map(|c| c.name.clone())
                                    .unwrap_or_default();
                                app.delete(index);
                                app.set_status(format!("Deleted {name}"));
                                app.log(format!("Deleted {name}"), LogLevel::Success);
                            }
                            Some(ConfirmAction::NewList) => {
                                app.reset_list();
                                app.set_status("Created a new empty list.");
                                app.log("List cleared".to_string(), LogLevel::Info);
                            }
                            None => {}
                        }
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.confirm_selected = true;
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.confirm_selected = false;
                    }
                    KeyCode::Esc | KeyCode::Char('q') => {
                        app.close_confirm();
                        app.set_status("Cancelled.");
                    }
                    _ => {}
                }
                continue;
            }

            if app.detail_open {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                        app.detail_open = false;
                    }
                    _ => {}
                }
                continue;
            }

            if app.editor.is_editing() {
                match key.code {
                    KeyCode::Esc => {
                        app.cancel_edit();
                        app.set_status("Edit cancelled.");
                    }
                    KeyCode::Enter => match app.commit_edit() {
                        Ok(message) => {
                            app.set_status(message.clone());
                            app.log(message, LogLevel::Success);
                        }
                        Err(e) => {
                            app.set_status(e.to_string());
                            app.log(e.to_string(), LogLevel::Error);
                        }
                    },
                    KeyCode::Tab | KeyCode::Down => {
                        if let Some(form) = app.form_mut() {
                            form.focus_next();
                        }
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        if let Some(form) = app.form_mut() {
                            form.focus_prev();
                        }
                    }
                    KeyCode::Backspace => {
                        if let Some(form) = app.form_mut() {
                            form.backspace();
                        }
                    }
                    KeyCode::Char(c) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL) {
                            if let Some(form) = app.form_mut() {
                                form.push_char(c);
                            }
                        }
                    }
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Tab => cycle_tab_right(app),
                KeyCode::BackTab => cycle_tab_left(app),
                KeyCode::Char('r') => reload(app),
                KeyCode::Char('/') if app.selected_tab == TAB_CATALOG => {
                    app.search_mode = true;
                }
                KeyCode::Esc if app.selected_tab == TAB_CATALOG => {
                    if !app.search_input.is_empty() {
                        app.search_input.clear();
                        app.refresh_filter();
                        app.set_status("Search cleared.");
                    }
                }
                KeyCode::Enter if app.selected_tab == TAB_CATALOG => {
                    if app.current_client().is_some() {
                        app.detail_open = true;
                    } else {
                        app.set_status("No client to show.");
                    }
                }
                KeyCode::Char('a') if app.selected_tab == TAB_ADMIN => {
                    app.start_create();
                    app.set_status("New client: fill the form, Enter to add, Esc to cancel.");
                }
                KeyCode::Enter | KeyCode::Char('e') if app.selected_tab == TAB_ADMIN => {
                    match app.current_index() {
                        Some(index) => {
                            let name = app.clients[index].name.clone();
                            app.start_edit(index);
                            app.set_status(format!("Editing {name}"));
                        }
                        None => app.set_status("No client selected to edit."),
                    }
                }
                KeyCode::Char('p') if app.selected_tab == TAB_ADMIN => {
                    if app.current_client().is_some() {
                        app.detail_open = true;
                    } else {
                        app.set_status("No client selected to preview.");
                    }
                }
                KeyCode::Char('d') if app.selected_tab == TAB_ADMIN => {
                    match app.current_index() {
                        Some(index) => {
                            app.request_confirm(ConfirmAction::Delete(index));
                            app.set_status("Press Enter to confirm delete, Esc to cancel.");
                        }
                        None => app.set_status("No client selected to delete."),
                    }
                }
                KeyCode::Char('K') if app.selected_tab == TAB_ADMIN => {
                    if let Some(index) = app.current_index() {
                        app.move_record_up(index);
                    }
                }
                KeyCode::Char('J') if app.selected_tab == TAB_ADMIN => {
                    if let Some(index) = app.current_index() {
                        app.move_record_down(index);
                    }
                }
                KeyCode::Char('w') if app.selected_tab == TAB_ADMIN => export_to_file(app),
                KeyCode::Char('y') if app.selected_tab == TAB_ADMIN => export_to_clipboard(app),
                KeyCode::Char('n') if app.selected_tab == TAB_ADMIN => {
                    app.request_confirm(ConfirmAction::NewList);
                    app.set_status("Press Enter to start over with an empty list.");
                }
                _ => {}
            }
        }
    }

    Ok(())
}
