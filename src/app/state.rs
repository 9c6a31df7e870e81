use std::path::PathBuf;

use ratatui::widgets::ListState;

use super::editor::{ClientForm, EditorState};
use crate::catalog::{validate, Client, ValidationError};
use crate::system::os::Platform;

pub const TABS: [&str; 2] = ["Catalog", "Admin"];
pub const TAB_CATALOG: usize = 0;
pub const TAB_ADMIN: usize = 1;

#[derive(Clone)]
pub enum ConfirmAction {
    Delete(usize),
    NewList,
}

#[derive(Clone)]
pub struct LogEntry {
    pub message: String,
    pub level: LogLevel,
    pub created_at: std::time::Instant,
}

#[derive(Clone, Copy)]
pub enum LogLevel {
    Success,
    Error,
    Info,
}

pub struct App {
    pub clients: Vec<Client>,
    pub source_path: PathBuf,
    pub selected_tab: usize,
    pub filtered_indices: Vec<usize>,
    pub list_state: ListState,
    pub search_mode: bool,
    pub search_input: String,
    pub status: String,
    pub platform: Platform,
    pub confirm_mode: bool,
    pub confirm_action: Option<ConfirmAction>,
    pub confirm_selected: bool,
    pub detail_open: bool,
    pub editor: EditorState,
    pub logs: Vec<LogEntry>,
}

impl App {
    pub fn new(clients: Vec<Client>, source_path: PathBuf) -> Self {
        let mut app = Self {
            clients,
            source_path,
            selected_tab: TAB_CATALOG,
            filtered_indices: Vec::new(),
            list_state: ListState::default(),
            search_mode: false,
            search_input: String::new(),
            status: "Ready. Navigate with arrows/jk, / search, Enter detail, Tab for admin."
                .to_string(),
            platform: Platform::detect(),
            confirm_mode: false,
            confirm_action: None,
            confirm_selected: false,
            detail_open: false,
            editor: EditorState::Idle,
            logs: Vec::new(),
        };
        app.refresh_filter();
        app
    }

    pub fn log(&mut self, message: String, level: LogLevel) {
        let now = std::time::Instant::now();
        self.logs
            .retain(|l| now.duration_since(l.created_at) < std::time::Duration::from_secs(3));
        self.logs.push(LogEntry {
            message,
            level,
            created_at: now,
        });
        if self.logs.len() > 3 {
            self.logs.remove(0);
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, message: S) {
        self.status = message.into();
    }

    /// Search narrows the Catalog tab only. The Admin tab always shows the
    /// full ordered list so reorder and delete act on visible neighbors.
    pub fn matches_search(&self, client: &Client) -> bool {
        if self.selected_tab == TAB_ADMIN {
            return true;
        }
        client.matches_query(&self.search_input)
    }

    pub fn refresh_filter(&mut self) {
        self.filtered_indices = self
            .clients
            .iter()
            .enumerate()
            .filter(|(_, client)| self.matches_search(client))
            .map(|(index, _)| index)
            .collect();

        let new_idx = match self.list_state.selected() {
            Some(idx) if idx < self.filtered_indices.len() => Some(idx),
            _ if self.filtered_indices.is_empty() => None,
            _ => Some(0),
        };
        self.list_state.select(new_idx);
    }

    /// Index into `clients` of the highlighted row, through the filter.
    pub fn current_index(&self) -> Option<usize> {
        let idx = self.list_state.selected()?;
        self.filtered_indices.get(idx).copied()
    }

    pub fn current_client(&self) -> Option<&Client> {
        self.clients.get(self.current_index()?)
    }

    pub fn move_down(&mut self) {
        if self.filtered_indices.is_empty() {
            self.list_state.select(None);
            return;
        }

        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.filtered_indices.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn move_up(&mut self) {
        if self.filtered_indices.is_empty() {
            self.list_state.select(None);
            return;
        }

        let prev = match self.list_state.selected() {
            Some(0) | None => self.filtered_indices.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.list_state.select(Some(prev));
    }

    /// Replaces the whole list, e.g. after a (re)load of the catalog file.
    pub fn replace_all(&mut self, clients: Vec<Client>) {
        self.clients = clients;
        self.refresh_filter();
    }

    /// "Start over": empty list, editor back to idle.
    pub fn reset_list(&mut self) {
        self.clients.clear();
        self.editor = EditorState::Idle;
        self.refresh_filter();
    }

    pub fn start_create(&mut self) {
        self.editor = EditorState::Editing {
            index: None,
            form: ClientForm::default(),
        };
    }

    pub fn start_edit(&mut self, index: usize) {
        let Some(client) = self.clients.get(index) else {
            return;
        };
        self.editor = EditorState::Editing {
            index: Some(index),
            form: ClientForm::from_client(client),
        };
    }

    pub fn cancel_edit(&mut self) {
        self.editor = EditorState::Idle;
    }

    pub fn form_mut(&mut self) -> Option<&mut ClientForm> {
        match &mut self.editor {
            EditorState::Editing { form, .. } => Some(form),
            EditorState::Idle => None,
        }
    }

    /// Validates the form's candidate record and commits it: append for a
    /// create, replace in place for an update. On rejection the editing state
    /// is left untouched so the operator can correct and resubmit.
    pub fn commit_edit(&mut self) -> Result<String, ValidationError> {
        let EditorState::Editing { index, form } = &self.editor else {
            return Ok(String::new());
        };

        let candidate = form.to_candidate();
        validate(&candidate)?;

        let message = match index {
            Some(i) => {
                let name = candidate.name.clone();
                self.clients[*i] = candidate;
                format!("Updated {name}")
            }
            None => {
                let name = candidate.name.clone();
                self.clients.push(candidate);
                format!("Added {name}")
            }
        };

        self.editor = EditorState::Idle;
        self.refresh_filter();
        Ok(message)
    }

    /// Removes the record and shifts later indices down by one.
    pub fn delete(&mut self, index: usize) {
        if index >= self.clients.len() {
            return;
        }
        self.clients.remove(index);
        self.refresh_filter();
    }

    /// Swaps with the previous record; no-op at the top.
    pub fn move_record_up(&mut self, index: usize) {
        if index == 0 || index >= self.clients.len() {
            return;
        }
        self.clients.swap(index - 1, index);
        self.refresh_filter();
        self.follow_record(index - 1);
    }

    /// Swaps with the next record; no-op at the bottom.
    pub fn move_record_down(&mut self, index: usize) {
        if index + 1 >= self.clients.len() {
            return;
        }
        self.clients.swap(index, index + 1);
        self.refresh_filter();
        self.follow_record(index + 1);
    }

    /// Keeps the cursor on a record that just moved.
    fn follow_record(&mut self, index: usize) {
        if let Some(pos) = self.filtered_indices.iter().position(|&i| i == index) {
            self.list_state.select(Some(pos));
        }
    }

    pub fn request_confirm(&mut self, action: ConfirmAction) {
        self.confirm_mode = true;
        self.confirm_selected = true;
        self.confirm_action = Some(action);
    }

    pub fn close_confirm(&mut self) {
        self.confirm_mode = false;
        self.confirm_action = None;
    }
}
