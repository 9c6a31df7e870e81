use crate::catalog::Client;

pub const FIELD_COUNT: usize = 10;
pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "name",
    "short",
    "description",
    "version",
    "author",
    "icon",
    "download",
    "website",
    "youtube",
    "discord",
];

/// The edit form: one free-text value per record field, plus which field the
/// cursor is on. Values are merged into a candidate record at commit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub values: [String; FIELD_COUNT],
    pub focus: usize,
}

impl ClientForm {
    pub fn from_client(client: &Client) -> Self {
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            values: [
                client.name.clone(),
                opt(&client.short),
                opt(&client.description),
                opt(&client.version),
                opt(&client.author),
                opt(&client.icon),
                client.download.clone(),
                opt(&client.website),
                opt(&client.youtube),
                opt(&client.discord),
            ],
            focus: 0,
        }
    }

    /// Trims every value and drops empties, so absent optional fields stay
    /// absent rather than becoming empty strings.
    pub fn to_candidate(&self) -> Client {
        let trimmed = |i: usize| self.values[i].trim().to_string();
        let optional = |i: usize| {
            let value = self.values[i].trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        Client {
            name: trimmed(0),
            short: optional(1),
            description: optional(2),
            version: optional(3),
            author: optional(4),
            icon: optional(5),
            download: trimmed(6),
            website: optional(7),
            youtube: optional(8),
            discord: optional(9),
        }
    }

    pub fn set(&mut self, label: &str, value: &str) {
        if let Some(i) = FIELD_LABELS.iter().position(|l| *l == label) {
            self.values[i] = value.to_string();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            FIELD_COUNT - 1
        } else {
            self.focus - 1
        };
    }

    pub fn push_char(&mut self, c: char) {
        self.values[self.focus].push(c);
    }

    pub fn backspace(&mut self) {
        self.values[self.focus].pop();
    }
}

/// Editing focus of the Admin tab: no edit in progress, or a form bound to an
/// existing record (`index: Some`) or a fresh one (`index: None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Editing {
        index: Option<usize>,
        form: ClientForm,
    },
}

impl EditorState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing { .. })
    }
}
