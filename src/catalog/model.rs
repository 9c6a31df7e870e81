use serde::{Deserialize, Serialize};

/// One catalog entry describing a downloadable client. Optional fields are
/// omitted from the serialized form entirely, never written as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub download: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
}

impl Client {
    pub fn new(name: impl Into<String>, download: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            description: None,
            version: None,
            author: None,
            icon: None,
            download: download.into(),
            website: None,
            youtube: None,
            discord: None,
        }
    }

    /// Thumbnail text for list rows: the icon field, or the first character
    /// of the name.
    pub fn thumb(&self) -> String {
        match &self.icon {
            Some(icon) if !icon.is_empty() => icon.clone(),
            _ => self.name.chars().next().map(String::from).unwrap_or_default(),
        }
    }

    /// Case-insensitive substring match over name + short + description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        let haystack = format!(
            "{} {} {}",
            self.name,
            self.short.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
        .to_lowercase();
        haystack.contains(&needle)
    }
}
